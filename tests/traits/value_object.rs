use outcome_rail::traits::{parse_delimited, TryCreate, TryParse};
use outcome_rail::{Error, Outcome};

#[derive(Debug, Clone, PartialEq)]
struct CountryCode(String);

impl TryParse for CountryCode {
    fn try_parse(s: &str) -> Outcome<Self> {
        let mut problems = Vec::new();
        if s.len() != 2 {
            problems.push(Error::new("country code must have two letters").with("length", s.len()));
        }
        if !s.chars().all(|c| c.is_ascii_uppercase()) {
            problems.push(Error::new("country code must be uppercase"));
        }
        if problems.is_empty() {
            Outcome::ok(CountryCode(s.to_owned()))
        } else {
            Outcome::fail_many(problems)
        }
    }
}

#[derive(Debug, PartialEq)]
struct Quantity(u32);

impl TryCreate<i64> for Quantity {
    fn try_create(value: i64) -> Outcome<Self> {
        match u32::try_from(value) {
            Ok(v) if v > 0 => Outcome::ok(Quantity(v)),
            _ => Outcome::fail(Error::new("quantity must be positive").with("value", value)),
        }
    }
}

#[test]
fn try_parse_reports_every_problem() {
    let outcome = CountryCode::try_parse("usa");

    let messages: Vec<_> = outcome.iter_errors().map(Error::message).collect();
    assert_eq!(messages, ["country code must have two letters", "country code must be uppercase"]);
}

#[test]
fn parse_returns_value_or_first_error() {
    assert_eq!(CountryCode::parse("KR"), Ok(CountryCode("KR".into())));

    let error = CountryCode::parse("usa").unwrap_err();
    assert_eq!(error.message(), "country code must have two letters");
    assert_eq!(error.metadata()["length"].as_u64(), Some(3));
}

#[test]
fn create_returns_value_or_first_error() {
    assert_eq!(Quantity::create(3), Ok(Quantity(3)));
    assert_eq!(Quantity::try_create(0).failure().unwrap().message(), "quantity must be positive");

    let error = Quantity::create(-4).unwrap_err();
    assert_eq!(error.metadata()["value"].as_i64(), Some(-4));
}

#[test]
fn parse_delimited_parses_every_segment() {
    let codes = parse_delimited::<CountryCode>("KR,JP,DE", ',');
    assert_eq!(
        codes.into_value(),
        vec![CountryCode("KR".into()), CountryCode("JP".into()), CountryCode("DE".into())]
    );
}

#[test]
fn parse_delimited_stops_at_first_failing_segment() {
    let outcome = parse_delimited::<CountryCode>("KR;x;yy", ';');

    let messages: Vec<_> = outcome.iter_errors().map(Error::message).collect();
    assert_eq!(messages, ["country code must have two letters", "country code must be uppercase"]);
}

#[test]
fn parse_delimited_does_not_trim_segments() {
    let outcome = parse_delimited::<CountryCode>("KR, JP", ',');
    assert_eq!(outcome.failure().unwrap().metadata()["length"].as_u64(), Some(3));
}
