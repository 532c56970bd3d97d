use outcome_rail::{Error, Outcome};

#[test]
fn iter_yields_value_once_on_success() {
    let outcome = Outcome::ok(3);

    let mut iter = outcome.iter();
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.next(), None);
}

#[test]
fn iter_is_empty_on_failure() {
    let outcome: Outcome<i32> = Outcome::fail("x");
    assert_eq!(outcome.iter().count(), 0);
    assert_eq!(outcome.into_iter().next(), None);
}

#[test]
fn into_iter_moves_value() {
    let outcome = Outcome::ok(String::from("owned"));
    let values: Vec<String> = outcome.into_iter().collect();
    assert_eq!(values, vec!["owned".to_string()]);
}

#[test]
fn for_loop_over_reference() {
    let outcome = Outcome::ok(10);
    let mut sum = 0;
    for value in &outcome {
        sum += value;
    }
    assert_eq!(sum, 10);
}

#[test]
fn iter_errors_is_empty_on_success() {
    let outcome = Outcome::ok(1);
    assert_eq!(outcome.iter_errors().len(), 0);
    assert_eq!(outcome.iter_errors().next(), None);
}

#[test]
fn iter_errors_in_order_with_exact_size() {
    let outcome: Outcome = Outcome::fail_many(["a", "b", "c"]);

    let mut errors = outcome.iter_errors();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.next().map(Error::message), Some("a"));
    assert_eq!(errors.len(), 2);
    let rest: Vec<_> = errors.map(Error::message).collect();
    assert_eq!(rest, ["b", "c"]);
}

#[test]
fn flatten_outcomes_with_iterators() {
    let outcomes = vec![Outcome::ok(1), Outcome::fail("skip"), Outcome::ok(3)];
    let successes: Vec<i32> = outcomes.into_iter().flatten().collect();
    assert_eq!(successes, vec![1, 3]);
}
