use outcome_rail::{
    collect_all, collect_all_slice, collect_values, collect_values_slice, Error, Outcome,
};
use proptest::prelude::*;

fn messages<T>(outcome: &Outcome<T>) -> Vec<&str> {
    outcome.iter_errors().map(Error::message).collect()
}

#[test]
fn collect_empty_input_is_success() {
    assert_eq!(collect_all(Vec::<Outcome>::new()), Outcome::OK);
    assert_eq!(collect_all_slice(&[]), Outcome::OK);

    assert_eq!(collect_values(Vec::<Outcome<i32>>::new()), Outcome::ok(vec![]));
    assert_eq!(collect_values_slice::<i32>(&[]), Outcome::ok(vec![]));
}

#[test]
fn collect_values_all_success_keeps_order() {
    let outcomes = vec![Outcome::ok(1), Outcome::ok(2), Outcome::ok(3)];

    assert_eq!(collect_values_slice(&outcomes).into_value(), vec![1, 2, 3]);
    assert_eq!(collect_values(outcomes).into_value(), vec![1, 2, 3]);
}

#[test]
fn collect_all_accumulates_every_error_in_order() {
    let outcomes = vec![Outcome::OK, Outcome::fail("E1"), Outcome::fail("E2")];

    let combined = collect_all_slice(&outcomes);
    assert_eq!(messages(&combined), ["E1", "E2"]);

    let combined = collect_all(outcomes);
    assert_eq!(messages(&combined), ["E1", "E2"]);
}

#[test]
fn collect_multi_error_element_contributes_contiguously() {
    let outcomes = vec![
        Outcome::fail("before"),
        Outcome::fail_many(["Ea", "Eb"]),
        Outcome::OK,
        Outcome::fail("after"),
    ];

    let combined = collect_all(outcomes);
    assert_eq!(messages(&combined), ["before", "Ea", "Eb", "after"]);
}

#[test]
fn collect_multi_error_first_then_success() {
    let outcomes: Vec<Outcome> = vec![Outcome::fail_many(["Ea", "Eb"]), Outcome::OK];
    assert_eq!(messages(&collect_all(outcomes)), ["Ea", "Eb"]);
}

#[test]
fn collect_values_failure_carries_no_values() {
    let outcomes = vec![Outcome::ok("a"), Outcome::fail("bad"), Outcome::ok("c")];

    let combined = collect_values(outcomes);
    assert!(combined.is_failure());
    assert!(combined.success().is_none());
    assert_eq!(messages(&combined), ["bad"]);
}

#[test]
fn collect_values_keeps_collecting_errors_after_first_failure() {
    let outcomes = vec![
        Outcome::fail("first"),
        Outcome::ok(2),
        Outcome::fail("second"),
        Outcome::ok(4),
        Outcome::fail("third"),
    ];

    assert_eq!(messages(&collect_values_slice(&outcomes)), ["first", "second", "third"]);
    assert_eq!(messages(&collect_values(outcomes)), ["first", "second", "third"]);
}

#[test]
fn collect_all_failure_preserves_metadata() {
    let outcomes = vec![Outcome::fail(Error::new("rejected").with("row", 3u32)), Outcome::OK];

    let combined = collect_all(outcomes);
    assert_eq!(combined.failure().unwrap().metadata()["row"].as_u64(), Some(3));
}

#[test]
fn collect_visits_single_pass_iterator_once() {
    let mut visited = 0;
    let combined = collect_values((0..5).map(|i| {
        visited += 1;
        if i == 1 {
            Outcome::fail("one")
        } else {
            Outcome::ok(i)
        }
    }));

    assert!(combined.is_failure());
    assert_eq!(visited, 5);
}

#[test]
fn collect_slice_leaves_input_untouched() {
    let outcomes = vec![Outcome::ok(String::from("x")), Outcome::fail("y")];
    let _ = collect_values_slice(&outcomes);

    assert_eq!(outcomes[0].success().map(String::as_str), Some("x"));
    assert_eq!(outcomes.len(), 2);
}

#[test]
fn from_iterator_routes_to_collect() {
    let values: Outcome<Vec<u8>> = [1u8, 2, 3].into_iter().map(Outcome::ok).collect();
    assert_eq!(values.into_value(), vec![1, 2, 3]);

    let checks: Outcome = ["a", "b"].into_iter().map(Outcome::<()>::fail).collect();
    assert_eq!(messages(&checks), ["a", "b"]);
}

#[test]
fn ten_thousand_elements_every_seventh_fails() {
    let outcomes: Vec<Outcome<usize>> = (0..10_000)
        .map(|i| {
            if i % 7 == 0 {
                Outcome::fail(Error::new("failed").with("index", i))
            } else {
                Outcome::ok(i)
            }
        })
        .collect();

    let expected: Vec<usize> = (0..10_000).step_by(7).collect();
    assert_eq!(expected.len(), 10_000usize.div_ceil(7));

    let from_slice = collect_values_slice(&outcomes);
    let from_sequence = collect_values(outcomes);
    assert_eq!(from_slice, from_sequence);

    let indices: Vec<usize> = from_sequence
        .iter_errors()
        .map(|e| e.metadata()["index"].as_u64().unwrap() as usize)
        .collect();
    assert_eq!(indices, expected);
}

fn arb_outcome() -> impl Strategy<Value = Outcome<u16>> {
    prop_oneof![
        3 => any::<u16>().prop_map(Outcome::ok),
        1 => prop::collection::vec("[a-z]{1,6}", 1..4)
            .prop_map(|msgs| Outcome::fail_many(msgs.into_iter().map(Error::new))),
    ]
}

proptest! {
    /// Sequence and slice variants agree on every input
    #[test]
    fn sequence_and_slice_variants_agree(outcomes in prop::collection::vec(arb_outcome(), 0..40)) {
        prop_assert_eq!(collect_values_slice(&outcomes), collect_values(outcomes.clone()));

        let valueless: Vec<Outcome> = outcomes.iter().cloned().map(Outcome::discard).collect();
        prop_assert_eq!(collect_all_slice(&valueless), collect_all(valueless.clone()));
    }

    /// The error count equals the sum of the inputs' error counts
    #[test]
    fn error_count_is_sum_of_inputs(outcomes in prop::collection::vec(arb_outcome(), 0..40)) {
        let expected: usize = outcomes.iter().map(|o| o.iter_errors().len()).sum();
        let combined = collect_values(outcomes);
        prop_assert_eq!(combined.iter_errors().len(), expected);
        prop_assert_eq!(combined.is_success(), expected == 0);
    }
}
