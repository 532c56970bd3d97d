use outcome_rail::types::Accumulator;
use outcome_rail::{Error, ErrorVec};

#[test]
fn test_accumulator_new() {
    let acc: Accumulator<i32> = Accumulator::new();
    assert!(acc.is_empty());
    assert_eq!(acc.len(), 0);
}

#[test]
fn test_accumulator_push() {
    let mut acc = Accumulator::new();
    acc.push(1);
    acc.push(2);
    acc.push(3);

    assert_eq!(acc.len(), 3);
    assert!(!acc.is_empty());
}

#[test]
fn test_accumulator_extend_keeps_order() {
    let mut acc = Accumulator::new();
    acc.push(1);

    acc.extend(vec![2, 3, 4]);

    let items: Vec<i32> = acc.iter().copied().collect();
    assert_eq!(items, vec![1, 2, 3, 4]);
}

#[test]
fn test_accumulator_extend_empty() {
    let mut acc = Accumulator::new();
    acc.extend(Vec::<i32>::new());
    assert!(acc.is_empty());
}

#[test]
fn test_accumulator_into_inner() {
    let acc: Accumulator<i32> = vec![5, 6].into_iter().collect();
    let inner: ErrorVec<i32> = acc.into_inner();
    assert_eq!(inner.as_slice(), &[5, 6]);
}

#[test]
fn test_accumulator_into_iter() {
    let acc = Accumulator::from(ErrorVec::from_vec(vec!["a", "b"]));
    let collected: Vec<_> = acc.into_iter().collect();
    assert_eq!(collected, vec!["a", "b"]);
}

#[test]
fn test_accumulator_into_errors_empty_is_none() {
    let acc: Accumulator<Error> = Accumulator::new();
    assert!(acc.into_errors().is_none());
}

#[test]
fn test_accumulator_into_errors_keeps_order() {
    let mut acc = Accumulator::new();
    acc.push(Error::new("first"));
    acc.push(Error::new("second"));

    let errors = acc.into_errors().unwrap();
    let messages: Vec<_> = errors.iter().map(Error::message).collect();
    assert_eq!(messages, ["first", "second"]);
}
