use outcome_rail::{Error, Errors};

#[test]
fn errors_new_holds_one_error() {
    let errors = Errors::new(Error::new("only"));

    assert_eq!(errors.len(), 1);
    assert!(!errors.is_empty());
    assert_eq!(errors.first().message(), "only");
}

#[test]
fn errors_from_iter_checked_rejects_empty() {
    assert!(Errors::from_iter_checked(Vec::<Error>::new()).is_none());
}

#[test]
fn errors_from_iter_checked_keeps_order() {
    let errors = Errors::from_iter_checked([Error::new("a"), Error::new("b"), Error::new("c")])
        .unwrap();

    assert_eq!(errors.len(), 3);
    assert_eq!(errors[1].message(), "b");
    let messages: Vec<_> = errors.as_slice().iter().map(Error::message).collect();
    assert_eq!(messages, ["a", "b", "c"]);
}

#[test]
fn errors_display_joins_messages() {
    let errors = Errors::from_iter_checked([Error::new("too short"), Error::new("no digit")])
        .unwrap();
    assert_eq!(errors.to_string(), "too short; no digit");
}

#[test]
fn errors_into_first_and_into_vec() {
    let errors = Errors::from_iter_checked([Error::new("x"), Error::new("y")]).unwrap();

    assert_eq!(errors.clone().into_first().message(), "x");
    assert_eq!(errors.into_vec(), vec![Error::new("x"), Error::new("y")]);
}

#[test]
fn errors_iterate_by_reference_and_by_value() {
    let errors = Errors::from(Error::new("single"));

    let borrowed: Vec<_> = (&errors).into_iter().map(Error::message).collect();
    assert_eq!(borrowed, ["single"]);

    let owned: Vec<Error> = errors.into_iter().collect();
    assert_eq!(owned, vec![Error::new("single")]);
}
