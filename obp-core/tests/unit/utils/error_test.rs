use super::*;

#[test]
fn can_convert_oracle_error() {
    let err: BatchingError = GenericError::from("no route").into();

    assert_eq!(err, BatchingError::Oracle(GenericError::from("no route")));
    assert_eq!(err.to_string(), "cannot compute service time: no route");
}

#[test]
fn can_format_unassignable_order() {
    let err = BatchingError::UnassignableOrder { order_id: "o1".to_string(), weight: 10., max_weight: 7. };

    let message = GenericError::from(err).to_string();

    assert!(message.starts_with("single order exceeds maximum batch capacity"));
    assert!(message.contains("'o1'"));
}
