use super::*;
use crate::helpers::models::*;
use crate::helpers::objectives::FakeOracle;

parameterized_test! {can_add_orders_in_a_batch_by_weight, (weight1, weight2, max_weight, expected), {
    assert_eq!(can_add_orders_in_a_batch(&test_order("o1", weight1), &test_order("o2", weight2), max_weight), expected);
}}

can_add_orders_in_a_batch_by_weight! {
    case01: (4., 4., 7., false),
    case02: (4., 4., 8., true),
    case03: (4., 4., 9., true),
    case04: (0.1, 0.2, 0.3, false),
    case05: (4., 3.0000000005, 7., false),
    case06: (4., 3., 7., true),
}

parameterized_test! {can_add_order_to_batch_by_weight, (order_weight, expected), {
    let batch = create_batch(10., &[test_order("o1", 6.)]);
    assert_eq!(can_add_order_to_batch(&test_order("o2", order_weight), &batch), expected);
    assert_eq!(batch.size(), 1);
}}

can_add_order_to_batch_by_weight! {
    case01: (3., true),
    case02: (4., true),
    case03: (5., false),
}

#[test]
fn can_union_batches() {
    let oracle = FakeOracle::by_weight();
    let batch1 = create_batch(10., &[test_order_with_times("o1", 3., 100., 5.)]);
    let batch2 = create_batch(10., &[test_order_with_times("o2", 4., 100., 1.), test_order("o3", 1.)]);
    batch1.service_time(&oracle).unwrap();
    batch2.service_time(&oracle).unwrap();

    let union = union_batch(&batch1, &batch2).unwrap();

    assert_eq!(get_order_ids(&[union.clone()]), vec![vec!["o1", "o2", "o3"]]);
    assert_eq!(union.weight(), 8.);
    assert_eq!(union.max_weight(), 10.);
    assert_eq!(union.earliest_arrival_time(), Some(0.));
    assert_eq!(union.cached_service_time(), None);
    assert_eq!(batch1.size(), 1);
    assert_eq!(batch2.size(), 2);
    assert_eq!(batch1.cached_service_time(), Some(3.));
}

#[test]
fn can_fail_union_without_mutation() {
    let batch1 = create_batch(7., &[test_order("o1", 3.), test_order("o2", 2.)]);
    let batch2 = create_batch(7., &[test_order("o3", 3.)]);

    assert!(!can_merge_batches(&batch1, &batch2));
    let result = union_batch(&batch1, &batch2);

    assert!(matches!(result, Err(BatchingError::CapacityExceeded { .. })));
    assert_eq!(get_order_ids(&[batch1, batch2]), vec![vec!["o1", "o2"], vec!["o3"]]);
}

#[test]
fn can_validate_valid_solution() {
    let orders = create_orders(&[1., 2., 3.]);
    let batches = vec![create_batch(5., &orders[..2]), create_batch(5., &orders[2..])];

    assert_eq!(validate_solution(&orders, &batches), Ok(()));
}

#[test]
fn can_detect_missing_order() {
    let orders = create_orders(&[1., 2., 3.]);
    let batches = vec![create_batch(5., &orders[..2])];

    assert!(matches!(validate_solution(&orders, &batches), Err(BatchingError::SolutionInvalid(_))));
}

#[test]
fn can_detect_wrong_total_count() {
    let orders = create_orders(&[1., 2., 3.]);
    let batches = vec![create_batch(10., &orders), create_batch(10., &orders[1..2])];

    match validate_solution(&orders, &batches) {
        Err(BatchingError::SolutionInvalid(msg)) => assert_eq!(msg, "expected 3 orders to be assigned, got 4"),
        _ => unreachable!(),
    }
}

#[test]
fn can_detect_duplicate_with_same_total_count() {
    let orders = create_orders(&[1., 2., 3.]);
    let batches = vec![create_batch(5., &orders[..2]), create_batch(5., &orders[..1])];

    match validate_solution(&orders, &batches) {
        Err(BatchingError::SolutionInvalid(msg)) => assert!(msg.contains("more than once")),
        _ => unreachable!(),
    }
}

#[test]
fn can_detect_unknown_order() {
    let orders = create_orders(&[1., 2.]);
    let batches = vec![create_batch(5., &[orders[0].clone(), test_order("unknown", 1.)])];

    match validate_solution(&orders, &batches) {
        Err(BatchingError::SolutionInvalid(msg)) => assert!(msg.contains("unknown order 'unknown'")),
        _ => unreachable!(),
    }
}
