use super::*;
use crate::helpers::models::*;
use crate::helpers::objectives::{FailingOracle, FakeOracle};

#[test]
fn can_sum_picking_times() {
    let oracle = Arc::new(FakeOracle::by_weight());
    let objective = PickingTime::new(oracle.clone());
    let batches = vec![create_batch(10., &[test_order("o1", 3.)]), create_batch(10., &[test_order("o2", 5.)])];

    assert_eq!(objective.batch_fitness(&batches[0], 0.), Ok(3.));
    assert_eq!(objective.fitness(&batches, 0.), Ok(8.));
    assert_eq!(objective.fitness(&[], 0.), Ok(0.));
    assert_eq!(oracle.calls(), 2);
}

#[test]
fn can_call_oracle_once_per_batch() {
    let oracle = Arc::new(FakeOracle::by_size(10., 2.));
    let objective = PickingTime::new(oracle.clone());
    let batch = create_batch(10., &[test_order("o1", 3.), test_order("o2", 1.)]);

    let first = objective.batch_fitness(&batch, 0.).unwrap();
    let second = objective.batch_fitness(&batch, 100.).unwrap();

    assert_eq!(first, 14.);
    assert_eq!(first, second);
    assert_eq!(oracle.calls(), 1);
}

#[test]
fn can_use_ratio_of_sums_for_picking_time_by_weight() {
    let objective = PickingTimeByWeight::new(Arc::new(FakeOracle::new(|_| 4.)));
    let batches = vec![create_batch(10., &[test_order("o1", 2.)]), create_batch(10., &[test_order("o2", 8.)])];

    assert_eq!(objective.batch_fitness(&batches[0], 0.), Ok(2.));
    assert_eq!(objective.batch_fitness(&batches[1], 0.), Ok(0.5));
    assert_eq!(objective.fitness(&batches, 0.), Ok(0.8));
}

#[test]
fn can_handle_empty_batch_in_picking_time_by_weight() {
    let objective = PickingTimeByWeight::new(Arc::new(FakeOracle::new(|_| 4.)));

    assert_eq!(objective.batch_fitness(&Batch::new(10.), 0.), Ok(0.));
    assert_eq!(objective.fitness(&[], 0.), Ok(0.));
}

#[test]
fn can_propagate_oracle_failure() {
    let batch = create_batch(10., &[test_order("o1", 2.)]);

    assert_eq!(PickingTime::new(Arc::new(FailingOracle)).batch_fitness(&batch, 0.), Err("no route".into()));
    assert_eq!(PickingTimeByWeight::new(Arc::new(FailingOracle)).fitness(&[batch], 0.), Err("no route".into()));
}
