use super::*;
use crate::helpers::models::*;
use crate::helpers::objectives::FakeOracle;

fn create_batches() -> Vec<Batch> {
    vec![
        create_batch(10., &[test_order_with_times("o1", 2., 3., 0.), test_order_with_times("o2", 3., 10., 0.)]),
        create_batch(10., &[test_order_with_times("o3", 4., 6., 0.)]),
    ]
}

fn create_objective(name: &str) -> Box<dyn ObjectiveFunction> {
    let oracle = Arc::new(FakeOracle::by_weight());

    match name {
        "earliness" => Box::new(SumEarliness::new(oracle)),
        "tardiness" => Box::new(SumTardiness::new(oracle)),
        "both" => Box::new(SumEarlinessTardiness::new(oracle)),
        _ => unreachable!(),
    }
}

parameterized_test! {can_estimate_list_deviation, (name, now, expected), {
    assert_eq!(create_objective(name).fitness(&create_batches(), now), Ok(expected));
}}

can_estimate_list_deviation! {
    // completion times are 5 and 9
    case01_earliness: ("earliness", 0., 5.),
    case02_tardiness: ("tardiness", 0., 5.),
    case03_both: ("both", 0., 10.),
    // completion times are 7 and 11
    case04_earliness_later: ("earliness", 2., 3.),
    case05_tardiness_later: ("tardiness", 2., 9.),
    case06_both_later: ("both", 2., 12.),
}

parameterized_test! {can_estimate_batch_deviation, (name, expected), {
    // completion time of the second batch on its own is 4
    assert_eq!(create_objective(name).batch_fitness(&create_batches()[1], 0.), Ok(expected));
}}

can_estimate_batch_deviation! {
    case01_earliness: ("earliness", 2.),
    case02_tardiness: ("tardiness", 0.),
    case03_both: ("both", 2.),
}

#[test]
fn can_reuse_service_times_between_objectives() {
    let oracle = Arc::new(FakeOracle::by_weight());
    let batches = create_batches();

    SumEarliness::new(oracle.clone()).fitness(&batches, 0.).unwrap();
    SumTardiness::new(oracle.clone()).fitness(&batches, 0.).unwrap();

    assert_eq!(oracle.calls(), 2);
}
