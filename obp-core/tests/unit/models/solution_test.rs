use super::*;
use crate::helpers::models::*;

#[test]
fn can_create_statistics() {
    let batches = vec![
        create_batch(10., &[test_order("o1", 4.), test_order("o2", 6.)]),
        create_batch(10., &[test_order("o3", 5.)]),
    ];

    let statistics = SolutionStatistics::new(&batches);

    assert_eq!(statistics.batches, 2);
    assert_eq!(statistics.orders, 3);
    assert_eq!(statistics.total_weight, 15.);
    assert_eq!(statistics.mean_fill_ratio, 0.75);
    assert_eq!(statistics.complete_batches, 1);
}

#[test]
fn can_create_statistics_for_empty_list() {
    assert_eq!(SolutionStatistics::new(&[]), SolutionStatistics::default());
}
