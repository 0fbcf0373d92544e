use crate::models::{Batch, Order, Timestamp, Weight};
use std::sync::Arc;

pub const DEFAULT_DUE_DATE: Timestamp = 1000.;

pub fn test_order(id: &str, weight: Weight) -> Arc<Order> {
    test_order_with_times(id, weight, DEFAULT_DUE_DATE, 0.)
}

pub fn test_order_with_times(id: &str, weight: Weight, due_date: Timestamp, arrival_time: Timestamp) -> Arc<Order> {
    Arc::new(Order::new(id, weight, due_date, arrival_time))
}

pub fn create_orders(weights: &[Weight]) -> Vec<Arc<Order>> {
    weights.iter().enumerate().map(|(idx, weight)| test_order(&format!("o{idx}"), *weight)).collect()
}

pub fn create_batch(max_weight: Weight, orders: &[Arc<Order>]) -> Batch {
    let mut batch = Batch::new(max_weight);
    orders.iter().for_each(|order| batch.add_order(order.clone()).expect("cannot add order"));

    batch
}

pub fn get_order_ids(batches: &[Batch]) -> Vec<Vec<String>> {
    batches.iter().map(|batch| batch.orders().iter().map(|order| order.id.clone()).collect()).collect()
}

pub fn get_weights(batches: &[Batch]) -> Vec<Weight> {
    batches.iter().map(|batch| batch.weight()).collect()
}
