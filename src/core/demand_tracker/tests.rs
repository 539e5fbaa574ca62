use super::DemandTracker;
use crate::core::{demand::Demand, stream_error::StreamError};

#[test]
fn request_accumulates_demand() {
  let mut tracker = DemandTracker::new();
  assert_eq!(tracker.request(3).expect("request"), Demand::new(3));
  assert_eq!(tracker.request(2).expect("request"), Demand::new(5));
  assert!(tracker.has_demand());
}

#[test]
fn request_rejects_zero() {
  let mut tracker = DemandTracker::new();
  assert_eq!(tracker.request(0), Err(StreamError::InvalidDemand));
  assert_eq!(tracker.current(), Demand::ZERO);
}

#[test]
fn consume_decrements_available_demand() {
  let mut tracker = DemandTracker::new();
  tracker.request(5).expect("request");
  tracker.consume(3).expect("consume");
  assert_eq!(tracker.current(), Demand::new(2));
  tracker.consume(2).expect("consume");
  assert!(!tracker.has_demand());
}

#[test]
fn consume_past_available_is_rejected() {
  let mut tracker = DemandTracker::new();
  tracker.request(1).expect("request");
  assert_eq!(tracker.consume(2), Err(StreamError::IllegalTransition));
  assert_eq!(tracker.current(), Demand::new(1));
}

#[test]
fn request_saturates_instead_of_wrapping() {
  let mut tracker = DemandTracker::new();
  tracker.request(u64::MAX).expect("request");
  assert_eq!(tracker.request(5).expect("request"), Demand::new(u64::MAX));
}
