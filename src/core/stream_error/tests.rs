use alloc::string::{String, ToString};

use super::StreamError;

#[test]
fn overdelivery_reports_counts() {
  let error = StreamError::Overdelivery { produced: 4, demanded: 2 };
  assert_eq!(error.to_string(), "fetch over-delivered: produced 4, demanded 2");
}

#[test]
fn fetch_failure_carries_opaque_payload() {
  let error = StreamError::FetchFailed(String::from("decode stalled"));
  assert_eq!(error.to_string(), "fetch failed: decode stalled");
}
