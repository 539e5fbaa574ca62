use alloc::vec;
use core::future::ready;

use futures::executor::block_on;

use super::{UnfoldFetched, UnfoldPullStrategy};
use crate::core::{fetch_step::FetchStep, fetch_strategy::FetchStrategy, stream_error::StreamError};

#[test]
fn threads_state_between_calls() {
  let mut strategy =
    UnfoldPullStrategy::new(0_u32, |state| ready(Ok(UnfoldFetched::new(Some(state), Some(state + 1)))));
  assert_eq!(block_on(strategy.fetch(1)).expect("fetch"), FetchStep::Next(vec![0]));
  assert_eq!(block_on(strategy.fetch(1)).expect("fetch"), FetchStep::Next(vec![1]));
  assert_eq!(block_on(strategy.fetch(1)).expect("fetch"), FetchStep::Next(vec![2]));
}

#[test]
fn trailing_element_is_emitted_on_termination() {
  let mut strategy = UnfoldPullStrategy::new(2_u32, |state| {
    ready(Ok(if state == 0 {
      UnfoldFetched::new(Some(state), None)
    } else {
      UnfoldFetched::new(Some(state), Some(state - 1))
    }))
  });
  assert_eq!(block_on(strategy.fetch(1)).expect("fetch"), FetchStep::Next(vec![2]));
  assert_eq!(block_on(strategy.fetch(1)).expect("fetch"), FetchStep::Next(vec![1]));
  assert_eq!(block_on(strategy.fetch(1)).expect("fetch"), FetchStep::Last(vec![0]));
}

#[test]
fn termination_without_element_is_allowed() {
  let mut strategy = UnfoldPullStrategy::new((), |()| ready(Ok(UnfoldFetched::<(), u8>::new(None, None))));
  assert_eq!(block_on(strategy.fetch(1)).expect("fetch"), FetchStep::Last(vec![]));
}

#[test]
fn step_may_decline_an_element_and_continue() {
  let mut strategy = UnfoldPullStrategy::new(0_u32, |state| {
    ready(Ok(if state == 0 {
      UnfoldFetched::new(None, Some(state + 1))
    } else {
      UnfoldFetched::new(Some(state), Some(state + 1))
    }))
  });
  assert_eq!(block_on(strategy.fetch(1)).expect("fetch"), FetchStep::Next(vec![]));
  assert_eq!(block_on(strategy.fetch(1)).expect("fetch"), FetchStep::Next(vec![1]));
}

#[test]
fn fetch_after_termination_is_rejected() {
  let mut strategy = UnfoldPullStrategy::new((), |()| ready(Ok(UnfoldFetched::<(), u8>::new(None, None))));
  assert!(block_on(strategy.fetch(1)).expect("fetch").is_last());
  assert_eq!(block_on(strategy.fetch(1)), Err(StreamError::IllegalTransition));
}
