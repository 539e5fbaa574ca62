//! Unfold fetch strategy.

#[cfg(test)]
mod tests;

use alloc::{boxed::Box, vec::Vec};
use core::future::Future;

use async_trait::async_trait;

use crate::core::{fetch_step::FetchStep, fetch_strategy::FetchStrategy, stream_error::StreamError};

/// Result of one unfold fetch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfoldFetched<State, Out> {
  /// Element to emit for this step, if any.
  pub element:    Option<Out>,
  /// State threaded into the next call; `None` ends the stream.
  pub next_state: Option<State>,
}

impl<State, Out> UnfoldFetched<State, Out> {
  /// Creates an unfold fetch result.
  #[must_use]
  pub const fn new(element: Option<Out>, next_state: Option<State>) -> Self {
    Self { element, next_state }
  }
}

/// Pulls one element at a time, moving an opaque fold state through the fetch
/// function.
///
/// The previous state is consumed by value on every call; no history is
/// retained, so unbounded streams stay bounded in memory. A terminating call
/// may still carry one final element.
pub struct UnfoldPullStrategy<State, F> {
  state:    Option<State>,
  fetch_fn: F,
}

impl<State, F> UnfoldPullStrategy<State, F> {
  /// Creates an unfold strategy seeded with `initial_state`.
  #[must_use]
  pub const fn new(initial_state: State, fetch_fn: F) -> Self {
    Self { state: Some(initial_state), fetch_fn }
  }
}

#[async_trait]
impl<State, Out, F, Fut> FetchStrategy for UnfoldPullStrategy<State, F>
where
  State: Send,
  Out: Send,
  F: FnMut(State) -> Fut + Send,
  Fut: Future<Output = Result<UnfoldFetched<State, Out>, StreamError>> + Send,
{
  type Out = Out;

  async fn fetch(&mut self, _demand: u64) -> Result<FetchStep<Out>, StreamError> {
    let state = match self.state.take() {
      | Some(state) => state,
      | None => return Err(StreamError::IllegalTransition),
    };
    let fetched = (self.fetch_fn)(state).await?;
    let elements: Vec<Out> = fetched.element.into_iter().collect();
    match fetched.next_state {
      | Some(next) => {
        self.state = Some(next);
        Ok(FetchStep::Next(elements))
      },
      | None => Ok(FetchStep::Last(elements)),
    }
  }
}
