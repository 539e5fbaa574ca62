//! Pull source definitions.


use alloc::boxed::Box;
use core::future::Future;

use crate::core::{
  bulk_strategy::{BulkFetched, BulkPullStrategy},
  fetch_strategy::FetchStrategy,
  stream_error::StreamError,
  unfold_strategy::{UnfoldFetched, UnfoldPullStrategy},
};

/// Lazy blueprint of a demand-driven source.
///
/// Nothing runs until the source is materialized; materialization consumes the
/// blueprint, so every run owns a fresh engine and fresh strategy state.
pub struct PullSource<Out> {
  strategy: Box<dyn FetchStrategy<Out = Out>>,
}

/// Fold state of the lazy constructors: the thunk until the first pull, the
/// evaluated value afterwards.
enum LazySeed<F, Out> {
  Thunk(F),
  Value(Out),
}

impl<Out> PullSource<Out>
where
  Out: Send + 'static,
{
  /// Creates a source that pulls up to the demanded count per fetch call.
  ///
  /// The fetch function receives the absolute cursor and the outstanding
  /// demand and must not return more elements than demanded. A batch shorter
  /// than the demand ends the stream, explicit `end_of_stream` flag or not.
  #[must_use]
  pub fn bulk_pull<F, Fut>(initial_cursor: u64, fetch_fn: F) -> Self
  where
    F: FnMut(u64, u64) -> Fut + Send + 'static,
    Fut: Future<Output = Result<BulkFetched<Out>, StreamError>> + Send + 'static, {
    Self { strategy: Box::new(BulkPullStrategy::new(initial_cursor, fetch_fn)) }
  }

  /// Creates a source that pulls one element at a time, threading an opaque
  /// fold state through the fetch function.
  ///
  /// The stream ends as soon as the fetch function declines to provide a next
  /// state; a terminating call may still emit one final element.
  #[must_use]
  pub fn unfold_pull<State, F, Fut>(initial_state: State, fetch_fn: F) -> Self
  where
    State: Send + 'static,
    F: FnMut(State) -> Fut + Send + 'static,
    Fut: Future<Output = Result<UnfoldFetched<State, Out>, StreamError>> + Send + 'static, {
    Self { strategy: Box::new(UnfoldPullStrategy::new(initial_state, fetch_fn)) }
  }

  /// Creates a one-shot source that evaluates `thunk` inside the first pull
  /// and emits its value, then completes.
  #[must_use]
  pub fn lazy_single<F>(thunk: F) -> Self
  where
    F: FnOnce() -> Out + Send + 'static, {
    Self::unfold_pull(thunk, |thunk: F| async move { Ok(UnfoldFetched::new(Some(thunk()), None)) })
  }

  /// Creates a one-shot source whose value is awaited inside the first pull.
  #[must_use]
  pub fn lazy_async_single<F, Fut>(thunk: F) -> Self
  where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Out> + Send + 'static, {
    Self::unfold_pull(thunk, |thunk: F| async move { Ok(UnfoldFetched::new(Some(thunk().await), None)) })
  }

  /// Creates a source that evaluates `thunk` once, inside the first pull, and
  /// re-emits the value forever.
  ///
  /// The evaluated value is the fold state itself. The source never
  /// terminates on its own; bound it downstream via take or cancellation.
  #[must_use]
  pub fn repeat_lazy<F>(thunk: F) -> Self
  where
    Out: Clone,
    F: FnOnce() -> Out + Send + 'static, {
    Self::unfold_pull(LazySeed::Thunk(thunk), |seed: LazySeed<F, Out>| async move {
      let value = match seed {
        | LazySeed::Thunk(thunk) => thunk(),
        | LazySeed::Value(value) => value,
      };
      Ok(UnfoldFetched::new(Some(value.clone()), Some(LazySeed::Value(value))))
    })
  }

  /// Creates a source that awaits `thunk` once, inside the first pull, and
  /// re-emits the resolved value forever.
  #[must_use]
  pub fn repeat_lazy_async<F, Fut>(thunk: F) -> Self
  where
    Out: Clone,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Out> + Send + 'static, {
    Self::unfold_pull(LazySeed::Thunk(thunk), |seed: LazySeed<F, Out>| async move {
      let value = match seed {
        | LazySeed::Thunk(thunk) => thunk().await,
        | LazySeed::Value(value) => value,
      };
      Ok(UnfoldFetched::new(Some(value.clone()), Some(LazySeed::Value(value))))
    })
  }

  /// Releases the strategy for a driver to run.
  #[must_use]
  pub fn into_strategy(self) -> Box<dyn FetchStrategy<Out = Out>> {
    self.strategy
  }
}
