//! Bulk fetch strategy.


use alloc::{boxed::Box, vec::Vec};
use core::future::Future;

use async_trait::async_trait;

use crate::core::{fetch_step::FetchStep, fetch_strategy::FetchStrategy, stream_error::StreamError};

/// Result of one bulk fetch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkFetched<Out> {
  /// Elements produced by this call, at most the demanded count.
  pub batch:         Vec<Out>,
  /// Whether the backing resource reported exhaustion.
  pub end_of_stream: bool,
}

impl<Out> BulkFetched<Out> {
  /// Creates a bulk fetch result.
  #[must_use]
  pub const fn new(batch: Vec<Out>, end_of_stream: bool) -> Self {
    Self { batch, end_of_stream }
  }
}

/// Pulls up to the demanded count per call, advancing a cursor by the number
/// of elements actually produced.
///
/// A batch shorter than the demand ends the stream even when the fetch
/// function did not set `end_of_stream`, mirroring short reads in blocking
/// I/O.
pub struct BulkPullStrategy<F> {
  cursor:    u64,
  exhausted: bool,
  fetch_fn:  F,
}

impl<F> BulkPullStrategy<F> {
  /// Creates a bulk strategy starting at `initial_cursor`.
  #[must_use]
  pub const fn new(initial_cursor: u64, fetch_fn: F) -> Self {
    Self { cursor: initial_cursor, exhausted: false, fetch_fn }
  }

  /// Returns the absolute cursor position.
  #[must_use]
  pub const fn cursor(&self) -> u64 {
    self.cursor
  }
}

#[async_trait]
impl<Out, F, Fut> FetchStrategy for BulkPullStrategy<F>
where
  Out: Send,
  F: FnMut(u64, u64) -> Fut + Send,
  Fut: Future<Output = Result<BulkFetched<Out>, StreamError>> + Send,
{
  type Out = Out;

  async fn fetch(&mut self, demand: u64) -> Result<FetchStep<Out>, StreamError> {
    if self.exhausted {
      return Err(StreamError::IllegalTransition);
    }
    let fetched = (self.fetch_fn)(self.cursor, demand).await?;
    let produced = fetched.batch.len() as u64;
    if produced > demand {
      return Err(StreamError::Overdelivery { produced, demanded: demand });
    }
    self.cursor = self.cursor.saturating_add(produced);
    if fetched.end_of_stream || produced < demand {
      self.exhausted = true;
      return Ok(FetchStep::Last(fetched.batch));
    }
    Ok(FetchStep::Next(fetched.batch))
  }
}
