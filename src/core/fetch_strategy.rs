//! Fetch strategy abstraction.

use alloc::boxed::Box;

use async_trait::async_trait;

use crate::core::{fetch_step::FetchStep, stream_error::StreamError};

/// Asynchronous element production driven by the pump.
///
/// The pump guarantees that `demand` is always positive and that no second
/// `fetch` is issued before the previous one returned.
#[async_trait]
pub trait FetchStrategy: Send {
  /// Element type produced by this strategy.
  type Out: Send;

  /// Produces the next step, carrying at most `demand` elements.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError`] when the underlying fetch operation fails; the
  /// pump treats any error as terminal.
  async fn fetch(&mut self, demand: u64) -> Result<FetchStep<Self::Out>, StreamError>;
}
