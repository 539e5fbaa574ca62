//! Stream adapter with credit-based prefetch.

use core::{
  pin::Pin,
  task::{Context, Poll},
};

use futures_core::Stream;

use crate::{
  core::{PumpSignal, StreamError},
  std::{source_handle::SourceHandle, source_outlet::SourceOutlet},
};

/// Adapts a materialized source to [`futures_core::Stream`].
///
/// A window of `prefetch` elements is requested on the first poll and topped
/// up by one after every element, so the engine keeps a constant amount of
/// demand outstanding. Dropping the adapter cancels the source.
pub struct SourceStream<Out> {
  handle:     SourceHandle,
  outlet:     SourceOutlet<Out>,
  prefetch:   u64,
  primed:     bool,
  terminated: bool,
}

impl<Out> SourceStream<Out> {
  pub(crate) fn new(handle: SourceHandle, outlet: SourceOutlet<Out>, prefetch: u64) -> Self {
    Self { handle, outlet, prefetch: prefetch.max(1), primed: false, terminated: false }
  }

  /// Returns the control handle of the underlying source.
  #[must_use]
  pub const fn handle(&self) -> &SourceHandle {
    &self.handle
  }
}

impl<Out> Stream for SourceStream<Out> {
  type Item = Result<Out, StreamError>;

  fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
    let this = self.get_mut();
    if this.terminated {
      return Poll::Ready(None);
    }
    if !this.primed {
      this.primed = true;
      if this.handle.request(this.prefetch).is_err() {
        this.terminated = true;
        return Poll::Ready(None);
      }
    }
    match this.outlet.poll_recv(cx) {
      | Poll::Pending => Poll::Pending,
      | Poll::Ready(Some(PumpSignal::Element(element))) => {
        // Top the credit window back up.
        let _ = this.handle.request(1);
        Poll::Ready(Some(Ok(element)))
      },
      | Poll::Ready(Some(PumpSignal::Failed(error))) => {
        this.terminated = true;
        Poll::Ready(Some(Err(error)))
      },
      | Poll::Ready(Some(PumpSignal::Completed)) | Poll::Ready(None) => {
        this.terminated = true;
        Poll::Ready(None)
      },
    }
  }
}

impl<Out> Drop for SourceStream<Out> {
  fn drop(&mut self) {
    if !self.terminated {
      self.handle.cancel();
    }
  }
}
