//! Unified fetch outcome tag.

use alloc::vec::Vec;

/// Outcome of one strategy fetch.
///
/// Short bulk batches and explicit end-of-stream flags are folded into
/// [`FetchStep::Last`] by the strategies, so the pump only ever sees a single
/// end-of-stream signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStep<Out> {
  /// Elements produced; more may follow.
  Next(Vec<Out>),
  /// Final elements; the stream completes after delivery.
  Last(Vec<Out>),
}

impl<Out> FetchStep<Out> {
  /// Returns the elements carried by this step.
  #[must_use]
  pub fn elements(&self) -> &[Out] {
    match self {
      | Self::Next(elements) | Self::Last(elements) => elements,
    }
  }

  /// Returns `true` when the stream ends after this step.
  #[must_use]
  pub const fn is_last(&self) -> bool {
    matches!(self, Self::Last(_))
  }

  /// Splits the step into its elements and the end-of-stream flag.
  #[must_use]
  pub fn into_parts(self) -> (Vec<Out>, bool) {
    match self {
      | Self::Next(elements) => (elements, false),
      | Self::Last(elements) => (elements, true),
    }
  }
}
