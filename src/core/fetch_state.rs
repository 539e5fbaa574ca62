//! Fetch slot state definitions.

/// State of the single fetch slot owned by a pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
  /// No fetch is running.
  Idle,
  /// A fetch is awaiting its asynchronous result.
  InFlight,
  /// The source is exhausted.
  Completed,
  /// The source failed.
  Failed,
}

impl FetchState {
  /// Returns `true` when no further fetches may ever be scheduled.
  #[must_use]
  pub const fn is_terminal(&self) -> bool {
    matches!(self, Self::Completed | Self::Failed)
  }
}
