//! Stream state definitions.

/// Execution state of a materialized source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
  /// The engine is running.
  Running,
  /// The source completed successfully.
  Completed,
  /// The source failed.
  Failed,
  /// The source was cancelled by downstream.
  Cancelled,
}

impl StreamState {
  /// Returns `true` when the engine has stopped.
  #[must_use]
  pub const fn is_terminal(&self) -> bool {
    !matches!(self, Self::Running)
  }
}
