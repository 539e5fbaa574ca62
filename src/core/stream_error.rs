//! Stream error definitions.

#[cfg(test)]
mod tests;

use alloc::string::String;

/// Errors produced by the pull engine.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StreamError {
  /// Demand request with a zero amount.
  #[error("invalid demand request")]
  InvalidDemand,
  /// Operation that violates the pump protocol.
  #[error("illegal pump transition")]
  IllegalTransition,
  /// Fetch function produced more elements than were demanded.
  #[error("fetch over-delivered: produced {produced}, demanded {demanded}")]
  Overdelivery {
    /// Elements the fetch function returned.
    produced: u64,
    /// Demand observed when the fetch was scheduled.
    demanded: u64,
  },
  /// The asynchronous fetch operation failed; the payload is opaque.
  #[error("fetch failed: {0}")]
  FetchFailed(String),
  /// The downstream consumer disconnected.
  #[error("downstream disconnected")]
  Disconnected,
  /// A shared handle or executor resource is unavailable.
  #[error("executor is unavailable")]
  ExecutorUnavailable,
}
