//! Source identifier for materialized engines.

use core::sync::atomic::Ordering;

use portable_atomic::AtomicU64;

/// Process-unique identifier of one materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(u64);

impl SourceId {
  /// Creates a source identifier from a raw value.
  #[must_use]
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  /// Returns the raw identifier value.
  #[must_use]
  pub const fn value(self) -> u64 {
    self.0
  }

  /// Generates a monotonically increasing source identifier.
  #[must_use]
  pub fn next() -> Self {
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
  }
}
