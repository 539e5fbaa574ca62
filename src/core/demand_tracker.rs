//! Demand tracker implementation.

#[cfg(test)]
mod tests;

use crate::core::{demand::Demand, stream_error::StreamError};

/// Tracks downstream demand for one materialization.
#[derive(Debug, Clone)]
pub struct DemandTracker {
  current: Demand,
}

impl DemandTracker {
  /// Creates a new demand tracker with zero demand.
  #[must_use]
  pub const fn new() -> Self {
    Self { current: Demand::ZERO }
  }

  /// Returns the current demand value.
  #[must_use]
  pub const fn current(&self) -> Demand {
    self.current
  }

  /// Returns `true` if there is remaining demand.
  #[must_use]
  pub const fn has_demand(&self) -> bool {
    self.current.has_demand()
  }

  /// Adds demand to the tracker.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::InvalidDemand` when `amount` is zero.
  pub const fn request(&mut self, amount: u64) -> Result<Demand, StreamError> {
    if amount == 0 {
      return Err(StreamError::InvalidDemand);
    }
    self.current = self.current.saturating_add(amount);
    Ok(self.current)
  }

  /// Consumes `amount` units of demand.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::IllegalTransition` when `amount` exceeds the
  /// available demand.
  pub const fn consume(&mut self, amount: u64) -> Result<(), StreamError> {
    match self.current.checked_sub(amount) {
      | Some(rest) => {
        self.current = rest;
        Ok(())
      },
      | None => Err(StreamError::IllegalTransition),
    }
  }
}

impl Default for DemandTracker {
  fn default() -> Self {
    Self::new()
  }
}
