//! Pump state machine implementation.

#[cfg(test)]
mod tests;

use crate::core::{demand::Demand, demand_tracker::DemandTracker, fetch_state::FetchState, stream_error::StreamError};

/// Next step the driver must take after a successful delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDisposition {
  /// The source is exhausted; signal completion.
  Completed,
  /// Demand remains; schedule the next fetch immediately.
  ScheduleNext,
  /// Wait for further downstream demand.
  AwaitDemand,
}

/// Protocol state machine shared by all fetch strategies.
///
/// Owns demand accounting and the single fetch slot. All methods are
/// synchronous and must only be invoked from the one task driving the
/// materialization; serialization of the inbound events is what enforces the
/// single-in-flight invariant without locks.
#[derive(Debug)]
pub struct Pump {
  demand:           DemandTracker,
  fetch_state:      FetchState,
  in_flight_demand: Option<u64>,
  cancelled:        bool,
}

impl Pump {
  /// Creates an idle pump with zero demand.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      demand:           DemandTracker::new(),
      fetch_state:      FetchState::Idle,
      in_flight_demand: None,
      cancelled:        false,
    }
  }

  /// Returns the current fetch slot state.
  #[must_use]
  pub const fn fetch_state(&self) -> FetchState {
    self.fetch_state
  }

  /// Returns the outstanding demand.
  #[must_use]
  pub const fn demand(&self) -> Demand {
    self.demand.current()
  }

  /// Returns `true` once downstream cancelled the source.
  #[must_use]
  pub const fn is_cancelled(&self) -> bool {
    self.cancelled
  }

  /// Returns `true` when no further protocol activity may occur.
  #[must_use]
  pub const fn is_finished(&self) -> bool {
    self.cancelled || self.fetch_state.is_terminal()
  }

  const fn should_schedule(&self) -> bool {
    !self.cancelled && matches!(self.fetch_state, FetchState::Idle) && self.demand.has_demand()
  }

  /// Registers a downstream demand signal.
  ///
  /// Returns `true` when a fetch must now be scheduled. Demand arriving after
  /// completion, failure or cancellation is ignored without error.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::InvalidDemand` when `amount` is zero.
  pub fn on_demand(&mut self, amount: u64) -> Result<bool, StreamError> {
    if amount == 0 {
      return Err(StreamError::InvalidDemand);
    }
    if self.is_finished() {
      return Ok(false);
    }
    self.demand.request(amount)?;
    Ok(self.should_schedule())
  }

  /// Transitions the fetch slot from idle to in-flight.
  ///
  /// Returns the demand snapshot the strategy is allowed to fill.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::IllegalTransition` when the slot is not idle or no
  /// demand is outstanding.
  pub const fn begin_fetch(&mut self) -> Result<u64, StreamError> {
    if !self.should_schedule() {
      return Err(StreamError::IllegalTransition);
    }
    let snapshot = self.demand.current().value();
    self.fetch_state = FetchState::InFlight;
    self.in_flight_demand = Some(snapshot);
    Ok(snapshot)
  }

  /// Accounts for a successful fetch of `produced` elements.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::Overdelivery` (and fails the pump) when `produced`
  /// exceeds the demand snapshot taken at schedule time, and
  /// `StreamError::IllegalTransition` when no fetch was in flight.
  pub fn on_fetch_succeeded(&mut self, produced: u64, end_of_stream: bool) -> Result<FetchDisposition, StreamError> {
    let demanded = match self.in_flight_demand.take() {
      | Some(value) => value,
      | None => return Err(StreamError::IllegalTransition),
    };
    if produced > demanded {
      self.fetch_state = FetchState::Failed;
      return Err(StreamError::Overdelivery { produced, demanded });
    }
    // Demand only grows while a fetch is in flight, so consuming the produced
    // count cannot underflow here.
    if let Err(error) = self.demand.consume(produced) {
      self.fetch_state = FetchState::Failed;
      return Err(error);
    }
    if end_of_stream {
      self.fetch_state = FetchState::Completed;
      return Ok(FetchDisposition::Completed);
    }
    self.fetch_state = FetchState::Idle;
    if self.should_schedule() {
      Ok(FetchDisposition::ScheduleNext)
    } else {
      Ok(FetchDisposition::AwaitDemand)
    }
  }

  /// Marks the pump failed; no further fetches are ever scheduled.
  pub const fn on_fetch_failed(&mut self) {
    self.in_flight_demand = None;
    self.fetch_state = FetchState::Failed;
  }

  /// Marks the pump cancelled; an in-flight result is discarded on arrival.
  pub const fn on_cancel(&mut self) {
    self.cancelled = true;
  }
}

impl Default for Pump {
  fn default() -> Self {
    Self::new()
  }
}
