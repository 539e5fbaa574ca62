//! Cloneable source control handle.

extern crate std;

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::UnboundedSender;

use crate::core::{PumpCommand, SourceId, StreamError, StreamState};

/// Downstream-facing control half of a materialized source.
///
/// Clones share the same engine; demand from every clone accumulates in the
/// one pump.
#[derive(Clone, Debug)]
pub struct SourceHandle {
  id:       SourceId,
  commands: UnboundedSender<PumpCommand>,
  shared:   Arc<Mutex<StreamState>>,
}

impl SourceHandle {
  pub(crate) fn new(id: SourceId, commands: UnboundedSender<PumpCommand>, shared: Arc<Mutex<StreamState>>) -> Self {
    Self { id, commands, shared }
  }

  /// Returns the identifier of the materialization this handle controls.
  #[must_use]
  pub const fn id(&self) -> SourceId {
    self.id
  }

  /// Signals that downstream accepts `amount` more elements.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::InvalidDemand` when `amount` is zero and
  /// `StreamError::Disconnected` when the engine has already stopped.
  pub fn request(&self, amount: u64) -> Result<(), StreamError> {
    if amount == 0 {
      return Err(StreamError::InvalidDemand);
    }
    self.commands.send(PumpCommand::Request(amount)).map_err(|_| StreamError::Disconnected)
  }

  /// Requests cooperative cancellation.
  ///
  /// An already-started fetch runs to completion but its result is discarded;
  /// cancelling a stopped source is a no-op.
  pub fn cancel(&self) {
    let _ = self.commands.send(PumpCommand::Cancel);
  }

  /// Returns the current stream state.
  ///
  /// # Errors
  ///
  /// Returns `StreamError::ExecutorUnavailable` when the state lock is
  /// poisoned.
  pub fn state(&self) -> Result<StreamState, StreamError> {
    let guard = self.shared.lock().map_err(|_| StreamError::ExecutorUnavailable)?;
    Ok(*guard)
  }
}
