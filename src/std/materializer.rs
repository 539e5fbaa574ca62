//! Tokio-backed materializer.

extern crate std;


use std::sync::{Arc, Mutex};

use tokio::{runtime::Handle, sync::mpsc};

use crate::{
  core::{PullSource, SourceId, StreamState},
  std::{pump_driver::PumpDriver, source_handle::SourceHandle, source_outlet::SourceOutlet, source_stream::SourceStream},
};

/// Materializes pull sources onto a caller-supplied tokio runtime.
///
/// The materializer only submits work; it never owns or shuts down the
/// runtime.
#[derive(Clone, Debug)]
pub struct PullMaterializer {
  handle: Handle,
}

impl PullMaterializer {
  /// Creates a materializer submitting work to the provided runtime handle.
  #[must_use]
  pub const fn new(handle: Handle) -> Self {
    Self { handle }
  }

  /// Creates a materializer bound to the current runtime.
  ///
  /// # Panics
  ///
  /// Panics when called outside a tokio runtime.
  #[must_use]
  pub fn current() -> Self {
    Self { handle: Handle::current() }
  }

  /// Instantiates the source definition into a running engine.
  ///
  /// Consumes the blueprint; every materialization owns fresh demand, cursor
  /// and fold state.
  #[must_use]
  pub fn materialize<Out>(&self, source: PullSource<Out>) -> MaterializedPull<Out>
  where
    Out: Send + 'static, {
    let id = SourceId::next();
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (signal_tx, signal_rx) = mpsc::unbounded_channel();
    let shared = Arc::new(Mutex::new(StreamState::Running));
    let driver = PumpDriver::new(id, source.into_strategy(), command_rx, signal_tx, Arc::clone(&shared));
    self.handle.spawn(driver.run());
    MaterializedPull {
      handle: SourceHandle::new(id, command_tx, shared),
      outlet: SourceOutlet::new(signal_rx),
    }
  }
}

/// Running engine endpoints returned by materialization.
pub struct MaterializedPull<Out> {
  handle: SourceHandle,
  outlet: SourceOutlet<Out>,
}

impl<Out> MaterializedPull<Out> {
  /// Returns a clone of the control handle.
  #[must_use]
  pub fn handle(&self) -> SourceHandle {
    self.handle.clone()
  }

  /// Awaits the next signal from the engine.
  pub async fn recv(&mut self) -> Option<crate::core::PumpSignal<Out>> {
    self.outlet.recv().await
  }

  /// Splits into the control handle and the signal outlet.
  #[must_use]
  pub fn into_parts(self) -> (SourceHandle, SourceOutlet<Out>) {
    (self.handle, self.outlet)
  }

  /// Adapts the source to a `futures_core::Stream` keeping `prefetch`
  /// elements of demand outstanding.
  #[must_use]
  pub fn into_stream(self, prefetch: u64) -> SourceStream<Out> {
    SourceStream::new(self.handle, self.outlet, prefetch)
  }
}
