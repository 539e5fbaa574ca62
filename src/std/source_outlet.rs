//! Signal-receiving half of a materialized source.

use core::task::{Context, Poll};

use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::PumpSignal;

/// Receives the signals a materialized source emits.
///
/// The channel is unbounded but demand conservation keeps it bounded in
/// practice: the engine never sends more elements than were requested.
pub struct SourceOutlet<Out> {
  signals: UnboundedReceiver<PumpSignal<Out>>,
}

impl<Out> SourceOutlet<Out> {
  pub(crate) fn new(signals: UnboundedReceiver<PumpSignal<Out>>) -> Self {
    Self { signals }
  }

  /// Awaits the next signal.
  ///
  /// Returns `None` once the engine stopped; a cancelled source closes the
  /// channel without a terminal signal.
  pub async fn recv(&mut self) -> Option<PumpSignal<Out>> {
    self.signals.recv().await
  }

  pub(crate) fn poll_recv(&mut self, cx: &mut Context<'_>) -> Poll<Option<PumpSignal<Out>>> {
    self.signals.poll_recv(cx)
  }
}
