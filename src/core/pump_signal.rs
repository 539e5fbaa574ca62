//! Pump delivery signal definitions.

use crate::core::stream_error::StreamError;

/// Outbound signal delivered to the downstream consumer.
///
/// `Completed` and `Failed` are each sent at most once and are the last signal
/// of a materialization; a cancelled source closes the channel without a
/// terminal signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PumpSignal<Out> {
  /// One element, delivered within the advertised demand.
  Element(Out),
  /// The source is exhausted.
  Completed,
  /// The source failed.
  Failed(StreamError),
}
