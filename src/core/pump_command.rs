//! Pump mailbox command definitions.

/// Inbound event consumed by the task driving a pump.
///
/// Commands form a single-consumer mailbox; draining them one at a time is
/// what serializes demand signals, fetch completions and cancellation against
/// each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpCommand {
  /// Downstream accepts `amount` more elements.
  Request(u64),
  /// Downstream stops consuming; an in-flight fetch result is discarded.
  Cancel,
}
