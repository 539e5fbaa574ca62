//! Pump driving task.

extern crate std;

use alloc::{boxed::Box, vec::Vec};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tracing::{debug, trace};

use crate::core::{
  FetchDisposition, FetchStrategy, Pump, PumpCommand, PumpSignal, SourceId, StreamError, StreamState,
};

/// Owns one pump and one strategy and drains their mailbox until the stream
/// terminates.
///
/// The driver is the only task touching the pump, which serializes demand
/// signals, fetch completions and cancellation without locks. While a fetch is
/// in flight only the fetch future is awaited; commands that arrived meanwhile
/// are applied before the result is delivered, so a racing cancellation
/// discards the pending batch.
pub(crate) struct PumpDriver<Out> {
  id:        SourceId,
  pump:      Pump,
  strategy:  Box<dyn FetchStrategy<Out = Out>>,
  commands:  UnboundedReceiver<PumpCommand>,
  signals:   UnboundedSender<PumpSignal<Out>>,
  shared:    Arc<Mutex<StreamState>>,
  fetch_due: bool,
}

impl<Out> PumpDriver<Out>
where
  Out: Send + 'static,
{
  pub(crate) fn new(
    id: SourceId,
    strategy: Box<dyn FetchStrategy<Out = Out>>,
    commands: UnboundedReceiver<PumpCommand>,
    signals: UnboundedSender<PumpSignal<Out>>,
    shared: Arc<Mutex<StreamState>>,
  ) -> Self {
    Self { id, pump: Pump::new(), strategy, commands, signals, shared, fetch_due: false }
  }

  pub(crate) async fn run(mut self) {
    debug!(source_id = self.id.value(), "pull source materialized");
    while self.drive().await {}
    debug!(source_id = self.id.value(), "pull source stopped");
  }

  /// Runs one protocol step; returns `false` once the driver must stop.
  async fn drive(&mut self) -> bool {
    if !self.fetch_due {
      return self.await_command().await;
    }
    self.fetch_due = false;
    let demand = match self.pump.begin_fetch() {
      | Ok(demand) => demand,
      | Err(error) => {
        self.fail(error);
        return false;
      },
    };
    trace!(source_id = self.id.value(), demand, "fetch scheduled");
    let result = self.strategy.fetch(demand).await;
    if !self.drain_commands() {
      return false;
    }
    if self.pump.is_cancelled() {
      trace!(source_id = self.id.value(), "fetch result discarded after cancellation");
      self.finish(StreamState::Cancelled);
      return false;
    }
    match result {
      | Ok(step) => self.deliver(step.into_parts()),
      | Err(error) => {
        self.fail(error);
        false
      },
    }
  }

  /// Parks on the mailbox until demand arrives or the source goes away.
  async fn await_command(&mut self) -> bool {
    let command = match self.commands.recv().await {
      | Some(command) => command,
      | None => {
        // Every handle dropped; nobody can ever request again.
        self.pump.on_cancel();
        self.finish(StreamState::Cancelled);
        return false;
      },
    };
    if let Err(error) = self.apply_command(command) {
      self.fail(error);
      return false;
    }
    if self.pump.is_cancelled() {
      self.finish(StreamState::Cancelled);
      return false;
    }
    true
  }

  fn apply_command(&mut self, command: PumpCommand) -> Result<(), StreamError> {
    match command {
      | PumpCommand::Request(amount) => {
        if self.pump.on_demand(amount)? {
          self.fetch_due = true;
        }
        Ok(())
      },
      | PumpCommand::Cancel => {
        self.pump.on_cancel();
        Ok(())
      },
    }
  }

  /// Applies commands that raced the in-flight fetch; returns `false` when a
  /// protocol violation terminated the stream.
  fn drain_commands(&mut self) -> bool {
    loop {
      match self.commands.try_recv() {
        | Ok(command) => {
          if let Err(error) = self.apply_command(command) {
            self.fail(error);
            return false;
          }
        },
        | Err(TryRecvError::Empty) => return true,
        | Err(TryRecvError::Disconnected) => {
          self.pump.on_cancel();
          return true;
        },
      }
    }
  }

  fn deliver(&mut self, (elements, end_of_stream): (Vec<Out>, bool)) -> bool {
    let produced = elements.len() as u64;
    let disposition = match self.pump.on_fetch_succeeded(produced, end_of_stream) {
      | Ok(disposition) => disposition,
      | Err(error) => {
        self.fail(error);
        return false;
      },
    };
    trace!(source_id = self.id.value(), produced, end_of_stream, "delivering batch");
    for element in elements {
      if self.signals.send(PumpSignal::Element(element)).is_err() {
        self.pump.on_cancel();
        self.finish(StreamState::Cancelled);
        return false;
      }
    }
    match disposition {
      | FetchDisposition::Completed => {
        self.finish(StreamState::Completed);
        let _ = self.signals.send(PumpSignal::Completed);
        false
      },
      | FetchDisposition::ScheduleNext => {
        self.fetch_due = true;
        true
      },
      | FetchDisposition::AwaitDemand => true,
    }
  }

  fn fail(&mut self, error: StreamError) {
    self.pump.on_fetch_failed();
    debug!(source_id = self.id.value(), %error, "pull source failed");
    self.finish(StreamState::Failed);
    let _ = self.signals.send(PumpSignal::Failed(error));
  }

  /// Publishes the terminal state before any terminal signal is sent, so
  /// observers that saw the signal read a settled state.
  fn finish(&mut self, state: StreamState) {
    if let Ok(mut guard) = self.shared.lock() {
      if !guard.is_terminal() {
        *guard = state;
      }
    }
  }
}
