/// Bulk fetch strategy.
mod bulk_strategy;
/// Demand model type.
mod demand;
/// Demand tracking utilities.
mod demand_tracker;
/// Fetch slot states.
mod fetch_state;
/// Unified fetch step outcome.
mod fetch_step;
/// Fetch strategy abstraction.
mod fetch_strategy;
/// Pull source definitions.
mod pull_source;
/// Pump state machine.
mod pump;
/// Pump mailbox commands.
mod pump_command;
/// Pump delivery signals.
mod pump_signal;
/// Source identifier type.
mod source_id;
/// Stream error definitions.
mod stream_error;
/// Stream state enum.
mod stream_state;
/// Unfold fetch strategy.
mod unfold_strategy;

pub use bulk_strategy::{BulkFetched, BulkPullStrategy};
pub use demand::Demand;
pub use demand_tracker::DemandTracker;
pub use fetch_state::FetchState;
pub use fetch_step::FetchStep;
pub use fetch_strategy::FetchStrategy;
pub use pull_source::PullSource;
pub use pump::{FetchDisposition, Pump};
pub use pump_command::PumpCommand;
pub use pump_signal::PumpSignal;
pub use source_id::SourceId;
pub use stream_error::StreamError;
pub use stream_state::StreamState;
pub use unfold_strategy::{UnfoldFetched, UnfoldPullStrategy};
