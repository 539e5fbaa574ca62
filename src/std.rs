/// Blocking-reader and file-backed sources.
mod io;
/// Tokio-backed materializer.
mod materializer;
/// Pump driving task.
mod pump_driver;
/// Reader source configuration.
mod reader_source_config;
/// Cloneable source control handle.
mod source_handle;
/// Signal-receiving half of a materialized source.
mod source_outlet;
/// Stream adapter with credit-based prefetch.
mod source_stream;

pub use io::{file_source, reader_source};
pub use materializer::{MaterializedPull, PullMaterializer};
pub use reader_source_config::ReaderSourceConfig;
pub use source_handle::SourceHandle;
pub use source_outlet::SourceOutlet;
pub use source_stream::SourceStream;
