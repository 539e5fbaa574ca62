//! Reader source configuration.

/// Configuration for reader-backed and file-backed sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderSourceConfig {
  chunk_size: usize,
}

impl ReaderSourceConfig {
  /// Default chunk size in bytes.
  pub const DEFAULT_CHUNK_SIZE: usize = 8192;

  /// Creates the default configuration.
  #[must_use]
  pub const fn new() -> Self {
    Self { chunk_size: Self::DEFAULT_CHUNK_SIZE }
  }

  /// Sets the chunk size; values below one byte are clamped to one.
  #[must_use]
  pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
    self.chunk_size = if chunk_size == 0 { 1 } else { chunk_size };
    self
  }

  /// Returns the configured chunk size.
  #[must_use]
  pub const fn chunk_size(&self) -> usize {
    self.chunk_size
  }
}

impl Default for ReaderSourceConfig {
  fn default() -> Self {
    Self::new()
  }
}
