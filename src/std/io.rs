//! Blocking-reader and file-backed pull sources.
//!
//! Both sources expose blocking reads as bulk-pull fetches: each fetch fills
//! at most the demanded number of chunks on the runtime's blocking pool, and a
//! read returning fewer bytes than one chunk ends the stream, like a short
//! read in blocking I/O.

extern crate std;


use alloc::{format, string::ToString, sync::Arc, vec, vec::Vec};
use core::mem;
use std::{
  fs::File,
  io::{ErrorKind, Read},
  path::PathBuf,
  sync::Mutex,
};

use bytes::Bytes;

use crate::{
  core::{BulkFetched, PullSource, StreamError},
  std::reader_source_config::ReaderSourceConfig,
};

/// Exposes a blocking reader as a source of byte chunks.
///
/// The reader is owned by the source and released at end of input.
#[must_use]
pub fn reader_source<R>(reader: R, config: ReaderSourceConfig) -> PullSource<Bytes>
where
  R: Read + Send + 'static, {
  let shared = Arc::new(Mutex::new(Some(reader)));
  PullSource::bulk_pull(0, move |_cursor, demand| {
    let shared = Arc::clone(&shared);
    let chunk_size = config.chunk_size();
    async move {
      tokio::task::spawn_blocking(move || read_batch(&shared, chunk_size, demand))
        .await
        .map_err(|error| StreamError::FetchFailed(error.to_string()))?
    }
  })
}

/// Exposes a file as a source of byte chunks, opening the handle lazily
/// inside the first fetch of each materialization.
#[must_use]
pub fn file_source(path: impl Into<PathBuf>, config: ReaderSourceConfig) -> PullSource<Bytes> {
  let shared = Arc::new(Mutex::new(FileState::Unopened(path.into())));
  PullSource::bulk_pull(0, move |_cursor, demand| {
    let shared = Arc::clone(&shared);
    let chunk_size = config.chunk_size();
    async move {
      tokio::task::spawn_blocking(move || read_file_batch(&shared, chunk_size, demand))
        .await
        .map_err(|error| StreamError::FetchFailed(error.to_string()))?
    }
  })
}

enum FileState {
  Unopened(PathBuf),
  Open(File),
  Done,
}

fn read_batch<R>(shared: &Mutex<Option<R>>, chunk_size: usize, demand: u64) -> Result<BulkFetched<Bytes>, StreamError>
where
  R: Read, {
  let mut guard = shared.lock().map_err(|_| StreamError::ExecutorUnavailable)?;
  let reader = match guard.as_mut() {
    | Some(reader) => reader,
    | None => return Ok(BulkFetched::new(Vec::new(), true)),
  };
  let (chunks, end_of_input) = fill_chunks(reader, chunk_size, demand)?;
  if end_of_input {
    *guard = None;
  }
  Ok(BulkFetched::new(chunks, end_of_input))
}

fn read_file_batch(shared: &Mutex<FileState>, chunk_size: usize, demand: u64) -> Result<BulkFetched<Bytes>, StreamError> {
  let mut guard = shared.lock().map_err(|_| StreamError::ExecutorUnavailable)?;
  let mut file = match mem::replace(&mut *guard, FileState::Done) {
    | FileState::Unopened(path) => {
      File::open(&path).map_err(|error| StreamError::FetchFailed(format!("{}: {error}", path.display())))?
    },
    | FileState::Open(file) => file,
    | FileState::Done => return Ok(BulkFetched::new(Vec::new(), true)),
  };
  let (chunks, end_of_input) = fill_chunks(&mut file, chunk_size, demand)?;
  if !end_of_input {
    *guard = FileState::Open(file);
  }
  Ok(BulkFetched::new(chunks, end_of_input))
}

/// Reads at most `demand` chunks; one read call per chunk, a short or empty
/// read ends the input.
fn fill_chunks<R>(reader: &mut R, chunk_size: usize, demand: u64) -> Result<(Vec<Bytes>, bool), StreamError>
where
  R: Read, {
  let mut chunks = Vec::new();
  for _ in 0..demand {
    let mut buffer = vec![0_u8; chunk_size];
    let read = read_chunk(reader, &mut buffer)?;
    if read > 0 {
      buffer.truncate(read);
      chunks.push(Bytes::from(buffer));
    }
    if read < chunk_size {
      return Ok((chunks, true));
    }
  }
  Ok((chunks, false))
}

fn read_chunk<R>(reader: &mut R, buffer: &mut [u8]) -> Result<usize, StreamError>
where
  R: Read, {
  loop {
    match reader.read(buffer) {
      | Ok(read) => return Ok(read),
      | Err(error) if error.kind() == ErrorKind::Interrupted => {},
      | Err(error) => return Err(StreamError::FetchFailed(error.to_string())),
    }
  }
}
