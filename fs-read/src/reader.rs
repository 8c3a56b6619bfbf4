use std::io::Read;
use std::path::Path;

use data_error::ReadError;
use log::{debug, trace};
use thiserror::Error;

use crate::opener::{open_retrying, FileOpener, IoAssertion, StdOpener};
use crate::path_guard;
use crate::thread_restrictions;

/// Capacity of the chunk buffer used to move data out of the file.
pub const CHUNK_SIZE: usize = 1 << 16;

/// Result of one bounded read.
#[derive(Debug)]
pub struct ReadOutcome {
    retained: usize,
    error: Option<ReadError>,
}

impl ReadOutcome {
    fn failed(error: ReadError) -> Self {
        Self {
            retained: 0,
            error: Some(error),
        }
    }

    /// `true` if the file was read to its end within the limit.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Number of bytes kept, never more than the limit of the read.
    pub fn retained(&self) -> usize {
        self.retained
    }

    pub fn error(&self) -> Option<&ReadError> {
        self.error.as_ref()
    }

    pub fn into_result(self) -> data_error::Result<usize> {
        match self.error {
            None => Ok(self.retained),
            Some(err) => Err(err),
        }
    }
}

/// A failed read together with the prefix that was read before it failed.
#[derive(Error, Debug)]
#[error("{error} ({} bytes retained)", .bytes.len())]
pub struct PartialRead {
    #[source]
    pub error: ReadError,
    pub bytes: Vec<u8>,
}

/// Reads whole files into memory, refusing to hold more than a given
/// number of bytes.
///
/// The file size reported by metadata is never consulted: entries of
/// pseudo-filesystems like `/proc` report zero or stale sizes, so the file
/// is consumed chunk by chunk until it is exhausted or the limit is hit.
#[derive(Clone, Debug)]
pub struct BoundedReader<O = StdOpener> {
    opener: O,
    chunk_size: usize,
    assert_io: IoAssertion,
}

impl BoundedReader<StdOpener> {
    pub fn new() -> Self {
        Self {
            opener: StdOpener,
            chunk_size: CHUNK_SIZE,
            assert_io: thread_restrictions::assert_io_allowed,
        }
    }
}

impl Default for BoundedReader<StdOpener> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: FileOpener> BoundedReader<O> {
    pub fn with_opener<P: FileOpener>(self, opener: P) -> BoundedReader<P> {
        BoundedReader {
            opener,
            chunk_size: self.chunk_size,
            assert_io: self.assert_io,
        }
    }

    /// Overrides the chunk capacity. Zero is treated as one.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Replaces the hook called before every open.
    pub fn with_io_assertion(mut self, assert_io: IoAssertion) -> Self {
        self.assert_io = assert_io;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Reads `path` into `contents`, keeping at most `max_size` bytes.
    ///
    /// `contents` is cleared first. On failure it still holds every byte
    /// read before the failure; when the limit was the cause that is
    /// exactly `max_size` bytes. Without a buffer the file is still read so
    /// the outcome tells whether it fits.
    pub fn read_into(
        &self,
        path: &Path,
        mut contents: Option<&mut Vec<u8>>,
        max_size: usize,
    ) -> ReadOutcome {
        if let Some(buf) = contents.as_deref_mut() {
            buf.clear();
        }
        if let Err(err) = path_guard::check(path) {
            return ReadOutcome::failed(err);
        }

        let file = match open_retrying(&self.opener, path, self.assert_io) {
            Ok(file) => file,
            Err(err) => {
                debug!("Could not open {}: {}", path.display(), err);
                return ReadOutcome::failed(ReadError::Open(err));
            }
        };

        let outcome = read_chunks(file, contents, max_size, self.chunk_size);
        match &outcome.error {
            None => trace!(
                "Read {} bytes from {}",
                outcome.retained,
                path.display()
            ),
            Some(err) => debug!(
                "Read of {} stopped after {} bytes: {}",
                path.display(),
                outcome.retained,
                err
            ),
        }
        outcome
    }

    /// Reads `path` into a fresh buffer. The error keeps the partial bytes.
    pub fn read(
        &self,
        path: impl AsRef<Path>,
        max_size: usize,
    ) -> Result<Vec<u8>, PartialRead> {
        let mut bytes = Vec::new();
        let outcome = self.read_into(path.as_ref(), Some(&mut bytes), max_size);
        match outcome.error {
            None => Ok(bytes),
            Some(error) => Err(PartialRead { error, bytes }),
        }
    }
}

/// Drains `file` in chunks of `chunk_size` bytes into `contents`.
///
/// Stops at the first empty read, at the first read error, or as soon as a
/// chunk does not fit in what is left of `max_size`. In the last case the
/// fitting head of the chunk is kept. `file` is dropped before returning.
pub fn read_chunks<R: Read>(
    mut file: R,
    mut contents: Option<&mut Vec<u8>>,
    max_size: usize,
    chunk_size: usize,
) -> ReadOutcome {
    let mut chunk = vec![0u8; chunk_size.max(1)];
    let mut size = 0usize;
    let mut error = None;

    loop {
        let len = match file.read(&mut chunk) {
            Ok(0) => break,
            Ok(len) => len,
            Err(err) => {
                error = Some(ReadError::Io(err));
                break;
            }
        };

        let remaining = max_size - size;
        let kept = len.min(remaining);
        if let Some(buf) = contents.as_deref_mut() {
            buf.extend_from_slice(&chunk[..kept]);
        }
        if len > remaining {
            size += kept;
            error = Some(ReadError::SizeExceeded { max_size });
            break;
        }

        size += len;
        trace!("Chunk of {} bytes, {} bytes total", len, size);
    }
    drop(file);

    ReadOutcome {
        retained: size,
        error,
    }
}
