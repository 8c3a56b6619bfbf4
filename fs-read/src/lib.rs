//! Bounded reading of whole files into memory.
//!
//! Every read clears the output buffer, rejects paths with `..` components
//! before touching the filesystem, opens the file (retrying interrupted
//! opens) and then consumes it chunk by chunk until it is exhausted or the
//! size limit is exceeded. Failed reads still hand back what was read.

pub mod opener;
pub mod path_guard;
pub mod reader;
pub mod thread_restrictions;


use std::path::Path;

pub use data_error::{ReadError, Result};
pub use opener::{FileOpener, IoAssertion, StdOpener};
pub use reader::{BoundedReader, PartialRead, ReadOutcome, CHUNK_SIZE};

/// Reads at most `max_size` bytes of the file at `path`.
///
/// Returns `true` with the whole content if the file ends within the
/// limit. Otherwise returns `false` with whatever was read: exactly
/// `max_size` bytes when the file is too big, a shorter prefix after an
/// I/O error, nothing when the path was rejected or could not be opened.
pub fn read_bounded(
    path: impl AsRef<Path>,
    max_size: usize,
) -> (bool, Vec<u8>) {
    let mut bytes = Vec::new();
    let success =
        read_file_to_end_with_max_size(path, Some(&mut bytes), max_size);
    (success, bytes)
}

/// Buffer-out form of [`read_bounded`]. `contents` is cleared first and may
/// be `None` when only the verdict is needed.
pub fn read_file_to_end_with_max_size(
    path: impl AsRef<Path>,
    contents: Option<&mut Vec<u8>>,
    max_size: usize,
) -> bool {
    BoundedReader::new()
        .read_into(path.as_ref(), contents, max_size)
        .is_success()
}

pub fn read_file_to_end(
    path: impl AsRef<Path>,
    contents: Option<&mut Vec<u8>>,
) -> bool {
    read_file_to_end_with_max_size(path, contents, usize::MAX)
}

/// Like [`read_bounded`], but failures say why.
pub fn try_read_bounded(
    path: impl AsRef<Path>,
    max_size: usize,
) -> std::result::Result<Vec<u8>, PartialRead> {
    BoundedReader::new().read(path, max_size)
}

/// Reads at most `max_size` bytes and decodes them as UTF-8.
pub fn read_file_to_string_with_max_size(
    path: impl AsRef<Path>,
    max_size: usize,
) -> Result<String> {
    let bytes =
        try_read_bounded(path, max_size).map_err(|partial| partial.error)?;
    Ok(String::from_utf8(bytes)?)
}
