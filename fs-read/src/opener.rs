use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind, Read};
use std::path::Path;

/// Source of readable file handles.
///
/// The handle is owned by the caller and closed when dropped, so every
/// exit path of a read releases it.
pub trait FileOpener {
    type File: Read;

    fn open(&self, path: &Path) -> io::Result<Self::File>;
}

/// Opens files read-only through `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdOpener;

impl FileOpener for StdOpener {
    type File = File;

    fn open(&self, path: &Path) -> io::Result<File> {
        OpenOptions::new().read(true).open(path)
    }
}

impl<O: FileOpener + ?Sized> FileOpener for &O {
    type File = O::File;

    fn open(&self, path: &Path) -> io::Result<Self::File> {
        (**self).open(path)
    }
}

/// Hook run before a file is opened, asserting that the calling context
/// may block on I/O. What happens when it may not is up to the hook.
pub type IoAssertion = fn();

/// Opens `path`, retrying for as long as the open is interrupted by a
/// signal. Any other failure is returned as is.
pub fn open_retrying<O: FileOpener + ?Sized>(
    opener: &O,
    path: &Path,
    assert_io: IoAssertion,
) -> io::Result<O::File> {
    assert_io();
    loop {
        match opener.open(path) {
            Err(err) if err.kind() == ErrorKind::Interrupted => {
                log::debug!("Open of {} interrupted, retrying", path.display());
            }
            result => return result,
        }
    }
}
