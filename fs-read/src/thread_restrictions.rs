//! Per-thread permission to perform blocking I/O.
//!
//! Threads that must stay responsive (event loops, UI threads) can forbid
//! blocking I/O for a scope with [`ScopedDisallowIo`]. Readers call
//! [`assert_io_allowed`] before opening a file, which panics in debug builds
//! when the current thread has I/O disallowed.

use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static IO_ALLOWED: Cell<bool> = const { Cell::new(true) };
}

/// Sets whether the current thread may block on I/O and returns the
/// previous value.
pub fn set_io_allowed(allowed: bool) -> bool {
    IO_ALLOWED.with(|flag| flag.replace(allowed))
}

pub fn io_allowed() -> bool {
    IO_ALLOWED.with(Cell::get)
}

/// Default I/O assertion hook. No-op in release builds.
pub fn assert_io_allowed() {
    if cfg!(debug_assertions) {
        assert!(
            io_allowed(),
            "Blocking I/O is not allowed on this thread"
        );
    }
}

/// Disallows blocking I/O on the current thread until dropped.
#[must_use = "I/O is allowed again as soon as the guard is dropped"]
pub struct ScopedDisallowIo {
    previous: bool,
    // The flag is thread-local, the guard must be dropped where it was made.
    _not_send: PhantomData<*const ()>,
}

impl ScopedDisallowIo {
    pub fn new() -> Self {
        Self {
            previous: set_io_allowed(false),
            _not_send: PhantomData,
        }
    }
}

impl Default for ScopedDisallowIo {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScopedDisallowIo {
    fn drop(&mut self) {
        set_io_allowed(self.previous);
    }
}

/// Re-allows blocking I/O on the current thread until dropped.
#[must_use = "the previous restriction returns as soon as the guard is dropped"]
pub struct ScopedAllowIo {
    previous: bool,
    _not_send: PhantomData<*const ()>,
}

impl ScopedAllowIo {
    pub fn new() -> Self {
        Self {
            previous: set_io_allowed(true),
            _not_send: PhantomData,
        }
    }
}

impl Default for ScopedAllowIo {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScopedAllowIo {
    fn drop(&mut self) {
        set_io_allowed(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guards_restore_previous_state() {
        assert!(io_allowed());
        {
            let _disallow = ScopedDisallowIo::new();
            assert!(!io_allowed());
            {
                let _allow = ScopedAllowIo::new();
                assert!(io_allowed());
                assert_io_allowed();
            }
            assert!(!io_allowed());
        }
        assert!(io_allowed());
    }

    #[test]
    fn flag_is_per_thread() {
        let _disallow = ScopedDisallowIo::new();
        let other = std::thread::spawn(io_allowed).join().unwrap();
        assert!(other);
        assert!(!io_allowed());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "Blocking I/O is not allowed")]
    fn assertion_fires_when_disallowed() {
        let _disallow = ScopedDisallowIo::new();
        assert_io_allowed();
    }
}
