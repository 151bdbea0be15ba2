//! Error constants and sentinel-return helpers.
//!
//! The caller-visible error model is two values wide: `EXIT_SUCCESS` (0) and
//! `EOF` (-1). Every failure, whatever its cause, collapses to `EOF` at the
//! ABI boundary; the `IoError` enum below only classifies failures internally
//! and for tests. Diagnostic printing is gated on the process-wide `VERBOSE`
//! level so the fixture stays silent on stderr unless a harness asks.

use once_cell::sync::OnceCell;

/// Returned when the whole message was written up to its terminator.
pub const EXIT_SUCCESS: i32 = 0;

/// Sentinel failure value. Mirrors the `#define EOF (-1)` of the original
/// fixture: the caller cannot distinguish failure causes from it.
pub const EOF: i32 = -1;

/// Process-wide verbosity level, set once at init. 0 (or unset) is silent.
pub static VERBOSE: OnceCell<isize> = OnceCell::new();

/// Set the verbosity level. Later calls are no-ops; the first setting wins.
pub fn init_verbosity(verbosity: isize) {
    let _ = VERBOSE.set(verbosity); //assigned to suppress unused result warning
}

fn verbose() -> bool {
    VERBOSE.get().copied().unwrap_or(0) > 0
}

/// Internal failure classification for a console write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoError {
    /// The console output device could not be opened. Nothing was written.
    DeviceUnavailable,
    /// A single-unit write failed or wrote a count other than the one unit
    /// requested. Units already written stay on the console.
    PartialOrFailedWrite,
}

/// Log a classified failure when verbose and return the sentinel.
pub fn io_error(err: IoError, callname: &str, message: &str) -> i32 {
    if verbose() {
        eprintln!("[myputs] {:?} in {}: {}", err, callname, message);
    }
    EOF
}

/// Read the calling thread's errno value.
pub fn get_errno() -> i32 {
    (unsafe { *libc::__errno_location() }) as i32
}

/// Log the errno behind a classified failure when verbose and hand the
/// classification back, so call sites can `return Err(report_errno(..))`.
pub fn report_errno(err: IoError, errno: i32, callname: &str) -> IoError {
    if verbose() {
        eprintln!("[myputs] {:?} in {}: errno {}", err, callname, errno);
    }
    err
}
