//! Constants specific to the console output device.

use std::ffi::CStr;

/// The process's console output device. This is the POSIX counterpart of
/// the Windows `CONOUT$` pseudo-file the original fixture opened: the
/// controlling terminal, opened write-only against an already-existing
/// device node (never created), shared between independent openers.
pub const CONSOLE_DEVICE: &CStr = c"/dev/tty";

/// Terminator for the wide-character message. The caller passes no length;
/// iteration stops at the first unit equal to this value.
pub const NULL_UNIT: u16 = 0;
