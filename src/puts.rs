//! The write loop and the exported `MyPuts` symbol.
//!
//! `MyPuts` is the one symbol an external loader resolves from the cdylib.
//! Return values are `EXIT_SUCCESS` (0) when every unit up to the terminator
//! was written and `EOF` (-1) on any failure; the sentinel carries no
//! further detail, matching the original fixture's contract.

use crate::console::{ConsoleHandle, UnitSink};
use crate::constants::console_const::NULL_UNIT;
use crate::constants::err_const::{io_error, IoError, EOF, EXIT_SUCCESS};

/// Write `units` to `sink` one unit at a time, in order, stopping at the
/// first failure. Units already written are not rolled back. Returns the
/// number of units written on success; an empty slice succeeds immediately.
pub fn write_units(sink: &mut impl UnitSink, units: &[u16]) -> Result<usize, IoError> {
    for &unit in units {
        sink.put_unit(unit)?;
    }
    sink.finish()?;
    Ok(units.len())
}

/// Borrow the units of a null-terminated wide string, terminator excluded.
///
/// # Safety
/// `msg` must be non-null, point to a sequence terminated by a null unit,
/// and stay valid and unmodified while the returned slice is alive.
pub unsafe fn wide_cstr_units<'a>(msg: *const u16) -> &'a [u16] {
    let mut len = 0usize;
    while *msg.add(len) != NULL_UNIT {
        len += 1;
    }
    std::slice::from_raw_parts(msg, len)
}

/// Build a null-terminated wide string from `s`. Harness-side convenience:
/// the original fixture's callers hand it UTF-16 on their platform.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(NULL_UNIT)).collect()
}

/// Safe in-crate entry point: acquire the console, write `msg`, release the
/// handle on every path.
pub fn puts(msg: &str) -> Result<(), IoError> {
    let wide = to_wide(msg);
    let mut conout = ConsoleHandle::acquire()?;
    // Drop the terminator; write_units takes the bare units.
    write_units(&mut conout, &wide[..wide.len() - 1])?;
    Ok(())
}

/// Write a null-terminated wide string to the console output device.
///
/// Exported for external loaders. Returns 0 on success, -1 on any failure
/// (console unavailable, null input, or a single-unit write that did not
/// complete). A failure partway through leaves the earlier units on the
/// console; nothing is rolled back.
///
/// # Safety
/// `msg` must be null or point to a null-terminated sequence of wide units
/// that stays valid and unmodified for the duration of the call.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn MyPuts(msg: *const u16) -> i32 {
    // The original fixture trusted the pointer outright; a null check keeps
    // a misloaded harness from crashing the host process.
    if msg.is_null() {
        return EOF;
    }
    let units = wide_cstr_units(msg);

    // Get a handle to the console output device.
    let mut conout = match ConsoleHandle::acquire() {
        Ok(handle) => handle,
        Err(err) => return io_error(err, "MyPuts", "cannot open console device"),
    };

    // Write the message to the console one unit at a time.
    match write_units(&mut conout, units) {
        Ok(_written) => EXIT_SUCCESS,
        Err(err) => io_error(err, "MyPuts", "write did not complete"),
    }
}
