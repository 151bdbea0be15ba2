//! Console output device handling.
//!
//! `ConsoleHandle` owns the file descriptor for the console output device
//! for the duration of one write call. The original fixture acquired its
//! handle and never released it, relying on process teardown; here the
//! descriptor is closed on every exit path by `Drop`.

use std::ffi::CStr;
use std::os::unix::io::RawFd;

use crate::constants::console_const::CONSOLE_DEVICE;
use crate::constants::err_const::{get_errno, report_errno, IoError};

/// Destination for single wide-character units. `ConsoleHandle` is the real
/// implementation; tests substitute recording or failing sinks to exercise
/// the acquisition-failure and mid-write-failure paths.
pub trait UnitSink {
    fn put_unit(&mut self, unit: u16) -> Result<(), IoError>;

    /// Complete any unit held back waiting for its pair partner. Called
    /// once the terminator is reached.
    fn finish(&mut self) -> Result<(), IoError> {
        Ok(())
    }
}

/// An owned descriptor for the console output device, valid for one call.
#[derive(Debug)]
pub struct ConsoleHandle {
    fd: RawFd,
    /// A high surrogate waiting for the low unit that completes the pair.
    pending_high: Option<u16>,
}

impl ConsoleHandle {
    /// Open the process's console output device for writing.
    ///
    /// Open-existing semantics: the device node must already exist (no
    /// `O_CREAT`), and independent callers each get their own descriptor to
    /// the same underlying device. A process with no controlling terminal
    /// fails here with `DeviceUnavailable` before anything is written.
    pub fn acquire() -> Result<ConsoleHandle, IoError> {
        Self::open_path(CONSOLE_DEVICE)
    }

    /// Open an arbitrary path with the same semantics as `acquire`.
    /// Tests use this to aim the sink at a scratch file.
    pub fn open_path(path: &CStr) -> Result<ConsoleHandle, IoError> {
        let fd = unsafe { libc::open(path.as_ptr(), libc::O_WRONLY) };
        if fd < 0 {
            return Err(report_errno(IoError::DeviceUnavailable, get_errno(), "open"));
        }
        Ok(ConsoleHandle {
            fd,
            pending_high: None,
        })
    }

    /// The raw descriptor, for tests that check release behavior.
    pub fn as_raw_fd(&self) -> RawFd {
        self.fd
    }

    /// Write one character to the device as a single write call.
    ///
    /// A failed write, or one that writes fewer bytes than the UTF-8
    /// encoding of the character, is `PartialOrFailedWrite`. No retry is
    /// attempted.
    fn write_char(&mut self, ch: char) -> Result<(), IoError> {
        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf).as_bytes();

        let ret = unsafe {
            libc::write(
                self.fd,
                encoded.as_ptr() as *const libc::c_void,
                encoded.len(),
            )
        };
        if ret < 0 {
            return Err(report_errno(
                IoError::PartialOrFailedWrite,
                get_errno(),
                "write",
            ));
        }
        if ret as usize != encoded.len() {
            return Err(report_errno(IoError::PartialOrFailedWrite, 0, "write"));
        }
        Ok(())
    }
}

impl UnitSink for ConsoleHandle {
    /// Accept one wide unit, combining surrogate pairs across calls.
    ///
    /// A high surrogate is held until the next unit: followed by a low
    /// surrogate the pair writes as one supplementary character, otherwise
    /// it writes as U+FFFD and the new unit is processed on its own. A low
    /// surrogate with no pending high also writes as U+FFFD.
    fn put_unit(&mut self, unit: u16) -> Result<(), IoError> {
        if let Some(high) = self.pending_high.take() {
            if (0xDC00..=0xDFFF).contains(&unit) {
                let cp =
                    0x10000 + (((high as u32 - 0xD800) << 10) | (unit as u32 - 0xDC00));
                let ch = char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER);
                return self.write_char(ch);
            }
            // The held unit never got its partner.
            self.write_char(char::REPLACEMENT_CHARACTER)?;
        }
        if (0xD800..=0xDBFF).contains(&unit) {
            self.pending_high = Some(unit);
            return Ok(());
        }
        let ch = char::from_u32(unit as u32).unwrap_or(char::REPLACEMENT_CHARACTER);
        self.write_char(ch)
    }

    /// Flush a high surrogate left dangling at the terminator as U+FFFD.
    fn finish(&mut self) -> Result<(), IoError> {
        if self.pending_high.take().is_some() {
            return self.write_char(char::REPLACEMENT_CHARACTER);
        }
        Ok(())
    }
}

impl Drop for ConsoleHandle {
    fn drop(&mut self) {
        let _ret = unsafe { libc::close(self.fd) };
    }
}
