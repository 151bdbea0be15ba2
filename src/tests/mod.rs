// myputs test suite
//
// Unit tests for the console write fixture. The real console device is a
// process-wide singleton and the VERBOSE cell is global, so tests that touch
// either run serially behind a global mutex, same as tests that probe file
// descriptor reuse after Drop.


use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::console::UnitSink;
use crate::constants::err_const::{init_verbosity, IoError};

// Global test mutex to prevent concurrent test execution.
static TEST_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Setup function for tests.
/// Returns a lock guard that keeps the test serialized.
pub fn test_setup() -> parking_lot::MutexGuard<'static, ()> {
    init_verbosity(0);
    TEST_MUTEX.lock()
}

/// A sink that records every unit it accepts and optionally fails once the
/// recorded count reaches `fail_at`, standing in for a console whose k-th
/// write fails.
pub struct MockSink {
    pub written: Vec<u16>,
    pub fail_at: Option<usize>,
}

impl MockSink {
    pub fn new() -> MockSink {
        MockSink {
            written: Vec::new(),
            fail_at: None,
        }
    }

    pub fn failing_at(k: usize) -> MockSink {
        MockSink {
            written: Vec::new(),
            fail_at: Some(k),
        }
    }
}

impl UnitSink for MockSink {
    fn put_unit(&mut self, unit: u16) -> Result<(), IoError> {
        if self.fail_at == Some(self.written.len()) {
            return Err(IoError::PartialOrFailedWrite);
        }
        self.written.push(unit);
        Ok(())
    }
}
