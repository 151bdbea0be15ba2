// myputs - a minimal loadable-library fixture for dynamic loading harnesses.
//
// This library exposes exactly one C-ABI symbol, `MyPuts`, which writes a
// null-terminated wide-character string to the process's console output
// device one unit at a time. A harness validates its ability to load a
// shared library and invoke a named symbol by dlopen()ing the cdylib and
// calling `MyPuts`; everything else in the crate exists to back that one
// call and to make its two failure paths testable.

pub mod console;
pub mod constants;
pub mod puts;

// Re-export the pieces a harness-side test links against directly.
pub use console::{ConsoleHandle, UnitSink};
pub use constants::err_const::{init_verbosity, IoError, EOF, EXIT_SUCCESS};
pub use puts::{puts, to_wide, write_units, MyPuts};

#[cfg(test)]
mod tests;
