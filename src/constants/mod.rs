pub mod console_const;
pub mod err_const;

pub use console_const::*;
pub use err_const::*;
