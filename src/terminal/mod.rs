//! Shared terminal utilities.
//!
//! Box drawing, the screen guard, and ANSI helpers.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
