//! Runtime plumbing shared by the library and the CLI.

pub mod clock;
pub mod utils;

pub use clock::{Clock, SystemClock};
