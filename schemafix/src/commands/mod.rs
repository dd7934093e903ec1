//! Commands module - CLI command implementations.

mod fix;

pub use fix::{run_fix, FixOptions};
