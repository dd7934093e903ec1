//! Binary entry point for `schemafix`.
//!
//! Delegates to `entry_point::run_with_args()`. Read and write failures
//! surface as an `Err` from `main`, which exits non-zero.

use anyhow::Result;

fn main() -> Result<()> {
    let code = schemafix::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
