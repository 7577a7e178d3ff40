pub mod types;
mod validators;

pub use types::*;

use clap::Parser;
use std::process;

/// Parse command line arguments and run the extra validation.
///
/// Exits the process with status 1 when validation fails.
#[must_use]
pub fn args_checks() -> Args {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    args
}
