//! Runs a selection of the pattern demos.
//!
//! Usage: catalog [--config <path>] [demo ...]
//!
//! Without arguments every demo runs, in catalog order.

use std::env;
use std::io;
use std::process::ExitCode;

use design_patterns::error::exit_code;
use design_patterns::{catalog, telemetry, Demo, PatternError, Result};

fn run() -> Result<()> {
    let args = catalog::parse_args(env::args().skip(1)).inspect_err(|err| {
        if let PatternError::UnknownDemo(_) = err {
            eprintln!("available demos: {}", Demo::names().join(", "));
        }
    })?;
    let config = args.into_config()?;

    let stdout = io::stdout();
    let stdin = io::stdin();
    let mut out = stdout.lock();
    let mut input = stdin.lock();
    catalog::run_catalog(&config, &mut out, &mut input)
}

fn main() -> ExitCode {
    telemetry::init();
    exit_code(run())
}
