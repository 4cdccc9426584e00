use std::io;
use std::process::ExitCode;

use design_patterns::error::exit_code;
use design_patterns::{factory, telemetry};

fn main() -> ExitCode {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    exit_code(factory::run(&mut out))
}
