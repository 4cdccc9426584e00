use std::io;
use std::process::ExitCode;

use design_patterns::error::exit_code;
use design_patterns::{telemetry, template};

fn main() -> ExitCode {
    telemetry::init();

    let stdout = io::stdout();
    let stdin = io::stdin();
    let mut out = stdout.lock();
    let mut input = stdin.lock();
    exit_code(template::run(&mut out, &mut input))
}
