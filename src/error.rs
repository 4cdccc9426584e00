use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

/// Everything that can abort a demo.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("standard input closed before an answer was given")]
    InputClosed,

    #[error("no travel strategy has been set on the context")]
    MissingStrategy,

    #[error("unknown demo '{0}'")]
    UnknownDemo(String),

    #[error("missing value for {0}")]
    MissingArgument(&'static str),

    #[error("invalid catalog config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, PatternError>;

/// The line a binary prints to stderr before exiting with a failure.
pub fn report(err: &PatternError) -> String {
    format!("error: {err}")
}

/// Turns a demo's outcome into the process exit status, printing failures readably.
pub fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", report(&err));
            ExitCode::FAILURE
        }
    }
}
