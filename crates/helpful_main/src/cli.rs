use std::path::PathBuf;

use clap::Parser;
use helpful_log::{Level, Message};

#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Severity of the record to emit (DEBUG, INFO, WARNING, ERROR, CRITICAL).
    pub severity: Level,

    /// Value to log. Several values are logged as one sequence.
    #[arg(required = true, num_args = 1..)]
    pub values: Vec<String>,

    /// Minimum level the logger lets through.
    ///
    /// Unrecognised labels behave as DEBUG.
    #[arg(long, short = 'l')]
    pub level: Option<String>,

    /// Append the record to this file instead of writing to the console.
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// JSON file with `level` and `destination` defaults.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Enable verbose diagnostics on standard error.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn message(&self) -> Message {
        match self.values.as_slice() {
            [single] => Message::from(single),
            many => Message::from(many),
        }
    }
}
