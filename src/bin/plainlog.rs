//! `plainlog` binary: writes one templated log line and exits.
//!
//! Usage:
//!   plainlog [--config PATH] [--min-level LEVEL] [--template T] [--output O] [--prefix P] <level> <message>...

use clap::Parser;
use plainlog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
