//! The `siphash` executable.

use std::process::ExitCode;

use clap::Parser;
use sipdigest_cli::Arguments;

fn main() -> ExitCode {
    env_logger::init();
    sipdigest_cli::run(Arguments::parse())
}
