//! Binary entry point.
//!
//! Parses the command line, builds the immutable run configuration, and
//! executes the merge. Fatal failures are reported on stdout like every
//! other outcome; the process exits zero whether or not the run got past
//! its preconditions (clap usage errors are the only non-zero exits).

use std::io::ErrorKind;

use clap::Parser;

use locmerge::cli_args::Cli;
use locmerge::config::Config;
use locmerge::errors::MergeError;
use locmerge::{report, runner};

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = match Config::from_cli(cli) {
        Ok(config) => config,
        Err(err) => {
            report::print_fatal(&err);
            return;
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = runner::run(&config, &mut out) {
        if is_broken_pipe(&err) {
            return;
        }
        drop(out);
        report::print_fatal(&err);
    }
}

fn is_broken_pipe(err: &MergeError) -> bool {
    matches!(err, MergeError::Io(e) if e.kind() == ErrorKind::BrokenPipe)
}
