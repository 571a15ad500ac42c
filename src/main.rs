//! Packmule: tally equipment weight, cost, and coinage for a tabletop party.

mod cli;
mod constants;
mod core;
mod error;
mod state;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use color_eyre::Result;

use crate::cli::args::Args;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    // A bare invocation prints usage to stdout and still fails, matching
    // the original tool's contract.
    if std::env::args_os().len() < 2 {
        let mut command = Args::command();
        let _ = command.print_help();
        std::process::exit(1);
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            // usage errors exit 1 here, not clap's default 2
            _ => {
                let _ = err.print();
                std::process::exit(1);
            }
        },
    };

    cli::commands::run(&args)
}
