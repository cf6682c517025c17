mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod convert_cmd;
mod logging;
mod yahrzeit_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Calendar(args) => calendar_cmd::run(args),
        Command::Convert(args) => convert_cmd::run(args),
        Command::Yahrzeit(args) => yahrzeit_cmd::run(args),
    }
}
