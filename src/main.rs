mod app;
mod cli;
mod config;
mod convert;
mod event_cmd;
mod logging;
mod show_cmd;
mod step_cmd;

use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli.config, cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(config: &Path, command: Command) -> Result<()> {
    match command {
        Command::Show(args) => show_cmd::run(config, args),
        Command::Day(args) => step_cmd::day(config, args),
        Command::Hour(args) => step_cmd::hour(config, args),
        Command::Jump(args) => step_cmd::jump(config, args),
        Command::Effect => show_cmd::effect(config),
        Command::Combo(args) => show_cmd::combo(config, args),
        Command::Party(args) => event_cmd::party(config, args),
        Command::Event(args) => event_cmd::run(config, args),
    }
}
