//! Bandtable CLI - band-limited wavetable generator
//!
//! Generates wavetables for a sample rate, slot count, and waveform, and
//! writes them as embeddable C or Rust source.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use bandtable_cli::commands;
use cli_args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let request = cli.request();

    let result = if cli.check_stability {
        commands::stability::run(&request)
    } else {
        commands::generate::run(&request)
    };

    match result {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(commands::Status::GenerationFailed.code())
        }
    }
}
