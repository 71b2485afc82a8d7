//! stconv CLI - Amiga Sample Converter
//!
//! Command-line interface for converting raw 8-bit samples to WAV.

use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::debug;

use stconv::cli::commands::{convert_batch, convert_single};
use stconv::cli::{Cli, Mode};
use stconv::{ConvertError, ConvertOptions};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logger
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    debug!("stconv v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if e.downcast_ref::<ConvertError>().is_some_and(ConvertError::is_fatal) {
                eprintln!("{}", Cli::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let Some(mode) = cli.resolve(&ConvertOptions::default()) else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "an input file is required unless --batch is given",
            )
            .exit();
    };

    match mode {
        Mode::Single {
            input,
            output,
            sample_rate,
        } => {
            convert_single(&input, &output, sample_rate)
                .with_context(|| format!("converting {}", input.display()))?;
        }
        Mode::Batch {
            input_dir,
            output_dir,
            sample_rate,
            json,
        } => {
            convert_batch(&input_dir, &output_dir, sample_rate, json)
                .with_context(|| format!("batch converting {}", input_dir.display()))?;
        }
    }

    Ok(())
}
