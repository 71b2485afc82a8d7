//! CLI Module
//!
//! Command-line interface for stconv.

pub mod commands;

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConvertOptions;
use crate::convert::default_output_path;

const EXAMPLES: &str = "\
Examples:
  stconv sounds/ST-XX/ST-01/Alien
  stconv --batch sounds/ST-XX/ST-01 converted/ST-01
  stconv --batch sounds/ST-XX converted";

/// stconv - convert raw 8-bit Amiga samples to 16-bit mono WAV
#[derive(Parser, Debug)]
#[command(name = "stconv")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true, after_help = EXAMPLES)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Convert a whole directory (each subdirectory when it is named ST-XX)
    #[arg(long)]
    pub batch: bool,

    /// Print the batch summary as JSON
    #[arg(long, requires = "batch")]
    pub json: bool,

    /// Input file, or input directory with --batch [default: sounds/ST-XX]
    pub input: Option<PathBuf>,

    /// Output file [default: <input>.wav], or output directory with --batch [default: converted]
    pub output: Option<PathBuf>,

    /// Sample rate in Hz [default: 8000]
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub sample_rate: Option<u32>,
}

/// A fully resolved invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Single {
        input: PathBuf,
        output: PathBuf,
        sample_rate: u32,
    },
    Batch {
        input_dir: PathBuf,
        output_dir: PathBuf,
        sample_rate: u32,
        json: bool,
    },
}

impl Cli {
    /// Fill omitted arguments from `defaults`.
    ///
    /// Returns `None` in single-file mode when no input was given.
    pub fn resolve(&self, defaults: &ConvertOptions) -> Option<Mode> {
        let sample_rate = self.sample_rate.unwrap_or(defaults.sample_rate);

        if self.batch {
            return Some(Mode::Batch {
                input_dir: self.input.clone().unwrap_or_else(|| defaults.input_dir.clone()),
                output_dir: self
                    .output
                    .clone()
                    .unwrap_or_else(|| defaults.output_dir.clone()),
                sample_rate,
                json: self.json,
            });
        }

        let input = self.input.clone()?;
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&input));

        Some(Mode::Single {
            input,
            output,
            sample_rate,
        })
    }
}
