//! stconv - Amiga Sample Converter
//!
//! Converts raw 8-bit signed mono PCM samples, as shipped on the ST-XX
//! tracker sample disks, into 16-bit mono WAV files.
//!
//! # Architecture
//!
//! - `convert`: widening, WAV encoding and 8SVX header detection
//! - `batch`: directory walking and per-directory counts
//! - `cli`: argument parsing and the single/batch commands

pub mod batch;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;

pub use batch::{BatchSummary, BatchWalker, DirectorySummary, FileOutcome};
pub use config::ConvertOptions;
pub use convert::{convert_bytes, convert_file, has_8svx_header, Conversion};
pub use error::{ConvertError, Result};
