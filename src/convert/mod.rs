//! Sample Converter
//!
//! Turns raw 8-bit signed mono sample data into 16-bit mono WAV files:
//! - PCM widening (`pcm`)
//! - WAV encoding (`wav`)
//! - 8SVX header detection (`probe`)

pub mod pcm;
pub mod probe;
pub mod wav;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::WAV_EXTENSION;
use crate::error::{ConvertError, Result};

pub use pcm::widen_sample;
pub use probe::{has_8svx_header, is_8svx_prefix};
pub use wav::{encode_wav, validate_sample_rate, WavLayout};

/// Outcome of a single conversion that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Conversion {
    /// A WAV file was written with this many frames
    Converted { frames: usize },
    /// The input held no samples; nothing was written
    Empty,
}

/// Default output path for a single file: the input name with `.wav` appended
///
/// `sounds/ST-01/Alien` becomes `sounds/ST-01/Alien.wav`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".");
    name.push(WAV_EXTENSION);
    PathBuf::from(name)
}

/// Write raw 8-bit samples to `output` as a mono 16-bit WAV.
///
/// # Arguments
/// * `raw` - Signed 8-bit samples, one per byte
/// * `output` - Path of the WAV file to create
/// * `sample_rate` - Sample rate for the header
///
/// # Returns
/// * `Ok(Conversion::Converted)` - The file was written
/// * `Ok(Conversion::Empty)` - `raw` was empty and no file was created
/// * `Err(ConvertError)` - The rate is invalid or the file could not be written
pub fn convert_bytes(raw: &[u8], output: &Path, sample_rate: u32) -> Result<Conversion> {
    validate_sample_rate(sample_rate)?;

    if raw.is_empty() {
        return Ok(Conversion::Empty);
    }

    let write_failed = |source: hound::Error| ConvertError::WriteFailed {
        path: output.display().to_string(),
        source,
    };

    let file = File::create(output).map_err(|e| write_failed(hound::Error::IoError(e)))?;
    let layout = encode_wav(raw, BufWriter::new(file), sample_rate).map_err(|e| match e {
        ConvertError::Wav(source) => write_failed(source),
        other => other,
    })?;

    log::debug!(
        "Wrote {} frames ({} payload bytes) at {} Hz to {}",
        layout.frames,
        layout.payload_len(),
        sample_rate,
        output.display()
    );

    Ok(Conversion::Converted {
        frames: layout.frames,
    })
}

/// Read a raw sample file and convert it to a WAV at `output`.
///
/// The whole input is read into memory before anything is written.
pub fn convert_file(input: &Path, output: &Path, sample_rate: u32) -> Result<Conversion> {
    let raw = fs::read(input).map_err(|source| ConvertError::ReadFailed {
        path: input.display().to_string(),
        source,
    })?;

    convert_bytes(&raw, output, sample_rate)
}
