//! Conversion defaults
//!
//! Values the CLI falls back to when an argument is omitted.

use std::path::PathBuf;

/// Playback rate assumed for raw Amiga samples (Hz)
pub const DEFAULT_SAMPLE_RATE: u32 = 8000;

/// Name of the collection root whose subdirectories are converted one by one
pub const SENTINEL_DIR_NAME: &str = "ST-XX";

/// Batch input used when none is given
pub const DEFAULT_INPUT_DIR: &str = "sounds/ST-XX";

/// Batch output used when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "converted";

/// Extension appended to every converted file name
pub const WAV_EXTENSION: &str = "wav";

/// Conversion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Output sample rate (default: 8000)
    pub sample_rate: u32,
    /// Directory name that triggers per-subdirectory batches
    pub sentinel_name: String,
    /// Batch input directory (default: sounds/ST-XX)
    pub input_dir: PathBuf,
    /// Batch output directory (default: converted)
    pub output_dir: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            sample_rate: DEFAULT_SAMPLE_RATE,
            sentinel_name: SENTINEL_DIR_NAME.to_string(),
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl ConvertOptions {
    /// Override the sample rate, keeping the other defaults
    pub fn with_sample_rate(sample_rate: u32) -> Self {
        ConvertOptions {
            sample_rate,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::default();
        assert_eq!(options.sample_rate, 8000);
        assert_eq!(options.sentinel_name, "ST-XX");
        assert_eq!(options.input_dir, PathBuf::from("sounds/ST-XX"));
        assert_eq!(options.output_dir, PathBuf::from("converted"));
    }

    #[test]
    fn test_with_sample_rate() {
        let options = ConvertOptions::with_sample_rate(16726);
        assert_eq!(options.sample_rate, 16726);
        assert_eq!(options.sentinel_name, SENTINEL_DIR_NAME);
    }
}
