//! Per-directory and overall batch counts

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What happened to one file in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Written as WAV
    Converted { frames: usize },
    /// Already carries an 8SVX header, never handed to the converter
    Tagged,
    /// No samples, nothing written
    Empty,
    /// Conversion failed with the given error code
    Failed { code: &'static str },
}

/// Counts for a single input directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorySummary {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub converted: usize,
    /// Everything not converted: tagged, empty and failed files
    pub skipped: usize,
    /// Skipped because of an 8SVX header
    pub tagged: usize,
    /// Skipped because conversion returned an error
    pub failed: usize,
}

impl DirectorySummary {
    pub fn new(input_dir: &Path, output_dir: &Path) -> Self {
        Self {
            input_dir: input_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            converted: 0,
            skipped: 0,
            tagged: 0,
            failed: 0,
        }
    }

    /// Add one file's outcome to the counts
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Converted { .. } => self.converted += 1,
            FileOutcome::Tagged => {
                self.skipped += 1;
                self.tagged += 1;
            }
            FileOutcome::Empty => self.skipped += 1,
            FileOutcome::Failed { .. } => {
                self.skipped += 1;
                self.failed += 1;
            }
        }
    }

    /// Files looked at in this directory
    pub fn total(&self) -> usize {
        self.converted + self.skipped
    }
}

/// Counts for a whole batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub directories: Vec<DirectorySummary>,
    pub converted: usize,
    pub skipped: usize,
}

impl BatchSummary {
    /// Append a finished directory and fold it into the totals
    pub fn push(&mut self, directory: DirectorySummary) {
        self.converted += directory.converted;
        self.skipped += directory.skipped;
        self.directories.push(directory);
    }

    pub fn tagged(&self) -> usize {
        self.directories.iter().map(|d| d.tagged).sum()
    }

    pub fn failed(&self) -> usize {
        self.directories.iter().map(|d| d.failed).sum()
    }

    /// Pretty JSON report of the run
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
