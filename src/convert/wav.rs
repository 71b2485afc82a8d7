//! WAV encoding for widened samples
//!
//! Output is always mono, 16-bit signed integer, little-endian PCM.

use std::io::{Seek, Write};

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::convert::pcm::widen_sample;
use crate::error::{ConvertError, Result};

/// Shape of the WAV produced for a raw buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavLayout {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of frames (one per input byte)
    pub frames: usize,
}

impl WavLayout {
    pub const CHANNELS: u16 = 1;
    pub const BITS_PER_SAMPLE: u16 = 16;

    /// Layout for `raw_len` input bytes at `sample_rate`
    pub fn new(sample_rate: u32, raw_len: usize) -> Self {
        WavLayout {
            sample_rate,
            frames: raw_len,
        }
    }

    /// hound spec for this layout
    pub fn spec(&self) -> WavSpec {
        WavSpec {
            channels: Self::CHANNELS,
            sample_rate: self.sample_rate,
            bits_per_sample: Self::BITS_PER_SAMPLE,
            sample_format: SampleFormat::Int,
        }
    }

    /// Length of the sample payload in bytes
    pub fn payload_len(&self) -> usize {
        self.frames * (Self::BITS_PER_SAMPLE as usize / 8)
    }
}

/// Reject sample rates a WAV header cannot meaningfully carry
pub fn validate_sample_rate(sample_rate: u32) -> Result<()> {
    if sample_rate == 0 {
        return Err(ConvertError::InvalidSampleRate { rate: sample_rate });
    }
    Ok(())
}

/// Encode a raw 8-bit buffer as a complete WAV stream into `writer`.
///
/// # Arguments
/// * `raw` - Signed 8-bit samples
/// * `writer` - Destination, must be seekable so the header sizes can be patched
/// * `sample_rate` - Sample rate written into the header
///
/// # Returns
/// The layout of the stream that was written
pub fn encode_wav<W: Write + Seek>(raw: &[u8], writer: W, sample_rate: u32) -> Result<WavLayout> {
    validate_sample_rate(sample_rate)?;

    let layout = WavLayout::new(sample_rate, raw.len());
    let mut wav = WavWriter::new(writer, layout.spec())?;
    write_samples(&mut wav, raw)?;
    wav.finalize()?;

    Ok(layout)
}

fn write_samples<W: Write + Seek>(
    wav: &mut WavWriter<W>,
    raw: &[u8],
) -> std::result::Result<(), hound::Error> {
    for &byte in raw {
        wav.write_sample(widen_sample(byte))?;
    }
    Ok(())
}
