//! IFF 8SVX header sniffing
//!
//! Some files in the sample collections already carry an 8SVX header. Those
//! are recognised from their first bytes and left alone.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected
pub const PROBE_LEN: usize = 12;

const FORM_TAG: &[u8; 4] = b"FORM";
const SVX_TAG: &[u8; 4] = b"8SVX";

/// Check whether a byte prefix carries both the FORM and 8SVX tags.
///
/// Only the first `PROBE_LEN` bytes count. The tags may appear in any order.
pub fn is_8svx_prefix(prefix: &[u8]) -> bool {
    let prefix = &prefix[..prefix.len().min(PROBE_LEN)];
    contains_tag(prefix, FORM_TAG) && contains_tag(prefix, SVX_TAG)
}

/// Check whether the file at `path` already has an 8SVX header.
///
/// Returns false if the file cannot be read, so the conversion attempt that
/// follows reports the real error.
pub fn has_8svx_header(path: &Path) -> bool {
    match read_prefix(path) {
        Ok(prefix) => is_8svx_prefix(&prefix),
        Err(e) => {
            log::debug!("Header probe failed for {}: {}", path.display(), e);
            false
        }
    }
}

fn read_prefix(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut prefix = Vec::with_capacity(PROBE_LEN);
    File::open(path)?
        .take(PROBE_LEN as u64)
        .read_to_end(&mut prefix)?;
    Ok(prefix)
}

fn contains_tag(haystack: &[u8], tag: &[u8; 4]) -> bool {
    haystack.windows(tag.len()).any(|window| window == tag)
}
