use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::{debug, warn};

use crate::constants::{HEADER_SCAN_LEN, SIZE_MARKER};
use crate::sizes::SizeFilter;

/// Open a map file as a gzip read stream, or `None` if the file itself
/// cannot be opened. Gzip header validation is lazy, so an invalid
/// container only surfaces later, as a read error inside [`classify`].
pub fn open_map(path: &Path) -> Option<GzDecoder<File>> {
    match File::open(path) {
        Ok(file) => Some(GzDecoder::new(file)),
        Err(e) => {
            warn!("Cannot open {}: {e}", path.display());
            None
        }
    }
}

/// Decide whether a decompressed map stream carries one of the requested
/// size codes.
///
/// Reads up to the first [`HEADER_SCAN_LEN`] decompressed bytes (a short
/// read is fine), finds the first [`SIZE_MARKER`] byte among them, and
/// compares the byte immediately after it against the filter. No marker,
/// a marker with nothing after it, or any read error all mean "no match".
/// The stream is consumed and dropped on every path.
pub fn classify<R: Read>(stream: R, filter: &SizeFilter) -> bool {
    let mut header = Vec::with_capacity(HEADER_SCAN_LEN);
    if let Err(e) = stream.take(HEADER_SCAN_LEN as u64).read_to_end(&mut header) {
        debug!("not a readable gzip stream: {e}");
        return false;
    }

    let Some(marker_at) = header.iter().position(|&b| b == SIZE_MARKER) else {
        return false;
    };
    match header.get(marker_at + 1) {
        Some(&code) => filter.matches(code),
        None => false,
    }
}
