// Run-length encoding layer of the PXL payload

use crate::core::constants::{MAX_RUN_LENGTH, MIN_RLE_RUN, RLE_MARKER_BYTE};
use crate::core::error::{PxlError, Result};

/// Encodes runs of identical bytes as `(marker, count, value)` triplets.
///
/// Runs longer than [`MIN_RLE_RUN`] are worth the 3-byte triplet; shorter
/// runs stay literal. The marker byte itself is always escaped through a
/// triplet, even for a single occurrence, so the decoder can tell literal
/// data from run headers. Physical runs longer than [`MAX_RUN_LENGTH`] split
/// into multiple triplets.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut i = 0;

    while i < data.len() {
        let current = data[i];
        let mut run = 1;
        while i + run < data.len() && data[i + run] == current && run < MAX_RUN_LENGTH {
            run += 1;
        }

        if run > MIN_RLE_RUN || current == RLE_MARKER_BYTE {
            out.push(RLE_MARKER_BYTE);
            out.push(run as u8);
            out.push(current);
        } else {
            out.extend_from_slice(&data[i..i + run]);
        }
        i += run;
    }

    out
}

/// Expands an RLE payload back into raw bytes.
///
/// `marker` is the value recorded in the file header, not the compile-time
/// constant. A marker followed by fewer than two bytes means the stream was
/// truncated mid-triplet.
pub fn decode(data: &[u8], marker: u8) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len());
    let mut i = 0;

    while i < data.len() {
        let byte = data[i];
        if byte == marker {
            if i + 2 >= data.len() {
                return Err(PxlError::CorruptedRle { offset: i });
            }
            let count = data[i + 1] as usize;
            let value = data[i + 2];
            out.resize(out.len() + count, value);
            i += 3;
        } else {
            out.push(byte);
            i += 1;
        }
    }

    Ok(out)
}
