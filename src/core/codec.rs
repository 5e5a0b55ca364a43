// Top-level PXL compress / decompress

use crate::core::analysis::{
    expand_substitution, find_best_pair, find_substitution_byte, substitute_pair,
};
use crate::core::error::Result;
use crate::core::format::{CompressionStats, DecompressionStats, Header};
use crate::core::rle;
use tracing::{debug, info};

/// Compresses a buffer into the PXL container.
///
/// Never fails: when no beneficial pair or no free substitute byte exists the
/// substitution step is skipped and only RLE applies. Empty input produces a
/// valid header-only file.
pub fn compress(input: &[u8]) -> (Vec<u8>, CompressionStats) {
    let header_bytes = Header::without_substitution().to_bytes();

    if input.is_empty() {
        return (
            header_bytes.to_vec(),
            CompressionStats {
                original_size: 0,
                compressed_size: header_bytes.len(),
                substitution: None,
            },
        );
    }

    let best_pair = find_best_pair(input);
    let sub_byte = best_pair.and_then(|pair| find_substitution_byte(input, pair));

    let (header, processed) = match (best_pair, sub_byte) {
        (Some(pair), Some(sub)) => {
            info!(
                "substituting pair ({}, {}) with byte {}",
                pair.0, pair.1, sub
            );
            (
                Header::with_substitution(sub, pair),
                substitute_pair(input, pair, sub),
            )
        }
        _ => {
            debug!("no beneficial substitution found, skipping substitution step");
            (Header::without_substitution(), input.to_vec())
        }
    };

    let payload = rle::encode(&processed);

    let mut output = header.to_bytes().to_vec();
    output.extend_from_slice(&payload);

    let stats = CompressionStats {
        original_size: input.len(),
        compressed_size: output.len(),
        substitution: header.substitution(),
    };
    (output, stats)
}

/// Decompresses a PXL container back into the original bytes.
///
/// Fails on a missing magic prefix, a truncated header, or an RLE triplet
/// cut off at the end of the payload; no partial output is produced.
pub fn decompress(input: &[u8]) -> Result<(Vec<u8>, DecompressionStats)> {
    let (header, payload) = Header::parse(input)?;

    let expanded = rle::decode(payload, header.rle_marker)?;

    let output = match header.substitution() {
        Some(rule) => {
            info!(
                "applying substitution rule: byte {} -> pair ({}, {})",
                rule.sub_byte, rule.pair.0, rule.pair.1
            );
            expand_substitution(&expanded, rule.sub_byte, rule.pair)
        }
        None => {
            debug!("no substitution was used during compression");
            expanded
        }
    };

    let stats = DecompressionStats {
        compressed_size: input.len(),
        decompressed_size: output.len(),
        substitution: header.substitution(),
    };
    Ok((output, stats))
}
