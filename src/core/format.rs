// Data structures for the PXL format

use crate::core::constants::*;
use crate::core::error::{PxlError, Result};
use serde::Serialize;

/// The fixed 7-byte record prefixed to every compressed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub sub_byte: u8,
    pub orig_byte1: u8,
    pub orig_byte2: u8,
    pub rle_marker: u8,
}

impl Header {
    /// Header for a stream compressed without pair substitution.
    pub fn without_substitution() -> Self {
        Self {
            sub_byte: NO_SUB_BYTE,
            orig_byte1: 0,
            orig_byte2: 0,
            rle_marker: RLE_MARKER_BYTE,
        }
    }

    pub fn with_substitution(sub_byte: u8, pair: (u8, u8)) -> Self {
        Self {
            sub_byte,
            orig_byte1: pair.0,
            orig_byte2: pair.1,
            rle_marker: RLE_MARKER_BYTE,
        }
    }

    /// The substitution rule recorded in this header, if any.
    pub fn substitution(&self) -> Option<SubstitutionRule> {
        if self.sub_byte == NO_SUB_BYTE {
            None
        } else {
            Some(SubstitutionRule {
                sub_byte: self.sub_byte,
                pair: (self.orig_byte1, self.orig_byte2),
            })
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..3].copy_from_slice(MAGIC);
        buf[3] = self.sub_byte;
        buf[4] = self.orig_byte1;
        buf[5] = self.orig_byte2;
        buf[6] = self.rle_marker;
        buf
    }

    /// Validates the magic and splits a compressed file into header and
    /// payload.
    pub fn parse(content: &[u8]) -> Result<(Self, &[u8])> {
        let magic_len = content.len().min(MAGIC.len());
        if &content[..magic_len] != &MAGIC[..magic_len] || content.len() < MAGIC.len() {
            return Err(PxlError::InvalidMagic {
                expected: MAGIC.to_vec(),
                got: content[..magic_len].to_vec(),
            });
        }

        if content.len() < HEADER_SIZE {
            return Err(PxlError::TruncatedHeader { len: content.len() });
        }

        let header = Self {
            sub_byte: content[3],
            orig_byte1: content[4],
            orig_byte2: content[5],
            rle_marker: content[6],
        };
        Ok((header, &content[HEADER_SIZE..]))
    }
}

/// One pair-for-byte substitution, for display only; the on-disk form is the
/// raw header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubstitutionRule {
    pub sub_byte: u8,
    pub pair: (u8, u8),
}

#[derive(Debug, Clone, Serialize)]
pub struct CompressionStats {
    pub original_size: usize,
    /// Includes the 7-byte header.
    pub compressed_size: usize,
    pub substitution: Option<SubstitutionRule>,
}

impl CompressionStats {
    pub fn ratio(&self) -> f64 {
        if self.original_size == 0 {
            0.0
        } else {
            self.compressed_size as f64 / self.original_size as f64
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DecompressionStats {
    pub compressed_size: usize,
    pub decompressed_size: usize,
    pub substitution: Option<SubstitutionRule>,
}
