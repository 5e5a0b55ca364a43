// Error handling for the PXL codec

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PxlError>;

#[derive(Error, Debug)]
pub enum PxlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a PXL file: expected magic {expected:?}, got {got:?}")]
    InvalidMagic { expected: Vec<u8>, got: Vec<u8> },

    #[error("truncated header: {len} bytes is shorter than the 7-byte PXL header")]
    TruncatedHeader { len: usize },

    #[error("corrupted RLE sequence: marker at offset {offset} has fewer than 2 trailing bytes")]
    CorruptedRle { offset: usize },
}
