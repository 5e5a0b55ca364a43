// PXL Rust codec
// Main library entry point

pub mod core;

// Re-export main types
pub use core::codec::{compress, decompress};
pub use core::error::{PxlError, Result};
pub use core::format::{CompressionStats, DecompressionStats, Header, SubstitutionRule};
