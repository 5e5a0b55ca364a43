pub mod analysis;
pub mod codec;
pub mod constants;
pub mod error;
pub mod format;
pub mod rle;
