// Format constants for PXL

pub const MAGIC: &[u8; 3] = b"PXL";

// Sentinel that introduces an RLE triplet in the payload. Stored in the
// header so a decoder never hardcodes it.
pub const RLE_MARKER_BYTE: u8 = 0xFF;

// Header sub_byte value meaning "no substitution was applied".
pub const NO_SUB_BYTE: u8 = 0x00;

// Substitute bytes are drawn from this inclusive range. 0-127 stays
// untouched for printable/common data; 0xFF is reserved as the RLE marker.
pub const SUB_BYTE_MIN: u8 = 128;
pub const SUB_BYTE_MAX: u8 = 254;

// Header: MAGIC(3) sub_byte(u8) orig_byte1(u8) orig_byte2(u8) rle_marker(u8)
pub const HEADER_SIZE: usize = 3 + 1 + 1 + 1 + 1; // 7 bytes

// Longest run a single RLE triplet can describe; the count field is one byte.
pub const MAX_RUN_LENGTH: usize = 255;

// Runs at or below this length stay literal; the 3-byte triplet would not
// pay for itself.
pub const MIN_RLE_RUN: usize = 3;
