/// Magic marker embedded ahead of the frame to signal a hidden payload.
pub const MAGIC_STRING: &str = "#*";

/// Size of the standard BMP header in bytes.
/// The codec copies this region verbatim and never interprets it beyond
/// the signature and dimension fields.
pub const BMP_HEADER_SIZE: usize = 54;

/// Byte offset of the little-endian image width within the BMP header.
pub const BMP_WIDTH_OFFSET: usize = 18;

/// Byte offset of the little-endian image height within the BMP header.
pub const BMP_HEIGHT_OFFSET: usize = 22;

/// Carrier bytes consumed per hidden byte: one bit per carrier byte.
pub const CARRIER_BYTES_PER_BYTE: usize = 8;

/// Carrier bytes consumed per 32-bit length field.
pub const CARRIER_BYTES_PER_U32: usize = 32;

/// Longest secret-file extension the frame can describe, in characters.
pub const MAX_FILE_SUFFIX: usize = 4;

/// Default stego image written when `encode` is given no output path.
pub const DEFAULT_STEGO_FILE: &str = "steged_img.bmp";

/// Default output file written when `decode` is given no output path.
pub const DEFAULT_DECODED_FILE: &str = "decoded.txt";
