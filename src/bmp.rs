//! # BMP carrier validation
//!
//! The codec treats the carrier as a raw byte stream and interprets only
//! three things in it: the `BM` signature, and the little-endian width and
//! height fields at their fixed header offsets.

use crate::constants::{BMP_HEADER_SIZE, BMP_HEIGHT_OFFSET, BMP_WIDTH_OFFSET};
use crate::error::StegoError;

/// BMP files start with the two signature bytes `0x42 0x4D` ("BM").
pub fn validate_signature(data: &[u8]) -> Result<(), StegoError> {
    if data.len() < 2 || data[0] != 0x42 || data[1] != 0x4D {
        return Err(StegoError::BadSignature);
    }
    Ok(())
}

/// Reads the declared image width and height from the header.
///
/// Fails with [`StegoError::TruncatedHeader`] when the file is shorter than
/// the fixed 54-byte header.
pub fn read_dimensions(data: &[u8]) -> Result<(u32, u32), StegoError> {
    if data.len() < BMP_HEADER_SIZE {
        return Err(StegoError::TruncatedHeader);
    }
    let width = read_u32_le(data, BMP_WIDTH_OFFSET);
    let height = read_u32_le(data, BMP_HEIGHT_OFFSET);
    Ok((width, height))
}

fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_bm_signature() {
        assert!(validate_signature(&[0x42, 0x4D, 0x00]).is_ok());
    }

    #[test]
    fn rejects_missing_or_wrong_signature() {
        assert!(matches!(
            validate_signature(&[0x50, 0x4B, 0x03, 0x04]),
            Err(StegoError::BadSignature)
        ));
        assert!(matches!(validate_signature(&[0x42]), Err(StegoError::BadSignature)));
        assert!(matches!(validate_signature(&[]), Err(StegoError::BadSignature)));
    }

    #[test]
    fn reads_little_endian_dimensions() {
        let mut header = vec![0u8; BMP_HEADER_SIZE];
        header[0] = 0x42;
        header[1] = 0x4D;
        header[BMP_WIDTH_OFFSET..BMP_WIDTH_OFFSET + 4].copy_from_slice(&640u32.to_le_bytes());
        header[BMP_HEIGHT_OFFSET..BMP_HEIGHT_OFFSET + 4].copy_from_slice(&480u32.to_le_bytes());

        assert_eq!(read_dimensions(&header).unwrap(), (640, 480));
    }

    #[test]
    fn rejects_a_file_shorter_than_the_header() {
        let stub = [0x42u8, 0x4D, 0, 0, 0, 0];
        assert!(matches!(
            read_dimensions(&stub),
            Err(StegoError::TruncatedHeader)
        ));
    }
}
