//! # Capacity planning
//!
//! Pre-flight admission check run before any output byte is produced: the
//! carrier's pixel data must offer at least one carrier byte per hidden bit
//! of the full frame.

use crate::error::StegoError;

/// Carrier bytes available in the pixel-data region: width * height * 3
/// color channels, as declared by the BMP header. Row padding is not
/// counted; the declared dimensions are the capacity contract.
pub fn image_capacity_bytes(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height) * 3
}

/// Hidden bits needed for the full frame: the marker, a 4-byte extension
/// length, the extension, a 4-byte payload length, and the payload, at
/// 8 bits per byte, plus a 4-byte allowance ahead of the marker.
pub fn required_bits(magic_len: usize, ext_len: usize, payload_len: usize) -> u64 {
    8 * (4 + magic_len as u64 + 4 + ext_len as u64 + 4 + payload_len as u64)
}

/// Fails with [`StegoError::Capacity`] when the pixel data cannot host the
/// frame. One carrier byte hides exactly one bit, so bytes and bits compare
/// directly.
pub fn ensure_capacity(capacity_bytes: u64, required_bits: u64) -> Result<(), StegoError> {
    if capacity_bytes < required_bits {
        return Err(StegoError::Capacity {
            required_bits,
            capacity_bytes,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAGIC_STRING;

    #[test]
    fn capacity_counts_three_channels_per_pixel() {
        assert_eq!(image_capacity_bytes(100, 100), 30_000);
        assert_eq!(image_capacity_bytes(2, 2), 12);
        assert_eq!(image_capacity_bytes(0, 100), 0);
    }

    #[test]
    fn required_bits_matches_frame_layout() {
        // marker "#*", extension "txt", 5 payload bytes:
        // 8 * (4 + 2 + 4 + 3 + 4 + 5) = 176
        assert_eq!(required_bits(MAGIC_STRING.len(), 3, 5), 176);
    }

    #[test]
    fn exact_fit_is_accepted_and_one_bit_short_is_not() {
        let required = required_bits(MAGIC_STRING.len(), 3, 5);
        assert!(ensure_capacity(required, required).is_ok());
        assert!(ensure_capacity(required + 1, required).is_ok());

        let err = ensure_capacity(required - 1, required).unwrap_err();
        assert!(matches!(
            err,
            StegoError::Capacity {
                required_bits: 176,
                capacity_bytes: 175,
            }
        ));
    }

    #[test]
    fn tiny_image_cannot_host_a_small_payload() {
        let required = required_bits(MAGIC_STRING.len(), 3, 5);
        assert!(ensure_capacity(image_capacity_bytes(2, 2), required).is_err());
        assert!(ensure_capacity(image_capacity_bytes(100, 100), required).is_ok());
    }
}
