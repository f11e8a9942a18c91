//! # Bit-level codec
//!
//! Packs a byte or a 32-bit integer into the least significant bits of a
//! run of carrier bytes, one bit per carrier byte, most significant bit
//! first. Only bit 0 of each carrier byte is ever touched; bits 1-7 are
//! preserved bit-for-bit.

use crate::constants::{CARRIER_BYTES_PER_BYTE, CARRIER_BYTES_PER_U32};

/// Encodes `value` into the LSBs of 8 carrier bytes, MSB first.
pub fn encode_byte(value: u8, carrier: &mut [u8; CARRIER_BYTES_PER_BYTE]) {
    for i in (0..8).rev() {
        let bit = (value >> i) & 1;
        carrier[7 - i] = (carrier[7 - i] & !1) | bit;
    }
}

/// Reassembles the byte hidden in the LSBs of 8 carrier bytes.
pub fn decode_byte(carrier: &[u8; CARRIER_BYTES_PER_BYTE]) -> u8 {
    let mut value = 0u8;
    for i in (0..8).rev() {
        value |= (carrier[7 - i] & 1) << i;
    }
    value
}

/// Encodes `value` into the LSBs of 32 carrier bytes, MSB first.
pub fn encode_u32(value: u32, carrier: &mut [u8; CARRIER_BYTES_PER_U32]) {
    for i in (0..32).rev() {
        let bit = ((value >> i) & 1) as u8;
        carrier[31 - i] = (carrier[31 - i] & !1) | bit;
    }
}

/// Reassembles the 32-bit integer hidden in the LSBs of 32 carrier bytes.
pub fn decode_u32(carrier: &[u8; CARRIER_BYTES_PER_U32]) -> u32 {
    let mut value = 0u32;
    for i in (0..32).rev() {
        value |= u32::from(carrier[31 - i] & 1) << i;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_round_trips_for_every_value() {
        for value in 0..=u8::MAX {
            let mut carrier = [0b1010_1010u8; 8];
            encode_byte(value, &mut carrier);
            assert_eq!(decode_byte(&carrier), value);
        }
    }

    #[test]
    fn u32_round_trips_for_sample_values() {
        for value in [0, 1, 3, 0xDEAD_BEEF, u32::MAX, u32::MAX - 1] {
            let mut carrier = [0x5Fu8; 32];
            encode_u32(value, &mut carrier);
            assert_eq!(decode_u32(&carrier), value);
        }
    }

    #[test]
    fn encode_byte_only_touches_bit_zero() {
        let original = [0xFFu8, 0x00, 0x81, 0x7E, 0xAA, 0x55, 0x10, 0x01];
        let mut carrier = original;
        encode_byte(0b0110_0101, &mut carrier);
        for (before, after) in original.iter().zip(carrier.iter()) {
            assert_eq!(before >> 1, after >> 1, "bits 1-7 must be preserved");
        }
    }

    #[test]
    fn encode_byte_is_msb_first() {
        let mut carrier = [0u8; 8];
        encode_byte(0b1000_0001, &mut carrier);
        assert_eq!(carrier[0] & 1, 1);
        assert_eq!(carrier[7] & 1, 1);
        for byte in &carrier[1..7] {
            assert_eq!(byte & 1, 0);
        }
    }

    #[test]
    fn encode_u32_is_msb_first() {
        let mut carrier = [0u8; 32];
        encode_u32(0x8000_0001, &mut carrier);
        assert_eq!(carrier[0] & 1, 1);
        assert_eq!(carrier[31] & 1, 1);
        for byte in &carrier[1..31] {
            assert_eq!(byte & 1, 0);
        }
    }
}
