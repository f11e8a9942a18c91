//! # Frame codec
//!
//! Walks the fixed frame layout over the carrier's pixel data:
//!
//! ```text
//! [marker][4-byte ext-len][extension][4-byte payload-len][payload]
//! ```
//!
//! Every hidden byte costs 8 carrier bytes and every length field costs 32;
//! each step starts immediately after the previous step's last consumed
//! carrier byte. The cursor only moves forward, with the single fixed seek
//! to offset 54 where the pixel data begins.

use crate::bmp;
use crate::capacity;
use crate::constants::{
    BMP_HEADER_SIZE, CARRIER_BYTES_PER_BYTE, CARRIER_BYTES_PER_U32, MAGIC_STRING, MAX_FILE_SUFFIX,
};
use crate::error::StegoError;
use crate::steganography::{decode_byte, decode_u32, encode_byte, encode_u32};

/// Forward-only cursor over the carrier bytes.
struct CarrierCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> CarrierCursor<'a> {
    fn new(data: &'a [u8], start: usize) -> Self {
        Self { data, pos: start }
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Consumes the next `needed` carrier bytes, or reports exhaustion.
    fn take(&mut self, needed: usize) -> Result<&'a [u8], StegoError> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(StegoError::CarrierExhausted { needed, remaining });
        }
        let chunk = &self.data[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(chunk)
    }

    /// Everything past the cursor, for the tail passthrough.
    fn rest(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }
}

/// Writes frame fields into a copy of the carrier stream.
///
/// Each write pulls the exact carrier-byte count for the field from the
/// source cursor, stamps the hidden bits into bit 0, and appends the result
/// to the output. Untouched bits pass through unchanged.
struct FrameWriter<'a> {
    src: CarrierCursor<'a>,
    out: Vec<u8>,
}

impl<'a> FrameWriter<'a> {
    fn write_byte(&mut self, value: u8) -> Result<(), StegoError> {
        let mut chunk = [0u8; CARRIER_BYTES_PER_BYTE];
        chunk.copy_from_slice(self.src.take(CARRIER_BYTES_PER_BYTE)?);
        encode_byte(value, &mut chunk);
        self.out.extend_from_slice(&chunk);
        Ok(())
    }

    fn write_u32(&mut self, value: u32) -> Result<(), StegoError> {
        let mut chunk = [0u8; CARRIER_BYTES_PER_U32];
        chunk.copy_from_slice(self.src.take(CARRIER_BYTES_PER_U32)?);
        encode_u32(value, &mut chunk);
        self.out.extend_from_slice(&chunk);
        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), StegoError> {
        data.iter().try_for_each(|&byte| self.write_byte(byte))
    }

    /// Copies every carrier byte past the frame verbatim and yields the
    /// finished stego image.
    fn finish(mut self) -> Vec<u8> {
        self.out.extend_from_slice(self.src.rest());
        self.out
    }
}

/// Reads frame fields back out of a stego carrier.
struct FrameReader<'a> {
    src: CarrierCursor<'a>,
}

impl<'a> FrameReader<'a> {
    fn read_byte(&mut self) -> Result<u8, StegoError> {
        let mut chunk = [0u8; CARRIER_BYTES_PER_BYTE];
        chunk.copy_from_slice(self.src.take(CARRIER_BYTES_PER_BYTE)?);
        Ok(decode_byte(&chunk))
    }

    fn read_u32(&mut self) -> Result<u32, StegoError> {
        let mut chunk = [0u8; CARRIER_BYTES_PER_U32];
        chunk.copy_from_slice(self.src.take(CARRIER_BYTES_PER_U32)?);
        Ok(decode_u32(&chunk))
    }

    fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, StegoError> {
        (0..len).map(|_| self.read_byte()).collect()
    }
}

/// Embeds `payload` and its `extension` into a copy of `carrier`, returning
/// the finished stego image.
///
/// The 54-byte header is copied verbatim, the frame is stamped into the
/// LSBs of the pixel data that follows, and the remaining carrier bytes
/// pass through untouched. The capacity check runs before a single output
/// byte exists.
pub fn encode(carrier: &[u8], payload: &[u8], extension: &str) -> Result<Vec<u8>, StegoError> {
    bmp::validate_signature(carrier)?;
    let (width, height) = bmp::read_dimensions(carrier)?;

    if extension.len() > MAX_FILE_SUFFIX {
        return Err(StegoError::ExtensionTooLong(extension.len() as u32));
    }
    capacity::ensure_capacity(
        capacity::image_capacity_bytes(width, height),
        capacity::required_bits(MAGIC_STRING.len(), extension.len(), payload.len()),
    )?;

    let mut out = Vec::with_capacity(carrier.len());
    out.extend_from_slice(&carrier[..BMP_HEADER_SIZE]);

    let mut writer = FrameWriter {
        src: CarrierCursor::new(carrier, BMP_HEADER_SIZE),
        out,
    };
    writer.write_bytes(MAGIC_STRING.as_bytes())?;
    writer.write_u32(extension.len() as u32)?;
    writer.write_bytes(extension.as_bytes())?;
    writer.write_u32(payload.len() as u32)?;
    writer.write_bytes(payload)?;

    Ok(writer.finish())
}

/// Extracts the hidden extension and payload from a stego carrier.
///
/// Walks the same fixed field order as [`encode`], starting right past the
/// 54-byte header. Decoded length fields are never trusted blindly: the
/// extension length is bounded by the frame's fixed maximum and the payload
/// length by what the remaining carrier bytes can actually deliver, before
/// any buffer of that size is produced.
pub fn decode(carrier: &[u8]) -> Result<(String, Vec<u8>), StegoError> {
    bmp::validate_signature(carrier)?;
    if carrier.len() < BMP_HEADER_SIZE {
        return Err(StegoError::TruncatedHeader);
    }

    let mut reader = FrameReader {
        src: CarrierCursor::new(carrier, BMP_HEADER_SIZE),
    };

    let marker = reader.read_bytes(MAGIC_STRING.len())?;
    if marker != MAGIC_STRING.as_bytes() {
        return Err(StegoError::MarkerMismatch);
    }

    let ext_len = reader.read_u32()?;
    if ext_len as usize > MAX_FILE_SUFFIX {
        return Err(StegoError::ExtensionTooLong(ext_len));
    }
    let extension = String::from_utf8(reader.read_bytes(ext_len as usize)?)
        .map_err(|_| StegoError::InvalidExtension)?;

    let payload_len = reader.read_u32()?;
    let available = reader.src.remaining() / CARRIER_BYTES_PER_BYTE;
    if payload_len as usize > available {
        return Err(StegoError::PayloadTooLarge {
            declared: payload_len,
            available,
        });
    }
    let payload = reader.read_bytes(payload_len as usize)?;

    Ok((extension, payload))
}
