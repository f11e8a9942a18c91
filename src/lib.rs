//! # stegbmp
//!
//! Core library of the BMP LSB steganography tool: a bit-level codec that
//! hides a secret file in the least significant bits of an uncompressed BMP
//! image's pixel data and recovers it losslessly.

pub mod bmp;
pub mod capacity;
pub mod cli;
pub mod constants;
pub mod error;
pub mod frame;
pub mod handler;
pub mod steganography;
