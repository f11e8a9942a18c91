//! # Command-line interface
//!
//! The `clap`-derived command structure: an `encode` subcommand (short flag
//! `-e`) and a `decode` subcommand (short flag `-d`), each taking positional
//! paths. Every user-facing entry point into the program is defined here.

use clap::Parser;
use std::path::PathBuf;

/// Hide a secret file inside the pixel data of an uncompressed BMP image,
/// or recover one from a previously produced stego image.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "Hides an arbitrary secret file in the least significant bits of a BMP \
                  image's pixel data, one bit per carrier byte, and recovers it losslessly."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands: encode (hide) and decode (recover).
#[derive(Parser, Debug)]
pub enum Commands {
    /// Embed a secret file into a BMP carrier image.
    #[command(short_flag = 'e')]
    Encode(EncodeArgs),

    /// Recover the hidden file from a stego BMP image.
    #[command(short_flag = 'd')]
    Decode(DecodeArgs),
}

/// Arguments for the 'encode' subcommand.
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// Source BMP image used as the carrier.
    pub image: PathBuf,

    /// Secret file whose bytes will be hidden.
    pub secret: PathBuf,

    /// Output path for the stego image [default: steged_img.bmp].
    pub dest: Option<PathBuf>,

    /// Overwrite the output file if it already exists.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the 'decode' subcommand.
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// Stego BMP image holding the hidden file.
    pub image: PathBuf,

    /// Output path for the recovered file [default: decoded.txt].
    pub dest: Option<PathBuf>,

    /// Overwrite the output file if it already exists.
    #[arg(short, long)]
    pub force: bool,
}
