//! # Command handlers
//!
//! High-level logic behind the `encode` and `decode` subcommands: file I/O,
//! argument validation, calling the codec core, and reporting results to the
//! user. The codec itself never prints; all presentation lives here.

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::constants::{DEFAULT_DECODED_FILE, DEFAULT_STEGO_FILE, MAX_FILE_SUFFIX};
use crate::frame;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Handles the 'encode' subcommand.
///
/// Reads the carrier image and the secret file in full, derives the secret's
/// extension from its filename, embeds the framed payload, and writes the
/// stego image.
///
/// # Errors
///
/// Returns an error when:
/// * either input file cannot be read, or the output cannot be written;
/// * the carrier or output path does not end in `.bmp`;
/// * the secret filename has no extension, or one longer than 4 characters;
/// * the output file exists and `--force` was not given;
/// * the codec rejects the carrier (bad signature, insufficient capacity).
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    ensure_bmp_path(&args.image, "carrier image")?;

    let dest = args.dest.unwrap_or_else(|| {
        println!(
            "Output file not mentioned, writing to {}",
            DEFAULT_STEGO_FILE.green().bold()
        );
        PathBuf::from(DEFAULT_STEGO_FILE)
    });
    ensure_bmp_path(&dest, "output image")?;
    ensure_writable(&dest, args.force)?;

    let extension = secret_extension(&args.secret)?;

    let carrier = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read carrier image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    let secret = fs::read(&args.secret).with_context(|| {
        format!(
            "Unable to read secret file: {}",
            args.secret.to_string_lossy().red().bold()
        )
    })?;

    let stego = frame::encode(&carrier, &secret, extension).with_context(|| {
        format!(
            "Failed to embed {} into {}",
            args.secret.to_string_lossy().red().bold(),
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, stego).with_context(|| {
        format!(
            "Unable to write stego image: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The secret file has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// Handles the 'decode' subcommand.
///
/// Reads the stego image in full, extracts the framed payload, and writes
/// exactly the recovered bytes to the output file.
///
/// # Errors
///
/// Returns an error when:
/// * the stego image cannot be read, or the output cannot be written;
/// * the stego image path does not end in `.bmp`;
/// * the output file exists and `--force` was not given;
/// * the codec finds no valid frame (bad signature, missing marker,
///   corrupted length fields).
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    ensure_bmp_path(&args.image, "stego image")?;

    let dest = args.dest.unwrap_or_else(|| {
        println!(
            "Output file not mentioned, writing to {}",
            DEFAULT_DECODED_FILE.green().bold()
        );
        PathBuf::from(DEFAULT_DECODED_FILE)
    });
    ensure_writable(&dest, args.force)?;

    let stego = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read stego image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let (extension, payload) = frame::decode(&stego).with_context(|| {
        format!(
            "Failed to recover a hidden file from {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, payload).with_context(|| {
        format!(
            "Unable to write recovered file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "Recovered a hidden {} file and saved it: {}",
        extension.green().bold(),
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// The frame stores the extension found after the last `.` of the secret
/// filename, so one must exist and fit the frame's fixed bound.
fn secret_extension(secret: &Path) -> Result<&str> {
    let extension = secret
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .with_context(|| {
            format!(
                "Secret file {} has no extension to store in the frame",
                secret.to_string_lossy().red().bold()
            )
        })?;

    anyhow::ensure!(
        extension.len() <= MAX_FILE_SUFFIX,
        "Secret file extension {} is longer than {} characters",
        extension.red().bold(),
        MAX_FILE_SUFFIX.to_string().green().bold()
    );

    Ok(extension)
}

fn ensure_bmp_path(path: &Path, role: &str) -> Result<()> {
    anyhow::ensure!(
        path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("bmp")),
        "Invalid {role}: {} is not a .bmp file",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. Pass --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );
    Ok(())
}
