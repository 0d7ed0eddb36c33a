//! Pixelseal - detect pixel-level image tampering without a database.
//!
//! A CLI wrapper around the sealing engine. `seal` embeds a SHA-256
//! fingerprint of the decoded pixel content into the image's own LSBs;
//! `check` verifies a sealed image and recovers the restored pixels.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CheckCommand, CommandExecutor, SealCommand};

/// Pixelseal - embed an integrity fingerprint into an image's pixels
///
/// The sealed output is always PNG. Lossy re-encoding (e.g. JPEG) destroys
/// the embedded bits by design.
#[derive(Parser)]
#[command(name = "pixelseal")]
#[command(version)]
#[command(about = "Tamper detection and pixel restoration for lossless images")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seal an image: embed a fingerprint of its pixel content
    Seal(SealCommand),

    /// Check a sealed image: verify the fingerprint and restore pixels
    Check(CheckCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seal(cmd) => cmd.execute(),
        Commands::Check(cmd) => cmd.execute(),
    }
}
