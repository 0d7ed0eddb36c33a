//! Seal command - embed the pixel fingerprint into an image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pixelseal::secure;

use super::CommandExecutor;

/// Seal an image so later pixel tampering can be detected.
///
/// The input may be any decodable container (PNG, BMP, JPEG, ...); the
/// fingerprint is computed over the decoded pixels, not the file bytes.
/// The sealed output is always PNG.
#[derive(Args, Debug)]
pub struct SealCommand {
    /// Path to the image to seal
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output path for the sealed PNG
    #[arg(short, long)]
    pub output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for SealCommand {
    fn execute(&self) -> Result<()> {
        let bytes = std::fs::read(&self.input)
            .with_context(|| format!("Failed to read {}", self.input.display()))?;

        let sealed = secure(&bytes)
            .with_context(|| format!("Failed to seal {}", self.input.display()))?;

        std::fs::write(&self.output, &sealed)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        if self.verbose {
            eprintln!(
                "Sealed {} -> {} ({} bytes)",
                self.input.display(),
                self.output.display(),
                sealed.len()
            );
        }

        println!("{}", self.output.display());
        Ok(())
    }
}
