//! Check command - verify a sealed image and restore its pixels.

use std::path::PathBuf;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::Args;
use serde::Serialize;

use pixelseal::{authenticate, AuthStatus};

use super::CommandExecutor;

/// JSON report emitted with `--json`.
#[derive(Serialize)]
struct CheckReport {
    authentic: bool,
    message: &'static str,
    match_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    restored_image_b64: Option<String>,
}

/// Check a sealed image.
///
/// A tampered image is a successful check, not a failure: the verdict is in
/// the output. Only unreadable or undecodable input fails.
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Path to the sealed image
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the restored image (PNG) to this path
    #[arg(short, long)]
    pub restored: Option<PathBuf>,

    /// Emit a JSON report; includes the restored image as base64 when no
    /// --restored path is given
    #[arg(long)]
    pub json: bool,
}

impl CommandExecutor for CheckCommand {
    fn execute(&self) -> Result<()> {
        let bytes = std::fs::read(&self.input)
            .with_context(|| format!("Failed to read {}", self.input.display()))?;

        let auth = authenticate(&bytes)
            .with_context(|| format!("Failed to check {}", self.input.display()))?;

        let authentic = auth.verdict.status == AuthStatus::Authenticated;
        let message = if authentic {
            "Image authentic (untampered)."
        } else {
            "Image tampered / altered."
        };

        if let Some(path) = &self.restored {
            std::fs::write(path, &auth.restored_png)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        if self.json {
            let report = CheckReport {
                authentic,
                message,
                match_percentage: (auth.verdict.match_percentage * 100.0).round() / 100.0,
                restored_image_b64: if self.restored.is_none() {
                    Some(BASE64.encode(&auth.restored_png))
                } else {
                    None
                },
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", message);
            println!("Match: {:.2}%", auth.verdict.match_percentage);
            if let Some(path) = &self.restored {
                println!("Restored image written to {}", path.display());
            }
        }

        Ok(())
    }
}
