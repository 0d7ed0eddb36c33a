//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor`
//! trait, keeping argument parsing and execution together per command.

mod check;
mod seal;

pub use check::CheckCommand;
pub use seal::SealCommand;

use anyhow::Result;

/// Trait for command execution - Strategy pattern.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}
