//! Command-line surface of the `verdict` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "verdict", version, about = "Compare two tools or score one", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compare two tool records and print the verdict as JSON
    Compare {
        /// First tool; wins ties
        tool_a: PathBuf,
        /// Second tool
        tool_b: PathBuf,
        /// Path to verdict.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print one tool's per-metric scores and composite as JSON
    Score {
        tool: PathBuf,
        /// Persona whose weights build the composite
        #[arg(long, default_value = "startup")]
        persona: String,
        /// Path to verdict.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
