//! `verdict`: compare two tool records or score one, printing JSON.

mod args;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use verdict_core::{tracing_setup, Persona, ToolRecord, VerdictConfig};
use verdict_engine::VerdictEngine;

use crate::args::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<String> {
    match command {
        Command::Compare {
            tool_a,
            tool_b,
            config,
        } => {
            let engine = engine_for(config.as_deref())?;
            let a = read_tool(&tool_a)?;
            let b = read_tool(&tool_b)?;
            let verdict = engine.generate_verdict(&a, &b);
            tracing::info!(winner = %verdict.winner, confidence = %verdict.confidence, "compared");
            Ok(serde_json::to_string_pretty(&verdict)?)
        }
        Command::Score {
            tool,
            persona,
            config,
        } => {
            let persona: Persona = persona.parse()?;
            let engine = engine_for(config.as_deref())?;
            let record = read_tool(&tool)?;
            Ok(serde_json::to_string_pretty(&engine.breakdown(&record, persona))?)
        }
    }
}

/// Load config (file plus `VERDICT_*` env), start logging, build the engine.
fn engine_for(config_path: Option<&Path>) -> Result<VerdictEngine> {
    let config = VerdictConfig::load_or_default(config_path).context("loading config")?;
    tracing_setup::init_with(&config.observability);
    Ok(VerdictEngine::from_config(&config)?)
}

fn read_tool(path: &Path) -> Result<ToolRecord> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}
