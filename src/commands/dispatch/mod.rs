//! Command dispatch logic for phoenix

use std::time::Instant;

use crate::cli::Cli;
use phoenix_core::config::PhoenixConfig;
use phoenix_core::error::Result;
use tracing::debug;

mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = PhoenixConfig::load(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
