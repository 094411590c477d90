//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, GraphArgs};
use phoenix_core::config::PhoenixConfig;
use phoenix_core::error::Result;
use phoenix_core::graph::{Algorithm, Graph};
use phoenix_core::load::{load_graph, LoadOptions};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a PhoenixConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a PhoenixConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Loader options: command-line flags first, then the config file
    pub fn load_options(&self, args: &GraphArgs) -> LoadOptions {
        let mut opts = LoadOptions::from(&self.config.graph);
        if let Some(kind) = args.kind {
            opts.kind = kind;
        }
        if args.allow_loops {
            opts.allow_loops = true;
        }
        if args.vertices.is_some() {
            opts.vertex_count = args.vertices;
        }
        opts
    }

    pub fn load_graph(&self, args: &GraphArgs) -> Result<Graph> {
        let graph = load_graph(&args.file, &self.load_options(args))?;
        tracing::debug!(
            elapsed = ?self.start.elapsed(),
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            "load_graph"
        );
        Ok(graph)
    }

    pub fn algorithm(&self, requested: Option<Algorithm>) -> Algorithm {
        requested.unwrap_or(self.config.graph.algorithm)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("phoenix {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths and connectivity over edge-list graphs.");
        println!();
        println!("Run `phoenix --help` for usage information.");
        Ok(())
    }
}
