//! Routes each subcommand to its implementation

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{betweenness, metrics, paths, search};
use phoenix_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search {
                graph,
                start,
                order,
            } => {
                let loaded = ctx.load_graph(graph)?;
                search::execute(ctx.cli, &loaded, *start, *order)
            }
            Commands::Paths {
                graph,
                source,
                algorithm,
                target,
                all,
            } => {
                let loaded = ctx.load_graph(graph)?;
                let target = target.map(|vertex| paths::Target { vertex, all: *all });
                paths::execute(ctx.cli, &loaded, *source, ctx.algorithm(*algorithm), target)
            }
            Commands::Metrics { graph, algorithm } => {
                let loaded = ctx.load_graph(graph)?;
                metrics::execute(ctx.cli, &loaded, ctx.algorithm(*algorithm))
            }
            Commands::Betweenness {
                graph,
                algorithm,
                top,
            } => {
                let loaded = ctx.load_graph(graph)?;
                betweenness::execute(ctx.cli, &loaded, ctx.algorithm(*algorithm), *top)
            }
        }
    }
}
