//! CLI argument parsing for phoenix
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod output;
pub mod parse;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use phoenix_core::graph::{Algorithm, GraphKind, Vertex};
pub use output::OutputFormat;
use parse::{parse_algorithm, parse_graph_kind};

/// Phoenix - shortest paths and connectivity over edge-list graphs
#[derive(Parser, Debug)]
#[command(name = "phoenix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. "debug", "phoenix_core=trace")
    #[arg(long, global = true, env = "PHOENIX_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: <config dir>/phoenix/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Edge-list input shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Edge-list file: one `from to [weight]` per line
    pub file: PathBuf,

    /// Graph kind (overrides config)
    #[arg(long, value_parser = parse_graph_kind)]
    pub kind: Option<GraphKind>,

    /// Keep self-loops from the input
    #[arg(long)]
    pub allow_loops: bool,

    /// Declared vertex count (default: highest id + 1)
    #[arg(long)]
    pub vertices: Option<usize>,
}

/// Visitation order for `search`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SearchOrder {
    /// Depth-first
    #[default]
    Dfs,
    /// Breadth-first
    Bfs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List vertices reachable from a start vertex in visitation order
    Search {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start vertex
        #[arg(long, short)]
        start: Vertex,

        /// Traversal order
        #[arg(long, value_enum, default_value = "dfs")]
        order: SearchOrder,
    },

    /// Shortest-path tree from a source vertex
    Paths {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source vertex
        #[arg(long, short)]
        source: Vertex,

        /// Shortest-path algorithm (overrides config)
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,

        /// Also print the path to this vertex
        #[arg(long, short)]
        target: Option<Vertex>,

        /// Print every equal-cost shortest path to the target
        #[arg(long, requires = "target")]
        all: bool,
    },

    /// Eccentricity of every vertex, plus diameter and radius
    Metrics {
        #[command(flatten)]
        graph: GraphArgs,

        /// Shortest-path algorithm (overrides config)
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,
    },

    /// Edge betweenness: how many shortest paths run through each edge
    Betweenness {
        #[command(flatten)]
        graph: GraphArgs,

        /// Shortest-path algorithm (overrides config)
        #[arg(long, short, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,

        /// Only list the highest-scoring edges
        #[arg(long)]
        top: Option<usize>,
    },
}
