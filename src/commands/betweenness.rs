//! `phoenix betweenness` - shortest-path load carried by each edge

use crate::cli::output::format_weight;
use crate::cli::{Cli, OutputFormat};
use phoenix_core::error::Result;
use phoenix_core::graph::{Algorithm, EdgeBetweenness, EdgeScore, Graph};

/// Execute the betweenness command
pub fn execute(cli: &Cli, graph: &Graph, algorithm: Algorithm, top: Option<usize>) -> Result<()> {
    let mut scores = EdgeBetweenness::compute(graph, algorithm)?;
    let undirected = !graph.kind().is_directed();
    if undirected {
        scores = scores.fold_undirected();
    }

    let mut edges = scores.edges();
    // highest first, then by edge
    edges.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| (a.from, a.to).cmp(&(b.from, b.to)))
    });
    if let Some(n) = top {
        edges.truncate(n);
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "algorithm": algorithm,
                "undirected": undirected,
                "edges": edges,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(cli, undirected, &edges),
    }

    Ok(())
}

fn output_human(cli: &Cli, undirected: bool, edges: &[EdgeScore]) {
    let arrow = if undirected { "-" } else { "->" };
    if !cli.quiet {
        println!("{:<12}score", "edge");
    }
    for edge in edges {
        let name = format!("{}{}{}", edge.from, arrow, edge.to);
        println!("{:<12}{}", name, format_weight(edge.score));
    }
}
