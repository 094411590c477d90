//! `phoenix search` - reachability in DFS or BFS order

use crate::cli::{Cli, OutputFormat, SearchOrder};
use phoenix_core::error::Result;
use phoenix_core::graph::{bfs, dfs, Graph, Vertex};

/// Execute the search command
pub fn execute(cli: &Cli, graph: &Graph, start: Vertex, order: SearchOrder) -> Result<()> {
    let visited = match order {
        SearchOrder::Dfs => dfs(graph, start)?,
        SearchOrder::Bfs => bfs(graph, start)?,
    };
    let component_size = visited.len();
    let connected = component_size == graph.vertex_count();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "order": order_name(order),
                "visited": visited,
                "component_size": component_size,
                "vertex_count": graph.vertex_count(),
                "connected": connected,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let ids: Vec<String> = visited.iter().map(|v| v.to_string()).collect();
            println!("{} from {}: {}", order_name(order), start, ids.join(" "));
            if !cli.quiet {
                println!(
                    "reached {} of {} vertices ({})",
                    component_size,
                    graph.vertex_count(),
                    if connected { "connected" } else { "not connected" }
                );
            }
        }
    }

    Ok(())
}

fn order_name(order: SearchOrder) -> &'static str {
    match order {
        SearchOrder::Dfs => "dfs",
        SearchOrder::Bfs => "bfs",
    }
}
