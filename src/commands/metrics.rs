//! `phoenix metrics` - eccentricity, diameter and radius

use crate::cli::output::{format_weight, weight_json};
use crate::cli::{Cli, OutputFormat};
use phoenix_core::error::Result;
use phoenix_core::graph::{Algorithm, Graph, GraphMetrics};

/// Execute the metrics command
pub fn execute(cli: &Cli, graph: &Graph, algorithm: Algorithm) -> Result<()> {
    let metrics = GraphMetrics::compute(graph, algorithm)?;
    let center = metrics.center();

    match cli.format {
        OutputFormat::Json => {
            let eccentricities: Vec<serde_json::Value> = metrics
                .eccentricities
                .iter()
                .map(|e| weight_json(*e))
                .collect();
            let output = serde_json::json!({
                "algorithm": metrics.algorithm,
                "eccentricities": eccentricities,
                "diameter": weight_json(metrics.diameter),
                "radius": weight_json(metrics.radius),
                "center": center,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{:<8}eccentricity", "vertex");
                for (vertex, e) in metrics.eccentricities.iter().enumerate() {
                    println!("{:<8}{}", vertex, format_weight(*e));
                }
            }
            println!("diameter: {}", format_weight(metrics.diameter));
            println!("radius: {}", format_weight(metrics.radius));
            let ids: Vec<String> = center.iter().map(|v| v.to_string()).collect();
            println!("center: {}", ids.join(" "));
        }
    }

    Ok(())
}
