//! `phoenix paths` - shortest-path tree from one source

use crate::cli::output::{format_weight, weight_json};
use crate::cli::{Cli, OutputFormat};
use phoenix_core::error::Result;
use phoenix_core::graph::{Algorithm, Graph, ShortestPathDag, ShortestPathResult, Vertex};

/// `--target`, optionally with `--all`
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub vertex: Vertex,
    pub all: bool,
}

struct PathReport {
    target: Vertex,
    tree_path: Option<Vec<Vertex>>,
    /// Every equal-cost path, only when asked for
    all: Option<Vec<Vec<Vertex>>>,
}

impl PathReport {
    fn build(graph: &Graph, tree: &ShortestPathResult, target: Target) -> Result<Self> {
        let all = if target.all {
            Some(ShortestPathDag::from_tree(graph, tree)?.paths_to(target.vertex)?)
        } else {
            None
        };
        Ok(PathReport {
            target: target.vertex,
            tree_path: tree.path_to(target.vertex)?,
            all,
        })
    }
}

fn join_ids(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One row of the tree, as reported to the user
struct VertexReport {
    vertex: Vertex,
    reachable: bool,
    distance: f64,
    edges: Option<usize>,
    predecessor: Option<Vertex>,
}

fn vertex_reports(tree: &ShortestPathResult) -> Result<Vec<VertexReport>> {
    (0..tree.vertex_count())
        .map(|vertex| {
            Ok(VertexReport {
                vertex,
                reachable: tree.has_path_to(vertex)?,
                distance: tree.distance_to(vertex)?,
                edges: tree.edge_distance_to(vertex)?,
                predecessor: tree.predecessor(vertex)?,
            })
        })
        .collect()
}

/// Execute the paths command
pub fn execute(
    cli: &Cli,
    graph: &Graph,
    source: Vertex,
    algorithm: Algorithm,
    target: Option<Target>,
) -> Result<()> {
    let tree = algorithm.run(graph, source)?;
    let path = target
        .map(|t| PathReport::build(graph, &tree, t))
        .transpose()?;
    let rows = vertex_reports(&tree)?;

    match cli.format {
        OutputFormat::Json => output_json(&tree, algorithm, &rows, path.as_ref())?,
        OutputFormat::Human => output_human(cli, &tree, algorithm, &rows, path.as_ref()),
    }

    Ok(())
}

fn output_json(
    tree: &ShortestPathResult,
    algorithm: Algorithm,
    rows: &[VertexReport],
    path: Option<&PathReport>,
) -> Result<()> {
    let vertices: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            let distance = if row.reachable {
                weight_json(row.distance)
            } else {
                serde_json::Value::Null
            };
            serde_json::json!({
                "vertex": row.vertex,
                "reachable": row.reachable,
                "distance": distance,
                "edges": row.edges,
                "predecessor": row.predecessor,
            })
        })
        .collect();

    let mut output = serde_json::json!({
        "source": tree.source(),
        "algorithm": algorithm,
        "metric": tree.metric(),
        "vertices": vertices,
        "reached": tree.reached_count(),
        "non_negative": tree.verify_non_negative(),
        "eccentricity": weight_json(tree.eccentricity()),
    });

    if let Some(report) = path {
        let mut path_json = serde_json::json!({
            "target": report.target,
            "vertices": report.tree_path,
        });
        if let (Some(all), Some(obj)) = (&report.all, path_json.as_object_mut()) {
            obj.insert("all".to_string(), serde_json::json!(all));
        }
        if let Some(obj) = output.as_object_mut() {
            obj.insert("path".to_string(), path_json);
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(
    cli: &Cli,
    tree: &ShortestPathResult,
    algorithm: Algorithm,
    rows: &[VertexReport],
    path: Option<&PathReport>,
) {
    if !cli.quiet {
        println!(
            "{} tree from {} ({} of {} vertices reached)",
            algorithm,
            tree.source(),
            tree.reached_count(),
            tree.vertex_count()
        );
        println!("{:<8}{:<12}{:<8}predecessor", "vertex", "distance", "edges");
    }

    for row in rows {
        if row.reachable {
            let edges = row.edges.map_or_else(|| "-".to_string(), |e| e.to_string());
            let pred = row
                .predecessor
                .map_or_else(|| "-".to_string(), |p| p.to_string());
            println!(
                "{:<8}{:<12}{:<8}{}",
                row.vertex,
                format_weight(row.distance),
                edges,
                pred
            );
        } else {
            println!("{:<8}unreachable", row.vertex);
        }
    }

    if !cli.quiet {
        println!(
            "non-negative: {}",
            if tree.verify_non_negative() { "yes" } else { "no" }
        );
        println!("eccentricity: {}", format_weight(tree.eccentricity()));
    }

    let Some(report) = path else {
        return;
    };
    match &report.tree_path {
        Some(vertices) => println!(
            "path {} -> {}: {}",
            tree.source(),
            report.target,
            join_ids(vertices)
        ),
        None => println!("no path from {} to {}", tree.source(), report.target),
    }
    if let Some(all) = report.all.as_ref().filter(|all| !all.is_empty()) {
        println!("{} shortest path(s):", all.len());
        for vertices in all {
            println!("  {}", join_ids(vertices));
        }
    }
}
