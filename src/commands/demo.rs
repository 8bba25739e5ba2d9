//! `demo` command: the built-in sample graphs

use serde_json::json;

use super::dispatch::CommandContext;
use super::traverse::join_nodes;
use wgraph_core::error::Result;
use wgraph_core::format::{format_path, OutputFormat};
use wgraph_core::graph::{
    bfs, dfs, shortest_path_with_cost, AdjacencyList, MatrixGraph, NodeId, PathResult, Strategy,
};

/// Six-node directed sample; the best route 0 -> 5 costs 20
const DIRECTED_EDGES: [(NodeId, NodeId, i32); 7] = [
    (0, 1, 4),
    (0, 2, 2),
    (1, 2, 5),
    (1, 3, 10),
    (2, 4, 3),
    (4, 3, 4),
    (3, 5, 11),
];

/// Six-node undirected sample; the best route 1 -> 5 costs 20
const UNDIRECTED_EDGES: [(NodeId, NodeId, i32); 9] = [
    (1, 2, 7),
    (2, 4, 15),
    (1, 3, 9),
    (3, 2, 10),
    (3, 4, 11),
    (5, 4, 6),
    (0, 5, 9),
    (0, 3, 2),
    (1, 0, 14),
];

/// Five-node unweighted sample for the traversals
const TRAVERSAL_EDGES: [(NodeId, NodeId); 7] =
    [(0, 1), (0, 4), (1, 4), (1, 3), (1, 2), (3, 2), (4, 3)];

const TRAVERSAL_ROOT: NodeId = 3;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let directed = MatrixGraph::directed(6, DIRECTED_EDGES)?;
    let undirected = MatrixGraph::undirected(6, UNDIRECTED_EDGES)?;
    let list = AdjacencyList::unweighted(5, TRAVERSAL_EDGES)?;

    let directed_path = shortest_path_with_cost(&directed, 0, 5, Strategy::DenseScan)?;
    let undirected_path = shortest_path_with_cost(&undirected, 1, 5, Strategy::DenseScan)?;
    let bfs_result = bfs(&list, TRAVERSAL_ROOT)?;
    let dfs_order = dfs(&list, TRAVERSAL_ROOT)?;

    match ctx.format {
        OutputFormat::Human => {
            print_section(ctx, "directed graph", &directed.to_string());
            print_path(&directed_path);
            print_section(ctx, "undirected graph", &undirected.to_string());
            print_path(&undirected_path);
            print_section(ctx, "adjacency list", &list.to_string());
            println!("bfs from {}: {}", TRAVERSAL_ROOT, join_nodes(&bfs_result.order));
            println!("dfs from {}: {}", TRAVERSAL_ROOT, join_nodes(&dfs_order));
        }
        OutputFormat::Json => {
            let output = json!({
                "directed": directed_path,
                "undirected": undirected_path,
                "bfs": bfs_result,
                "dfs": { "root": TRAVERSAL_ROOT, "order": dfs_order },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn print_section(ctx: &CommandContext, title: &str, body: &str) {
    if ctx.quiet() {
        return;
    }
    println!("== {} ==", title);
    println!("{}", body);
    println!();
}

fn print_path(result: &PathResult) {
    match result.distance {
        Some(distance) => println!(
            "{} -> {}: {} (distance {})",
            result.source,
            result.target,
            format_path(&result.path),
            distance
        ),
        None => println!("{} -> {}: unreachable", result.source, result.target),
    }
}
