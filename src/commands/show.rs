//! `show` command: print a graph as an adjacency matrix or list

use serde_json::json;

use super::dispatch::CommandContext;
use crate::cli::GraphArgs;
use wgraph_core::error::Result;
use wgraph_core::format::OutputFormat;
use wgraph_core::graph::{AdjacencyList, MatrixGraph, Neighbors, Weight};

pub fn execute(ctx: &CommandContext, args: &GraphArgs, list: bool) -> Result<()> {
    if list {
        let graph = args.to_list(ctx.directed_default())?;
        match ctx.format {
            OutputFormat::Human => output_list_human(ctx, &graph),
            OutputFormat::Json => output_list_json(&graph)?,
        }
    } else {
        let graph = args.to_matrix(ctx.directed_default())?;
        match ctx.format {
            OutputFormat::Human => output_matrix_human(ctx, &graph),
            OutputFormat::Json => output_matrix_json(&graph)?,
        }
    }
    Ok(())
}

fn direction_label(directed: bool) -> &'static str {
    if directed {
        "directed"
    } else {
        "undirected"
    }
}

fn output_matrix_human(ctx: &CommandContext, graph: &MatrixGraph) {
    if !ctx.quiet() {
        println!(
            "{} nodes, {} edges ({})",
            graph.node_count(),
            graph.edge_count(),
            direction_label(graph.is_directed())
        );
        println!();
    }
    println!("{}", graph);
}

fn output_matrix_json(graph: &MatrixGraph) -> Result<()> {
    let n = graph.node_count();
    let matrix = (0..n)
        .map(|from| {
            (0..n)
                .map(|to| graph.edge_weight(from, to))
                .collect::<Result<Vec<Option<Weight>>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    let edges: Vec<_> = graph.edges().collect();

    let output = json!({
        "nodes": n,
        "directed": graph.is_directed(),
        "weighted": graph.options().weighted,
        "edge_count": graph.edge_count(),
        "edges": edges,
        "matrix": matrix,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_list_human(ctx: &CommandContext, graph: &AdjacencyList) {
    if !ctx.quiet() {
        println!(
            "{} nodes ({})",
            graph.node_count(),
            direction_label(graph.options().directed)
        );
        println!();
    }
    println!("{}", graph);
}

fn output_list_json(graph: &AdjacencyList) -> Result<()> {
    let adjacency: Vec<Vec<serde_json::Value>> = (0..graph.node_count())
        .map(|node| {
            graph
                .neighbors(node)
                .into_iter()
                .map(|(to, weight)| json!({ "to": to, "weight": weight }))
                .collect()
        })
        .collect();

    let output = json!({
        "nodes": graph.node_count(),
        "directed": graph.options().directed,
        "weighted": graph.options().weighted,
        "adjacency": adjacency,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
