//! `bfs` and `dfs` commands over the adjacency list

use serde_json::json;

use super::dispatch::CommandContext;
use crate::cli::GraphArgs;
use wgraph_core::error::Result;
use wgraph_core::format::OutputFormat;
use wgraph_core::graph::{bfs, dfs, node_from_signed, BfsResult, NodeId};

pub(crate) fn join_nodes(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn execute_bfs(ctx: &CommandContext, args: &GraphArgs, root: i64) -> Result<()> {
    let graph = args.to_list(ctx.directed_default())?;
    let root = node_from_signed(root, graph.node_count())?;
    let result = bfs(&graph, root)?;

    match ctx.format {
        OutputFormat::Human => output_bfs_human(ctx, &result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}

fn output_bfs_human(ctx: &CommandContext, result: &BfsResult) {
    println!("{}", join_nodes(&result.order));
    if ctx.quiet() {
        return;
    }

    println!();
    for (node, hops) in result.distance.iter().enumerate() {
        match (hops, result.parent[node]) {
            (Some(hops), Some(parent)) => println!("{}\t{} hops\tvia {}", node, hops, parent),
            (Some(hops), None) => println!("{}\t{} hops", node, hops),
            (None, _) => println!("{}\tunreached", node),
        }
    }
}

pub fn execute_dfs(ctx: &CommandContext, args: &GraphArgs, root: i64) -> Result<()> {
    let graph = args.to_list(ctx.directed_default())?;
    let root = node_from_signed(root, graph.node_count())?;
    let order = dfs(&graph, root)?;

    match ctx.format {
        OutputFormat::Human => println!("{}", join_nodes(&order)),
        OutputFormat::Json => {
            let output = json!({ "root": root, "order": order });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
