//! `path` command: shortest path between two nodes

use super::dispatch::CommandContext;
use crate::cli::GraphArgs;
use wgraph_core::error::Result;
use wgraph_core::format::{format_path, OutputFormat};
use wgraph_core::graph::{node_from_signed, shortest_path_with_cost, PathResult, Strategy};

pub fn execute(
    ctx: &CommandContext,
    args: &GraphArgs,
    source: i64,
    target: i64,
    strategy: Strategy,
) -> Result<()> {
    let graph = args.to_matrix(ctx.directed_default())?;
    let source = node_from_signed(source, graph.node_count())?;
    let target = node_from_signed(target, graph.node_count())?;

    let result = shortest_path_with_cost(&graph, source, target, strategy)?;
    wgraph_core::trace_time!(ctx.start, "path", found = result.found);

    match ctx.format {
        OutputFormat::Human => output_human(ctx, &result),
        OutputFormat::Json => output_json(&result, strategy)?,
    }
    Ok(())
}

fn output_human(ctx: &CommandContext, result: &PathResult) {
    println!("{}", format_path(&result.path));
    if ctx.quiet() {
        return;
    }

    match result.distance {
        Some(distance) if result.found => {
            println!("distance: {} ({} hops)", distance, result.path_length)
        }
        _ => println!("no path from {} to {}", result.source, result.target),
    }
}

fn output_json(result: &PathResult, strategy: Strategy) -> Result<()> {
    let mut output = serde_json::to_value(result)?;
    output["strategy"] = serde_json::to_value(strategy)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
