//! `distances` command: single-source distance table

use serde_json::json;

use super::dispatch::CommandContext;
use crate::cli::GraphArgs;
use wgraph_core::error::Result;
use wgraph_core::format::{format_path, OutputFormat};
use wgraph_core::graph::{dijkstra_with, node_from_signed, DistanceTable, Strategy};

pub fn execute(
    ctx: &CommandContext,
    args: &GraphArgs,
    source: i64,
    strategy: Strategy,
) -> Result<()> {
    let graph = args.to_matrix(ctx.directed_default())?;
    let source = node_from_signed(source, graph.node_count())?;
    let table = dijkstra_with(&graph, source, strategy)?;

    match ctx.format {
        OutputFormat::Human => output_human(ctx, &table),
        OutputFormat::Json => output_json(&table, strategy)?,
    }
    Ok(())
}

fn output_human(ctx: &CommandContext, table: &DistanceTable) {
    if !ctx.quiet() {
        println!("distances from {}:", table.source());
    }
    for entry in table.entries() {
        match entry.distance {
            Some(distance) => println!(
                "{}\t{}\t{}",
                entry.node,
                distance,
                format_path(&table.path_to(entry.node))
            ),
            None => println!("{}\tunreachable", entry.node),
        }
    }
}

fn output_json(table: &DistanceTable, strategy: Strategy) -> Result<()> {
    let output = json!({
        "source": table.source(),
        "strategy": strategy,
        "settled_order": table.settled_order(),
        "relaxed": table.relaxed_count(),
        "distances": table.entries(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
