//! Command dispatch logic for wgraph

use std::time::Instant;

use clap::CommandFactory;
use tracing::debug;

use crate::cli::{Cli, Commands};
use wgraph_core::config::Config;
use wgraph_core::error::Result;
use wgraph_core::format::OutputFormat;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self {
            cli,
            config,
            format: cli.format.unwrap_or(config.output.format),
            start,
        }
    }

    /// Whether graphs default to directed when no flag says otherwise
    pub fn directed_default(&self) -> bool {
        self.config.graph.directed
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No subcommand given: print help
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        Cli::command().print_help()?;
        println!();
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Show { graph, list } => super::show::execute(ctx, graph, *list),
            Commands::Path {
                graph,
                source,
                target,
                strategy,
            } => super::path::execute(ctx, graph, *source, *target, *strategy),
            Commands::Distances {
                graph,
                source,
                strategy,
            } => super::distances::execute(ctx, graph, *source, *strategy),
            Commands::Bfs { graph, root } => super::traverse::execute_bfs(ctx, graph, *root),
            Commands::Dfs { graph, root } => super::traverse::execute_dfs(ctx, graph, *root),
            Commands::Demo => super::demo::execute(ctx),
        }
    }
}

pub fn run(cli: &Cli, config: &Config, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, start);
    debug!(format = %ctx.format, elapsed = ?start.elapsed(), "dispatch");

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    debug!(elapsed = ?start.elapsed(), "command finished");
    result
}
