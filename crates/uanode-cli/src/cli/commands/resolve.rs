//! `uanode resolve` - fill in the missing half of a node's namespace.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tracing::debug;
use uanode::{NodeChanges, UniversalNode};

use super::Context;
use crate::cli::args::{Direction, ResolveArgs};
use crate::output::{emit, NodeReport};

#[derive(Serialize)]
struct ResolveReport {
    resolved: bool,
    #[serde(flatten)]
    node: NodeReport,
}

pub fn execute(ctx: &Context, args: ResolveArgs) -> Result<()> {
    let mut node = match args.namespace_uri {
        Some(uri) => UniversalNode::with_namespace_name(uri, args.node_id)?,
        None => UniversalNode::from(args.node_id),
    };
    let table = ctx.namespace_table(args.namespaces)?;

    let changes = match args.direction {
        Direction::Auto => node.resolve_namespace(&table),
        Direction::IndexToName => node.resolve_namespace_index_to_name(&table),
        Direction::NameToIndex => node.resolve_namespace_name_to_index(&table),
    };
    debug!(?changes, node = %node, "Resolution finished");

    let report = ResolveReport {
        resolved: node.is_namespace_index_valid() && node.is_namespace_name_valid(),
        node: NodeReport::from(&node),
    };

    emit(ctx.output_format, &report, |report| {
        let status = if report.resolved {
            "resolved".green().bold()
        } else {
            "unresolved".yellow().bold()
        };
        println!("{} {} ({})", "Node:".bold(), node.to_string().cyan(), status);
        if ctx.verbose {
            print_changes(changes);
        }
        println!();
        report.node.print_pretty();
    })
}

fn print_changes(changes: NodeChanges) {
    if changes.is_empty() {
        println!("  {}", "no fields changed".dimmed());
        return;
    }
    if changes.namespace_index {
        println!("  {} namespace index", "changed:".dimmed());
    }
    if changes.namespace_name {
        println!("  {} namespace name", "changed:".dimmed());
    }
}
