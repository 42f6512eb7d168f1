//! `uanode parse` - split a node id into its parts.

use anyhow::Result;
use colored::Colorize;
use uanode::UniversalNode;

use super::Context;
use crate::cli::args::ParseArgs;
use crate::output::{emit, NodeReport};

pub fn execute(ctx: &Context, args: ParseArgs) -> Result<()> {
    let node = UniversalNode::from(args.node_id.as_str());
    let report = NodeReport::from(&node);

    emit(ctx.output_format, &report, |report| {
        println!("{} {}", "Node:".bold(), node.to_string().cyan());
        println!();
        report.print_pretty();
    })
}
