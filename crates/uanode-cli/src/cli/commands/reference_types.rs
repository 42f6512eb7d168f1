//! `uanode reference-types` - list the well-known reference type table.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use uanode_types::ReferenceTypeId;

use super::Context;
use crate::output::emit;

#[derive(Serialize)]
struct ReferenceTypeRow {
    name: &'static str,
    node_id: &'static str,
}

pub fn execute(ctx: &Context) -> Result<()> {
    let rows: Vec<ReferenceTypeRow> = ReferenceTypeId::ALL
        .iter()
        .map(|r| ReferenceTypeRow {
            name: r.name(),
            node_id: r.node_id(),
        })
        .collect();

    emit(ctx.output_format, rows.as_slice(), |rows| {
        println!("{}", "Reference Types:".bold().underline());
        for row in rows {
            println!("  {:<28} {}", row.name, row.node_id.cyan());
        }
    })
}
