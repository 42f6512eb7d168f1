//! `uanode path` - build a relative browse path.

use anyhow::{Context as _, Result};
use colored::Colorize;
use serde::Serialize;
use uanode::{PathSegment, RelativePath};
use uanode_types::{split_node_id, QualifiedName, ReferenceTypeId};

use super::Context;
use crate::cli::args::PathArgs;
use crate::output::emit;

#[derive(Serialize)]
struct PathReport {
    text: String,
    elements: RelativePath,
}

pub fn execute(ctx: &Context, args: PathArgs) -> Result<()> {
    let reference_type_id = reference_type_id(&args.reference_type)?;

    let path = args
        .targets
        .iter()
        .map(|target| {
            let name: QualifiedName = target
                .parse()
                .with_context(|| format!("Invalid browse name: {target}"))?;
            Ok(PathSegment::new(name, reference_type_id.as_str())
                .inverse(args.inverse)
                .include_subtypes(!args.no_subtypes))
        })
        .collect::<Result<RelativePath>>()?;

    let report = PathReport {
        text: path.to_string(),
        elements: path,
    };

    emit(ctx.output_format, &report, |report| {
        println!("{} {}", "Path:".bold(), report.text.cyan());
        println!();
        for (i, segment) in report.elements.iter().enumerate() {
            println!(
                "  {:>2}. {:<24} {} {}{}",
                i + 1,
                segment.target_name().to_string().green(),
                segment.reference_type_id(),
                if segment.is_inverse() { "inverse " } else { "" },
                if segment.is_include_subtypes() { "+subtypes" } else { "" },
            );
        }
    })
}

/// Accept a well-known reference type name or any node id string.
fn reference_type_id(input: &str) -> Result<String> {
    if let Ok(known) = input.parse::<ReferenceTypeId>() {
        return Ok(known.node_id().to_string());
    }
    split_node_id(input).with_context(|| {
        format!("Unknown reference type: {input}\n\nRun `uanode reference-types` for the list")
    })?;
    Ok(input.to_string())
}
