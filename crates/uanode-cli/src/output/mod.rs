//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uanode::UniversalNode;
use uanode_types::{ExpandedNodeId, QualifiedName};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Print `value` as JSON or YAML, or call `pretty` for text output.
pub fn emit<T, F>(format: OutputFormat, value: &T, pretty: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T),
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        OutputFormat::Pretty => pretty(value),
    }
    Ok(())
}

/// Every field and representation of a node identity.
#[derive(Debug, Clone, Serialize)]
pub struct NodeReport {
    /// Namespace index, if known
    pub namespace_index: Option<u16>,

    /// Namespace URI, if known
    pub namespace_name: Option<String>,

    /// Identifier within the namespace
    pub node_identifier: String,

    /// Compact `ns=<index>;<identifier>` form
    pub node_id: Option<String>,

    /// Browse-name form
    pub qualified_name: Option<QualifiedName>,

    /// Session-independent form
    pub expanded_node_id: Option<ExpandedNodeId>,
}

impl From<&UniversalNode> for NodeReport {
    fn from(node: &UniversalNode) -> Self {
        Self {
            namespace_index: node.namespace_index(),
            namespace_name: node
                .is_namespace_name_valid()
                .then(|| node.namespace_name().to_string()),
            node_identifier: node.node_identifier().to_string(),
            node_id: node.node_id_string(),
            qualified_name: node.qualified_name(),
            expanded_node_id: node.expanded_node_id(),
        }
    }
}

impl NodeReport {
    /// Print as labelled lines; unknown values are dimmed.
    pub fn print_pretty(&self) {
        let unknown = || "(unknown)".dimmed().to_string();

        println!(
            "  {} {}",
            "namespace index:".bold(),
            self.namespace_index
                .map_or_else(unknown, |i| i.to_string().cyan().to_string())
        );
        println!(
            "  {} {}",
            "namespace name: ".bold(),
            self.namespace_name
                .as_deref()
                .map_or_else(unknown, |n| n.cyan().to_string())
        );
        println!(
            "  {} {}",
            "identifier:     ".bold(),
            self.node_identifier.green()
        );
        println!();
        println!(
            "  {} {}",
            "node id:         ".bold(),
            self.node_id.as_deref().map_or_else(unknown, ToString::to_string)
        );
        println!(
            "  {} {}",
            "qualified name:  ".bold(),
            self.qualified_name
                .as_ref()
                .map_or_else(unknown, ToString::to_string)
        );
        println!(
            "  {} {}",
            "expanded node id:".bold(),
            self.expanded_node_id.as_ref().map_or_else(unknown, |id| format!(
                "nsu={};{} (server {})",
                id.namespace_uri, id.node_id, id.server_index
            ))
        );
    }
}
