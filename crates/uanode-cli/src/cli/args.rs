//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Parse, resolve and convert OPC UA node identities.
///
/// Node ids are given as `ns=<index>;<identifier>` or as a bare identifier.
/// Resolution needs the server's namespace array, passed with --namespaces
/// or stored with `uanode config set namespaces`.
#[derive(Parser, Debug)]
#[command(name = "uanode")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Show debug diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, env = "UANODE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a node id and show every form it converts to
    Parse(ParseArgs),

    /// Resolve the missing namespace half against a namespace table
    Resolve(ResolveArgs),

    /// Build a relative browse path
    Path(PathArgs),

    /// List well-known reference types and their node ids
    ReferenceTypes,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Parse command
// ============================================================================

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Node id, e.g. "ns=2;Temperature" or "Temperature"
    pub node_id: String,
}

// ============================================================================
// Resolve command
// ============================================================================

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Node id, or the bare identifier when --namespace-uri is given
    pub node_id: String,

    /// Namespace URI the identifier belongs to
    #[arg(short = 'u', long)]
    pub namespace_uri: Option<String>,

    /// Namespace array in index order (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub namespaces: Option<Vec<String>>,

    /// Which half of the namespace to look up
    #[arg(short, long, value_enum, default_value_t = Direction::Auto)]
    pub direction: Direction,
}

/// Resolution direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Whichever half is missing
    Auto,
    /// Namespace index to URI
    IndexToName,
    /// Namespace URI to index
    NameToIndex,
}

// ============================================================================
// Path command
// ============================================================================

#[derive(Args, Debug)]
pub struct PathArgs {
    /// Target browse names as "<index>:<name>", one per hop
    #[arg(required = true)]
    pub targets: Vec<String>,

    /// Reference type name or node id followed by every hop
    #[arg(short, long, default_value = "HierarchicalReferences")]
    pub reference_type: String,

    /// Follow references in the inverse direction
    #[arg(long)]
    pub inverse: bool,

    /// Do not follow subtypes of the reference type
    #[arg(long)]
    pub no_subtypes: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (namespaces, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show configuration file path
    Path,
}
