//! Command implementations.

pub mod config;
pub mod parse;
pub mod path;
pub mod reference_types;
pub mod resolve;

use std::path::PathBuf;
use uanode_types::NamespaceTable;

use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,

    /// Loaded configuration
    pub config: Config,

    /// Where the configuration was loaded from
    pub config_path: PathBuf,
}

impl Context {
    /// Namespace table from the command line, falling back to the config file.
    pub fn namespace_table(
        &self,
        namespaces: Option<Vec<String>>,
    ) -> anyhow::Result<NamespaceTable> {
        let table =
            namespaces.map_or_else(|| self.config.namespaces.clone(), NamespaceTable::from);

        if table.is_empty() {
            anyhow::bail!(
                "Namespace table required.\n\n\
                 Provide it with one of:\n  \
                 1. --namespaces <URI>,<URI>,...\n  \
                 2. uanode config set namespaces <URI>,<URI>,...\n\n\
                 The table is the server's NamespaceArray (ns=0;i=2255) in index order."
            );
        }

        Ok(table)
    }
}
