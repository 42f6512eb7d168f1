//! # uanode-cli
//!
//! Command-line interface for OPC UA node identities.
//!
//! ## Features
//!
//! - **Parse**: split `ns=<index>;<identifier>` strings and show every addressing form
//! - **Resolve**: fill in namespace index or URI from a namespace table
//! - **Browse paths**: build relative paths and print their text form
//! - **Configuration**: a persisted default namespace table and output format
//! - **Multiple output formats**: pretty text, JSON, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
