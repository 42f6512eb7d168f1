//! Value types at the boundary between a node identity and the OPC UA protocol layer.
//!
//! This crate provides the foundational types used across the uanode workspace:
//!
//! - **Types**: qualified names, expanded node ids, browse-path targets,
//!   well-known reference types, namespace tables and the compact
//!   `ns=<index>;<identifier>` node-id string
//! - **Errors**: strict parsing and validation failures via [`NodeIdError`]
//!
//! # Example
//!
//! ```rust
//! use uanode_types::{CompactNodeId, NamespaceTable};
//!
//! let node_id: CompactNodeId = "ns=2;Temperature".parse().unwrap();
//! let table = NamespaceTable::new(["", "http://opcfoundation.org/UA/", "urn:example:ns"]);
//!
//! assert_eq!(table.get(node_id.namespace_index), Some("urn:example:ns"));
//! ```

#![doc(html_root_url = "https://docs.rs/uanode-types/0.3.0")]

mod error;
pub mod types;

pub use error::{NodeIdError, Result};
pub use types::*;
