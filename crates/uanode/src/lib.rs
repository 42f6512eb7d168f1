//! Node identity and addressing for OPC UA clients.
//!
//! This crate provides [`UniversalNode`], an identity that holds a node's
//! namespace as a session-local index, a stable URI, or both, keeps the two
//! consistent under partial updates, and converts to the addressing forms a
//! client needs:
//!
//! - [`QualifiedName`] for browse names
//! - [`ExpandedNodeId`] for session-independent addressing
//! - the compact `ns=<index>;<identifier>` string
//!
//! [`PathSegment`] and [`RelativePath`] describe multi-hop browse paths whose
//! resolved targets convert back into a [`UniversalNode`].
//!
//! Nothing here fails fatally on incomplete input. Resolution and conversion
//! report problems through `tracing` and return an empty result; only raw
//! identifiers carrying an `ns=` prefix are rejected with an error.
//!
//! # Example
//!
//! ```rust
//! use uanode::{NodeUpdate, UniversalNode};
//! use uanode_types::NamespaceTable;
//!
//! let table = NamespaceTable::new(["", "http://opcfoundation.org/UA/", "urn:example:ns"]);
//!
//! let mut node = UniversalNode::with_namespace_name("urn:example:ns", "Temperature")?;
//! node.resolve_namespace(&table);
//! assert_eq!(node.to_node_id_string(), "ns=2;Temperature");
//!
//! let changes = node.set_members(NodeUpdate::new().node_identifier("Pressure"))?;
//! assert!(changes.node_identifier && !changes.namespace());
//! # Ok::<(), uanode::NodeIdError>(())
//! ```

#![doc(html_root_url = "https://docs.rs/uanode/0.3.0")]

mod node;
mod path;
mod update;

pub use node::UniversalNode;
pub use path::{PathSegment, RelativePath};
pub use update::{NodeChanges, NodeEvent, NodeObserver, NodeUpdate};
pub use uanode_types::{
    BrowsePathTarget, ExpandedNodeId, NamespaceSource, NamespaceTable, NodeIdError,
    QualifiedName, ReferenceTypeId, Result,
};
