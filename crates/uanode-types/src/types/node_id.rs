//! The compact `ns=<index>;<identifier>` node-id string.
//!
//! This is the only textual node-id format understood here. Identifiers that
//! contain a literal `;` are not escaped, so such an identifier cannot round-trip
//! through the compact form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{NodeIdError, Result};

/// Literal prefix that introduces the namespace index in the compact form.
pub const NAMESPACE_PREFIX: &str = "ns=";

/// Separator between the namespace part and the identifier.
pub const NAMESPACE_SEPARATOR: char = ';';

/// Returns true if `s` starts with the compact-form namespace prefix.
#[must_use]
pub fn has_namespace_prefix(s: &str) -> bool {
    s.starts_with(NAMESPACE_PREFIX)
}

/// Split a compact node-id string into namespace index and identifier.
///
/// The input must be exactly `ns=<index>;<identifier>` with `<index>` a
/// decimal number in the `u16` range.
///
/// ```rust
/// use uanode_types::split_node_id;
///
/// assert_eq!(split_node_id("ns=2;Temperature").unwrap(), (2, "Temperature"));
/// assert!(split_node_id("ns=2;a;b").is_err());
/// ```
pub fn split_node_id(s: &str) -> Result<(u16, &str)> {
    if !has_namespace_prefix(s) {
        return Err(NodeIdError::MissingNamespacePrefix(s.to_string()));
    }

    let mut parts = s.split(NAMESPACE_SEPARATOR);
    let (Some(namespace), Some(identifier), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(NodeIdError::MalformedNodeId(s.to_string()));
    };

    let index = namespace[NAMESPACE_PREFIX.len()..]
        .parse::<u16>()
        .map_err(|_| NodeIdError::InvalidNamespaceIndex(s.to_string()))?;

    Ok((index, identifier))
}

/// Format a namespace index and identifier as `ns=<index>;<identifier>`.
#[must_use]
pub fn format_node_id(namespace_index: u16, identifier: &str) -> String {
    format!("{NAMESPACE_PREFIX}{namespace_index}{NAMESPACE_SEPARATOR}{identifier}")
}

/// A node id in its compact string form, split into its two parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompactNodeId {
    /// Server-local namespace index
    pub namespace_index: u16,

    /// Identifier within the namespace, without any prefix
    pub identifier: String,
}

impl CompactNodeId {
    /// Create a compact node id from its parts
    #[must_use]
    pub fn new(namespace_index: u16, identifier: impl Into<String>) -> Self {
        Self {
            namespace_index,
            identifier: identifier.into(),
        }
    }
}

impl FromStr for CompactNodeId {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self> {
        let (namespace_index, identifier) = split_node_id(s)?;
        Ok(Self::new(namespace_index, identifier))
    }
}

impl fmt::Display for CompactNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{NAMESPACE_PREFIX}{}{NAMESPACE_SEPARATOR}{}",
            self.namespace_index, self.identifier
        )
    }
}
