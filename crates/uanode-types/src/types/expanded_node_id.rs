use serde::{Deserialize, Serialize};

/// Node id qualified by namespace URI and server index.
///
/// Portable across sessions because the namespace is named by URI instead of
/// by a session-local index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpandedNodeId {
    /// Namespace URI
    #[serde(default)]
    pub namespace_uri: String,

    /// Node id string; may itself be in compact `ns=<index>;<identifier>` form
    #[serde(default)]
    pub node_id: String,

    /// Index into the server table, 0 for the local server
    #[serde(default)]
    pub server_index: u32,
}

impl ExpandedNodeId {
    /// Create an expanded node id on the local server
    #[must_use]
    pub fn new(namespace_uri: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            namespace_uri: namespace_uri.into(),
            node_id: node_id.into(),
            server_index: 0,
        }
    }

    /// Returns true if this is the default, carrying no node id
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespace_uri.is_empty() && self.node_id.is_empty() && self.server_index == 0
    }
}
