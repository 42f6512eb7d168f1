//! Node identity holding the namespace as index, as name, or both.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use uanode_types::{
    format_node_id, has_namespace_prefix, split_node_id, BrowsePathTarget, ExpandedNodeId,
    NamespaceSource, NodeIdError, QualifiedName, Result,
};

use crate::update::{NodeChanges, NodeUpdate};

/// Identity of a node on an OPC UA server.
///
/// The namespace is known as a session-local index, as a stable URI name, as
/// both, or not at all. The two halves are kept consistent: changing one half
/// without supplying the other invalidates the other, so an identity never
/// pairs a stale index with a fresh name. A namespace table fills in the
/// missing half through [`UniversalNode::resolve_namespace`].
///
/// ```rust
/// use uanode::UniversalNode;
/// use uanode_types::NamespaceTable;
///
/// let table = NamespaceTable::new(["", "http://opcfoundation.org/UA/", "urn:example:ns"]);
/// let mut node = UniversalNode::from("ns=2;Temperature");
/// node.resolve_namespace(&table);
///
/// assert_eq!(node.namespace_name(), "urn:example:ns");
/// assert_eq!(node.to_expanded_node_id().namespace_uri, "urn:example:ns");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawUniversalNode")]
pub struct UniversalNode {
    #[serde(default)]
    namespace_index: Option<u16>,

    #[serde(default)]
    namespace_name: String,

    #[serde(default)]
    node_identifier: String,
}

impl UniversalNode {
    /// Create an identity with nothing known
    #[must_use]
    pub const fn new() -> Self {
        Self {
            namespace_index: None,
            namespace_name: String::new(),
            node_identifier: String::new(),
        }
    }

    /// Create an identity from a node id string.
    ///
    /// `ns=<index>;<identifier>` yields a known index; anything else,
    /// including malformed compact strings, becomes a bare identifier.
    #[must_use]
    pub fn from_node_id(node_id: &str) -> Self {
        let mut node = Self::new();
        node.set_node_identifier(node_id);
        node
    }

    /// Create an identity from a namespace URI and an identifier
    pub fn with_namespace_name(
        namespace_name: impl Into<String>,
        node_identifier: impl Into<String>,
    ) -> Result<Self> {
        let mut node = Self::new();
        node.set_members(
            NodeUpdate::new()
                .namespace_name(namespace_name)
                .node_identifier(node_identifier),
        )?;
        Ok(node)
    }

    /// Create an identity from a namespace index and an identifier
    pub fn with_namespace_index(
        namespace_index: u16,
        node_identifier: impl Into<String>,
    ) -> Result<Self> {
        let mut node = Self::new();
        node.set_members(
            NodeUpdate::new()
                .namespace_index(namespace_index)
                .node_identifier(node_identifier),
        )?;
        Ok(node)
    }

    /// Namespace index, if known
    #[must_use]
    pub const fn namespace_index(&self) -> Option<u16> {
        self.namespace_index
    }

    /// Returns true if the namespace index is known
    #[must_use]
    pub const fn is_namespace_index_valid(&self) -> bool {
        self.namespace_index.is_some()
    }

    /// Namespace URI, empty if unknown
    #[must_use]
    pub fn namespace_name(&self) -> &str {
        &self.namespace_name
    }

    /// Returns true if the namespace URI is known
    #[must_use]
    pub fn is_namespace_name_valid(&self) -> bool {
        !self.namespace_name.is_empty()
    }

    /// Identifier within the namespace
    #[must_use]
    pub fn node_identifier(&self) -> &str {
        &self.node_identifier
    }

    /// Apply `update` in one step and report what changed.
    ///
    /// Fails without touching the node if the supplied identifier carries a
    /// `ns=` prefix.
    pub fn set_members(&mut self, update: NodeUpdate) -> Result<NodeChanges> {
        if let Some(identifier) = &update.node_identifier {
            validate_identifier(identifier)?;
        }
        Ok(self.apply(update))
    }

    /// Set the namespace index; a changed index clears the namespace name
    pub fn set_namespace_index(&mut self, namespace_index: u16) -> NodeChanges {
        self.apply(NodeUpdate::new().namespace_index(namespace_index))
    }

    /// Set the namespace name; a changed name invalidates the namespace index
    pub fn set_namespace_name(&mut self, namespace_name: impl Into<String>) -> NodeChanges {
        self.apply(NodeUpdate::new().namespace_name(namespace_name))
    }

    /// Set the namespace from text: a number selects the index, anything
    /// else the name.
    pub fn set_namespace(&mut self, namespace: &str) -> NodeChanges {
        match namespace.parse::<u16>() {
            Ok(index) => self.set_namespace_index(index),
            Err(_) => self.set_namespace_name(namespace),
        }
    }

    /// Set the identifier from a node id string.
    ///
    /// A well-formed `ns=<index>;<identifier>` also sets the index, and a bare
    /// identifier leaves the namespace alone. A malformed compact string is
    /// kept whole as the identifier and the namespace becomes unknown, so a
    /// prefixed identifier never sits next to a namespace.
    pub fn set_node_identifier(&mut self, node_id: &str) -> NodeChanges {
        if let Some((index, identifier)) = parse_node_id(node_id) {
            return self.apply(
                NodeUpdate::new()
                    .namespace_index(index)
                    .node_identifier(identifier),
            );
        }

        let changes = self.apply(NodeUpdate::new().node_identifier(node_id));
        if has_namespace_prefix(node_id) {
            changes.merge(self.clear_namespace())
        } else {
            changes
        }
    }

    /// Make this node equal to `other` and report what changed
    pub fn assign_from(&mut self, other: &Self) -> NodeChanges {
        let changes = NodeChanges {
            namespace_index: self.namespace_index != other.namespace_index,
            namespace_name: self.namespace_name != other.namespace_name,
            node_identifier: self.node_identifier != other.node_identifier,
        };
        self.clone_from(other);
        changes
    }

    /// Fill in whichever namespace half is missing.
    ///
    /// Looks up the name when it is unknown, otherwise the index when that is
    /// unknown; does nothing when both are known.
    pub fn resolve_namespace<S>(&mut self, namespaces: &S) -> NodeChanges
    where
        S: NamespaceSource + ?Sized,
    {
        if self.namespace_name.is_empty() {
            self.resolve_namespace_index_to_name(namespaces)
        } else if self.namespace_index.is_none() {
            self.resolve_namespace_name_to_index(namespaces)
        } else {
            NodeChanges::default()
        }
    }

    /// Look up the namespace name for the known index
    pub fn resolve_namespace_index_to_name<S>(&mut self, namespaces: &S) -> NodeChanges
    where
        S: NamespaceSource + ?Sized,
    {
        let Some(index) = self.namespace_index else {
            warn!(
                identifier = %self.node_identifier,
                "Could not resolve namespace: namespace index is not valid"
            );
            return NodeChanges::default();
        };

        let table = namespaces.namespaces();
        if table.is_empty() {
            warn!("Namespace table missing, unable to resolve namespace name");
            return NodeChanges::default();
        }

        let Some(name) = namespaces.namespace_name(index) else {
            warn!(index, table_len = table.len(), "Namespace index not in a valid range");
            return NodeChanges::default();
        };

        debug!(index, namespace = name, "Resolved namespace index to name");
        let update = NodeUpdate::new()
            .namespace_index(index)
            .namespace_name(name);
        self.apply(update)
    }

    /// Look up the namespace index for the known name.
    ///
    /// Does nothing if the index is already known.
    pub fn resolve_namespace_name_to_index<S>(&mut self, namespaces: &S) -> NodeChanges
    where
        S: NamespaceSource + ?Sized,
    {
        if self.namespace_index.is_some() {
            return NodeChanges::default();
        }

        let table = namespaces.namespaces();
        if table.is_empty() {
            warn!("Namespace table missing, unable to resolve namespace index");
            return NodeChanges::default();
        }

        if self.namespace_name.is_empty() {
            warn!(
                identifier = %self.node_identifier,
                "Could not resolve namespace: namespace name is empty"
            );
            return NodeChanges::default();
        }

        let Some(index) = namespaces.namespace_index(&self.namespace_name) else {
            warn!(
                namespace = %self.namespace_name,
                table = ?table,
                "Could not resolve namespace: namespace not found"
            );
            return NodeChanges::default();
        };

        debug!(index, namespace = %self.namespace_name, "Resolved namespace name to index");
        let update = NodeUpdate::new()
            .namespace_index(index)
            .namespace_name(self.namespace_name.clone());
        self.apply(update)
    }

    /// Qualified name `(index, identifier)`, if index and identifier are known
    #[must_use]
    pub fn qualified_name(&self) -> Option<QualifiedName> {
        match self.namespace_index {
            Some(index) if !self.node_identifier.is_empty() => {
                Some(QualifiedName::new(index, self.node_identifier.as_str()))
            }
            _ => None,
        }
    }

    /// Qualified name, or the default value when information is missing
    #[must_use]
    pub fn to_qualified_name(&self) -> QualifiedName {
        self.qualified_name().unwrap_or_else(|| {
            warn!(
                identifier = %self.node_identifier,
                "Insufficient information to create a qualified name"
            );
            QualifiedName::default()
        })
    }

    /// Expanded node id on the local server, if name and identifier are known
    #[must_use]
    pub fn expanded_node_id(&self) -> Option<ExpandedNodeId> {
        if self.namespace_name.is_empty() || self.node_identifier.is_empty() {
            return None;
        }
        Some(ExpandedNodeId::new(
            self.namespace_name.as_str(),
            self.node_identifier.as_str(),
        ))
    }

    /// Expanded node id, or the default value when information is missing
    #[must_use]
    pub fn to_expanded_node_id(&self) -> ExpandedNodeId {
        self.expanded_node_id().unwrap_or_else(|| {
            warn!(
                identifier = %self.node_identifier,
                "Insufficient information to create an expanded node id"
            );
            ExpandedNodeId::default()
        })
    }

    /// `ns=<index>;<identifier>`, if index and identifier are known
    #[must_use]
    pub fn node_id_string(&self) -> Option<String> {
        match self.namespace_index {
            Some(index) if !self.node_identifier.is_empty() => {
                Some(format_node_id(index, &self.node_identifier))
            }
            _ => None,
        }
    }

    /// `ns=<index>;<identifier>`, or an empty string when information is missing
    #[must_use]
    pub fn to_node_id_string(&self) -> String {
        self.node_id_string().unwrap_or_else(|| {
            let mut message = String::from("Unable to construct a full node id");
            if self.node_identifier.is_empty() {
                message.push_str(" because node id string is empty");
            } else {
                message.push_str(" for node ");
                message.push_str(&self.node_identifier);
            }
            if self.namespace_index.is_none() {
                message.push_str("; namespace index is not valid");
            }
            warn!("{message}");
            String::new()
        })
    }

    /// Forget both namespace halves
    fn clear_namespace(&mut self) -> NodeChanges {
        let namespace_index = self.namespace_index.take().is_some();
        let namespace_name = !self.namespace_name.is_empty();
        self.namespace_name.clear();
        NodeChanges {
            namespace_index,
            namespace_name,
            node_identifier: false,
        }
    }

    /// Set fields without validating the identifier
    fn apply(&mut self, update: NodeUpdate) -> NodeChanges {
        let NodeUpdate {
            namespace_index,
            namespace_name,
            node_identifier,
        } = update;
        let mut changes = NodeChanges::default();

        if let Some(index) = namespace_index {
            if self.namespace_index != Some(index) {
                self.namespace_index = Some(index);
                changes.namespace_index = true;

                // Index changed without name given: invalidate name
                if namespace_name.is_none() && !self.namespace_name.is_empty() {
                    self.namespace_name.clear();
                    changes.namespace_name = true;
                }
            }
        }

        if let Some(name) = namespace_name {
            if name != self.namespace_name {
                self.namespace_name = name;
                changes.namespace_name = true;

                // Name changed without index given: invalidate index
                if namespace_index.is_none() && self.namespace_index.take().is_some() {
                    changes.namespace_index = true;
                }
            }
        }

        if let Some(identifier) = node_identifier {
            if identifier != self.node_identifier {
                self.node_identifier = identifier;
                changes.node_identifier = true;
            }
        }

        changes
    }
}

/// Split `ns=<index>;<identifier>`; `None` for bare or malformed input
fn parse_node_id(node_id: &str) -> Option<(u16, &str)> {
    if !has_namespace_prefix(node_id) {
        return None;
    }
    match split_node_id(node_id) {
        Ok(parts) => Some(parts),
        Err(err) => {
            warn!(node_id, error = %err, "Treating malformed node id as bare identifier");
            None
        }
    }
}

fn validate_identifier(identifier: &str) -> Result<()> {
    if has_namespace_prefix(identifier) {
        warn!(identifier, "Setting node identifier with namespace is not allowed");
        return Err(NodeIdError::IdentifierHasNamespace(identifier.to_string()));
    }
    Ok(())
}

/// Serialized form, checked before it becomes a [`UniversalNode`]
#[derive(Deserialize)]
struct RawUniversalNode {
    #[serde(default)]
    namespace_index: Option<u16>,

    #[serde(default)]
    namespace_name: String,

    #[serde(default)]
    node_identifier: String,
}

/// A prefixed identifier is only accepted with no namespace, and is then read
/// the same way [`UniversalNode::from_node_id`] reads it.
impl TryFrom<RawUniversalNode> for UniversalNode {
    type Error = NodeIdError;

    fn try_from(raw: RawUniversalNode) -> Result<Self> {
        let RawUniversalNode {
            namespace_index,
            namespace_name,
            node_identifier,
        } = raw;

        if namespace_index.is_none() && namespace_name.is_empty() {
            return Ok(Self::from_node_id(&node_identifier));
        }
        validate_identifier(&node_identifier)?;

        Ok(Self {
            namespace_index,
            namespace_name,
            node_identifier,
        })
    }
}

impl From<&str> for UniversalNode {
    fn from(node_id: &str) -> Self {
        Self::from_node_id(node_id)
    }
}

impl From<String> for UniversalNode {
    fn from(node_id: String) -> Self {
        Self::from_node_id(&node_id)
    }
}

impl TryFrom<&QualifiedName> for UniversalNode {
    type Error = NodeIdError;

    fn try_from(name: &QualifiedName) -> Result<Self> {
        Self::with_namespace_index(name.namespace_index, name.name.as_str())
    }
}

impl TryFrom<&ExpandedNodeId> for UniversalNode {
    type Error = NodeIdError;

    fn try_from(id: &ExpandedNodeId) -> Result<Self> {
        Self::with_namespace_name(id.namespace_uri.as_str(), id.node_id.as_str())
    }
}

/// Servers report browse-path targets with the node id in either compact or
/// bare form and the namespace URI only sometimes; whatever is present is
/// carried over.
impl TryFrom<&BrowsePathTarget> for UniversalNode {
    type Error = NodeIdError;

    fn try_from(target: &BrowsePathTarget) -> Result<Self> {
        let ExpandedNodeId {
            namespace_uri,
            node_id,
            ..
        } = &target.target_id;

        let (namespace_index, identifier) = match parse_node_id(node_id) {
            Some((index, identifier)) => (Some(index), identifier),
            None => (None, node_id.as_str()),
        };
        validate_identifier(identifier)?;

        let mut node = Self::new();
        node.apply(NodeUpdate {
            namespace_index,
            namespace_name: (!namespace_uri.is_empty()).then(|| namespace_uri.clone()),
            node_identifier: Some(identifier.to_string()),
        });
        Ok(node)
    }
}

impl fmt::Display for UniversalNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace_index {
            Some(index) => write!(f, "{}", format_node_id(index, &self.node_identifier)),
            None if !self.namespace_name.is_empty() => {
                write!(f, "nsu={};{}", self.namespace_name, self.node_identifier)
            }
            None => f.write_str(&self.node_identifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeEvent;
    use std::io;
    use std::sync::{Arc, Mutex};
    use uanode_types::NamespaceTable;

    const URI: &str = "urn:example:ns";

    fn table() -> NamespaceTable {
        NamespaceTable::new(["", "http://opcfoundation.org/UA/", URI])
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` and return every warning it logged
    fn captured_warnings(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn parses_compact_node_id() {
        let node = UniversalNode::from("ns=2;Temperature");
        assert_eq!(node.namespace_index(), Some(2));
        assert!(!node.is_namespace_name_valid());
        assert_eq!(node.node_identifier(), "Temperature");
    }

    #[test]
    fn bare_string_is_identifier_only() {
        let node = UniversalNode::from("Temperature");
        assert!(!node.is_namespace_index_valid());
        assert!(!node.is_namespace_name_valid());
        assert_eq!(node.node_identifier(), "Temperature");
    }

    #[test]
    fn malformed_compact_string_falls_back_to_bare_identifier() {
        for input in ["ns=2;a;b", "ns=x;Temperature", "ns=2", "ns=99999;Temperature"] {
            let node = UniversalNode::from(input);
            assert_eq!(node.namespace_index(), None, "{input}");
            assert_eq!(node.node_identifier(), input);
        }
    }

    #[test]
    fn malformed_identifier_update_clears_namespace() {
        let mut node = UniversalNode::from("ns=5;Temperature");
        let changes = node.set_node_identifier("ns=x;Pressure");

        assert!(changes.namespace_index && changes.node_identifier);
        assert_eq!(node.namespace_index(), None);
        assert_eq!(node.node_identifier(), "ns=x;Pressure");
        assert_eq!(node.qualified_name(), None);
        assert_eq!(node.node_id_string(), None);
        assert_eq!(node.to_node_id_string(), "");
        assert_eq!(node.to_string(), "ns=x;Pressure");

        let mut named = UniversalNode::with_namespace_name(URI, "Temperature").unwrap();
        let changes = named.set_node_identifier("ns=2;a;b");
        assert!(changes.namespace_name);
        assert!(!named.is_namespace_name_valid());
        assert_eq!(named.expanded_node_id(), None);
    }

    #[test]
    fn bare_identifier_update_keeps_namespace() {
        let mut node = UniversalNode::from("ns=5;Temperature");
        let changes = node.set_node_identifier("Pressure");
        assert!(!changes.namespace());
        assert_eq!(node.to_node_id_string(), "ns=5;Pressure");
    }

    #[test]
    fn compact_string_round_trips_when_name_never_set() {
        for input in ["ns=0;i=85", "ns=2;Temperature", "ns=65535;s=Line1.Pump"] {
            assert_eq!(UniversalNode::from(input).to_node_id_string(), input);
        }
    }

    #[test]
    fn index_to_name_then_expanded_node_id() {
        let mut node = UniversalNode::from("ns=2;Temperature");
        let changes = node.resolve_namespace_index_to_name(&table());

        assert!(changes.namespace_name);
        assert!(!changes.namespace_index);
        assert_eq!(node.namespace_name(), URI);
        assert_eq!(node.namespace_index(), Some(2));
        assert_eq!(
            node.to_expanded_node_id(),
            ExpandedNodeId {
                namespace_uri: URI.into(),
                node_id: "Temperature".into(),
                server_index: 0,
            }
        );
    }

    #[test]
    fn name_to_index_then_compact_string() {
        let mut node = UniversalNode::with_namespace_name(URI, "Temperature").unwrap();
        assert_eq!(node.namespace_index(), None);

        let changes = node.resolve_namespace_name_to_index(&table());
        assert!(changes.namespace_index);
        assert!(!changes.namespace_name);
        assert_eq!(node.namespace_index(), Some(2));
        assert_eq!(node.namespace_name(), URI);
        assert_eq!(node.to_node_id_string(), "ns=2;Temperature");
    }

    #[test]
    fn bare_identifier_has_no_qualified_name() {
        let node = UniversalNode::from("Temperature");
        assert_eq!(node.qualified_name(), None);
        assert!(node.to_qualified_name().is_empty());
    }

    #[test]
    fn conversions_return_defaults_when_incomplete() {
        let index_only = UniversalNode::with_namespace_index(2, "Temperature").unwrap();
        assert!(index_only.to_expanded_node_id().is_empty());
        assert_eq!(index_only.to_qualified_name(), QualifiedName::new(2, "Temperature"));

        let name_only = UniversalNode::with_namespace_name(URI, "Temperature").unwrap();
        assert_eq!(name_only.to_node_id_string(), "");
        assert!(name_only.to_qualified_name().is_empty());

        let no_identifier = UniversalNode::with_namespace_index(2, "").unwrap();
        assert_eq!(no_identifier.to_node_id_string(), "");
        assert!(no_identifier.to_qualified_name().is_empty());
    }

    #[test]
    fn empty_table_resolves_nothing() {
        let mut node = UniversalNode::from("ns=2;Temperature");
        let before = node.clone();

        assert!(node.resolve_namespace_index_to_name(&NamespaceTable::default()).is_empty());
        assert_eq!(node, before);

        let mut named = UniversalNode::with_namespace_name(URI, "Temperature").unwrap();
        assert!(named.resolve_namespace_name_to_index(&Vec::<String>::new()).is_empty());
        assert_eq!(named.namespace_index(), None);
    }

    #[test]
    fn out_of_range_index_resolves_nothing() {
        let mut node = UniversalNode::from("ns=7;Temperature");
        assert!(node.resolve_namespace_index_to_name(&table()).is_empty());
        assert!(!node.is_namespace_name_valid());
    }

    #[test]
    fn failed_resolution_and_conversions_warn() {
        let logs = captured_warnings(|| {
            let mut node = UniversalNode::from("ns=2;Temperature");
            node.resolve_namespace_index_to_name(&NamespaceTable::default());

            let mut node = UniversalNode::from("ns=7;Temperature");
            node.resolve_namespace_index_to_name(&table());

            let mut node = UniversalNode::with_namespace_name("urn:missing", "Temperature")
                .unwrap();
            node.resolve_namespace_name_to_index(&table());

            let mut node = UniversalNode::from("Temperature");
            node.resolve_namespace_index_to_name(&table());

            let _ = node.to_qualified_name();
            let _ = node.to_expanded_node_id();
            let _ = node.to_node_id_string();
        });

        for expected in [
            "Namespace table missing, unable to resolve namespace name",
            "Namespace index not in a valid range",
            "Could not resolve namespace: namespace not found",
            "Could not resolve namespace: namespace index is not valid",
            "Insufficient information to create a qualified name",
            "Insufficient information to create an expanded node id",
            "Unable to construct a full node id for node Temperature",
        ] {
            assert!(logs.contains(expected), "missing {expected:?} in:\n{logs}");
        }
    }

    #[test]
    fn successful_resolution_does_not_warn() {
        let logs = captured_warnings(|| {
            let mut node = UniversalNode::from("ns=2;Temperature");
            node.resolve_namespace(&table());
            let _ = node.to_expanded_node_id();
            let _ = node.to_node_id_string();
        });
        assert!(!logs.contains("WARN"), "{logs}");
    }

    #[test]
    fn unknown_name_resolves_nothing() {
        let mut node = UniversalNode::with_namespace_name("urn:missing", "Temperature").unwrap();
        assert!(node.resolve_namespace_name_to_index(&table()).is_empty());
        assert_eq!(node.namespace_index(), None);
        assert_eq!(node.namespace_name(), "urn:missing");
    }

    #[test]
    fn resolving_without_prerequisite_is_a_no_op() {
        let mut node = UniversalNode::from("Temperature");
        assert!(node.resolve_namespace_index_to_name(&table()).is_empty());
        assert!(node.resolve_namespace_name_to_index(&table()).is_empty());
        assert!(node.resolve_namespace(&table()).is_empty());
        assert_eq!(node, UniversalNode::from("Temperature"));
    }

    #[test]
    fn resolution_is_idempotent() {
        let mut node = UniversalNode::from("ns=2;Temperature");
        assert!(node.resolve_namespace_index_to_name(&table()).any());
        assert!(node.resolve_namespace_name_to_index(&table()).is_empty());
        assert!(node.resolve_namespace_index_to_name(&table()).is_empty());
        assert!(node.resolve_namespace(&table()).is_empty());

        let mut named = UniversalNode::with_namespace_name(URI, "Temperature").unwrap();
        assert!(named.resolve_namespace_name_to_index(&table()).any());
        assert!(named.resolve_namespace_index_to_name(&table()).is_empty());
        assert!(named.resolve_namespace_name_to_index(&table()).is_empty());
        assert_eq!(node, named);
    }

    #[test]
    fn resolve_picks_direction() {
        let mut by_index = UniversalNode::from("ns=1;i=85");
        by_index.resolve_namespace(&table());
        assert_eq!(by_index.namespace_name(), "http://opcfoundation.org/UA/");

        let mut by_name = UniversalNode::with_namespace_name(URI, "Pump").unwrap();
        by_name.resolve_namespace(&table());
        assert_eq!(by_name.namespace_index(), Some(2));
    }

    #[test]
    fn first_matching_namespace_wins() {
        let duplicated = NamespaceTable::new(["", URI, URI]);
        let mut node = UniversalNode::with_namespace_name(URI, "Pump").unwrap();
        node.resolve_namespace_name_to_index(&duplicated);
        assert_eq!(node.namespace_index(), Some(1));
    }

    #[test]
    fn setting_index_clears_name() {
        let mut node = UniversalNode::from("ns=2;Temperature");
        node.resolve_namespace(&table());
        assert!(node.is_namespace_name_valid());

        let changes = node.set_namespace_index(1);
        assert!(changes.namespace_index);
        assert!(changes.namespace_name);
        assert_eq!(node.namespace_index(), Some(1));
        assert_eq!(node.namespace_name(), "");
    }

    #[test]
    fn setting_name_invalidates_index() {
        let mut node = UniversalNode::from("ns=2;Temperature");
        node.resolve_namespace(&table());

        let changes = node.set_namespace_name("urn:other");
        assert!(changes.namespace_index);
        assert!(changes.namespace_name);
        assert_eq!(node.namespace_index(), None);
        assert_eq!(node.namespace_name(), "urn:other");
    }

    #[test]
    fn unchanged_index_keeps_name() {
        let mut node = UniversalNode::from("ns=2;Temperature");
        node.resolve_namespace(&table());

        assert!(node.set_namespace_index(2).is_empty());
        assert_eq!(node.namespace_name(), URI);
    }

    #[test]
    fn supplying_both_halves_keeps_both() {
        let mut node = UniversalNode::from("Temperature");
        let changes = node
            .set_members(
                NodeUpdate::new()
                    .namespace_index(2)
                    .namespace_name(URI),
            )
            .unwrap();
        assert!(changes.namespace_index && changes.namespace_name);
        assert!(!changes.node_identifier);
        assert_eq!(node.namespace_index(), Some(2));
        assert_eq!(node.namespace_name(), URI);
    }

    #[test]
    fn set_members_reports_only_real_changes() {
        let mut node = UniversalNode::with_namespace_index(2, "Temperature").unwrap();
        let changes = node
            .set_members(
                NodeUpdate::new()
                    .namespace_index(2)
                    .node_identifier("Temperature"),
            )
            .unwrap();
        assert!(changes.is_empty());

        let changes = node
            .set_members(NodeUpdate::new().node_identifier("Pressure"))
            .unwrap();
        assert_eq!(
            changes,
            NodeChanges {
                node_identifier: true,
                ..NodeChanges::default()
            }
        );
    }

    #[test]
    fn prefixed_identifier_is_rejected() {
        let mut node = UniversalNode::with_namespace_index(2, "Temperature").unwrap();
        let err = node
            .set_members(
                NodeUpdate::new()
                    .namespace_index(3)
                    .node_identifier("ns=3;Pressure"),
            )
            .unwrap_err();
        assert_eq!(err, NodeIdError::IdentifierHasNamespace("ns=3;Pressure".into()));
        assert_eq!(node, UniversalNode::with_namespace_index(2, "Temperature").unwrap());

        assert!(UniversalNode::with_namespace_name(URI, "ns=2;x").is_err());
        assert!(UniversalNode::try_from(&QualifiedName::new(1, "ns=1;x")).is_err());
    }

    #[test]
    fn notifications_follow_field_order() {
        let mut node = UniversalNode::from("ns=2;Temperature");
        node.resolve_namespace(&table());

        let changes = node
            .set_members(
                NodeUpdate::new()
                    .namespace_index(1)
                    .node_identifier("i=85"),
            )
            .unwrap();
        assert_eq!(
            changes.events(&node),
            vec![
                NodeEvent::NamespaceIndexChanged(Some(1)),
                NodeEvent::NamespaceNameChanged(String::new()),
                NodeEvent::NodeIdentifierChanged("i=85".into()),
                NodeEvent::NamespaceChanged,
                NodeEvent::NodeChanged,
            ]
        );
    }

    #[test]
    fn identifier_change_skips_namespace_notification() {
        let mut node = UniversalNode::from("ns=2;Temperature");
        let changes = node.set_node_identifier("Pressure");
        assert_eq!(node.to_node_id_string(), "ns=2;Pressure");
        assert_eq!(
            changes.events(&node),
            vec![
                NodeEvent::NodeIdentifierChanged("Pressure".into()),
                NodeEvent::NodeChanged,
            ]
        );
    }

    #[test]
    fn set_namespace_accepts_index_or_name() {
        let mut node = UniversalNode::from("Temperature");
        node.set_namespace("2");
        assert_eq!(node.namespace_index(), Some(2));

        node.set_namespace(URI);
        assert_eq!(node.namespace_index(), None);
        assert_eq!(node.namespace_name(), URI);
    }

    #[test]
    fn unknown_index_compares_equal_regardless_of_history() {
        let mut was_indexed = UniversalNode::from("ns=5;Temperature");
        was_indexed.set_namespace_name(URI);

        let never_indexed = UniversalNode::with_namespace_name(URI, "Temperature").unwrap();
        assert_eq!(was_indexed, never_indexed);
    }

    #[test]
    fn equality_across_construction_forms() {
        let from_string = UniversalNode::from("ns=2;Temperature");
        let from_index = UniversalNode::with_namespace_index(2, "Temperature").unwrap();
        let from_qualified =
            UniversalNode::try_from(&QualifiedName::new(2, "Temperature")).unwrap();

        assert_eq!(from_string, from_index);
        assert_eq!(from_index, from_qualified);
        assert_eq!(from_string, from_qualified);
        assert_ne!(from_string, UniversalNode::from("ns=1;Temperature"));
    }

    #[test]
    fn converts_from_expanded_node_id() {
        let node = UniversalNode::try_from(&ExpandedNodeId::new(URI, "Temperature")).unwrap();
        assert_eq!(node.namespace_name(), URI);
        assert_eq!(node.namespace_index(), None);
        assert_eq!(node.expanded_node_id(), Some(ExpandedNodeId::new(URI, "Temperature")));
    }

    #[test]
    fn converts_from_browse_path_target() {
        let both = BrowsePathTarget::new(ExpandedNodeId::new(URI, "ns=2;Temperature"));
        let node = UniversalNode::try_from(&both).unwrap();
        assert_eq!(node.namespace_index(), Some(2));
        assert_eq!(node.namespace_name(), URI);
        assert_eq!(node.node_identifier(), "Temperature");

        let index_only = BrowsePathTarget::new(ExpandedNodeId::new("", "ns=2;Temperature"));
        let node = UniversalNode::try_from(&index_only).unwrap();
        assert_eq!(node, UniversalNode::from("ns=2;Temperature"));

        let bare = BrowsePathTarget::new(ExpandedNodeId::new("", "Temperature"));
        assert_eq!(UniversalNode::try_from(&bare).unwrap(), UniversalNode::from("Temperature"));

        let malformed = BrowsePathTarget::new(ExpandedNodeId::new(URI, "ns=2;a;b"));
        assert!(UniversalNode::try_from(&malformed).is_err());
    }

    #[test]
    fn assign_from_copies_and_reports() {
        let mut node = UniversalNode::from("ns=2;Temperature");
        let other = UniversalNode::with_namespace_name(URI, "Temperature").unwrap();

        let changes = node.assign_from(&other);
        assert_eq!(node, other);
        assert!(changes.namespace_index && changes.namespace_name);
        assert!(!changes.node_identifier);
        assert!(node.assign_from(&other).is_empty());
    }

    #[test]
    fn display_prefers_compact_form() {
        assert_eq!(UniversalNode::from("ns=2;Temperature").to_string(), "ns=2;Temperature");
        assert_eq!(
            UniversalNode::with_namespace_name(URI, "Temperature")
                .unwrap()
                .to_string(),
            "nsu=urn:example:ns;Temperature"
        );
        assert_eq!(UniversalNode::from("Temperature").to_string(), "Temperature");
    }

    #[test]
    fn serde_keeps_unknown_index() {
        let node = UniversalNode::with_namespace_name(URI, "Temperature").unwrap();
        let json = serde_json::to_string(&node).unwrap();
        let back: UniversalNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
        assert_eq!(back.namespace_index(), None);
    }

    #[test]
    fn serde_rejects_prefixed_identifier_with_namespace() {
        let err = serde_json::from_str::<UniversalNode>(
            r#"{"namespace_index":1,"node_identifier":"ns=2;x"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("ns=2;x"), "{err}");

        let named = r#"{"namespace_name":"urn:example:ns","node_identifier":"ns=2;x"}"#;
        assert!(serde_json::from_str::<UniversalNode>(named).is_err());
    }

    #[test]
    fn serde_reads_lone_identifier_like_a_node_id() {
        let node: UniversalNode = serde_json::from_str(r#"{"node_identifier":"ns=2;x"}"#).unwrap();
        assert_eq!(node, UniversalNode::from("ns=2;x"));

        let malformed = UniversalNode::from("ns=x;Temperature");
        let json = serde_json::to_string(&malformed).unwrap();
        let back: UniversalNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, malformed);
    }
}
