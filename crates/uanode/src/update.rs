//! Partial updates of a node identity and the change reports they produce.

use crate::UniversalNode;

/// A set of field updates applied to a [`UniversalNode`] in one step.
///
/// Fields left as `None` are not supplied. Supplying only one half of the
/// namespace (index or name) invalidates the other half when the supplied
/// half changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeUpdate {
    /// New namespace index
    pub namespace_index: Option<u16>,

    /// New namespace name; an empty string marks the name unknown
    pub namespace_name: Option<String>,

    /// New node identifier, without a namespace prefix
    pub node_identifier: Option<String>,
}

impl NodeUpdate {
    /// Create an update that supplies nothing
    #[must_use]
    pub const fn new() -> Self {
        Self {
            namespace_index: None,
            namespace_name: None,
            node_identifier: None,
        }
    }

    /// Supply the namespace index
    #[must_use]
    pub const fn namespace_index(mut self, index: u16) -> Self {
        self.namespace_index = Some(index);
        self
    }

    /// Supply the namespace name
    #[must_use]
    pub fn namespace_name(mut self, name: impl Into<String>) -> Self {
        self.namespace_name = Some(name.into());
        self
    }

    /// Supply the node identifier
    #[must_use]
    pub fn node_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.node_identifier = Some(identifier.into());
        self
    }

    /// Returns true if no field is supplied
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.namespace_index.is_none()
            && self.namespace_name.is_none()
            && self.node_identifier.is_none()
    }
}

/// Which fields of a node an update actually changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeChanges {
    /// Namespace index was set or invalidated
    pub namespace_index: bool,

    /// Namespace name was set or cleared
    pub namespace_name: bool,

    /// Node identifier was replaced
    pub node_identifier: bool,
}

impl NodeChanges {
    /// Returns true if either half of the namespace changed
    #[must_use]
    pub const fn namespace(&self) -> bool {
        self.namespace_index || self.namespace_name
    }

    /// Returns true if anything changed
    #[must_use]
    pub const fn any(&self) -> bool {
        self.namespace() || self.node_identifier
    }

    /// Returns true if nothing changed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.any()
    }

    /// Combine the changes of two consecutive updates
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            namespace_index: self.namespace_index || other.namespace_index,
            namespace_name: self.namespace_name || other.namespace_name,
            node_identifier: self.node_identifier || other.node_identifier,
        }
    }

    /// Notifications for these changes in delivery order: index, name,
    /// identifier, then the namespace aggregate, then the node aggregate.
    #[must_use]
    pub fn events(&self, node: &UniversalNode) -> Vec<NodeEvent> {
        let mut events = Vec::new();
        self.notify(node, &mut events);
        events
    }

    /// Deliver notifications for these changes to `observer`.
    ///
    /// `node` is the node after the update; its current values are passed to
    /// the per-field callbacks.
    pub fn notify<O: NodeObserver + ?Sized>(&self, node: &UniversalNode, observer: &mut O) {
        if self.namespace_index {
            observer.namespace_index_changed(node.namespace_index());
        }
        if self.namespace_name {
            observer.namespace_name_changed(node.namespace_name());
        }
        if self.node_identifier {
            observer.node_identifier_changed(node.node_identifier());
        }
        if self.namespace() {
            observer.namespace_changed();
        }
        if self.any() {
            observer.node_changed();
        }
    }
}

/// A single change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeEvent {
    /// New namespace index, `None` when invalidated
    NamespaceIndexChanged(Option<u16>),
    /// New namespace name, empty when cleared
    NamespaceNameChanged(String),
    /// New node identifier
    NodeIdentifierChanged(String),
    /// Index or name changed
    NamespaceChanged,
    /// Anything changed
    NodeChanged,
}

/// Receives change notifications from [`NodeChanges::notify`].
///
/// All callbacks default to doing nothing.
pub trait NodeObserver {
    /// The namespace index was set or invalidated
    fn namespace_index_changed(&mut self, _index: Option<u16>) {}

    /// The namespace name was set or cleared
    fn namespace_name_changed(&mut self, _name: &str) {}

    /// The node identifier was replaced
    fn node_identifier_changed(&mut self, _identifier: &str) {}

    /// Index or name changed
    fn namespace_changed(&mut self) {}

    /// Anything changed
    fn node_changed(&mut self) {}
}

/// Records every notification in order.
impl NodeObserver for Vec<NodeEvent> {
    fn namespace_index_changed(&mut self, index: Option<u16>) {
        self.push(NodeEvent::NamespaceIndexChanged(index));
    }

    fn namespace_name_changed(&mut self, name: &str) {
        self.push(NodeEvent::NamespaceNameChanged(name.to_string()));
    }

    fn node_identifier_changed(&mut self, identifier: &str) {
        self.push(NodeEvent::NodeIdentifierChanged(identifier.to_string()));
    }

    fn namespace_changed(&mut self) {
        self.push(NodeEvent::NamespaceChanged);
    }

    fn node_changed(&mut self) {
        self.push(NodeEvent::NodeChanged);
    }
}
