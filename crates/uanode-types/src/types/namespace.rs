use serde::{Deserialize, Serialize};

/// Anything that exposes a server's namespace array.
///
/// The array is ordered: the URI at position `i` is the namespace with index
/// `i`. Implementors only lend the array for the duration of a call; nothing
/// here keeps it.
pub trait NamespaceSource {
    /// The namespace array, index-addressable
    fn namespaces(&self) -> &[String];

    /// URI of the namespace at `index`
    fn namespace_name(&self, index: u16) -> Option<&str> {
        self.namespaces()
            .get(usize::from(index))
            .map(String::as_str)
    }

    /// Index of the first namespace named exactly `name`
    fn namespace_index(&self, name: &str) -> Option<u16> {
        self.namespaces()
            .iter()
            .position(|ns| ns == name)
            .and_then(|i| u16::try_from(i).ok())
    }
}

impl NamespaceSource for [String] {
    fn namespaces(&self) -> &[String] {
        self
    }
}

impl NamespaceSource for Vec<String> {
    fn namespaces(&self) -> &[String] {
        self
    }
}

impl<const N: usize> NamespaceSource for [String; N] {
    fn namespaces(&self) -> &[String] {
        self
    }
}

/// Owned snapshot of a server's namespace array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceTable(Vec<String>);

impl NamespaceTable {
    /// Create a table from namespace URIs in index order
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(namespaces.into_iter().map(Into::into).collect())
    }

    /// URI of the namespace at `index`
    #[must_use]
    pub fn get(&self, index: u16) -> Option<&str> {
        self.namespace_name(index)
    }

    /// Index of the first namespace named exactly `name`
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<u16> {
        self.namespace_index(name)
    }

    /// Append a namespace, returning its index
    pub fn push(&mut self, name: impl Into<String>) -> Option<u16> {
        let index = u16::try_from(self.0.len()).ok()?;
        self.0.push(name.into());
        Some(index)
    }

    /// Number of namespaces
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the table holds no namespaces
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over namespace URIs in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl NamespaceSource for NamespaceTable {
    fn namespaces(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for NamespaceTable {
    fn from(namespaces: Vec<String>) -> Self {
        Self(namespaces)
    }
}

impl<S: Into<String>> FromIterator<S> for NamespaceTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for NamespaceTable {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
