use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{NodeIdError, Result};

/// Browse name of a node: a name qualified by a namespace index.
///
/// The default value (index 0, empty name) doubles as the
/// "insufficient information" result of conversions that could not produce
/// a qualified name. Check [`QualifiedName::is_empty`] before using one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    /// Namespace index the name belongs to
    pub namespace_index: u16,

    /// Name part
    pub name: String,
}

impl QualifiedName {
    /// Create a qualified name
    #[must_use]
    pub fn new(namespace_index: u16, name: impl Into<String>) -> Self {
        Self {
            namespace_index,
            name: name.into(),
        }
    }

    /// Returns true if this is the default, carrying no name
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespace_index == 0 && self.name.is_empty()
    }
}

/// Parses the `<index>:<name>` text form.
///
/// Text without a numeric prefix is a name in namespace 0, so `urn:a` is the
/// name `urn:a` rather than a parse failure.
impl FromStr for QualifiedName {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((index, name))
                if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) =>
            {
                let index = index
                    .parse()
                    .map_err(|_| NodeIdError::InvalidQualifiedName(s.to_string()))?;
                Ok(Self::new(index, name))
            }
            Some(("", _)) => Err(NodeIdError::InvalidQualifiedName(s.to_string())),
            _ => Ok(Self::new(0, s)),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace_index, self.name)
    }
}
