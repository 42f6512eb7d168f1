use thiserror::Error;

/// Result type alias for node id operations
pub type Result<T> = std::result::Result<T, NodeIdError>;

/// Errors raised by strict parsing and identifier validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeIdError {
    /// The input does not start with `ns=`
    #[error("node id has no namespace prefix: {0}")]
    MissingNamespacePrefix(String),

    /// The input starts with `ns=` but is not exactly `ns=<index>;<identifier>`
    #[error("invalid node identifier: {0}")]
    MalformedNodeId(String),

    /// The namespace part is not a number in the `u16` range
    #[error("namespace index is not a number: {0}")]
    InvalidNamespaceIndex(String),

    /// A raw identifier was given that already carries a namespace prefix
    #[error("setting node identifier with namespace is not allowed: {0}")]
    IdentifierHasNamespace(String),

    /// Qualified name text that is not `<index>:<name>`
    #[error("invalid qualified name: {0}")]
    InvalidQualifiedName(String),

    /// Neither a known reference type name nor its node id
    #[error("unknown reference type: {0}")]
    UnknownReferenceType(String),
}

impl NodeIdError {
    /// Returns true if the error came from parsing text input
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MissingNamespacePrefix(_)
                | Self::MalformedNodeId(_)
                | Self::InvalidNamespaceIndex(_)
                | Self::InvalidQualifiedName(_)
        )
    }

    /// Returns true if the error rejected an identifier during an update
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::IdentifierHasNamespace(_))
    }

    /// Returns the offending input
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::MissingNamespacePrefix(s)
            | Self::MalformedNodeId(s)
            | Self::InvalidNamespaceIndex(s)
            | Self::IdentifierHasNamespace(s)
            | Self::InvalidQualifiedName(s)
            | Self::UnknownReferenceType(s) => s,
        }
    }
}
