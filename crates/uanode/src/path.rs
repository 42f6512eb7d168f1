//! Relative browse paths: the hops walked from a starting node to a target.

use serde::{Deserialize, Serialize};
use std::fmt;
use uanode_types::{QualifiedName, ReferenceTypeId};

/// One hop of a relative path.
///
/// Follows a reference of type `reference_type_id` (optionally its subtypes,
/// optionally in the inverse direction) to the child whose browse name is
/// `target_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathSegment {
    target_name: QualifiedName,
    reference_type_id: String,
    is_inverse: bool,
    include_subtypes: bool,
}

impl PathSegment {
    /// Create a segment with both flags unset
    #[must_use]
    pub fn new(target_name: QualifiedName, reference_type_id: impl Into<String>) -> Self {
        Self {
            target_name,
            reference_type_id: reference_type_id.into(),
            is_inverse: false,
            include_subtypes: false,
        }
    }

    /// Create a segment following a well-known reference type
    #[must_use]
    pub fn with_reference_type(
        target_name: QualifiedName,
        reference_type: ReferenceTypeId,
    ) -> Self {
        Self::new(target_name, reference_type.node_id())
    }

    /// Set the inverse flag
    #[must_use]
    pub const fn inverse(mut self, is_inverse: bool) -> Self {
        self.is_inverse = is_inverse;
        self
    }

    /// Set the include-subtypes flag
    #[must_use]
    pub const fn include_subtypes(mut self, include_subtypes: bool) -> Self {
        self.include_subtypes = include_subtypes;
        self
    }

    /// Browse name of the reference's target
    #[must_use]
    pub const fn target_name(&self) -> &QualifiedName {
        &self.target_name
    }

    /// Set the target's browse name, e.g. `QualifiedName::new(0, "DataTypes")`
    pub fn set_target_name(&mut self, target_name: QualifiedName) {
        self.target_name = target_name;
    }

    /// Node id of the reference type connecting this hop to the previous node
    #[must_use]
    pub fn reference_type_id(&self) -> &str {
        &self.reference_type_id
    }

    /// Set the reference type node id
    pub fn set_reference_type_id(&mut self, reference_type_id: impl Into<String>) {
        self.reference_type_id = reference_type_id.into();
    }

    /// Set the reference type from the well-known table
    pub fn set_reference_type(&mut self, reference_type: ReferenceTypeId) {
        self.reference_type_id = reference_type.node_id().to_string();
    }

    /// The well-known reference type, if the id is one
    #[must_use]
    pub fn reference_type(&self) -> Option<ReferenceTypeId> {
        ReferenceTypeId::from_node_id(&self.reference_type_id)
    }

    /// Whether the reference is followed from target to source
    #[must_use]
    pub const fn is_inverse(&self) -> bool {
        self.is_inverse
    }

    /// Set the inverse flag
    pub fn set_is_inverse(&mut self, is_inverse: bool) {
        self.is_inverse = is_inverse;
    }

    /// Whether subtypes of the reference type are followed too
    #[must_use]
    pub const fn is_include_subtypes(&self) -> bool {
        self.include_subtypes
    }

    /// Set the include-subtypes flag
    pub fn set_include_subtypes(&mut self, include_subtypes: bool) {
        self.include_subtypes = include_subtypes;
    }
}

/// Relative path text form: `/` and `.` abbreviate forward hierarchical and
/// aggregates references with subtypes, anything else is `<[#][!]Name>`
/// where `#` excludes subtypes and `!` marks an inverse reference.
impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reference_type = self.reference_type();
        match reference_type {
            Some(ReferenceTypeId::HierarchicalReferences)
                if self.include_subtypes && !self.is_inverse =>
            {
                f.write_str("/")?;
            }
            Some(ReferenceTypeId::Aggregates) if self.include_subtypes && !self.is_inverse => {
                f.write_str(".")?;
            }
            _ => {
                f.write_str("<")?;
                if !self.include_subtypes {
                    f.write_str("#")?;
                }
                if self.is_inverse {
                    f.write_str("!")?;
                }
                match reference_type {
                    Some(known) => f.write_str(known.name())?,
                    None => f.write_str(&self.reference_type_id)?,
                }
                f.write_str(">")?;
            }
        }
        write!(f, "{}", self.target_name)
    }
}

/// Ordered sequence of segments resolved one after the other
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelativePath {
    elements: Vec<PathSegment>,
}

impl RelativePath {
    /// Create an empty path
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append a segment
    pub fn push(&mut self, segment: PathSegment) {
        self.elements.push(segment);
    }

    /// Append a segment, builder style
    #[must_use]
    pub fn then(mut self, segment: PathSegment) -> Self {
        self.elements.push(segment);
        self
    }

    /// Segments in order
    #[must_use]
    pub fn elements(&self) -> &[PathSegment] {
        &self.elements
    }

    /// Iterate over segments in order
    pub fn iter(&self) -> std::slice::Iter<'_, PathSegment> {
        self.elements.iter()
    }

    /// Number of segments
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the path has no segments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The final segment, whose target the path resolves to
    #[must_use]
    pub fn last(&self) -> Option<&PathSegment> {
        self.elements.last()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.elements.iter().try_for_each(|segment| write!(f, "{segment}"))
    }
}

impl FromIterator<PathSegment> for RelativePath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<PathSegment>> for RelativePath {
    fn from(elements: Vec<PathSegment>) -> Self {
        Self { elements }
    }
}

impl IntoIterator for RelativePath {
    type Item = PathSegment;
    type IntoIter = std::vec::IntoIter<PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a RelativePath {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
