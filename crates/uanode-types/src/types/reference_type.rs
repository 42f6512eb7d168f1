use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::NodeIdError;

/// Well-known reference types defined in namespace 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ReferenceTypeId {
    /// No reference type given
    #[default]
    Unspecified = 0,
    /// Abstract base of all references
    References = 31,
    /// Base of references that do not span a hierarchy
    NonHierarchicalReferences = 32,
    /// Base of hierarchical references
    HierarchicalReferences = 33,
    /// Non-looping hierarchical reference
    HasChild = 34,
    /// Organizes nodes in folders
    Organizes = 35,
    /// Event source relation
    HasEventSource = 36,
    /// Modelling rule of an instance declaration
    HasModellingRule = 37,
    /// Data type encoding
    HasEncoding = 38,
    /// Data type description
    HasDescription = 39,
    /// Type definition of an object or variable
    HasTypeDefinition = 40,
    /// Event type generated by a node
    GeneratesEvent = 41,
    /// Base of references that aggregate components
    Aggregates = 44,
    /// Subtype relation
    HasSubtype = 45,
    /// Property of a node
    HasProperty = 46,
    /// Component of a node
    HasComponent = 47,
    /// Notifier relation
    HasNotifier = 48,
    /// Ordered component of a node
    HasOrderedComponent = 49,
    /// Source state of a transition
    FromState = 51,
    /// Target state of a transition
    ToState = 52,
    /// Cause of a transition
    HasCause = 53,
    /// Effect of a transition
    HasEffect = 54,
    /// Historical configuration of a node
    HasHistoricalConfiguration = 56,
    /// Sub state machine of a state
    HasSubStateMachine = 117,
    /// Event type always generated by a node
    AlwaysGeneratesEvent = 3065,
    /// True sub state of a two-state machine
    HasTrueSubState = 9004,
    /// False sub state of a two-state machine
    HasFalseSubState = 9005,
    /// Condition of a node
    HasCondition = 9006,
}

/// Variant, browse name and canonical node id string for every reference type.
const REFERENCE_TYPES: [(ReferenceTypeId, &str, &str); 28] = [
    (ReferenceTypeId::Unspecified, "Unspecified", "ns=0;i=0"),
    (ReferenceTypeId::References, "References", "ns=0;i=31"),
    (ReferenceTypeId::NonHierarchicalReferences, "NonHierarchicalReferences", "ns=0;i=32"),
    (ReferenceTypeId::HierarchicalReferences, "HierarchicalReferences", "ns=0;i=33"),
    (ReferenceTypeId::HasChild, "HasChild", "ns=0;i=34"),
    (ReferenceTypeId::Organizes, "Organizes", "ns=0;i=35"),
    (ReferenceTypeId::HasEventSource, "HasEventSource", "ns=0;i=36"),
    (ReferenceTypeId::HasModellingRule, "HasModellingRule", "ns=0;i=37"),
    (ReferenceTypeId::HasEncoding, "HasEncoding", "ns=0;i=38"),
    (ReferenceTypeId::HasDescription, "HasDescription", "ns=0;i=39"),
    (ReferenceTypeId::HasTypeDefinition, "HasTypeDefinition", "ns=0;i=40"),
    (ReferenceTypeId::GeneratesEvent, "GeneratesEvent", "ns=0;i=41"),
    (ReferenceTypeId::Aggregates, "Aggregates", "ns=0;i=44"),
    (ReferenceTypeId::HasSubtype, "HasSubtype", "ns=0;i=45"),
    (ReferenceTypeId::HasProperty, "HasProperty", "ns=0;i=46"),
    (ReferenceTypeId::HasComponent, "HasComponent", "ns=0;i=47"),
    (ReferenceTypeId::HasNotifier, "HasNotifier", "ns=0;i=48"),
    (ReferenceTypeId::HasOrderedComponent, "HasOrderedComponent", "ns=0;i=49"),
    (ReferenceTypeId::FromState, "FromState", "ns=0;i=51"),
    (ReferenceTypeId::ToState, "ToState", "ns=0;i=52"),
    (ReferenceTypeId::HasCause, "HasCause", "ns=0;i=53"),
    (ReferenceTypeId::HasEffect, "HasEffect", "ns=0;i=54"),
    (ReferenceTypeId::HasHistoricalConfiguration, "HasHistoricalConfiguration", "ns=0;i=56"),
    (ReferenceTypeId::HasSubStateMachine, "HasSubStateMachine", "ns=0;i=117"),
    (ReferenceTypeId::AlwaysGeneratesEvent, "AlwaysGeneratesEvent", "ns=0;i=3065"),
    (ReferenceTypeId::HasTrueSubState, "HasTrueSubState", "ns=0;i=9004"),
    (ReferenceTypeId::HasFalseSubState, "HasFalseSubState", "ns=0;i=9005"),
    (ReferenceTypeId::HasCondition, "HasCondition", "ns=0;i=9006"),
];

impl ReferenceTypeId {
    /// Every well-known reference type, in numeric order
    pub const ALL: [Self; 28] = {
        let mut all = [Self::Unspecified; 28];
        let mut i = 0;
        while i < REFERENCE_TYPES.len() {
            all[i] = REFERENCE_TYPES[i].0;
            i += 1;
        }
        all
    };

    const fn entry(self) -> (Self, &'static str, &'static str) {
        let mut i = 0;
        while i < REFERENCE_TYPES.len() {
            if REFERENCE_TYPES[i].0 as u32 == self as u32 {
                return REFERENCE_TYPES[i];
            }
            i += 1;
        }
        REFERENCE_TYPES[0]
    }

    /// Canonical node id string, e.g. `ns=0;i=33` for `HierarchicalReferences`
    #[must_use]
    pub const fn node_id(self) -> &'static str {
        self.entry().2
    }

    /// Browse name of the reference type
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.entry().1
    }

    /// Numeric identifier in namespace 0
    #[must_use]
    pub const fn numeric_id(self) -> u32 {
        self as u32
    }

    /// Look up a reference type by its canonical node id string
    #[must_use]
    pub fn from_node_id(node_id: &str) -> Option<Self> {
        REFERENCE_TYPES
            .iter()
            .find(|(_, _, id)| *id == node_id)
            .map(|(variant, _, _)| *variant)
    }

    /// Look up a reference type by browse name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        REFERENCE_TYPES
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(variant, _, _)| *variant)
    }
}

/// Accepts either the browse name (`HasComponent`) or the node id (`ns=0;i=47`).
impl FromStr for ReferenceTypeId {
    type Err = NodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .or_else(|| Self::from_node_id(s))
            .ok_or_else(|| NodeIdError::UnknownReferenceType(s.to_string()))
    }
}

impl fmt::Display for ReferenceTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
