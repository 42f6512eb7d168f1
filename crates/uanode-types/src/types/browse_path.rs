use serde::{Deserialize, Serialize};

use super::ExpandedNodeId;

/// Remaining path index reported for a fully resolved browse path.
pub const REMAINING_PATH_INDEX_COMPLETE: u32 = u32::MAX;

/// One target reached by resolving a browse path on a server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowsePathTarget {
    /// Node the path resolved to
    pub target_id: ExpandedNodeId,

    /// Index of the first path element that could not be followed, or
    /// [`REMAINING_PATH_INDEX_COMPLETE`]
    #[serde(default = "complete")]
    pub remaining_path_index: u32,
}

const fn complete() -> u32 {
    REMAINING_PATH_INDEX_COMPLETE
}

impl Default for BrowsePathTarget {
    fn default() -> Self {
        Self {
            target_id: ExpandedNodeId::default(),
            remaining_path_index: REMAINING_PATH_INDEX_COMPLETE,
        }
    }
}

impl BrowsePathTarget {
    /// Create a fully resolved target
    #[must_use]
    pub const fn new(target_id: ExpandedNodeId) -> Self {
        Self {
            target_id,
            remaining_path_index: REMAINING_PATH_INDEX_COMPLETE,
        }
    }

    /// Returns true if every element of the path was followed
    #[must_use]
    pub const fn is_fully_resolved(&self) -> bool {
        self.remaining_path_index == REMAINING_PATH_INDEX_COMPLETE
    }
}
