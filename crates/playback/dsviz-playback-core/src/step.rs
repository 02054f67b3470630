//! Backend-supplied operation-step records.
//!
//! The sequencer and translators only interpret `highlight_indices` and
//! `pointers`; every other field is carried through opaquely so renderers can
//! read backend extras (descriptions, snapshots, per-step durations) without
//! this crate caring about them.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// What a step identifier points at: a linear index or a tree node id.
/// Backend histories mix both, so deserialization is untagged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepTarget {
    Index(i64),
    Node(String),
}

impl From<i64> for StepTarget {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for StepTarget {
    fn from(node_id: &str) -> Self {
        Self::Node(node_id.to_string())
    }
}

/// Kind of structure manipulation a step belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum OperationKind {
    Insert,
    Update,
    Delete,
    Search,
    Clear,
    Init,
    PointerMove,
    Compare,
    CreateNode,
    LinkNode,
    UnlinkNode,
    TraverseLeft,
    TraverseRight,
    RotateLeft,
    RotateRight,
}

/// One recorded moment of a structure-manipulation algorithm.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<OperationKind>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Identifiers to emphasize while this step is current.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlight_indices: Vec<StepTarget>,
    /// Named pointers (`"current"`, `"parent"`, ...) and what they reference.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub pointers: HashMap<String, StepTarget>,
    /// Remaining backend payload, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl OperationStep {
    pub fn new(operation: OperationKind) -> Self {
        Self {
            operation: Some(operation),
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    pub fn with_highlights(mut self, targets: impl IntoIterator<Item = StepTarget>) -> Self {
        self.highlight_indices = targets.into_iter().collect();
        self
    }

    #[inline]
    pub fn with_pointer(mut self, name: impl Into<String>, target: StepTarget) -> Self {
        self.pointers.insert(name.into(), target);
        self
    }
}
