//! Tree shape consumed by the layout engine.

use serde::{Deserialize, Serialize};

/// One node of a binary-tree snapshot.
///
/// `node_id` must be unique within a snapshot; the engine does not verify
/// this and duplicate ids yield inconsistent positions (caller precondition).
/// `value` is an opaque payload passed through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub node_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<TreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Create a childless node.
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            value: None,
            left: None,
            right: None,
        }
    }

    /// Attach an opaque value payload.
    #[inline]
    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Attach a left child.
    #[inline]
    pub fn with_left(mut self, child: TreeNode) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Attach a right child.
    #[inline]
    pub fn with_right(mut self, child: TreeNode) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
