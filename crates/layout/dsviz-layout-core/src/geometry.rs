//! Output geometry: positions, connector edges, and the full layout result.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Center coordinates of one laid-out node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Connector between a parent and a child node.
///
/// `start`/`end` are trimmed inward from the node centers by the node radius
/// so a drawn connector touches node boundaries. `path` is an SVG path
/// command string over the same endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// `"<parent id>-<child id>"`.
    pub id: String,
    pub path: String,
    pub start: Position,
    pub end: Position,
}

/// Complete geometric description of one tree snapshot.
///
/// Regenerated from scratch on every layout call. `width`/`height` bound all
/// positions and edge endpoints up to the fixed leaf margins.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeLayout {
    pub positions: HashMap<String, Position>,
    pub edges: Vec<Edge>,
    pub width: f32,
    pub height: f32,
}

impl TreeLayout {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.edges.is_empty()
    }
}
