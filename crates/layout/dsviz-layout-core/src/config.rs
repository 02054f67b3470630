//! Layout configuration, fixed at engine construction.

use serde::{Deserialize, Serialize};

/// Connector path style. Both styles produce identical trimmed endpoints;
/// only the `path` command string differs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    /// Straight segment between the trimmed endpoints.
    Straight,
    /// Vertically-biased cubic curve; control points sit 30% of the vertical
    /// span inward from each endpoint.
    #[default]
    Curved,
}

/// Geometry constants for one layout engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Node diameter along x.
    pub node_width: f32,
    /// Node diameter along y; also determines the connector trim radius.
    pub node_height: f32,
    /// Vertical spacing between tree levels.
    pub level_height: f32,
    /// Minimum horizontal gap between sibling subtrees.
    pub min_spacing: f32,
    pub edge_style: EdgeStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 60.0,
            node_height: 60.0,
            level_height: 120.0,
            min_spacing: 100.0,
            edge_style: EdgeStyle::default(),
        }
    }
}
