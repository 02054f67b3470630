//! Layout engine: subtree widths, post-order placement, and connector edges.

use hashbrown::HashMap;

use crate::config::{EdgeStyle, LayoutConfig};
use crate::error::LayoutError;
use crate::geometry::{Edge, Position, TreeLayout};
use crate::node::TreeNode;

/// Horizontal padding added around the tree footprint.
const H_PADDING: f32 = 200.0;
/// Canvas width never shrinks below this.
const MIN_CANVAS_WIDTH: f32 = 1200.0;
/// Space reserved below the deepest node row.
const BOTTOM_MARGIN: f32 = 50.0;
/// Default y of the root row.
const DEFAULT_START_Y: f32 = 80.0;
/// Recursion guard; well-formed snapshots stay far below this.
const MAX_DEPTH: usize = 512;

/// Pure, per-call tree layout. Construct once with a [`LayoutConfig`] and
/// reuse freely; each [`TreeLayoutEngine::layout`] call allocates a fresh
/// result and shares no mutable state.
#[derive(Clone, Debug, Default)]
pub struct TreeLayoutEngine {
    cfg: LayoutConfig,
}

impl TreeLayoutEngine {
    pub fn new(cfg: LayoutConfig) -> Self {
        Self { cfg }
    }

    #[inline]
    pub fn config(&self) -> &LayoutConfig {
        &self.cfg
    }

    /// Minimum horizontal footprint of a subtree, descendants only.
    ///
    /// `None` is 0, a leaf consumes exactly `node_width`, and an internal
    /// node adds `min_spacing` between its children only when both are
    /// present. Floored at `node_width` as a safety floor. Recomputed at
    /// every level of the placement recursion; quadratic in tree size and
    /// accepted as such for determinism.
    pub fn subtree_width(&self, node: Option<&TreeNode>) -> f32 {
        let Some(node) = node else { return 0.0 };
        if node.is_leaf() {
            return self.cfg.node_width;
        }

        let left = self.subtree_width(node.left.as_deref());
        let right = self.subtree_width(node.right.as_deref());
        let mut total = left + right;
        if left > 0.0 && right > 0.0 {
            total += self.cfg.min_spacing;
        }
        total.max(self.cfg.node_width)
    }

    /// Lay out a tree with the root centered on the canvas at `y = 80`.
    ///
    /// A `None` root yields an empty zero-sized layout. Duplicate `node_id`s
    /// are a caller precondition and produce inconsistent positions.
    pub fn layout(&self, root: Option<&TreeNode>) -> Result<TreeLayout, LayoutError> {
        self.layout_from(root, None, DEFAULT_START_Y)
    }

    /// Lay out a tree with an explicit root center and starting row.
    ///
    /// `start_x = None` centers the root at `canvas_width / 2`.
    pub fn layout_from(
        &self,
        root: Option<&TreeNode>,
        start_x: Option<f32>,
        start_y: f32,
    ) -> Result<TreeLayout, LayoutError> {
        let Some(root) = root else {
            return Ok(TreeLayout::default());
        };

        let footprint = self.subtree_width(Some(root));
        let width = (footprint + H_PADDING).max(MIN_CANVAS_WIDTH);
        let center_x = start_x.unwrap_or(width / 2.0);

        let mut positions = HashMap::new();
        self.place(root, center_x, start_y, 0, &mut positions)?;

        let mut edges = Vec::new();
        self.collect_edges(root, &positions, &mut edges);

        let max_y = positions
            .values()
            .map(|p| p.y)
            .fold(f32::NEG_INFINITY, f32::max);
        let height = max_y + self.cfg.node_height + BOTTOM_MARGIN;

        Ok(TreeLayout {
            positions,
            edges,
            width,
            height,
        })
    }

    /// Post-order placement: children first, then the parent relative to
    /// where the children actually landed.
    fn place(
        &self,
        node: &TreeNode,
        center_x: f32,
        y: f32,
        depth: usize,
        positions: &mut HashMap<String, Position>,
    ) -> Result<(), LayoutError> {
        if depth >= MAX_DEPTH {
            return Err(LayoutError::DepthLimitExceeded { limit: MAX_DEPTH });
        }

        let left_width = self.subtree_width(node.left.as_deref());
        let right_width = self.subtree_width(node.right.as_deref());
        let has_both = left_width > 0.0 && right_width > 0.0;

        let mut total = left_width + right_width;
        if has_both {
            total += self.cfg.min_spacing;
        }
        total = total.max(self.cfg.node_width);

        // Partition the footprint left-to-right from this subtree's left edge.
        let left_start = center_x - total / 2.0;
        let child_y = y + self.cfg.level_height;

        if let Some(left) = node.left.as_deref() {
            let left_center = left_start + left_width / 2.0;
            self.place(left, left_center, child_y, depth + 1, positions)?;
        }
        if let Some(right) = node.right.as_deref() {
            let spacing = if has_both { self.cfg.min_spacing } else { 0.0 };
            let right_start = left_start + left_width + spacing;
            let right_center = right_start + right_width / 2.0;
            self.place(right, right_center, child_y, depth + 1, positions)?;
        }

        // With both children the parent sits on their midpoint. With a single
        // child it is offset by half the spacing so it is never drawn exactly
        // above that child.
        let x = match (node.left.as_deref(), node.right.as_deref()) {
            (Some(l), Some(r)) => {
                let lx = positions[&l.node_id].x;
                let rx = positions[&r.node_id].x;
                (lx + rx) / 2.0
            }
            (Some(l), None) => positions[&l.node_id].x + self.cfg.min_spacing / 2.0,
            (None, Some(r)) => positions[&r.node_id].x - self.cfg.min_spacing / 2.0,
            (None, None) => center_x,
        };
        positions.insert(node.node_id.clone(), Position { x, y });
        Ok(())
    }

    /// Depth-first edge emission: this node's left edge, its right edge,
    /// then the left subtree, then the right subtree. Fixed order keeps
    /// results deterministic for renderers that diff edge lists.
    fn collect_edges(
        &self,
        node: &TreeNode,
        positions: &HashMap<String, Position>,
        edges: &mut Vec<Edge>,
    ) {
        let Some(parent) = positions.get(&node.node_id).copied() else {
            return;
        };

        for child in [node.left.as_deref(), node.right.as_deref()]
            .into_iter()
            .flatten()
        {
            if let Some(pos) = positions.get(&child.node_id) {
                edges.push(self.edge_between(&node.node_id, parent, &child.node_id, *pos));
            }
        }
        if let Some(left) = node.left.as_deref() {
            self.collect_edges(left, positions, edges);
        }
        if let Some(right) = node.right.as_deref() {
            self.collect_edges(right, positions, edges);
        }
    }

    /// Connector between two node centers, trimmed by the node radius along
    /// the center-to-center direction.
    fn edge_between(&self, parent_id: &str, parent: Position, child_id: &str, child: Position) -> Edge {
        let radius = self.cfg.node_height / 2.0;
        let angle = (child.y - parent.y).atan2(child.x - parent.x);
        let (sin, cos) = angle.sin_cos();

        let start = Position {
            x: parent.x + radius * cos,
            y: parent.y + radius * sin,
        };
        let end = Position {
            x: child.x - radius * cos,
            y: child.y - radius * sin,
        };

        let path = match self.cfg.edge_style {
            EdgeStyle::Straight => {
                format!("M {} {} L {} {}", start.x, start.y, end.x, end.y)
            }
            EdgeStyle::Curved => {
                let bias = (end.y - start.y) * 0.3;
                format!(
                    "M {} {} C {} {}, {} {}, {} {}",
                    start.x,
                    start.y,
                    start.x,
                    start.y + bias,
                    end.x,
                    end.y - bias,
                    end.x,
                    end.y
                )
            }
        };

        Edge {
            id: format!("{parent_id}-{child_id}"),
            path,
            start,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str) -> TreeNode {
        TreeNode::new(id)
    }

    #[test]
    fn subtree_width_floors_at_node_width() {
        let eng = TreeLayoutEngine::default();
        assert_eq!(eng.subtree_width(None), 0.0);
        assert_eq!(eng.subtree_width(Some(&leaf("a"))), 60.0);
    }

    #[test]
    fn subtree_width_adds_spacing_only_with_both_children() {
        let eng = TreeLayoutEngine::default();
        let both = leaf("r").with_left(leaf("l")).with_right(leaf("r2"));
        assert_eq!(eng.subtree_width(Some(&both)), 60.0 + 60.0 + 100.0);

        let one = leaf("r").with_left(leaf("l"));
        assert_eq!(eng.subtree_width(Some(&one)), 60.0);
    }

    #[test]
    fn single_child_parent_is_offset_not_stacked() {
        let eng = TreeLayoutEngine::default();
        let tree = leaf("r").with_left(leaf("l"));
        let out = eng.layout(Some(&tree)).unwrap();
        let r = out.positions["r"];
        let l = out.positions["l"];
        assert_eq!(r.x, l.x + 50.0);
        assert_eq!(l.y - r.y, 120.0);
    }

    #[test]
    fn edge_endpoints_are_trimmed_by_radius() {
        let eng = TreeLayoutEngine::default();
        let tree = leaf("r").with_left(leaf("l")).with_right(leaf("r2"));
        let out = eng.layout(Some(&tree)).unwrap();
        assert_eq!(out.edges.len(), 2);
        assert_eq!(out.edges[0].id, "r-l");
        assert_eq!(out.edges[1].id, "r-r2");

        let parent = out.positions["r"];
        for edge in &out.edges {
            let dx = edge.start.x - parent.x;
            let dy = edge.start.y - parent.y;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!((dist - 30.0).abs() < 1e-3, "trim distance was {dist}");
        }
    }

    #[test]
    fn depth_guard_trips_on_degenerate_chains() {
        let eng = TreeLayoutEngine::default();
        let mut tree = leaf("n0");
        for i in 1..600 {
            tree = TreeNode::new(format!("n{i}")).with_left(tree);
        }
        assert_eq!(
            eng.layout(Some(&tree)),
            Err(LayoutError::DepthLimitExceeded { limit: 512 })
        );
    }
}
