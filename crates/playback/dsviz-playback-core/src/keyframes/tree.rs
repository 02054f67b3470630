//! Keyframes for tree-shaped structures.

use serde::{Deserialize, Serialize};

use super::{Easing, Vec2};
use crate::step::{OperationStep, StepTarget};

/// Renderer hints for one step over a tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeKeyframes {
    /// Nodes to emphasize: the step's highlight list followed by every
    /// pointer target.
    pub highlighted_nodes: Vec<StepTarget>,
    /// Edge ids to emphasize (parent-child, as emitted by the layout engine).
    pub highlighted_edges: Vec<String>,
    pub animations: Vec<TreeAnimation>,
}

/// Atomic animation descriptor for a tree node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
#[non_exhaustive]
pub enum TreeAnimation {
    FadeIn {
        node_id: StepTarget,
        duration_ms: f32,
        easing: Easing,
    },
    FadeOut {
        node_id: StepTarget,
        duration_ms: f32,
        easing: Easing,
    },
    Move {
        node_id: StepTarget,
        from: Vec2,
        to: Vec2,
        duration_ms: f32,
        easing: Easing,
    },
    Pulse {
        node_id: StepTarget,
        intensity: f32,
        duration_ms: f32,
    },
}

impl TreeAnimation {
    pub fn fade_in(node_id: impl Into<StepTarget>) -> Self {
        Self::FadeIn {
            node_id: node_id.into(),
            duration_ms: 300.0,
            easing: Easing::EaseInOut,
        }
    }

    pub fn fade_out(node_id: impl Into<StepTarget>) -> Self {
        Self::FadeOut {
            node_id: node_id.into(),
            duration_ms: 300.0,
            easing: Easing::EaseInOut,
        }
    }

    pub fn move_node(node_id: impl Into<StepTarget>, from: Vec2, to: Vec2) -> Self {
        Self::Move {
            node_id: node_id.into(),
            from,
            to,
            duration_ms: 500.0,
            easing: Easing::Smooth,
        }
    }

    /// Emphasis pulse on a single node.
    pub fn pulse(node_id: impl Into<StepTarget>) -> Self {
        Self::Pulse {
            node_id: node_id.into(),
            intensity: 1.2,
            duration_ms: 600.0,
        }
    }
}

/// Translate one step into tree keyframes. `None` yields empty keyframes.
pub fn keyframes_from_step(step: Option<&OperationStep>) -> TreeKeyframes {
    let mut keyframes = TreeKeyframes::default();
    let Some(step) = step else { return keyframes };

    keyframes
        .highlighted_nodes
        .extend(step.highlight_indices.iter().cloned());
    keyframes
        .highlighted_nodes
        .extend(step.pointers.values().cloned());
    keyframes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_step_yields_empty_keyframes() {
        let kf = keyframes_from_step(None);
        assert_eq!(kf, TreeKeyframes::default());
    }

    #[test]
    fn pointer_targets_are_appended_to_highlights() {
        let step = OperationStep::default()
            .with_highlights([StepTarget::from("a")])
            .with_pointer("current", StepTarget::from("b"));
        let kf = keyframes_from_step(Some(&step));

        assert_eq!(kf.highlighted_nodes.len(), 2);
        assert_eq!(kf.highlighted_nodes[0], StepTarget::from("a"));
        assert!(kf.highlighted_nodes.contains(&StepTarget::from("b")));
        assert!(kf.animations.is_empty());
    }

    #[test]
    fn pulse_descriptor_has_fixed_shape() {
        match TreeAnimation::pulse("n1") {
            TreeAnimation::Pulse {
                node_id,
                intensity,
                duration_ms,
            } => {
                assert_eq!(node_id, StepTarget::from("n1"));
                assert_eq!(intensity, 1.2);
                assert_eq!(duration_ms, 600.0);
            }
            other => panic!("unexpected descriptor {other:?}"),
        }
    }
}
