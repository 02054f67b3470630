//! Keyframes for linear structures (arrays, lists, stacks, queues).

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::Easing;
use crate::step::{OperationStep, StepTarget};

/// Renderer hints for one step over a linear structure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearKeyframes {
    pub highlighted_indices: Vec<StepTarget>,
    /// Pointer name → referenced index, kept as a map so renderers can label
    /// each pointer.
    pub pointer_positions: HashMap<String, StepTarget>,
    pub animations: Vec<LinearAnimation>,
}

/// Atomic animation descriptor for linear elements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
#[non_exhaustive]
pub enum LinearAnimation {
    Insert {
        index: i64,
        duration_ms: f32,
        easing: Easing,
    },
    Delete {
        index: i64,
        duration_ms: f32,
        easing: Easing,
    },
    Swap {
        a: i64,
        b: i64,
        duration_ms: f32,
        easing: Easing,
    },
    Move {
        from: i64,
        to: i64,
        duration_ms: f32,
        easing: Easing,
    },
}

impl LinearAnimation {
    pub fn insert(index: i64) -> Self {
        Self::Insert {
            index,
            duration_ms: 300.0,
            easing: Easing::EaseOut,
        }
    }

    pub fn delete(index: i64) -> Self {
        Self::Delete {
            index,
            duration_ms: 300.0,
            easing: Easing::EaseIn,
        }
    }

    pub fn swap(a: i64, b: i64) -> Self {
        Self::Swap {
            a,
            b,
            duration_ms: 400.0,
            easing: Easing::EaseInOut,
        }
    }

    /// Element sliding from one slot to another.
    pub fn move_element(from: i64, to: i64) -> Self {
        Self::Move {
            from,
            to,
            duration_ms: 400.0,
            easing: Easing::EaseInOut,
        }
    }
}

/// Translate one step into linear keyframes. `None` yields empty keyframes.
pub fn keyframes_from_step(step: Option<&OperationStep>) -> LinearKeyframes {
    let mut keyframes = LinearKeyframes::default();
    let Some(step) = step else { return keyframes };

    keyframes
        .highlighted_indices
        .extend(step.highlight_indices.iter().cloned());
    keyframes.pointer_positions.extend(
        step.pointers
            .iter()
            .map(|(name, target)| (name.clone(), target.clone())),
    );
    keyframes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_step_yields_empty_keyframes() {
        assert_eq!(keyframes_from_step(None), LinearKeyframes::default());
    }

    #[test]
    fn pointers_keep_their_names() {
        let step = OperationStep::default()
            .with_highlights([StepTarget::Index(2)])
            .with_pointer("slow", StepTarget::Index(0))
            .with_pointer("fast", StepTarget::Index(2));
        let kf = keyframes_from_step(Some(&step));

        assert_eq!(kf.highlighted_indices, vec![StepTarget::Index(2)]);
        assert_eq!(kf.pointer_positions["slow"], StepTarget::Index(0));
        assert_eq!(kf.pointer_positions["fast"], StepTarget::Index(2));
    }

    #[test]
    fn descriptors_tag_their_type_on_the_wire() {
        let raw = serde_json::to_value(LinearAnimation::swap(1, 3)).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({
                "type": "swap",
                "a": 1,
                "b": 3,
                "duration_ms": 400.0,
                "easing": "ease-in-out"
            })
        );
    }
}
