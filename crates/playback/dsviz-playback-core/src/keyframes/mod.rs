//! Keyframe translators: operation step → renderer hints.
//!
//! Two independent, stateless sets: [`tree`] for tree-shaped structures and
//! [`linear`] for arrays/lists/queues. Both tolerate a missing step and
//! return empty keyframes. Durations and easings here are presentation
//! constants, not behaviorally load-bearing.

pub mod linear;
pub mod tree;

use serde::{Deserialize, Serialize};

pub use linear::{LinearAnimation, LinearKeyframes};
pub use tree::{TreeAnimation, TreeKeyframes};

/// 2D point used by move descriptors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Timing curve hint for renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Gentle deceleration used for node moves.
    Smooth,
}

impl Easing {
    /// CSS timing-function equivalent.
    pub fn css(&self) -> &'static str {
        match self {
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Smooth => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_value(Easing::EaseInOut).unwrap(),
            serde_json::json!("ease-in-out")
        );
        assert_eq!(Easing::Smooth.css(), "cubic-bezier(0.25, 0.46, 0.45, 0.94)");
    }
}
