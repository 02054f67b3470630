//! Tree layout core (renderer-agnostic)
//!
//! Converts an abstract binary-tree shape into non-overlapping 2D node
//! positions and boundary-trimmed connector paths. Every call produces a
//! fresh [`TreeLayout`]; nothing is cached or mutated between calls, so the
//! engine is safe to share across callers.

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod node;

// Re-exports for consumers (renderers)
pub use config::{EdgeStyle, LayoutConfig};
pub use engine::TreeLayoutEngine;
pub use error::LayoutError;
pub use geometry::{Edge, Position, TreeLayout};
pub use node::TreeNode;
