//! Error types for the layout engine.

/// Failures the engine cannot absorb silently.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    /// The recursion-depth guard tripped. Reachable only with degenerate or
    /// malformed input; a well-formed tree snapshot never comes close.
    #[error("tree exceeds the maximum layout depth of {limit} levels")]
    DepthLimitExceeded { limit: usize },
}
