//! Runtime configuration for the layout engine.

/// Tunables for a [`crate::LayoutEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Maximum nesting depth laid out before a subtree is collapsed to zero
    /// size. `None` disables the guard; trees are acyclic by construction,
    /// so the limit only bounds stack use on pathological input.
    pub max_depth: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(256),
        }
    }
}
