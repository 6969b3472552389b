//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Visit children in file name order instead of the order the
    /// filesystem returns them.
    pub sorted: bool,
}

impl WalkerConfig {
    pub fn sorted() -> Self {
        Self { sorted: true }
    }
}
