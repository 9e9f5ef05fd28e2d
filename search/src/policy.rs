//! Search policy types.
//!
//! Policies are plain values with `Default` and, where a range applies,
//! `validate()`. Each one also renders to JSON so that report bundles can
//! commit to the policy that produced them.

use crate::error::SearchError;

/// Hard cap on minimax depth.
///
/// Minimax recursion depth equals the policy depth, so capping it here keeps
/// the call stack bounded regardless of the game.
pub const MAX_SEARCH_DEPTH: u32 = 64;

/// Hill-climbing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClimbPolicyV1 {
    /// Maximum number of iterations (goal test + one move each).
    pub max_iterations: u64,
}

impl Default for ClimbPolicyV1 {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

impl ClimbPolicyV1 {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": "climb",
            "max_iterations": self.max_iterations,
        })
    }
}

/// Whether minimax skips branches proven irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pruning {
    /// Alpha-beta cutoffs (default).
    AlphaBeta,
    /// Plain minimax. Same result, more nodes visited.
    Disabled,
}

impl Pruning {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlphaBeta => "alpha_beta",
            Self::Disabled => "disabled",
        }
    }
}

/// Adversarial search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdversarialPolicyV1 {
    /// Plies searched from the root, including the root move itself.
    pub depth: u32,
    pub pruning: Pruning,
}

impl Default for AdversarialPolicyV1 {
    fn default() -> Self {
        Self {
            depth: 4,
            pruning: Pruning::AlphaBeta,
        }
    }
}

impl AdversarialPolicyV1 {
    /// Validate the depth range.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `depth` is 0 (no root move
    /// would be searched) or exceeds [`MAX_SEARCH_DEPTH`].
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.depth == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "adversarial depth must be at least 1".into(),
            });
        }
        if self.depth > MAX_SEARCH_DEPTH {
            return Err(SearchError::InvalidPolicy {
                detail: format!(
                    "adversarial depth {} exceeds MAX_SEARCH_DEPTH {MAX_SEARCH_DEPTH}",
                    self.depth
                ),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "depth": self.depth,
            "kind": "adversarial",
            "pruning": self.pruning.as_str(),
        })
    }
}
