//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Exhausting a search
//! space (no path, unsatisfiable, local optimum, no legal move) is a normal
//! outcome reported through each engine's result type, never an error.

/// Typed failure for pre-flight validation.
///
/// Returned before any search step is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A policy value is outside its supported range.
    InvalidPolicy { detail: String },
    /// The supplied problem model violates a structural precondition.
    MalformedProblem { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::MalformedProblem { detail } => write!(f, "malformed problem: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
