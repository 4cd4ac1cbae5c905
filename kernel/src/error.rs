//! Typed domain errors.
//!
//! A `DomainError` always means the domain (or the problem built over it) is
//! malformed or was asked for something it cannot do. Search exhaustion is
//! never a `DomainError`; it is the ordinary "no solution" result.

/// Failure raised by a domain collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// `Space::execute` was called with an action that is not available at
    /// the given state.
    #[error("invalid action {action} at {state}; valid actions: [{}]", .valid.join(", "))]
    InvalidAction {
        action: String,
        state: String,
        valid: Vec<String>,
    },

    /// An optional domain capability was used but the domain does not
    /// provide it.
    #[error("not implemented: {capability}")]
    Unimplemented { capability: &'static str },

    /// A start-dependent operation was attempted on a problem with zero
    /// starting states.
    #[error("problem has no starting states")]
    EmptyStartSet,

    /// A state that does not belong to the space was handed to it.
    #[error("state {state} is not part of this space")]
    UnknownState { state: String },
}
