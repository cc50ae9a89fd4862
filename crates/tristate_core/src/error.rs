//! Core error types

use thiserror::Error;

use crate::lifecycle::{LifecycleOp, LifecycleState};

/// Lifecycle-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleError {
    /// The requested operation is not defined for the current lifecycle state
    #[error("cannot {op} a component in the {state} state")]
    InvalidTransition {
        op: LifecycleOp,
        state: LifecycleState,
    },
}

/// Result type for lifecycle operations
pub type Result<T> = std::result::Result<T, LifecycleError>;
