//! Widget error types

use thiserror::Error;
use tristate_core::LifecycleError;

/// Checkbox construction and lifecycle errors
#[derive(Error, Debug)]
pub enum CheckboxError {
    /// The root has no descendant matching the native control selector
    #[error("required native control `{selector}` not found under the root element")]
    MissingNativeControl { selector: String },

    /// Lifecycle operation requested in the wrong phase
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// Configuration could not be parsed
    #[error("invalid checkbox config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for checkbox operations
pub type Result<T> = std::result::Result<T, CheckboxError>;
