//! Runtime error types for the HealthVerse session and routing layers.
//!
//! Fallible operations return `HealthverseResult<T>`. The session mutators
//! themselves never surface these: validation failures resolve to `false`
//! and storage anomalies are logged and recovered inside the store.

use thiserror::Error;

/// The unified error type for the HealthVerse runtime.
#[derive(Debug, Error)]
pub enum HealthverseError {
    /// User input failed a minimum check (empty field, bad quantity, ...).
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// The persisted session record could not be decoded.
    ///
    /// The session store recovers from this by discarding the record.
    #[error("corrupted session record: {reason}")]
    CorruptedSession { reason: String },

    /// The key-value backend could not read or write an entry.
    #[error("storage error: {reason}")]
    Storage { reason: String },

    /// A configuration document is missing or invalid.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// A role name outside `patient`, `doctor`, `pharmacy`.
    #[error("unknown role '{value}'")]
    UnknownRole { value: String },

    /// A page operation referenced a record that does not exist.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: String, id: String },
}

/// Convenience alias used throughout the HealthVerse crates.
pub type HealthverseResult<T> = Result<T, HealthverseError>;
