//! Persisted session record codec.
//!
//! The record is the JSON serialization of `Session`. Decoding is strict about
//! shape (unknown role names, missing fields, and blank identifiers are all
//! rejected) so the store can discard anything it would not have written.

use healthverse_contracts::{
    error::{HealthverseError, HealthverseResult},
    session::Session,
};

/// Serialize a session into its persisted form.
pub fn encode_session(session: &Session) -> HealthverseResult<String> {
    serde_json::to_string(session).map_err(|e| HealthverseError::Storage {
        reason: format!("failed to serialize session record: {}", e),
    })
}

/// Parse a persisted record back into a session.
///
/// Returns `HealthverseError::CorruptedSession` when the value is not JSON,
/// does not match the session shape, or carries an empty identifier.
pub fn decode_session(raw: &str) -> HealthverseResult<Session> {
    let session: Session = serde_json::from_str(raw).map_err(|e| HealthverseError::CorruptedSession {
        reason: e.to_string(),
    })?;

    if session.id.0.trim().is_empty() {
        return Err(HealthverseError::CorruptedSession {
            reason: "session record has an empty id".to_string(),
        });
    }

    Ok(session)
}
