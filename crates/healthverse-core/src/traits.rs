//! Core trait definitions for the HealthVerse runtime.
//!
//! Two seams separate the session store from its surroundings:
//!
//! - `KeyValueStore`: the durable local record the store mirrors into
//! - `RouteGuard`: the access policy consulted before a screen renders
//!
//! Both are object-safe so hosts can inject in-memory fakes in tests and
//! file-backed or table-driven implementations in the CLI.

use healthverse_contracts::{error::HealthverseResult, guard::GuardVerdict, session::Session};

/// A string-keyed, string-valued durable store.
///
/// The session store is the only writer of its key. Implementations must
/// treat a missing key as `Ok(None)`, never as an error.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> HealthverseResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> HealthverseResult<()>;

    /// Delete `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> HealthverseResult<()>;
}

/// The route guard: decides whether a screen visit renders or redirects.
///
/// Implementations must be pure: the same `(path, session)` always yields the
/// same verdict, and evaluation has no side effects.
pub trait RouteGuard: Send + Sync {
    /// Evaluate a visit to `path` by the holder of `session`.
    fn evaluate(&self, path: &str, session: Option<&Session>) -> GuardVerdict;
}
