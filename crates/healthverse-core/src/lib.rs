//! # healthverse-core
//!
//! The session store and the traits it is wired through.
//!
//! This crate provides:
//! - The two seam traits (`KeyValueStore`, `RouteGuard`)
//! - `SessionConfig`, the TOML-loadable store configuration
//! - The persisted record codec
//! - `SessionStore`, which owns the session and mirrors it to a backend
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use healthverse_core::{SessionConfig, SessionStore};
//!
//! let store = SessionStore::open(Arc::new(backend), SessionConfig::default());
//! if store.login("ana@x.com", "secret1").await {
//!     store.set_role(Role::Doctor);
//! }
//! ```

pub mod config;
pub mod record;
pub mod store;
pub mod traits;

pub use config::SessionConfig;
pub use store::SessionStore;
