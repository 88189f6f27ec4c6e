//! # healthverse-storage
//!
//! Key-value backends for the HealthVerse session store.
//!
//! ## Overview
//!
//! The session store mirrors its session into a [`KeyValueStore`]
//! (`healthverse_core::traits::KeyValueStore`). This crate ships two:
//!
//! - [`InMemoryKeyValueStore`]: a shared `HashMap`, for tests and the demo
//!   scenario.
//! - [`FileKeyValueStore`]: a JSON document on disk, so a CLI session
//!   survives between invocations the way a browser's local storage survives
//!   a page reload.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use healthverse_core::{SessionConfig, SessionStore};
//! use healthverse_storage::FileKeyValueStore;
//!
//! let backend = Arc::new(FileKeyValueStore::new(".healthverse/state.json"));
//! let store = SessionStore::open(backend, SessionConfig::default());
//! ```
//!
//! [`KeyValueStore`]: healthverse_core::traits::KeyValueStore

pub mod file;
pub mod memory;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;

// ── Tests ─────────────────────────────────────────────────────────────────────
