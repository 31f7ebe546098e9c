//! Client-side session lifecycle: tokens, user snapshot, persistence.
//!
//! This module provides:
//! - `SessionStore`: the single source of truth for authentication state,
//!   with login/logout mutators and proactive token refresh
//! - `SessionStorage`: pluggable persistence (file-backed or in-memory)
//! - `token`: expiry-claim extraction from an unverified encoded token
//!
//! The store persists one JSON blob and is re-hydrated from it at startup.

pub mod storage;
pub mod store;
pub mod token;

pub use storage::{FileStorage, MemoryStorage, SessionSnapshot, SessionStorage};
pub use store::{AuthStatus, SessionStore, TokenRefresher};
