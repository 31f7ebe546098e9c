//! REST API client module for the Eshtrak service.
//!
//! This module provides the `ApiClient` for communicating with the
//! backend: authentication, profile, plan, subscription, and
//! checkout-session endpoints.
//!
//! Authenticated endpoints use JWT bearer tokens obtained from the login
//! endpoint; the client attaches whatever token it was last handed and
//! leaves refresh timing to the session store.

pub mod client;
pub mod error;

pub use client::{ApiClient, LoginResponse, SignupRequest, SignupResponse};
pub use error::ApiError;
