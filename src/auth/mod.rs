//! Authentication module: credential exchange and session state.
//!
//! This module provides:
//! - `AuthClient`: login, logout, session-presence check, current user
//! - `AuthError`: typed errors for auth and API failures
//!
//! There is no session object. Logged-in means a non-empty token is
//! currently stored, nothing more.

pub mod client;
pub mod error;

pub use client::AuthClient;
pub use error::AuthError;
