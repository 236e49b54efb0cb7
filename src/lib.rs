//! Client-side bearer token authentication for REST APIs.
//!
//! Logs a user in against a remote API, keeps the issued token in a
//! single persisted slot, stamps it onto outgoing requests as
//! `x-access-token`, and reacts to a 403 by clearing the slot and
//! navigating to the login view.
//!
//! The token slot (`TokenStore`) and the navigation surface (`Navigator`)
//! are injected collaborators, so hosts can plug in file, keychain, or
//! in-memory storage and their own router - and tests can swap in fakes
//! without a network stack.

pub mod auth;
pub mod intercept;
pub mod models;
pub mod store;

pub use auth::{AuthClient, AuthError};
pub use intercept::{Navigator, NoopNavigator, RequestInterceptor, TOKEN_HEADER};
pub use models::{Credentials, UserPayload};
pub use store::{FileTokenStore, KeyringTokenStore, MemoryTokenStore, TokenStore};
