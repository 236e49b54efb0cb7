//! Token storage for the client's single persisted auth slot.
//!
//! This module provides:
//! - `TokenStore`: the storage seam, injectable so it can be swapped
//!   for an in-memory fake under test
//! - `FileTokenStore`: raw token string in a file (the default)
//! - `KeyringTokenStore`: token held in the OS keychain
//! - `MemoryTokenStore`: in-memory slot for tests
//!
//! Logged-in state is derived from this slot - a stored non-empty token
//! means a session is present, nothing else is kept anywhere.

pub mod file;
pub mod keyring;
pub mod memory;

pub use file::FileTokenStore;
pub use keyring::KeyringTokenStore;
pub use memory::MemoryTokenStore;

use anyhow::Result;

/// Fixed name of the persisted slot (file name or keychain entry)
pub(crate) const TOKEN_KEY: &str = "token";

/// Single-slot storage for the current auth token.
///
/// One `set` operation serves both set and clear: passing `None` removes
/// the persisted entry entirely.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, absent if never set or previously cleared
    fn get(&self) -> Option<String>;

    /// Persist the token, overwriting any prior value; `None` clears the slot
    fn set(&self, token: Option<&str>) -> Result<()>;
}
