use anyhow::{Context, Result};
use keyring::Entry;
use tracing::warn;

use super::{TokenStore, TOKEN_KEY};

/// Keychain service name for the token entry
const SERVICE_NAME: &str = "tokengate";

/// Token slot held in the OS keychain.
///
/// Same single-slot contract as the file store, for hosts that prefer the
/// platform keychain over a plain file.
#[derive(Default)]
pub struct KeyringTokenStore;

impl KeyringTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn entry() -> Result<Entry> {
        Entry::new(SERVICE_NAME, TOKEN_KEY).context("Failed to create keyring entry")
    }
}

impl TokenStore for KeyringTokenStore {
    fn get(&self) -> Option<String> {
        let entry = match Self::entry() {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Failed to open keyring entry");
                return None;
            }
        };
        match entry.get_password() {
            Ok(token) => Some(token),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read token from keychain");
                None
            }
        }
    }

    fn set(&self, token: Option<&str>) -> Result<()> {
        let entry = Self::entry()?;
        match token {
            Some(token) => entry
                .set_password(token)
                .context("Failed to store token in keychain"),
            // Clearing an absent slot is a no-op
            None => match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
                Err(e) => Err(e).context("Failed to delete token from keychain"),
            },
        }
    }
}
