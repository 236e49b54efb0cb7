use std::sync::{Mutex, PoisonError};

use anyhow::Result;

use super::TokenStore;

/// In-memory token slot, for tests and hosts without persistence.
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: Option<&str>) -> Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) =
            token.map(str::to_string);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn set_get_clear_cycle() {
        let store = MemoryTokenStore::new();

        store.set(Some("abc123")).expect("set");
        assert_eq!(store.get().as_deref(), Some("abc123"));

        store.set(Some("def456")).expect("overwrite");
        assert_eq!(store.get().as_deref(), Some("def456"));

        store.set(None).expect("clear");
        assert_eq!(store.get(), None);
    }
}
