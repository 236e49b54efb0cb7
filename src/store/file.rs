use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use super::{TokenStore, TOKEN_KEY};

/// Directory name for the default token storage location
const APP_DIR: &str = "tokengate";

/// Token slot persisted as a plain file in a caller-supplied directory.
///
/// The file is named after the fixed slot key; its absence means logged out.
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Resolve the default storage directory under the platform data dir
    pub fn default_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_DIR))
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_KEY)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let path = self.token_path();
        if !path.exists() {
            return None;
        }
        match std::fs::read_to_string(&path) {
            Ok(token) => Some(token),
            Err(e) => {
                // An unreadable slot degrades to logged-out rather than
                // failing the request path
                warn!(error = %e, "Failed to read token file");
                None
            }
        }
    }

    fn set(&self, token: Option<&str>) -> Result<()> {
        let path = self.token_path();
        match token {
            Some(token) => {
                std::fs::create_dir_all(&self.dir)
                    .context("Failed to create token directory")?;
                std::fs::write(&path, token).context("Failed to write token file")?;
            }
            None => {
                if path.exists() {
                    std::fs::remove_file(&path).context("Failed to remove token file")?;
                }
            }
        }
        Ok(())
    }
}
