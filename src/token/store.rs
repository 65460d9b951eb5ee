// Persisted access token store.
// Holds exactly one value, overwritten on every save, read back on demand.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{HubauthError, Result};

/// File name the token is persisted under within the config directory.
const TOKEN_FILE: &str = "access_token";

/// Single-value persisted credential store.
///
/// The store holds at most one token; `save` overwrites any previous value
/// and `load` returns `None` until the first successful save.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the platform config location (~/.config/hubauth on Linux).
    pub fn open_default() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "hubauth")
            .ok_or_else(|| HubauthError::Other("no home directory available".to_string()))?;
        Ok(Self::new(dirs.config_dir().join(TOKEN_FILE)))
    }

    /// Read the currently persisted token, or `None` if no token has been saved.
    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(token) => Ok(Some(token)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist a token, overwriting any previous value.
    ///
    /// Writes to a temp file and renames into place, so a concurrent `load`
    /// observes either the old or the new value, never a torn one.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(token.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
