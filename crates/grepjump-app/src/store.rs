//! Opaque key/value configuration storage.
//!
//! The registry persists its serialized editor list under a single key and
//! treats the backend as plain string storage. [`TomlConfigStore`] is the
//! on-disk implementation: one `config.toml` with a `[values]` table under
//! the platform config directory. Writes take an exclusive file lock so a
//! second instance saving at the same moment cannot interleave.

use fs2::FileExt;
use grepjump_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Key the serialized editor list is stored under.
pub const TEXT_EDITORS_KEY: &str = "TextEditors";

/// String storage the registry saves into. `set` only updates pending
/// state; `flush` makes it durable.
pub trait ConfigStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn flush(&mut self) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// TOML-backed store
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Key/value store persisted as a TOML file.
#[derive(Debug)]
pub struct TomlConfigStore {
    path: PathBuf,
    file: StoreFile,
}

impl TomlConfigStore {
    /// Open the store at `path`, loading existing values.
    ///
    /// A missing or unparsable file starts the store empty; the file is
    /// rewritten on the next flush.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(file) => file,
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    StoreFile::default()
                }
            },
            Err(_) => StoreFile::default(),
        };
        Self { path, file }
    }

    /// Default store location under the platform config directory.
    pub fn default_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("grepjump").join("config.toml")
    }
}

impl ConfigStore for TomlConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.file.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.file.values.insert(key.to_string(), value.to_string());
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(&self.file)
            .map_err(|e| Error::config(format!("Failed to serialize configuration: {}", e)))?;

        // Open with an exclusive lock for concurrent write protection
        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| Error::config(format!("Failed to open {:?}: {}", self.path, e)))?;

        file.lock_exclusive()
            .map_err(|e| Error::config(format!("Failed to lock {:?}: {}", self.path, e)))?;

        use std::io::Write;
        let mut file = file;
        file.write_all(content.as_bytes())
            .map_err(|e| Error::config(format!("Failed to write {:?}: {}", self.path, e)))?;
        file.flush()
            .map_err(|e| Error::config(format!("Failed to flush {:?}: {}", self.path, e)))?;

        // Lock is released when the file handle drops
        debug!("Saved configuration to {:?}", self.path);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory store
// ─────────────────────────────────────────────────────────────────────────────

/// Volatile store for tests and embedders that bring their own persistence.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    values: BTreeMap<String, String>,
    /// Number of times `flush` has been called.
    pub flushes: u32,
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
