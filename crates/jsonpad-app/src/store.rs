//! Session persistence store
//!
//! A flat key/value store holding the three durable session values
//! (`jsonInput`, `pageTheme`, `editorTheme`). [`FileStore`] keeps them in a
//! TOML table on disk and writes through on every `set`; [`MemoryStore`] is
//! used for `--no-restore` style ephemeral runs and tests.
//!
//! Reads never fail: [`load_session`] substitutes defaults for anything
//! missing or unreadable.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use jsonpad_core::prelude::*;
use jsonpad_core::{PageMode, PersistedSession, ThemePreference, DEFAULT_LIGHT_EDITOR_THEME};

/// Key holding the last Input text
pub const KEY_JSON_INPUT: &str = "jsonInput";

/// Key holding `"light"` or `"dark"`
pub const KEY_PAGE_THEME: &str = "pageTheme";

/// Key holding the editor color theme name
pub const KEY_EDITOR_THEME: &str = "editorTheme";

/// String key/value store backing the session
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    /// Read a value; `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read the persisted session, falling back to defaults per key
pub fn load_session(store: &dyn SessionStore) -> PersistedSession {
    let input = store.get(KEY_JSON_INPUT).unwrap_or_default();

    let page = match store.get(KEY_PAGE_THEME) {
        Some(raw) => raw.parse::<PageMode>().unwrap_or_else(|e| {
            warn!("Ignoring stored page theme: {}", e);
            PageMode::Light
        }),
        None => PageMode::Light,
    };

    let editor_theme = store
        .get(KEY_EDITOR_THEME)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LIGHT_EDITOR_THEME.to_string());

    PersistedSession {
        input,
        theme: ThemePreference::new(page, editor_theme),
    }
}

/// Best-effort write: failures are logged and swallowed
pub fn persist(store: &mut dyn SessionStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        warn!("Failed to persist {}: {}", key, e);
    }
}

// ─────────────────────────────────────────────────────────────────
// File-backed store
// ─────────────────────────────────────────────────────────────────

/// TOML file store (`session.toml`)
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, reading existing values if present.
    ///
    /// An unreadable or malformed file yields an empty store; the next write
    /// replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = read_values(&path);
        debug!("Opened session store {:?} ({} keys)", path, values.len());
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self) -> Result<()> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::store(format!("Failed to create {:?}: {}", dir, e)))?;

        let content = toml::to_string(&self.values)
            .map_err(|e| Error::store(format!("Failed to serialize session: {}", e)))?;

        // Lock a sidecar file so concurrent instances don't interleave renames
        let lock_path = dir.join(".session.lock");
        let lock = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| Error::store(format!("Failed to open lock file: {}", e)))?;
        lock.lock_exclusive()
            .map_err(|e| Error::store(format!("Failed to lock session store: {}", e)))?;

        let temp_path = dir.join(".session.toml.tmp");
        std::fs::write(&temp_path, content)
            .map_err(|e| Error::store(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::store(format!("Failed to rename temp file: {}", e)))?;

        // Lock is released when `lock` is dropped
        trace!("Wrote session store {:?}", self.path);
        Ok(())
    }
}

fn read_values(path: &Path) -> BTreeMap<String, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            warn!("Failed to read session store {:?}: {}", path, e);
            return BTreeMap::new();
        }
    };

    match toml::from_str::<BTreeMap<String, toml::Value>>(&content) {
        Ok(table) => table
            .into_iter()
            .filter_map(|(key, value)| match value {
                toml::Value::String(s) => Some((key, s)),
                other => {
                    warn!("Ignoring non-string session key {}: {}", key, other);
                    None
                }
            })
            .collect(),
        Err(e) => {
            warn!("Failed to parse session store {:?}: {}", path, e);
            BTreeMap::new()
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write_all() {
            // Roll back so a retry with the same value writes again
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────
// In-memory store
// ─────────────────────────────────────────────────────────────────

/// Volatile store that forgets everything on exit
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
