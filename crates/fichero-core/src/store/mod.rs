//! The client store: an in-memory name index over a directory of per-client
//! record files.
//!
//! The index maps normalized (lower-cased) client names to record file paths.
//! It is rebuilt from the directory listing at load time and mutated in step
//! with file operations afterwards; lookups never go back to disk during a
//! run. The design assumes a single process owns the records directory.

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::record::{self, RECORD_EXTENSION};
use crate::safe_io;
use dirs_next::home_dir;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub struct ClientStore {
    records_dir: PathBuf,
    index: HashMap<String, PathBuf>,
}

impl ClientStore {
    /// Open a store over `records_dir`, creating the directory if needed and
    /// building the index from the record files already present.
    pub fn open(records_dir: impl Into<PathBuf>) -> Result<ClientStore> {
        let mut store = ClientStore {
            records_dir: records_dir.into(),
            index: HashMap::new(),
        };
        store.reload()?;
        Ok(store)
    }

    /// Open the store at the configured location.
    ///
    /// Precedence for the app home directory:
    /// 1. `home_override` parameter
    /// 2. `FICHERO_HOME` environment variable
    /// 3. `~/.fichero` default
    ///
    /// The records directory itself comes from `config.toml` when present,
    /// otherwise `<home>/clientes`.
    pub fn load(home_override: Option<PathBuf>) -> Result<ClientStore> {
        let app_dir = if let Some(path) = home_override {
            path
        } else if let Ok(fichero_home) = std::env::var("FICHERO_HOME") {
            PathBuf::from(fichero_home)
        } else {
            let home = home_dir().ok_or_else(|| {
                StoreError::StorageUnavailable(std::io::Error::new(
                    ErrorKind::NotFound,
                    "Home directory not found",
                ))
            })?;
            home.join(".fichero")
        };

        fs::create_dir_all(&app_dir).map_err(StoreError::StorageUnavailable)?;
        let config = Config::load(&app_dir).map_err(StoreError::StorageUnavailable)?;
        ClientStore::open(config.records_dir(&app_dir))
    }

    /// Rebuild the index by scanning the records directory.
    ///
    /// Creates the directory on first run. Any previous index contents are
    /// discarded, so a reload after external changes converges on what is
    /// actually on disk.
    pub fn reload(&mut self) -> Result<()> {
        if !self.records_dir.exists() {
            fs::create_dir_all(&self.records_dir).map_err(StoreError::StorageUnavailable)?;
            info!("created records directory {}", self.records_dir.display());
        }

        let entries = fs::read_dir(&self.records_dir).map_err(StoreError::StorageUnavailable)?;
        self.index.clear();
        for entry in entries {
            let entry = entry.map_err(StoreError::StorageUnavailable)?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION)
            {
                debug!("skipping non-record entry {}", path.display());
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => {
                    self.index.insert(record::normalized(stem), path);
                }
                None => warn!("skipping record with non-UTF-8 name {}", path.display()),
            }
        }

        info!("client index loaded, {} client(s)", self.index.len());
        Ok(())
    }

    /// Register a new client and write its record file.
    ///
    /// The duplicate check runs against the index alone; no file is written
    /// when the normalized name is already present. The index entry is only
    /// inserted after the file write succeeds.
    pub fn create_client(&mut self, name: &str, service_description: &str) -> Result<()> {
        record::validate(name)?;
        let key = record::normalized(name);
        if self.index.contains_key(&key) {
            return Err(StoreError::DuplicateClient(name.to_string()));
        }

        let display = record::display(name);
        let path = self.record_path(&display);
        safe_io::atomic_write_text(&path, &record::creation_block(&display, service_description))?;

        self.index.insert(key, path);
        debug!("created client record for '{}'", display);
        Ok(())
    }

    /// Append a recurring-request block to an existing client's record.
    ///
    /// The file is opened in append mode; prior content is never rewritten,
    /// so the full request history is preserved in call order. The index is
    /// not touched on this path.
    pub fn append_request(&self, name: &str, description: &str) -> Result<()> {
        let path = self.lookup(name)?;
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(record::request_block(description).as_bytes())?;
        file.sync_all()?;
        debug!("appended request to '{}'", record::display(name));
        Ok(())
    }

    /// Full record content for a client, as opaque text.
    pub fn read_client(&self, name: &str) -> Result<String> {
        let path = self.lookup(name)?;
        Ok(fs::read_to_string(path)?)
    }

    /// Remove a client's record file and index entry.
    ///
    /// The file is removed first; the index entry is only dropped once the
    /// removal succeeds, so a failed removal never orphans an entry for a
    /// file that may still exist.
    pub fn remove_client(&mut self, name: &str) -> Result<()> {
        let key = record::normalized(name);
        let path = self
            .index
            .get(&key)
            .ok_or_else(|| StoreError::ClientNotFound(name.to_string()))?;
        fs::remove_file(path)?;
        self.index.remove(&key);
        debug!("removed client '{}'", record::display(name));
        Ok(())
    }

    /// All registered client names (normalized), sorted ascending.
    pub fn list_clients(&self) -> Vec<String> {
        let mut names: Vec<String> = self.index.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of clients currently indexed.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Directory holding the record files.
    pub fn records_dir(&self) -> &Path {
        &self.records_dir
    }

    fn lookup(&self, name: &str) -> Result<&PathBuf> {
        self.index
            .get(&record::normalized(name))
            .ok_or_else(|| StoreError::ClientNotFound(name.to_string()))
    }

    fn record_path(&self, display_name: &str) -> PathBuf {
        self.records_dir
            .join(format!("{}.{}", display_name, RECORD_EXTENSION))
    }
}
