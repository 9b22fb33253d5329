use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use scout_core::UrlList;
use scout_logging::{scout_debug, scout_info, scout_warn};
use thiserror::Error;

use crate::persist::{write_atomic, PersistError};

/// Every saved list, keyed by name; each list keeps its scrape order.
pub type NamedLists = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store path {0:?} has no file name")]
    InvalidPath(PathBuf),
    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write store: {0}")]
    Persist(#[from] PersistError),
}

/// File-backed mapping of list name to source URLs.
///
/// Every operation reads the whole file and every mutation rewrites it
/// through [`write_atomic`]; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct NamedListStore {
    path: PathBuf,
}

impl NamedListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all lists. A missing, unreadable or corrupt file reads as empty.
    pub fn load(&self) -> NamedLists {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                scout_debug!("No saved lists at {:?}", self.path);
                return NamedLists::new();
            }
            Err(err) => {
                scout_warn!("Failed to read saved lists from {:?}: {}", self.path, err);
                return NamedLists::new();
            }
        };

        match serde_json::from_str::<NamedLists>(&content) {
            Ok(lists) => lists,
            Err(err) => {
                scout_warn!("Failed to parse saved lists from {:?}: {}", self.path, err);
                NamedLists::new()
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Vec<String>> {
        self.load().remove(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.load().into_keys().collect()
    }

    /// Replaces the whole store with `lists`.
    pub fn save(&self, lists: &NamedLists) -> Result<(), StoreError> {
        if self.path.file_name().is_none() {
            return Err(StoreError::InvalidPath(self.path.clone()));
        }
        let content = serde_json::to_string_pretty(lists)?;
        write_atomic(&self.path, &content)?;
        scout_info!("Saved {} URL lists to {:?}", lists.len(), self.path);
        Ok(())
    }

    /// Creates or overwrites one list, keeping every other list as loaded.
    ///
    /// Blank and repeated URLs are dropped, first occurrence wins.
    pub fn save_list<I, S>(&self, name: &str, urls: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lists = self.load();
        lists.insert(name.to_string(), UrlList::from_urls(urls).into_vec());
        self.save(&lists)
    }

    /// Removes one list. Returns `false` without writing when `name` is absent.
    pub fn delete(&self, name: &str) -> Result<bool, StoreError> {
        let mut lists = self.load();
        if lists.remove(name).is_none() {
            return Ok(false);
        }
        self.save(&lists)?;
        Ok(true)
    }}
