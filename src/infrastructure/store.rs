//! Entry object store
//!
//! Entries are kept as one JSON object per file under
//! `entries/YYYY/MM/<uuid>.json` inside the journal root. The store reads
//! the whole collection back into memory; statistics and views work on
//! that snapshot.

use crate::domain::HappinessEntry;
use crate::error::{Result, TakaraError};
use crate::infrastructure::Config;
use chrono::Datelike;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;
use walkdir::WalkDir;

const ENTRIES_DIR: &str = "entries";

/// Abstract store for journal entries and profile config
pub trait EntryStore {
    /// Get the root directory of this journal
    fn root(&self) -> &Path;

    /// Load profile configuration
    fn load_config(&self) -> Result<Config>;

    /// Save profile configuration
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if the journal has been initialized
    fn is_initialized(&self) -> bool;

    /// Create the .takara directory structure
    fn initialize(&self) -> Result<()>;

    /// Persist a new entry object
    fn insert_entry(&self, entry: &HappinessEntry) -> Result<()>;

    /// Load every stored entry, newest first
    fn load_entries(&self) -> Result<Vec<HappinessEntry>>;

    /// Remove an entry object by id. Errors when no such entry exists.
    fn delete_entry(&self, id: Uuid) -> Result<()>;
}

/// File system implementation of EntryStore
#[derive(Debug, Clone)]
pub struct FileStore {
    pub root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        FileStore { root }
    }

    /// Discover the journal root. Checks the TAKARA_ROOT environment
    /// variable first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TAKARA_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_takara_dir(&path) {
                return Ok(FileStore::new(path));
            } else {
                return Err(TakaraError::Config(format!(
                    "TAKARA_ROOT is set to '{}' but no .takara directory found. \
                    Run 'takara init' in that directory or unset TAKARA_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the journal root by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_takara_dir(&current) {
                return Ok(FileStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(TakaraError::NotTakaraDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_takara_dir(path: &Path) -> bool {
        path.join(".takara").is_dir()
    }

    /// Relative object path for an entry: entries/YYYY/MM/<uuid>.json
    fn object_path(&self, entry: &HappinessEntry) -> PathBuf {
        let day = entry.day();
        self.root
            .join(ENTRIES_DIR)
            .join(format!("{:04}", day.year()))
            .join(format!("{:02}", day.month()))
            .join(format!("{}.json", entry.id))
    }

    fn parse_object(path: &Path) -> Option<HappinessEntry> {
        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Walk the entries tree collecting object files. Unreadable or
    /// unparseable objects are skipped; the journal keeps working with
    /// whatever loads.
    fn collect_entries(&self) -> Vec<HappinessEntry> {
        let entries_root = self.root.join(ENTRIES_DIR);
        if !entries_root.is_dir() {
            return Vec::new();
        }

        let mut entries = Vec::new();

        let walker = WalkDir::new(&entries_root).into_iter().filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            e.file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for item in walker {
            let Ok(item) = item else {
                continue;
            };
            if !item.file_type().is_file() {
                continue;
            }
            let is_json = item
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if !is_json {
                continue;
            }
            if let Some(entry) = Self::parse_object(item.path()) {
                entries.push(entry);
            }
        }

        entries
    }

    fn find_object_by_id(&self, id: Uuid) -> Option<PathBuf> {
        let filename = format!("{}.json", id);
        let entries_root = self.root.join(ENTRIES_DIR);

        WalkDir::new(entries_root)
            .into_iter()
            .filter_map(|item| item.ok())
            .find(|item| {
                item.file_type().is_file()
                    && item.file_name().to_str().is_some_and(|n| n == filename)
            })
            .map(|item| item.path().to_path_buf())
    }
}

impl EntryStore for FileStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_takara_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let takara_dir = self.root.join(".takara");

        if takara_dir.exists() {
            return Err(TakaraError::Config(format!(
                "Journal already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&takara_dir)?;
        fs::create_dir_all(self.root.join(ENTRIES_DIR))?;
        Ok(())
    }

    fn insert_entry(&self, entry: &HappinessEntry) -> Result<()> {
        let path = self.object_path(entry);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(entry)?;
        fs::write(&path, contents)?;
        Ok(())
    }

    fn load_entries(&self) -> Result<Vec<HappinessEntry>> {
        let mut entries = self.collect_entries();

        // Newest first
        entries.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(entries)
    }

    fn delete_entry(&self, id: Uuid) -> Result<()> {
        let Some(path) = self.find_object_by_id(id) else {
            return Err(TakaraError::EntryNotFound(id.to_string()));
        };

        fs::remove_file(path)?;
        Ok(())
    }
}
