//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, EntryStore, FileStore};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, name: Option<String>) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileStore::new(path.to_path_buf());
    store.initialize()?;

    let config = Config::new(name);
    store.save_config(&config)?;

    println!("Initialized takara journal at {}", path.display());
    println!("Hello, {}! Record your first happy moment with 'takara add'.", config.name);

    Ok(())
}
