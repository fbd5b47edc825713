//! Startup helpers

use crate::features::{FileStore, KeyValueStore, MemoryStore};

/// Open the file-backed name store
pub fn init_file_store() -> anyhow::Result<FileStore> {
    let path = FileStore::default_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;

    tracing::info!("Opening name storage at: {}", path.display());
    Ok(FileStore::open_or_empty(path))
}

/// Durable store for the roster, in memory if no data directory is usable
pub fn open_store() -> Box<dyn KeyValueStore> {
    match init_file_store() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("Names will not persist this session: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}
