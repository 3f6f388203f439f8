use crate::domain::ports::TransactionStoreBox;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryTransactionStore;
use std::path::PathBuf;

/// Which store backs the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    InMemory,
    RocksDb(PathBuf),
}

impl StorageConfig {
    /// Persistent storage when a database path is given, in-memory otherwise.
    pub fn from_db_path(db_path: Option<PathBuf>) -> Self {
        match db_path {
            Some(path) => Self::RocksDb(path),
            None => Self::InMemory,
        }
    }
}

/// Opens the store described by `config`.
///
/// Without the `storage-rocksdb` feature a RocksDB request falls back to the
/// in-memory store with a warning on stderr.
pub fn open_store(config: &StorageConfig) -> Result<TransactionStoreBox> {
    match config {
        StorageConfig::InMemory => Ok(Box::new(InMemoryTransactionStore::new())),
        #[cfg(feature = "storage-rocksdb")]
        StorageConfig::RocksDb(path) => {
            tracing::info!(path = %path.display(), "opening rocksdb store");
            let store = crate::infrastructure::rocksdb::RocksDBStore::open(path)?;
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        StorageConfig::RocksDb(_) => {
            eprintln!(
                "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
            Ok(Box::new(InMemoryTransactionStore::new()))
        }
    }
}
