//! Store adapters implementing `domain::ports::TransactionStore`.

pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
