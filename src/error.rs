use crate::domain::transaction::TransactionId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayablesError {
    #[error("Transaction {0} not found")]
    NotFound(TransactionId),
    #[error("Transaction {id} cannot be changed: {reason}")]
    InvalidState {
        id: TransactionId,
        reason: &'static str,
    },
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PayablesError {
    /// Wraps any adapter failure as `StoreUnavailable`.
    pub fn store<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::StoreUnavailable(err.into())
    }
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for PayablesError {
    fn from(err: rocksdb::Error) -> Self {
        Self::store(err)
    }
}

pub type Result<T> = std::result::Result<T, PayablesError>;
