use super::transaction::{Transaction, TransactionDraft, TransactionId};
use crate::error::Result;
use async_trait::async_trait;

/// Durable mapping from transaction id to transaction record.
///
/// The store is the only place identities are assigned.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Transaction>>;
    async fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>>;
    /// Assigns a fresh id and stores the draft as a `Pending` record.
    async fn insert(&self, draft: TransactionDraft) -> Result<Transaction>;
    /// Overwrites the record carrying `tx.id`.
    async fn save(&self, tx: Transaction) -> Result<Transaction>;
    async fn delete(&self, tx: &Transaction) -> Result<()>;
}

pub type TransactionStoreBox = Box<dyn TransactionStore>;
