use crate::domain::ports::TransactionStore;
use crate::domain::transaction::{Transaction, TransactionDraft, TransactionId};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    rows: BTreeMap<TransactionId, Transaction>,
    last_id: u64,
}

/// A thread-safe in-memory transaction table.
///
/// Rows are kept in a `BTreeMap` so `find_all` returns them in id order.
/// Cloning shares the underlying table. Ids start at 1 and are never reused.
#[derive(Default, Clone)]
pub struct InMemoryTransactionStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryTransactionStore {
    /// Creates a new, empty in-memory transaction store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn find_all(&self) -> Result<Vec<Transaction>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, draft: TransactionDraft) -> Result<Transaction> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let tx = Transaction::open(TransactionId(table.last_id), draft);
        table.rows.insert(tx.id, tx.clone());
        Ok(tx)
    }

    async fn save(&self, tx: Transaction) -> Result<Transaction> {
        let mut table = self.table.write().await;
        table.last_id = table.last_id.max(tx.id.0);
        table.rows.insert(tx.id, tx.clone());
        Ok(tx)
    }

    async fn delete(&self, tx: &Transaction) -> Result<()> {
        let mut table = self.table.write().await;
        table.rows.remove(&tx.id);
        Ok(())
    }
}
