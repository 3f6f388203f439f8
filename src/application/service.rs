use crate::domain::filter::TransactionFilter;
use crate::domain::money::Amount;
use crate::domain::ports::TransactionStoreBox;
use crate::domain::settlement::{Settlement, plan_settlement};
use crate::domain::summary::TransactionSummary;
use crate::domain::transaction::{Transaction, TransactionDraft, TransactionId};
use crate::error::{PayablesError, Result};
use tokio::sync::Mutex;

/// Owns the transaction lifecycle rules and payment allocation.
///
/// The service is the only writer of its store. Operations that read a record
/// and write it back (edits, deletions and settlement passes) run inside a
/// single write section, so two concurrent payment passes can never both see
/// the same `Pending` transaction. Share it across tasks with an `Arc`.
pub struct TransactionService {
    store: TransactionStoreBox,
    write_section: Mutex<()>,
}

impl TransactionService {
    /// Creates a service over the given store.
    pub fn new(store: TransactionStoreBox) -> Self {
        Self {
            store,
            write_section: Mutex::new(()),
        }
    }

    /// Lists every stored transaction accepted by `filter`, in store order.
    pub async fn find_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let transactions = self.store.find_all().await?;
        Ok(transactions
            .into_iter()
            .filter(|tx| filter.matches(tx))
            .collect())
    }

    /// Persists a new `Pending` transaction. Any status on the draft is ignored.
    #[tracing::instrument(skip(self, draft), fields(name = %draft.name, amount = %draft.amount))]
    pub async fn create_transaction(&self, draft: TransactionDraft) -> Result<Transaction> {
        let created = self.store.insert(draft).await?;
        tracing::info!(id = %created.id, "transaction created");
        Ok(created)
    }

    /// Replaces name, date and amount of a pending transaction.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> Result<Transaction> {
        let _guard = self.write_section.lock().await;

        let existing = self.load(id).await?;
        let revised = existing.revise(&draft).inspect_err(|e| {
            tracing::warn!(%id, "rejected update: {e}");
        })?;
        let saved = self.store.save(revised).await?;
        tracing::info!(%id, "transaction updated");
        Ok(saved)
    }

    /// Removes a pending transaction.
    #[tracing::instrument(skip(self))]
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<()> {
        let _guard = self.write_section.lock().await;

        let existing = self.load(id).await?;
        existing
            .ensure_mutable("paid transactions cannot be deleted")
            .inspect_err(|e| {
                tracing::warn!(%id, "rejected delete: {e}");
            })?;
        self.store.delete(&existing).await?;
        tracing::info!(%id, "transaction deleted");
        Ok(())
    }

    /// Settles pending transactions, earliest date first, against `amount`.
    ///
    /// Each transaction is paid in full or not at all, and the walk stops at
    /// the first one the remaining funds cannot cover. Settled records are
    /// saved one by one; if a save fails the error is returned and the records
    /// saved before it stay paid.
    #[tracing::instrument(skip(self, amount), fields(amount = %amount))]
    pub async fn process_payment(&self, amount: Amount) -> Result<Settlement> {
        let _guard = self.write_section.lock().await;

        let plan = plan_settlement(self.store.find_all().await?, amount)?;

        let mut settled = Vec::with_capacity(plan.settled.len());
        for tx in plan.settled {
            let saved = self.store.save(tx).await?;
            tracing::debug!(id = %saved.id, amount = %saved.amount, "transaction settled");
            settled.push(saved);
        }

        tracing::info!(
            settled = settled.len(),
            remaining = %plan.remaining,
            "payment processed"
        );
        Ok(Settlement {
            settled,
            remaining: plan.remaining,
        })
    }

    /// Totals of the transactions accepted by `filter`.
    pub async fn summarize(&self, filter: &TransactionFilter) -> Result<TransactionSummary> {
        let transactions = self.find_transactions(filter).await?;
        TransactionSummary::from_transactions(&transactions)
    }

    async fn load(&self, id: TransactionId) -> Result<Transaction> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(PayablesError::NotFound(id))
    }
}
