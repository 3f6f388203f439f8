#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use payables::domain::money::Amount;
use payables::domain::ports::TransactionStore;
use payables::domain::transaction::{Transaction, TransactionDraft, TransactionId};
use payables::error::{PayablesError, Result};
use payables::infrastructure::in_memory::InMemoryTransactionStore;
use rust_decimal::Decimal;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tempfile::NamedTempFile;

pub fn draft(name: &str, date: &str, amount: Decimal) -> TransactionDraft {
    TransactionDraft::new(
        name,
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        Amount::new(amount).unwrap(),
    )
}

pub fn amount(value: Decimal) -> Amount {
    Amount::new(value).unwrap()
}

/// Writes a seed CSV with the given `name,date,amount` rows.
pub fn seed_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "name,date,amount").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// An in-memory store whose reads or writes can be made to fail on demand.
#[derive(Clone, Default)]
pub struct FlakyStore {
    inner: InMemoryTransactionStore,
    saves_before_failure: Arc<AtomicUsize>,
    fail_saves: Arc<AtomicBool>,
    fail_reads: Arc<AtomicBool>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner(&self) -> &InMemoryTransactionStore {
        &self.inner
    }

    /// Lets `n` more saves succeed, then fails every save after that.
    pub fn fail_saves_after(&self, n: usize) {
        self.saves_before_failure.store(n, Ordering::SeqCst);
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    fn check_read(&self) -> Result<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            Err(PayablesError::store("read refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TransactionStore for FlakyStore {
    async fn find_all(&self) -> Result<Vec<Transaction>> {
        self.check_read()?;
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>> {
        self.check_read()?;
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, draft: TransactionDraft) -> Result<Transaction> {
        self.inner.insert(draft).await
    }

    async fn save(&self, tx: Transaction) -> Result<Transaction> {
        if self.fail_saves.load(Ordering::SeqCst) {
            let allowed = self
                .saves_before_failure
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
            if allowed.is_err() {
                return Err(PayablesError::store("write refused"));
            }
        }
        self.inner.save(tx).await
    }

    async fn delete(&self, tx: &Transaction) -> Result<()> {
        self.inner.delete(tx).await
    }
}
