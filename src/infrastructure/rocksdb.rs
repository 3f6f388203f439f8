use crate::domain::ports::TransactionStore;
use crate::domain::transaction::{Transaction, TransactionDraft, TransactionId};
use crate::error::{PayablesError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options, WriteBatch};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Column Family for transaction records, keyed by big-endian id.
pub const CF_TRANSACTIONS: &str = "transactions";
/// Column Family for store bookkeeping such as the id sequence.
pub const CF_META: &str = "meta";

const LAST_ID_KEY: &[u8] = b"last_id";

/// A persistent transaction store backed by RocksDB.
///
/// Records are JSON-encoded. The last assigned id lives in the `meta` column
/// family and is written in the same batch as the inserted record, so ids keep
/// increasing across restarts.
///
/// `Clone` shares the underlying `Arc<DB>` and id sequence.
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
    last_id: Arc<Mutex<u64>>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_transactions = ColumnFamilyDescriptor::new(CF_TRANSACTIONS, Options::default());
        let cf_meta = ColumnFamilyDescriptor::new(CF_META, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_transactions, cf_meta])?;

        let last_id = {
            let meta = cf(&db, CF_META)?;
            match db.get_cf(meta, LAST_ID_KEY)? {
                Some(bytes) => decode_id(&bytes)?,
                None => 0,
            }
        };
        tracing::debug!(last_id, "opened rocksdb transaction store");

        Ok(Self {
            db: Arc::new(db),
            last_id: Arc::new(Mutex::new(last_id)),
        })
    }

    fn transactions(&self) -> Result<&ColumnFamily> {
        cf(&self.db, CF_TRANSACTIONS)
    }
}

fn cf<'a>(db: &'a DB, name: &str) -> Result<&'a ColumnFamily> {
    db.cf_handle(name)
        .ok_or_else(|| PayablesError::store(format!("{name} column family not found")))
}

fn decode_id(bytes: &[u8]) -> Result<u64> {
    let raw: [u8; 8] = bytes
        .try_into()
        .map_err(|_| PayablesError::store(format!("corrupt id of {} bytes", bytes.len())))?;
    Ok(u64::from_be_bytes(raw))
}

fn encode(tx: &Transaction) -> Result<Vec<u8>> {
    serde_json::to_vec(tx).map_err(PayablesError::store)
}

fn decode(bytes: &[u8]) -> Result<Transaction> {
    serde_json::from_slice(bytes).map_err(PayablesError::store)
}

#[async_trait]
impl TransactionStore for RocksDBStore {
    async fn find_all(&self) -> Result<Vec<Transaction>> {
        let cf = self.transactions()?;
        let mut transactions = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item?;
            transactions.push(decode(&value)?);
        }
        Ok(transactions)
    }

    async fn find_by_id(&self, id: TransactionId) -> Result<Option<Transaction>> {
        let cf = self.transactions()?;
        self.db
            .get_cf(cf, id.0.to_be_bytes())?
            .map(|bytes| decode(&bytes))
            .transpose()
    }

    async fn insert(&self, draft: TransactionDraft) -> Result<Transaction> {
        let mut last_id = self.last_id.lock().await;
        let id = *last_id + 1;
        let tx = Transaction::open(TransactionId(id), draft);

        let mut batch = WriteBatch::default();
        batch.put_cf(self.transactions()?, id.to_be_bytes(), encode(&tx)?);
        batch.put_cf(cf(&self.db, CF_META)?, LAST_ID_KEY, id.to_be_bytes());
        self.db.write(batch)?;

        *last_id = id;
        Ok(tx)
    }

    async fn save(&self, tx: Transaction) -> Result<Transaction> {
        let cf = self.transactions()?;
        self.db.put_cf(cf, tx.id.0.to_be_bytes(), encode(&tx)?)?;
        Ok(tx)
    }

    async fn delete(&self, tx: &Transaction) -> Result<()> {
        let cf = self.transactions()?;
        self.db.delete_cf(cf, tx.id.0.to_be_bytes())?;
        Ok(())
    }
}
