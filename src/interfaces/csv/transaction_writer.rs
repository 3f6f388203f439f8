use crate::domain::transaction::Transaction;
use crate::error::Result;
use std::io::Write;

/// Writes transactions as `id,name,date,amount,status` CSV rows.
pub struct TransactionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TransactionWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes the header followed by one row per transaction, then flushes.
    ///
    /// The header is emitted even when there are no rows.
    pub fn write_transactions<'a>(
        &mut self,
        transactions: impl IntoIterator<Item = &'a Transaction>,
    ) -> Result<()> {
        self.writer
            .write_record(["id", "name", "date", "amount", "status"])?;
        for tx in transactions {
            self.writer.write_record([
                tx.id.to_string(),
                tx.name.clone(),
                tx.date.to_string(),
                tx.amount.to_string(),
                tx.status.to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
