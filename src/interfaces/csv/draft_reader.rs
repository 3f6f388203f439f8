use crate::domain::transaction::TransactionDraft;
use crate::error::{PayablesError, Result};
use std::io::Read;

/// Reads transaction drafts from a CSV source.
///
/// Expected columns are `name,date,amount` with an optional `status` column,
/// which is parsed but never applied. Whitespace is trimmed and short records
/// are tolerated so the trailing `status` can be omitted.
pub struct DraftReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> DraftReader<R> {
    /// Creates a new `DraftReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes drafts.
    ///
    /// A malformed row, or one with a blank name, yields an `Err` for that
    /// row only; reading continues.
    pub fn drafts(self) -> impl Iterator<Item = Result<TransactionDraft>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map_err(PayablesError::from)
                .and_then(TransactionDraft::validated)
        })
    }
}
