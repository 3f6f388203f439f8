use super::transaction::{Transaction, TransactionStatus};
use chrono::NaiveDate;

/// Optional predicates applied when listing transactions.
///
/// Each supplied field must match; an absent field matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the transaction name.
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<TransactionStatus>,
}

impl TransactionFilter {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        let name_ok = match self.name.as_deref() {
            None | Some("") => true,
            Some(needle) => tx.name.to_lowercase().contains(&needle.to_lowercase()),
        };
        name_ok
            && self.date.is_none_or(|date| tx.date == date)
            && self.status.is_none_or(|status| tx.status == status)
    }
}
