use super::money::Amount;
use crate::error::{PayablesError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned identity of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle of a transaction. `Paid` is terminal.
///
/// Reads accept any letter case; writes are always upper case.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Paid,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("PENDING"),
            Self::Paid => f.write_str("PAID"),
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = PayablesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            other => Err(PayablesError::Validation(format!(
                "Unknown transaction status '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for TransactionStatus {
    type Error = PayablesError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Caller-supplied fields for creating or editing a transaction.
///
/// A `status` may be present on input (e.g. an imported CSV column) but is
/// never honoured: creation always yields `Pending` and edits keep the stored
/// status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionDraft {
    pub name: String,
    pub date: NaiveDate,
    pub amount: Amount,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
}

impl TransactionDraft {
    pub fn new(name: impl Into<String>, date: NaiveDate, amount: Amount) -> Self {
        Self {
            name: name.into(),
            date,
            amount,
            status: None,
        }
    }

    /// Rejects drafts whose name is empty or only whitespace.
    pub fn validated(self) -> Result<Self> {
        if self.name.trim().is_empty() {
            return Err(PayablesError::Validation(
                "Transaction name must not be blank".to_string(),
            ));
        }
        Ok(self)
    }
}

/// An immutable snapshot of a stored transaction.
///
/// State changes never mutate a snapshot in place; they produce a new one
/// that the caller hands to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub name: String,
    pub date: NaiveDate,
    pub amount: Amount,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Builds the initial `Pending` record for a freshly assigned id.
    pub fn open(id: TransactionId, draft: TransactionDraft) -> Self {
        Self {
            id,
            name: draft.name,
            date: draft.date,
            amount: draft.amount,
            status: TransactionStatus::Pending,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == TransactionStatus::Paid
    }

    pub fn ensure_mutable(&self, reason: &'static str) -> Result<()> {
        if self.is_paid() {
            Err(PayablesError::InvalidState {
                id: self.id,
                reason,
            })
        } else {
            Ok(())
        }
    }

    /// Returns a copy carrying the draft's name, date and amount.
    pub fn revise(&self, draft: &TransactionDraft) -> Result<Self> {
        self.ensure_mutable("paid transactions cannot be edited")?;
        Ok(Self {
            id: self.id,
            name: draft.name.clone(),
            date: draft.date,
            amount: draft.amount,
            status: self.status,
        })
    }

    /// Returns the `Paid` copy of a pending transaction.
    pub fn settle(&self) -> Result<Self> {
        self.ensure_mutable("transaction is already paid")?;
        Ok(Self {
            status: TransactionStatus::Paid,
            ..self.clone()
        })
    }
}
