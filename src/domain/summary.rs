use super::money::Amount;
use super::transaction::{Transaction, TransactionStatus};
use crate::error::{PayablesError, Result};
use serde::Serialize;

/// Totals over a set of transactions, split by status.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionSummary {
    pub pending_total: Amount,
    pub paid_total: Amount,
    pub total: Amount,
    pub pending_count: usize,
    pub paid_count: usize,
}

impl TransactionSummary {
    /// Fails with `Validation` if a total does not fit in a `Decimal`.
    pub fn from_transactions<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
    ) -> Result<Self> {
        let mut summary = Self::default();
        for tx in transactions {
            match tx.status {
                TransactionStatus::Pending => {
                    summary.pending_total = add(summary.pending_total, tx.amount)?;
                    summary.pending_count += 1;
                }
                TransactionStatus::Paid => {
                    summary.paid_total = add(summary.paid_total, tx.amount)?;
                    summary.paid_count += 1;
                }
            }
        }
        summary.total = add(summary.pending_total, summary.paid_total)?;
        Ok(summary)
    }
}

fn add(total: Amount, amount: Amount) -> Result<Amount> {
    total.checked_add(amount).ok_or_else(|| {
        PayablesError::Validation(format!(
            "Summary total overflow adding {amount} to {total}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionId;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn tx(id: u64, amount: Decimal, status: TransactionStatus) -> Transaction {
        Transaction {
            id: TransactionId(id),
            name: format!("tx {id}"),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            amount: Amount::new(amount).unwrap(),
            status,
        }
    }

    #[test]
    fn test_summary_splits_by_status() {
        let transactions = vec![
            tx(1, dec!(150), TransactionStatus::Pending),
            tx(2, dec!(75.50), TransactionStatus::Paid),
            tx(3, dec!(45), TransactionStatus::Pending),
        ];

        let summary = TransactionSummary::from_transactions(&transactions).unwrap();
        assert_eq!(summary.pending_total.value(), dec!(195));
        assert_eq!(summary.paid_total.value(), dec!(75.50));
        assert_eq!(summary.total.value(), dec!(270.50));
        assert_eq!(summary.pending_count, 2);
        assert_eq!(summary.paid_count, 1);
    }

    #[test]
    fn test_empty_summary() {
        let summary = TransactionSummary::from_transactions(&[]).unwrap();
        assert_eq!(summary, TransactionSummary::default());
    }

    #[test]
    fn test_summary_overflow_is_an_error() {
        let big = Decimal::from_str("50000000000000000000000000000").unwrap();
        let pending = vec![
            tx(1, big, TransactionStatus::Pending),
            tx(2, big, TransactionStatus::Pending),
        ];
        assert!(matches!(
            TransactionSummary::from_transactions(&pending),
            Err(PayablesError::Validation(msg)) if msg.contains("overflow")
        ));

        // Each status total fits, their sum does not.
        let split = vec![
            tx(1, big, TransactionStatus::Pending),
            tx(2, big, TransactionStatus::Paid),
        ];
        assert!(matches!(
            TransactionSummary::from_transactions(&split),
            Err(PayablesError::Validation(_))
        ));
    }
}
