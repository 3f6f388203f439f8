//! Prefix-greedy allocation of an incoming payment over pending transactions.

use super::money::Amount;
use super::transaction::Transaction;
use crate::error::Result;
use serde::Serialize;

/// Which pending transactions a payment covers, in settlement order.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementPlan {
    /// `Paid` snapshots ready to be persisted, earliest first.
    pub settled: Vec<Transaction>,
    /// Funds left over after the walk stopped.
    pub remaining: Amount,
}

/// Outcome of a payment pass as reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    pub settled: Vec<Transaction>,
    pub remaining: Amount,
}

/// Plans a settlement pass.
///
/// Pending transactions are ordered by date, then by id. The walk settles each
/// one in full while funds last and stops at the first it cannot cover, even if
/// a later one would fit. Non-pending input is ignored. A zero payment plans
/// nothing, including zero-amount transactions.
pub fn plan_settlement(transactions: Vec<Transaction>, amount: Amount) -> Result<SettlementPlan> {
    if amount == Amount::ZERO {
        return Ok(SettlementPlan {
            settled: Vec::new(),
            remaining: amount,
        });
    }

    let mut pending: Vec<Transaction> = transactions
        .into_iter()
        .filter(|tx| !tx.is_paid())
        .collect();
    pending.sort_by_key(|tx| (tx.date, tx.id));

    let mut remaining = amount;
    let mut settled = Vec::new();
    for tx in pending {
        let Some(left) = remaining.checked_sub(tx.amount) else {
            tracing::debug!(
                id = %tx.id,
                amount = %tx.amount,
                remaining = %remaining,
                "insufficient funds, stopping settlement walk"
            );
            break;
        };
        remaining = left;
        settled.push(tx.settle()?);
    }

    Ok(SettlementPlan { settled, remaining })
}
