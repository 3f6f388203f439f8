use payables::application::service::TransactionService;
use payables::domain::filter::TransactionFilter;
use payables::domain::transaction::{TransactionId, TransactionStatus};
use payables::infrastructure::in_memory::InMemoryTransactionStore;
use rust_decimal_macros::dec;
use std::collections::HashSet;
use std::sync::Arc;

mod common;
use common::{amount, draft};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_payments_never_settle_twice() {
    let service = Arc::new(TransactionService::new(Box::new(
        InMemoryTransactionStore::new(),
    )));
    for day in 1..=20 {
        service
            .create_transaction(draft(
                &format!("bill-{day}"),
                &format!("2024-01-{day:02}"),
                dec!(100),
            ))
            .await
            .unwrap();
    }

    let mut handles = Vec::new();
    for _ in 0..40 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service.process_payment(amount(dec!(100))).await.unwrap()
        }));
    }

    let mut seen: HashSet<TransactionId> = HashSet::new();
    let mut leftover_passes = 0;
    for handle in handles {
        let settlement = handle.await.unwrap();
        assert!(settlement.settled.len() <= 1);
        for tx in settlement.settled {
            assert!(seen.insert(tx.id), "transaction {} settled twice", tx.id);
        }
        if settlement.remaining == amount(dec!(100)) {
            leftover_passes += 1;
        }
    }

    assert_eq!(seen.len(), 20);
    assert_eq!(leftover_passes, 20);

    let paid = service
        .find_transactions(&TransactionFilter::default().with_status(TransactionStatus::Paid))
        .await
        .unwrap();
    assert_eq!(paid.len(), 20);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_edits_racing_payments_stay_consistent() {
    let service = Arc::new(TransactionService::new(Box::new(
        InMemoryTransactionStore::new(),
    )));
    let created = service
        .create_transaction(draft("Rent", "2024-01-01", dec!(100)))
        .await
        .unwrap();

    let payer = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.process_payment(amount(dec!(100))).await })
    };
    let editor = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            service
                .update_transaction(created.id, draft("Rent", "2024-01-01", dec!(150)))
                .await
        })
    };

    let settlement = payer.await.unwrap().unwrap();
    let edit = editor.await.unwrap();

    let stored = service
        .find_transactions(&TransactionFilter::default())
        .await
        .unwrap();
    let tx = &stored[0];
    match edit {
        // Edit ran first: 150 no longer fits into the 100 payment.
        Ok(_) => {
            assert!(settlement.settled.is_empty());
            assert_eq!(tx.status, TransactionStatus::Pending);
            assert_eq!(tx.amount, amount(dec!(150)));
        }
        // Payment ran first: the record is paid and the edit was refused.
        Err(_) => {
            assert_eq!(settlement.settled.len(), 1);
            assert_eq!(tx.status, TransactionStatus::Paid);
            assert_eq!(tx.amount, amount(dec!(100)));
        }
    }
}
