//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `TransactionService`, the single entry point callers
//! use to list, create, edit, delete and settle transactions. It owns its store
//! handle and serializes read-modify-write sequences so concurrent callers
//! cannot settle the same transaction twice.

pub mod service;
