//! Domain layer: the transaction entity, its value objects and the store port.

pub mod filter;
pub mod money;
pub mod ports;
pub mod settlement;
pub mod summary;
pub mod transaction;
