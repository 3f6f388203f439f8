pub mod draft_reader;
pub mod transaction_writer;
