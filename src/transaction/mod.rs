//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the closed [TransactionKind] enumeration
//! - Database functions for storing, querying, and deleting transactions
//! - The endpoints and page for recording and deleting transactions

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;

pub use self::core::{
    Transaction, TransactionKind, create_transactions_table, get_transactions_by_user,
    map_transaction_row,
};
pub use create_endpoint::create_transaction_endpoint;
pub use create_page::get_create_transaction_page;
pub use delete_endpoint::delete_transaction_endpoint;

#[cfg(test)]
pub(crate) use self::core::create_transaction;
