//! Database ID type definitions.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;

/// Alias for IDs of rows in the transactions table.
pub type TransactionId = i64;
