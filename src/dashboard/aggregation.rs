//! Per-user aggregate sums for the dashboard.
//!
//! The sums are recomputed on every request; there is no caching.

use rusqlite::Connection;

use crate::{Error, auth::UserID, transaction::TransactionKind};

/// The total amount earned by `user_id`, or 0 if they have no income transactions.
///
/// # Errors
/// Returns an [Error::SqlError] if the SQL query fails.
pub fn income_total(user_id: UserID, connection: &Connection) -> Result<f64, Error> {
    kind_total(user_id, TransactionKind::Income, connection)
}

/// The total amount spent by `user_id`, or 0 if they have no expense transactions.
///
/// # Errors
/// Returns an [Error::SqlError] if the SQL query fails.
pub fn expense_total(user_id: UserID, connection: &Connection) -> Result<f64, Error> {
    kind_total(user_id, TransactionKind::Expense, connection)
}

fn kind_total(
    user_id: UserID,
    kind: TransactionKind,
    connection: &Connection,
) -> Result<f64, Error> {
    let total = connection
        .prepare(
            "SELECT COALESCE(SUM(amount), 0) FROM transactions \
            WHERE user_id = ?1 AND kind = ?2",
        )?
        .query_row(rusqlite::params![user_id.as_i64(), kind], |row| row.get(0))?;

    Ok(total)
}
