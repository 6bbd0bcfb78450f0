//! Defines the core data model and database queries for transactions.

use std::fmt::Display;

use rusqlite::{
    Connection, Row,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, auth::UserID, database_id::TransactionId};

/// Whether a transaction added or removed money.
///
/// The kind is a closed enumeration so that a typo can never produce a
/// transaction that is silently excluded from both aggregate sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionKind {
    /// The string stored in the database for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToSql for TransactionKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TransactionKind {
    fn column_result(value: ValueRef) -> FromSqlResult<Self> {
        match value.as_str()? {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(FromSqlError::Other(
                format!("invalid transaction kind {other:?}").into(),
            )),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The user that recorded the transaction.
    pub user_id: UserID,
    /// Whether the transaction added or removed money.
    pub kind: TransactionKind,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// When the transaction was recorded.
    pub date: Date,
}

/// Create the transactions table in the database.
///
/// The foreign key is declared but not enforced: there is no delete-user
/// operation, so rows cannot be orphaned through the application.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transactions_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY,
                user_id INTEGER NOT NULL,
                kind TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                FOREIGN KEY(user_id) REFERENCES users(id)
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a [Transaction].
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let user_id = UserID::new(row.get(1)?);
    let kind = row.get(2)?;
    let amount = row.get(3)?;
    let date = row.get(4)?;

    Ok(Transaction {
        id,
        user_id,
        kind,
        amount,
        date,
    })
}

/// Create a new transaction in the database.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    user_id: UserID,
    kind: TransactionKind,
    amount: f64,
    date: Date,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (user_id, kind, amount, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, user_id, kind, amount, date",
        )?
        .query_row((user_id.as_i64(), kind, amount, date), map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve the transactions recorded by `user_id`, most recent first.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_transactions_by_user(
    user_id: UserID,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, user_id, kind, amount, date FROM transactions \
            WHERE user_id = :user_id ORDER BY date DESC, id DESC",
        )?
        .query_map(&[(":user_id", &user_id.as_i64())], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
        .collect()
}

#[cfg(test)]
mod kind_tests {
    use super::TransactionKind;

    #[test]
    fn serialises_to_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Income).unwrap(),
            "\"income\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"expense\""
        );
    }

    #[test]
    fn deserialising_rejects_unknown_kind() {
        let result = serde_json::from_str::<TransactionKind>("\"transfer\"");

        assert!(result.is_err(), "unknown kinds must be rejected");
    }
}
