//! Creates the application's database schema.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{
    Error, auth::create_users_table, card::create_cards_table,
    transaction::create_transactions_table,
};

/// Create the tables for the application's domain models.
///
/// Table creation is idempotent and runs inside an exclusive SQL transaction
/// so that two processes pointed at the same file cannot interleave schema
/// statements.
///
/// # Errors
/// Returns an [Error::SqlError] if any of the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_users_table(&transaction)?;
    create_cards_table(&transaction)?;
    create_transactions_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
