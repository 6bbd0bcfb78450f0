//! Defines the core data model and database queries for credit cards.

use rusqlite::{Connection, Row};
use time::Date;

use crate::{Error, auth::UserID, database_id::DatabaseId};

pub type CardId = DatabaseId;

/// A credit card tracked by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// The id for the card.
    pub id: CardId,
    /// The user that owns the card.
    pub user_id: UserID,
    /// The display name of the card, e.g. "Visa Platinum".
    pub name: String,
    /// The credit limit in dollars.
    pub limit_amount: f64,
    /// When the next payment is due.
    pub due_date: Date,
    /// The annual percentage rate.
    pub apr: f64,
    /// The amount currently owed on the card.
    pub current_balance: f64,
}

/// Create the cards table.
///
/// The foreign key is declared but not enforced: there is no delete-user
/// operation, so rows cannot be orphaned through the application.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_cards_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS cards (
            id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            limit_amount REAL NOT NULL,
            due_date TEXT NOT NULL,
            apr REAL NOT NULL,
            current_balance REAL NOT NULL DEFAULT 0,
            FOREIGN KEY(user_id) REFERENCES users(id)
        )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a [Card].
///
/// **Note:** This function expects the columns in the order they were defined
/// in the table schema.
pub fn map_card_row(row: &Row) -> Result<Card, rusqlite::Error> {
    let id = row.get(0)?;
    let user_id = UserID::new(row.get(1)?);
    let name = row.get(2)?;
    let limit_amount = row.get(3)?;
    let due_date = row.get(4)?;
    let apr = row.get(5)?;
    let current_balance = row.get(6)?;

    Ok(Card {
        id,
        user_id,
        name,
        limit_amount,
        due_date,
        apr,
        current_balance,
    })
}

/// Retrieve a card owned by `user_id` from the database by its `id`.
///
/// A card id belonging to another user gives the same result as an id that
/// does not exist.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a card owned by `user_id`,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_card(id: CardId, user_id: UserID, connection: &Connection) -> Result<Card, Error> {
    let card = connection
        .prepare(
            "SELECT id, user_id, name, limit_amount, due_date, apr, current_balance \
            FROM cards WHERE id = :id AND user_id = :user_id",
        )?
        .query_row(
            &[(":id", &id), (":user_id", &user_id.as_i64())],
            map_card_row,
        )?;

    Ok(card)
}

/// Retrieve all cards owned by `user_id`.
///
/// The rows are returned in the database's default order.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_cards_by_user(user_id: UserID, connection: &Connection) -> Result<Vec<Card>, Error> {
    connection
        .prepare(
            "SELECT id, user_id, name, limit_amount, due_date, apr, current_balance \
            FROM cards WHERE user_id = :user_id",
        )?
        .query_map(&[(":user_id", &user_id.as_i64())], map_card_row)?
        .map(|maybe_card| maybe_card.map_err(Error::SqlError))
        .collect()
}

/// Get the total balance across all cards owned by `user_id`.
///
/// # Errors
/// Returns an [Error::SqlError] if the SQL query fails.
pub fn get_total_card_balance(user_id: UserID, connection: &Connection) -> Result<f64, Error> {
    let total = connection
        .prepare("SELECT COALESCE(SUM(current_balance), 0) FROM cards WHERE user_id = :user_id")?
        .query_row(&[(":user_id", &user_id.as_i64())], |row| row.get(0))?;

    Ok(total)
}
