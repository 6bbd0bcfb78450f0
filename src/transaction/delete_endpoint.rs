//! Defines the endpoint for deleting a transaction.

use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::{Connection, params};

use crate::{AppState, Error, alert::Alert, auth::UserID, database_id::TransactionId};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The database connection for managing transactions.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting a transaction, responds with an alert.
///
/// The delete only applies to a transaction recorded by the logged in user. A
/// transaction id belonging to another user changes no rows and gets the same
/// not-found alert as an id that does not exist.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Extension(user_id): Extension<UserID>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match delete_transaction(transaction_id, user_id, &connection) {
        // The status code has to be 200 OK or HTMX will not delete the table row.
        Ok(rows_affected) if rows_affected != 0 => {
            Alert::success("Transaction deleted successfully").into_response()
        }
        Ok(_) => Error::DeleteMissingTransaction.into_alert_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}

type RowsAffected = usize;

fn delete_transaction(
    id: TransactionId,
    user_id: UserID,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM transactions WHERE id = ?1 AND user_id = ?2",
            params![id, user_id.as_i64()],
        )
        .map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        initialize_db,
        test_utils::create_test_user,
        transaction::core::{TransactionKind, create_transaction, get_transactions_by_user},
    };

    use super::delete_transaction;

    fn must_create_test_connection() -> Connection {
        let connection =
            Connection::open_in_memory().expect("could not create in-memory SQLite database");
        initialize_db(&connection).expect("could not initialize test DB");

        connection
    }

    #[test]
    fn deletes_transaction() {
        let connection = must_create_test_connection();
        let user = create_test_user("alice", &connection);
        let transaction = create_transaction(
            user.id,
            TransactionKind::Expense,
            1.23,
            date!(2025 - 10 - 26),
            &connection,
        )
        .unwrap();

        let rows_affected = delete_transaction(transaction.id, user.id, &connection).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(
            get_transactions_by_user(user.id, &connection).unwrap(),
            vec![]
        );
    }

    #[test]
    fn delete_skips_other_users_transaction() {
        let connection = must_create_test_connection();
        let alice = create_test_user("alice", &connection);
        let bob = create_test_user("bob", &connection);
        let transaction = create_transaction(
            alice.id,
            TransactionKind::Income,
            100.0,
            date!(2025 - 10 - 26),
            &connection,
        )
        .unwrap();

        let rows_affected = delete_transaction(transaction.id, bob.id, &connection).unwrap();

        assert_eq!(rows_affected, 0);
        assert_eq!(
            get_transactions_by_user(alice.id, &connection).unwrap(),
            vec![transaction],
            "alice's transaction should still exist"
        );
    }
}
