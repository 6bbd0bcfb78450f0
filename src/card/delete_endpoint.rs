//! Defines the endpoint for deleting a card.

use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::{Connection, params};

use crate::{AppState, Error, alert::Alert, auth::UserID, card::core::CardId};

/// The state needed to delete a card.
#[derive(Debug, Clone)]
pub struct DeleteCardState {
    /// The database connection for managing cards.
    db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteCardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting a card, responds with an alert.
///
/// The delete only applies to a card owned by the logged in user. A card id
/// belonging to another user changes no rows and gets the same not-found
/// alert as an id that does not exist.
pub async fn delete_card_endpoint(
    State(state): State<DeleteCardState>,
    Extension(user_id): Extension<UserID>,
    Path(card_id): Path<CardId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match delete_card(card_id, user_id, &connection) {
        // The status code has to be 200 OK or HTMX will not delete the table row.
        Ok(rows_affected) if rows_affected != 0 => {
            Alert::success("Card deleted successfully").into_response()
        }
        Ok(_) => Error::DeleteMissingCard.into_alert_response(),
        Err(error) => {
            tracing::error!("Could not delete card {card_id}: {error}");
            error.into_alert_response()
        }
    }
}

type RowsAffected = usize;

fn delete_card(
    id: CardId,
    user_id: UserID,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM cards WHERE id = ?1 AND user_id = ?2",
            params![id, user_id.as_i64()],
        )
        .map_err(Error::from)
}
