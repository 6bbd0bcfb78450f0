//! Defines the endpoint for setting the balance of a card without editing the other fields.
use std::sync::{Arc, Mutex};

use axum::{
    Extension, Form,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use rusqlite::{Connection, params};
use serde::Deserialize;

use crate::{AppState, Error, auth::UserID, card::core::CardId, endpoints};

/// The state needed to update a card balance.
#[derive(Debug, Clone)]
pub struct UpdateBalanceState {
    /// The database connection for managing cards.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpdateBalanceState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBalanceForm {
    new_balance: f64,
}

/// A route handler for setting the current balance of a card.
///
/// Balance updates are last-write-wins: there is no optimistic-concurrency
/// check against the previous balance. The update only applies to a card
/// owned by the logged in user; a card id belonging to another user changes
/// no rows and gets a not-found alert.
pub async fn update_balance_endpoint(
    State(state): State<UpdateBalanceState>,
    Extension(user_id): Extension<UserID>,
    Path(card_id): Path<CardId>,
    Form(form): Form<UpdateBalanceForm>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match update_balance(card_id, user_id, form.new_balance, &connection) {
        Ok(rows_affected) if rows_affected != 0 => (
            HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Ok(_) => Error::UpdateMissingCard.into_alert_response(),
        Err(error) => {
            tracing::error!("Could not update balance for card {card_id}: {error}");
            error.into_alert_response()
        }
    }
}

type RowsAffected = usize;

fn update_balance(
    id: CardId,
    user_id: UserID,
    new_balance: f64,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE cards SET current_balance = ?1 WHERE id = ?2 AND user_id = ?3",
            params![new_balance, id, user_id.as_i64()],
        )
        .map_err(Error::from)
}
