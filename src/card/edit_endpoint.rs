//! Defines the endpoint for updating all fields of a card.
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
use time::Date;

use crate::{AppState, Error, auth::UserID, card::core::CardId, endpoints};

/// The state needed to edit a card.
#[derive(Debug, Clone)]
pub struct EditCardState {
    /// The database connection for managing cards.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditCardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EditCardForm {
    name: String,
    limit_amount: f64,
    due_date: Date,
    apr: f64,
}

/// A route handler for updating all editable fields of a card.
///
/// The update only applies to a card owned by the logged in user. A card id
/// belonging to another user gets the same not-found alert as an id that does
/// not exist.
pub async fn edit_card_endpoint(
    State(state): State<EditCardState>,
    Extension(user_id): Extension<UserID>,
    Path(card_id): Path<CardId>,
    Form(form): Form<EditCardForm>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match update_card(card_id, user_id, &form, &connection) {
        Ok(rows_affected) if rows_affected != 0 => (
            HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Ok(_) => Error::UpdateMissingCard.into_alert_response(),
        Err(error) => {
            tracing::error!("Could not update card {card_id}: {error}");
            error.into_alert_response()
        }
    }
}

type RowsAffected = usize;

fn update_card(
    id: CardId,
    user_id: UserID,
    card: &EditCardForm,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE cards \
            SET name = ?1, limit_amount = ?2, due_date = ?3, apr = ?4 \
            WHERE id = ?5 AND user_id = ?6",
            params![
                card.name,
                card.limit_amount,
                card.due_date,
                card.apr,
                id,
                user_id.as_i64(),
            ],
        )
        .map_err(Error::from)
}
