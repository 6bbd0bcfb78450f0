//! Defines the endpoint for creating a new card.
use std::sync::{Arc, Mutex};

use axum::{
    Extension, Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_htmx::HxRedirect;
use rusqlite::{Connection, params};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error, alert::Alert, auth::UserID, card::Card, endpoints,
};

/// The state needed to create a card.
#[derive(Debug, Clone)]
pub struct CreateCardState {
    /// The database connection for managing cards.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateCardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The form data for creating a card.
#[derive(Debug, Deserialize)]
pub struct CardForm {
    /// The display name of the card.
    pub name: String,
    /// The credit limit in dollars.
    pub limit_amount: f64,
    /// When the next payment is due.
    pub due_date: Date,
    /// The annual percentage rate.
    pub apr: f64,
}

/// A route handler for creating a new card, redirects to the dashboard on success.
///
/// The new card starts with a balance of zero.
pub async fn create_card_endpoint(
    State(state): State<CreateCardState>,
    Extension(user_id): Extension<UserID>,
    Form(form): Form<CardForm>,
) -> impl IntoResponse {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("Could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match create_card(user_id, &form, &connection) {
        Ok(_) => {}
        Err(error) => {
            tracing::error!("Could not create card with {form:?}, got an unexpected error: {error}");
            return Alert::error(
                "Something went wrong",
                "Try again later or check the server logs",
            )
            .render(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    (
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

/// Insert a card owned by `user_id` with a balance of zero.
///
/// # Errors
/// Returns an [Error::SqlError] if the insert fails.
pub fn create_card(
    user_id: UserID,
    form: &CardForm,
    connection: &Connection,
) -> Result<Card, Error> {
    connection.execute(
        "INSERT INTO cards (user_id, name, limit_amount, due_date, apr) \
        VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user_id.as_i64(),
            form.name,
            form.limit_amount,
            form.due_date,
            form.apr
        ],
    )?;

    let id = connection.last_insert_rowid();

    Ok(Card {
        id,
        user_id,
        name: form.name.clone(),
        limit_amount: form.limit_amount,
        due_date: form.due_date,
        apr: form.apr,
        current_balance: 0.0,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Extension, Form, body::Body, extract::State, http::Response, response::IntoResponse,
    };
    use axum_htmx::HX_REDIRECT;
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        card::{Card, core::get_card},
        db::initialize,
        endpoints,
        test_utils::create_test_user,
    };

    use super::{CardForm, CreateCardState, create_card_endpoint};

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[tokio::test]
    async fn can_create_card() {
        let conn = get_test_connection();
        let user = create_test_user("alice", &conn);
        let state = CreateCardState {
            db_connection: Arc::new(Mutex::new(conn)),
        };
        let want_card = Card {
            id: 1,
            user_id: user.id,
            name: "Visa".to_owned(),
            limit_amount: 5000.0,
            due_date: date!(2025 - 01 - 01),
            apr: 18.99,
            current_balance: 0.0,
        };

        let form = CardForm {
            name: want_card.name.clone(),
            limit_amount: want_card.limit_amount,
            due_date: want_card.due_date,
            apr: want_card.apr,
        };

        let response = create_card_endpoint(State(state.clone()), Extension(user.id), Form(form))
            .await
            .into_response();

        assert_redirects_to_dashboard(response);

        // Verify the card was actually created by getting it by ID.
        // We know the first card will have ID 1.
        let connection = state.db_connection.lock().unwrap();
        let got_card = get_card(1, user.id, &connection).expect("could not get card");
        assert_eq!(want_card, got_card);
    }

    #[track_caller]
    fn assert_redirects_to_dashboard(response: Response<Body>) {
        let location = response
            .headers()
            .get(HX_REDIRECT)
            .expect("expected response to have the header hx-redirect");
        assert_eq!(
            location,
            endpoints::DASHBOARD_VIEW,
            "got redirect to {location:?}, want redirect to {}",
            endpoints::DASHBOARD_VIEW
        );
    }
}
