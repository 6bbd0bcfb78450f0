//! Defines the route handler for the page for editing a card.

use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    auth::UserID,
    card::{
        core::{CardId, get_card},
        form::{CardFormFields, card_form},
    },
    endpoints::{self, format_endpoint},
    html::{base, dollar_input_styles},
    internal_server_error::InternalServerError,
    navigation::NavBar,
    not_found::get_404_not_found_response,
};

/// The state needed for the edit card page.
#[derive(Debug, Clone)]
pub struct EditCardPageState {
    /// The database connection for accessing cards.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EditCardPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Renders the page for editing a card.
///
/// A card id that does not belong to the logged in user renders the 404 page.
pub async fn get_edit_card_page(
    State(state): State<EditCardPageState>,
    Extension(user_id): Extension<UserID>,
    Path(card_id): Path<CardId>,
) -> Response {
    let nav_bar = NavBar::new(endpoints::EDIT_CARD).into_html();

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("Could not acquire database lock: {error}");
            return InternalServerError::default().into_response();
        }
    };

    let card = match get_card(card_id, user_id, &connection) {
        Ok(card) => card,
        Err(Error::NotFound) => {
            return get_404_not_found_response();
        }
        Err(error) => {
            tracing::error!("Failed to retrieve card {card_id}: {error}");
            return InternalServerError::default().into_response();
        }
    };

    let edit_url = format_endpoint(endpoints::EDIT_CARD, card_id);
    let form = card_form("Edit Card", &edit_url, &CardFormFields::from_card(&card));

    base(
        "Edit Card",
        &[dollar_input_styles()],
        &maud::html!((nav_bar) (form)),
    )
    .into_response()
}

#[cfg(test)]
mod view_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Extension,
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        card::create_endpoint::{CardForm, create_card},
        endpoints::{self, format_endpoint},
        initialize_db,
        test_utils::{
            assert_form_input_with_value, assert_hx_endpoint, assert_valid_html, create_test_user,
            must_get_form, parse_html_document,
        },
    };

    use super::{EditCardPageState, get_edit_card_page};

    fn must_create_test_connection() -> Connection {
        let connection =
            Connection::open_in_memory().expect("could not create in-memory SQLite database");
        initialize_db(&connection).expect("could not initialize test DB");

        connection
    }

    #[tokio::test]
    async fn edit_card_page_pre_fills_form() {
        let conn = must_create_test_connection();
        let user = create_test_user("alice", &conn);
        let card = create_card(
            user.id,
            &CardForm {
                name: "Visa".to_owned(),
                limit_amount: 5000.0,
                due_date: date!(2025 - 01 - 01),
                apr: 18.99,
            },
            &conn,
        )
        .expect("could not create test card");
        let state = EditCardPageState {
            db_connection: Arc::new(Mutex::new(conn)),
        };

        let response =
            get_edit_card_page(State(state), Extension(user.id), Path(card.id)).await;

        assert_eq!(response.status(), StatusCode::OK);

        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let form = must_get_form(&document);
        assert_hx_endpoint(
            &form,
            &format_endpoint(endpoints::EDIT_CARD, card.id),
            "hx-post",
        );
        assert_form_input_with_value(&form, "name", "text", "Visa");
        assert_form_input_with_value(&form, "limit_amount", "number", "5000");
        assert_form_input_with_value(&form, "due_date", "date", "2025-01-01");
        assert_form_input_with_value(&form, "apr", "number", "18.99");
    }

    #[tokio::test]
    async fn edit_card_page_returns_404_for_other_users_card() {
        let conn = must_create_test_connection();
        let alice = create_test_user("alice", &conn);
        let bob = create_test_user("bob", &conn);
        let card = create_card(
            alice.id,
            &CardForm {
                name: "Visa".to_owned(),
                limit_amount: 5000.0,
                due_date: date!(2025 - 01 - 01),
                apr: 18.99,
            },
            &conn,
        )
        .expect("could not create test card");
        let state = EditCardPageState {
            db_connection: Arc::new(Mutex::new(conn)),
        };

        let response = get_edit_card_page(State(state), Extension(bob.id), Path(card.id)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
