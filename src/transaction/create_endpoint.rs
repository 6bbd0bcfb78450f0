//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use rusqlite::Connection;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    auth::UserID,
    endpoints,
    timezone::get_local_offset,
    transaction::core::{TransactionKind, create_transaction},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Whether the transaction is income or an expense.
    pub kind: TransactionKind,
    /// The value of the transaction in dollars.
    pub amount: f64,
}

/// A route handler for creating a new transaction, redirects to the dashboard on success.
///
/// The transaction is dated with today's date in the server's local timezone.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Extension(user_id): Extension<UserID>,
    Form(form): Form<TransactionForm>,
) -> impl IntoResponse {
    let local_timezone = match get_local_offset(&state.local_timezone) {
        Some(offset) => offset,
        None => return Error::InvalidTimezoneError(state.local_timezone).into_response(),
    };
    let today = OffsetDateTime::now_utc().to_offset(local_timezone).date();

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    if let Err(error) = create_transaction(user_id, form.kind, form.amount, today, &connection) {
        tracing::error!("Could not create transaction with {form:?}: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Extension, Router, body::Body, extract::State, http::Response, response::IntoResponse,
        routing::post,
    };
    use axum_extra::extract::Form;
    use axum_htmx::HX_REDIRECT;
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{
        auth::UserID,
        db::initialize,
        endpoints,
        test_utils::create_test_user,
        transaction::core::{TransactionKind, get_transactions_by_user},
    };

    use super::{CreateTransactionState, TransactionForm, create_transaction_endpoint};

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn get_test_state(conn: Connection) -> CreateTransactionState {
        CreateTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let conn = get_test_connection();
        let user = create_test_user("alice", &conn);
        let state = get_test_state(conn);

        let form = TransactionForm {
            kind: TransactionKind::Income,
            amount: 12.3,
        };

        let response =
            create_transaction_endpoint(State(state.clone()), Extension(user.id), Form(form))
                .await
                .into_response();

        assert_redirects_to_dashboard(response);

        let connection = state.db_connection.lock().unwrap();
        let transactions = get_transactions_by_user(user.id, &connection).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].amount, 12.3);
        assert_eq!(transactions[0].kind, TransactionKind::Income);
    }

    #[tokio::test]
    async fn form_rejects_unknown_kind() {
        let conn = get_test_connection();
        let user = create_test_user("alice", &conn);
        let state = get_test_state(conn);

        let app = Router::new()
            .route(endpoints::ADD_TRANSACTION, post(create_transaction_endpoint))
            .layer(Extension(user.id))
            .with_state(state.clone());
        let server = TestServer::try_new(app).expect("Could not create test server.");

        let response = server
            .post(endpoints::ADD_TRANSACTION)
            .form(&[("kind", "transfer"), ("amount", "12.3")])
            .await;

        response.assert_status_bad_request();

        let connection = state.db_connection.lock().unwrap();
        let transactions = get_transactions_by_user(user.id, &connection).unwrap();
        assert!(
            transactions.is_empty(),
            "a rejected form must not create a transaction"
        );
    }

    #[tokio::test]
    async fn form_rejects_non_numeric_amount() {
        let conn = get_test_connection();
        let user = create_test_user("alice", &conn);
        let state = get_test_state(conn);

        let app = Router::new()
            .route(endpoints::ADD_TRANSACTION, post(create_transaction_endpoint))
            .layer(Extension(user.id))
            .with_state(state.clone());
        let server = TestServer::try_new(app).expect("Could not create test server.");

        let response = server
            .post(endpoints::ADD_TRANSACTION)
            .form(&[("kind", "income"), ("amount", "a lot")])
            .await;

        response.assert_status_bad_request();
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
