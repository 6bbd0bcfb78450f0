//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/delete_card/{card_id}', use
//! [format_endpoint].

/// The root route which redirects to the dashboard or log in page.
pub const ROOT: &str = "/";
/// The landing page for logged in users.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for creating a new card (GET) and the form target (POST).
pub const ADD_CARD: &str = "/add_card";
/// The page for editing a card (GET) and the form target (POST).
pub const EDIT_CARD: &str = "/edit_card/{card_id}";
/// The route for setting the balance of a card without editing other fields.
pub const UPDATE_BALANCE: &str = "/update_balance/{card_id}";
/// The route for deleting a card.
pub const DELETE_CARD: &str = "/delete_card/{card_id}";
/// The page for creating a new transaction (GET) and the form target (POST).
pub const ADD_TRANSACTION: &str = "/add_transaction";
/// The route for deleting a transaction.
pub const DELETE_TRANSACTION: &str = "/delete_transaction/{transaction_id}";
/// The page for creating a new user (GET) and the form target (POST).
pub const REGISTER: &str = "/register";
/// The page for logging in (GET) and the form target (POST).
pub const LOG_IN: &str = "/login";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/logout";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/coffee";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/edit_card/{card_id}', '{card_id}' is
/// the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
