//! Alert fragments for displaying success and error messages to users.
//!
//! Alerts are swapped into the `#alert-container` element out-of-band so that
//! HTMX endpoints can report the outcome of an action without replacing the
//! element that triggered it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

const ALERT_SUCCESS_STYLE: &str = "flex items-center justify-between gap-4 rounded border \
    border-green-300 bg-green-50 px-4 py-3 text-sm text-green-800 shadow \
    dark:border-green-800 dark:bg-gray-800 dark:text-green-400";

const ALERT_ERROR_STYLE: &str = "flex items-center justify-between gap-4 rounded border \
    border-red-300 bg-red-50 px-4 py-3 text-sm text-red-800 shadow \
    dark:border-red-800 dark:bg-gray-800 dark:text-red-400";

/// An alert message shown at the bottom of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Reports that an action completed.
    Success {
        /// Short summary of what happened.
        message: String,
    },
    /// Reports that an action failed.
    Error {
        /// Short summary of what went wrong.
        message: String,
        /// What the user can do about it.
        details: String,
    },
}

impl Alert {
    /// Create a new success alert.
    pub fn success(message: &str) -> Self {
        Self::Success {
            message: message.to_owned(),
        }
    }

    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    fn into_markup(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Success { message } => (ALERT_SUCCESS_STYLE, message, String::new()),
            Alert::Error { message, details } => (ALERT_ERROR_STYLE, message, details),
        };

        html!(
            div hx-swap-oob="innerHTML:#alert-container"
            {
                div class=(style) role="alert"
                {
                    div
                    {
                        p class="font-medium" { (message) }

                        @if !details.is_empty() {
                            p { (details) }
                        }
                    }

                    button
                        type="button"
                        class="font-bold"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "✕"
                    }
                }
            }
        )
    }

    /// Render the alert with the given status code.
    ///
    /// The status code has to be 200 OK for HTMX to perform row swaps, so
    /// success alerts should use [Alert::into_response] instead.
    pub fn render(self, status_code: StatusCode) -> Response {
        (status_code, self.into_markup()).into_response()
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        let status_code = match self {
            Alert::Success { .. } => StatusCode::OK,
            Alert::Error { .. } => StatusCode::BAD_REQUEST,
        };

        self.render(status_code)
    }
}

#[cfg(test)]
mod alert_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Alert;

    #[tokio::test]
    async fn success_alert_is_ok() {
        let response = Alert::success("Card deleted successfully").into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8_lossy(&body).to_string();
        assert!(
            text.contains("Card deleted successfully"),
            "alert should contain the message, got {text}"
        );
    }

    #[tokio::test]
    async fn error_alert_contains_details() {
        let response = Alert::error("Could not delete card", "The card could not be found.")
            .render(StatusCode::NOT_FOUND);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8_lossy(&body).to_string();
        assert!(text.contains("Could not delete card"));
        assert!(text.contains("The card could not be found."));
    }
}
