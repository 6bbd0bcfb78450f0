//! Defines the route handler for the page for creating a card.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::Markup;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    card::form::{CardFormFields, card_form},
    endpoints,
    html::{base, dollar_input_styles},
    navigation::NavBar,
    timezone::get_local_offset,
};

/// The state needed for the create card page.
#[derive(Debug, Clone)]
pub struct CreateCardPageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateCardPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

fn create_card_view(nav_bar: Markup, form: Markup) -> Markup {
    base("Add Card", &[dollar_input_styles()], &maud::html!((nav_bar) (form)))
}

/// Renders the page for creating a card.
pub async fn get_create_card_page(
    State(state): State<CreateCardPageState>,
) -> Result<Response, Error> {
    let nav_bar = NavBar::new(endpoints::ADD_CARD).into_html();

    let local_timezone = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!(
            "could not get local time offset from timezone {}",
            &state.local_timezone
        );
        Error::InvalidTimezoneError(state.local_timezone)
    })?;

    let today = OffsetDateTime::now_utc().to_offset(local_timezone).date();
    let form = card_form(
        "Add Card",
        endpoints::ADD_CARD,
        &CardFormFields::empty(today),
    );

    Ok(create_card_view(nav_bar, form).into_response())
}
