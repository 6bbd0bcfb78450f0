//! Defines the route handler for the page for recording a transaction.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base, dollar_input_styles, loading_spinner,
    },
    navigation::NavBar,
    transaction::core::TransactionKind,
};

fn kind_radio(kind: TransactionKind, label: &str, checked: bool) -> Markup {
    let id = format!("kind-{kind}");

    html!(
        div class="flex items-center gap-x-3"
        {
            input
                type="radio"
                name="kind"
                id=(id)
                value=(kind)
                class=(FORM_RADIO_INPUT_STYLE)
                required
                checked[checked];

            label for=(id) class=(FORM_LABEL_STYLE) { (label) }
        }
    )
}

fn transaction_form() -> Markup {
    html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-md space-y-4"
            {
                h1 class="text-xl font-bold" { "Add Transaction" }

                form
                    hx-post=(endpoints::ADD_TRANSACTION)
                    hx-indicator="#indicator"
                    hx-target-error="#alert-container"
                    class="space-y-4 md:space-y-6"
                {
                    fieldset class=(FORM_RADIO_GROUP_STYLE)
                    {
                        legend class=(FORM_LABEL_STYLE) { "Kind" }

                        (kind_radio(TransactionKind::Income, "Income", false))
                        (kind_radio(TransactionKind::Expense, "Expense", true))
                    }

                    div
                    {
                        label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                        div class="input-wrapper w-full"
                        {
                            input
                                type="number"
                                name="amount"
                                id="amount"
                                step="0.01"
                                min="0"
                                class=(FORM_TEXT_INPUT_STYLE)
                                required;
                        }
                    }

                    button
                        type="submit" id="submit-button" tabindex="0"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        span class="inline htmx-indicator" id="indicator"
                        {
                            (loading_spinner())
                        }
                        "Add Transaction"
                    }
                }
            }
        }
    )
}

/// Renders the page for recording a transaction.
pub async fn get_create_transaction_page() -> Response {
    let nav_bar = NavBar::new(endpoints::ADD_TRANSACTION).into_html();

    base(
        "Add Transaction",
        &[dollar_input_styles()],
        &html!((nav_bar) (transaction_form())),
    )
    .into_response()
}
