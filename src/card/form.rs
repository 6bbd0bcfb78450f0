//! Shared maud form for the create and edit card pages.

use maud::{Markup, html};
use time::Date;

use crate::{
    card::Card,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        loading_spinner,
    },
};

/// The values to pre-fill the card form with.
pub(crate) struct CardFormFields {
    pub(crate) name: String,
    pub(crate) limit_amount: Option<f64>,
    pub(crate) due_date: Date,
    pub(crate) apr: Option<f64>,
}

impl CardFormFields {
    /// An empty form with the due date defaulting to `due_date`.
    pub(crate) fn empty(due_date: Date) -> Self {
        Self {
            name: String::new(),
            limit_amount: None,
            due_date,
            apr: None,
        }
    }

    /// Pre-fill the form with an existing card for editing.
    pub(crate) fn from_card(card: &Card) -> Self {
        Self {
            name: card.name.clone(),
            limit_amount: Some(card.limit_amount),
            due_date: card.due_date,
            apr: Some(card.apr),
        }
    }
}

fn number_value(value: Option<f64>) -> String {
    value.map(|number| number.to_string()).unwrap_or_default()
}

pub(crate) fn card_form(title: &str, post_url: &str, fields: &CardFormFields) -> Markup {
    html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-md space-y-4"
            {
                h1 class="text-xl font-bold" { (title) }

                form
                    hx-post=(post_url)
                    hx-indicator="#indicator"
                    hx-target-error="#alert-container"
                    class="space-y-4 md:space-y-6"
                {
                    div
                    {
                        label for="name" class=(FORM_LABEL_STYLE) { "Name" }

                        input
                            type="text"
                            name="name"
                            id="name"
                            placeholder="Visa Platinum"
                            class=(FORM_TEXT_INPUT_STYLE)
                            required
                            value=(fields.name);
                    }

                    div
                    {
                        label for="limit_amount" class=(FORM_LABEL_STYLE) { "Credit Limit" }

                        div class="input-wrapper w-full"
                        {
                            input
                                type="number"
                                name="limit_amount"
                                id="limit_amount"
                                step="0.01"
                                min="0"
                                class=(FORM_TEXT_INPUT_STYLE)
                                required
                                value=(number_value(fields.limit_amount));
                        }
                    }

                    div
                    {
                        label for="due_date" class=(FORM_LABEL_STYLE) { "Due Date" }

                        input
                            type="date"
                            name="due_date"
                            id="due_date"
                            class=(FORM_TEXT_INPUT_STYLE)
                            required
                            value=(fields.due_date);
                    }

                    div
                    {
                        label for="apr" class=(FORM_LABEL_STYLE) { "APR (%)" }

                        input
                            type="number"
                            name="apr"
                            id="apr"
                            step="0.01"
                            min="0"
                            class=(FORM_TEXT_INPUT_STYLE)
                            required
                            value=(number_value(fields.apr));
                    }

                    button
                        type="submit" id="submit-button" tabindex="0"
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        span class="inline htmx-indicator" id="indicator"
                        {
                            (loading_spinner())
                        }
                        (title)
                    }
                }
            }
        }
    )
}
