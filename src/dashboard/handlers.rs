//! Dashboard HTTP handler and view rendering.
//!
//! The dashboard is the landing page for logged in users. It shows the
//! income and expense totals, the user's cards, and their transactions.

use std::sync::{Arc, Mutex};

use axum::{
    Extension,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use time::Date;

use crate::{
    AppState, Error,
    auth::UserID,
    card::{Card, get_cards_by_user, get_total_card_balance},
    dashboard::aggregation::{expense_total, income_total},
    endpoints::{self, format_endpoint},
    html::{
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, edit_delete_action_links, format_currency,
    },
    navigation::NavBar,
    transaction::{Transaction, TransactionKind, get_transactions_by_user},
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The database connection for reading cards and transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The card data to display in the view.
#[derive(Debug, PartialEq)]
struct CardTableRow {
    name: String,
    limit_amount: f64,
    due_date: Date,
    apr: f64,
    current_balance: f64,
    update_balance_url: String,
    edit_url: String,
    delete_url: String,
}

impl CardTableRow {
    fn new_from_card(card: Card) -> Self {
        Self {
            name: card.name,
            limit_amount: card.limit_amount,
            due_date: card.due_date,
            apr: card.apr,
            current_balance: card.current_balance,
            update_balance_url: format_endpoint(endpoints::UPDATE_BALANCE, card.id),
            edit_url: format_endpoint(endpoints::EDIT_CARD, card.id),
            delete_url: format_endpoint(endpoints::DELETE_CARD, card.id),
        }
    }
}

/// The transaction data to display in the view.
#[derive(Debug, PartialEq)]
struct TransactionTableRow {
    kind: TransactionKind,
    amount: f64,
    date: Date,
    delete_url: String,
}

impl TransactionTableRow {
    fn new_from_transaction(transaction: Transaction) -> Self {
        Self {
            kind: transaction.kind,
            amount: transaction.amount,
            date: transaction.date,
            delete_url: format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id),
        }
    }
}

/// Holds all the data needed to render the dashboard.
struct DashboardData {
    income: f64,
    expenses: f64,
    total_card_balance: f64,
    cards: Vec<CardTableRow>,
    transactions: Vec<TransactionTableRow>,
}

/// Display a page with an overview of the user's data.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Extension(user_id): Extension<UserID>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let data = build_dashboard_data(user_id, &connection)?;

    Ok(dashboard_view(&data).into_response())
}

fn build_dashboard_data(
    user_id: UserID,
    connection: &Connection,
) -> Result<DashboardData, Error> {
    let income = income_total(user_id, connection)
        .inspect_err(|error| tracing::error!("could not sum income: {error}"))?;
    let expenses = expense_total(user_id, connection)
        .inspect_err(|error| tracing::error!("could not sum expenses: {error}"))?;
    let total_card_balance = get_total_card_balance(user_id, connection)
        .inspect_err(|error| tracing::error!("could not sum card balances: {error}"))?;

    let cards = get_cards_by_user(user_id, connection)
        .inspect_err(|error| tracing::error!("could not get cards: {error}"))?
        .into_iter()
        .map(CardTableRow::new_from_card)
        .collect();

    let transactions = get_transactions_by_user(user_id, connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?
        .into_iter()
        .map(TransactionTableRow::new_from_transaction)
        .collect();

    Ok(DashboardData {
        income,
        expenses,
        total_card_balance,
        cards,
        transactions,
    })
}

const STAT_CARD_STYLE: &str = "rounded border border-gray-200 bg-white px-4 py-3 shadow-sm \
    dark:border-gray-700 dark:bg-gray-800";

fn stat_card(label: &str, value: f64) -> Markup {
    html!(
        div class=(STAT_CARD_STYLE)
        {
            p class="text-sm text-gray-500 dark:text-gray-400" { (label) }
            p class="text-2xl font-semibold tabular-nums" { (format_currency(value)) }
        }
    )
}

fn card_table_row(card: &CardTableRow) -> Markup {
    let action_links = edit_delete_action_links(
        &card.edit_url,
        &card.delete_url,
        &format!(
            "Are you sure you want to delete the card '{}'? This cannot be undone.",
            card.name
        ),
        "closest tr",
        "delete",
    );

    html!(
        tr class=(TABLE_ROW_STYLE)
        {
            th
                scope="row"
                class="px-6 py-4 font-medium text-gray-900 whitespace-nowrap dark:text-white"
            {
                (card.name)
            }

            td class="px-6 py-4 text-right" { (format_currency(card.limit_amount)) }

            td class=(TABLE_CELL_STYLE) { time datetime=(card.due_date) { (card.due_date) } }

            td class="px-6 py-4 text-right" { (card.apr) "%" }

            td class=(TABLE_CELL_STYLE)
            {
                form
                    hx-post=(card.update_balance_url)
                    hx-target-error="#alert-container"
                    class="flex items-center gap-2"
                {
                    input
                        type="number"
                        name="new_balance"
                        step="0.01"
                        value=(card.current_balance)
                        class="w-28 p-1.5 rounded text-sm text-right text-gray-900
                            dark:text-white bg-gray-50 dark:bg-gray-700 border
                            border-gray-300 dark:border-gray-600"
                        required;

                    button type="submit" class=(LINK_STYLE) { "Update" }
                }
            }

            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4" { (action_links) }
            }
        }
    )
}

fn cards_section(cards: &[CardTableRow]) -> Markup {
    html!(
        section class="space-y-4 w-full lg:max-w-5xl"
        {
            header class="flex justify-between flex-wrap items-end"
            {
                h2 class="text-xl font-bold" { "Cards" }

                a href=(endpoints::ADD_CARD) class=(LINK_STYLE) { "Add Card" }
            }

            div class="w-full overflow-x-auto dark:bg-gray-800"
            {
                table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                            th scope="col" class="px-6 py-3 text-right" { "Limit" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Due Date" }
                            th scope="col" class="px-6 py-3 text-right" { "APR" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Balance" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for card in cards {
                            (card_table_row(card))
                        }

                        @if cards.is_empty() {
                            tr
                            {
                                td
                                    colspan="6"
                                    class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                                {
                                    "No cards found. Add a card "
                                    a href=(endpoints::ADD_CARD) class=(LINK_STYLE) { "here" }
                                    "."
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

fn transaction_table_row(transaction: &TransactionTableRow) -> Markup {
    let kind_label = match transaction.kind {
        TransactionKind::Income => "Income",
        TransactionKind::Expense => "Expense",
    };

    html!(
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (kind_label) }

            td class="px-6 py-4 text-right" { (format_currency(transaction.amount)) }

            td class=(TABLE_CELL_STYLE)
            {
                time datetime=(transaction.date) { (transaction.date) }
            }

            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    class=(LINK_STYLE)
                    hx-post=(transaction.delete_url)
                    hx-confirm="Are you sure you want to delete this transaction? This cannot be undone."
                    hx-target="closest tr"
                    hx-swap="delete"
                    hx-target-error="#alert-container"
                {
                    "Delete"
                }
            }
        }
    )
}

fn transactions_section(transactions: &[TransactionTableRow]) -> Markup {
    html!(
        section class="space-y-4 w-full lg:max-w-5xl"
        {
            header class="flex justify-between flex-wrap items-end"
            {
                h2 class="text-xl font-bold" { "Transactions" }

                a href=(endpoints::ADD_TRANSACTION) class=(LINK_STYLE) { "Add Transaction" }
            }

            div class="w-full overflow-x-auto dark:bg-gray-800"
            {
                table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Kind" }
                            th scope="col" class="px-6 py-3 text-right" { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions {
                            (transaction_table_row(transaction))
                        }

                        @if transactions.is_empty() {
                            tr
                            {
                                td
                                    colspan="4"
                                    class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                                {
                                    "No transactions found. Add a transaction "
                                    a href=(endpoints::ADD_TRANSACTION) class=(LINK_STYLE) { "here" }
                                    "."
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

fn dashboard_view(data: &DashboardData) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full lg:max-w-5xl space-y-8"
            {
                section class="grid grid-cols-1 gap-4 sm:grid-cols-3"
                {
                    div id="income-total" { (stat_card("Income", data.income)) }
                    div id="expense-total" { (stat_card("Expenses", data.expenses)) }
                    div id="card-balance-total"
                    {
                        (stat_card("Card Balances", data.total_card_balance))
                    }
                }

                (cards_section(&data.cards))

                (transactions_section(&data.transactions))
            }
        }
    );

    base("Dashboard", &[], &content)
}
