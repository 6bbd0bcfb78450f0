//! Card management for the finance tracker.
//!
//! This module contains everything related to credit cards:
//! - The `Card` model and database functions for storing and querying cards
//! - Endpoints for creating, editing, and deleting cards and updating balances
//! - View handlers for the card form pages

mod core;
mod create_endpoint;
mod create_page;
mod delete_endpoint;
mod edit_endpoint;
mod edit_page;
mod form;
mod update_balance_endpoint;

pub use self::core::{
    Card, create_cards_table, get_cards_by_user, get_total_card_balance, map_card_row,
};
pub use create_endpoint::create_card_endpoint;
pub use create_page::get_create_card_page;
pub use delete_endpoint::delete_card_endpoint;
pub use edit_endpoint::edit_card_endpoint;
pub use edit_page::get_edit_card_page;
pub use update_balance_endpoint::update_balance_endpoint;

#[cfg(test)]
pub(crate) use self::core::get_card;
#[cfg(test)]
pub(crate) use create_endpoint::{CardForm, create_card};
