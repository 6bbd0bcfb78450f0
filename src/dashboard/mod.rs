//! Dashboard module
//!
//! Provides the landing page showing per-user income and expense totals, the
//! user's cards, and their transactions.

mod aggregation;
mod handlers;

pub use aggregation::{expense_total, income_total};
pub use handlers::get_dashboard_page;
