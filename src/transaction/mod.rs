//! Recording cash flow transactions for the spa.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `NewTransaction` payload sent to the ledger
//! - `TransactionDraft`, the state of the new transaction form and its validation
//! - View handlers for the transactions page and the new transaction form

mod core;
mod create_endpoint;
mod create_page;
mod draft;
mod form;
mod summary;
mod transactions_page;

pub use self::core::{
    CATEGORIES, CompanyType, NewTransaction, Professional, Transaction, TransactionId,
    TransactionType,
};
pub use create_endpoint::{TransactionFormData, create_transaction_endpoint};
pub use create_page::get_create_transaction_page;
pub use draft::{FormError, FormStatus, TransactionDraft, parse_leading_float};
pub use summary::CashFlowSummary;
pub use transactions_page::get_transactions_page;
