//! Transaction management for the tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionDraft` for creating transactions
//! - The in-memory `TransactionStore` that mirrors its changes to storage
//! - The entry form, its validation, and the transaction list
//! - Route handlers for creating and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod form;
mod store;
mod view;

pub use core::{
    ISO_DATE_FORMAT, Transaction, TransactionDraft, TransactionId, TransactionType,
    UnknownTransactionType,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use form::{
    TransactionForm, TransactionFormDefaults, ValidationError, transaction_form, validate,
};
pub use store::TransactionStore;
pub use view::transaction_list;
