//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// The format used for transaction dates in storage and in form fields, e.g. "2025-02-16".
pub const ISO_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned, e.g. a salary payment.
    Income,
    /// Money that was spent, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The lowercase name used in storage, form values and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// The capitalised name for display, e.g. "Expense".
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when parsing a string that is neither "income" nor "expense".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transaction type \"{0}\"")]
pub struct UnknownTransactionType(pub String);

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(UnknownTransactionType(other.to_owned())),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build] and add the
/// resulting [TransactionDraft] to the store, which assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, unique within the stored collection.
    pub id: TransactionId,
    /// The amount of money spent or earned, always positive when entered.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether the transaction was income or an expense.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// The category chosen when the transaction was entered, e.g. "Food".
    pub category: String,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl Transaction {
    /// Create a new transaction without an ID.
    ///
    /// Shortcut for [TransactionDraft] for discoverability.
    pub fn build(
        amount: f64,
        description: &str,
        type_: TransactionType,
        category: &str,
        date: Date,
    ) -> TransactionDraft {
        TransactionDraft {
            amount,
            description: description.to_owned(),
            type_,
            category: category.to_owned(),
            date,
        }
    }

    /// The amount with the sign of its effect on the balance: negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.type_ {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// A transaction that has every field except its ID.
///
/// Drafts are produced by validating the transaction form and become
/// transactions when the store assigns them an ID.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// The amount of money spent or earned.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether the transaction was income or an expense.
    pub type_: TransactionType,
    /// The category of the transaction, e.g. "Food", "Salary".
    pub category: String,
    /// When the transaction happened.
    pub date: Date,
}

impl TransactionDraft {
    /// Turn the draft into a [Transaction] with the ID `id`.
    pub fn finalise(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            description: self.description,
            type_: self.type_,
            category: self.category,
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use super::{Transaction, TransactionType};

    #[test]
    fn serializes_with_storage_field_names() {
        let transaction = Transaction::build(
            50.0,
            "Groceries",
            TransactionType::Expense,
            "Food",
            date!(2025 - 02 - 16),
        )
        .finalise(2);

        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 2,
                "amount": 50.0,
                "description": "Groceries",
                "type": "expense",
                "category": "Food",
                "date": "2025-02-16"
            })
        );
    }

    #[test]
    fn deserializes_integer_amounts() {
        let raw = r#"{"id":1,"amount":2500,"description":"Salary","type":"income","category":"Salary","date":"2025-02-15"}"#;

        let transaction: Transaction = serde_json::from_str(raw).unwrap();

        assert_eq!(transaction.amount, 2500.0);
        assert_eq!(transaction.type_, TransactionType::Income);
        assert_eq!(transaction.date, date!(2025 - 02 - 15));
    }

    #[test]
    fn rejects_malformed_date() {
        let raw = r#"{"id":1,"amount":1,"description":"x","type":"income","category":"Gift","date":"15/02/2025"}"#;

        assert!(serde_json::from_str::<Transaction>(raw).is_err());
    }

    #[test]
    fn parses_transaction_type() {
        assert_eq!("income".parse(), Ok(TransactionType::Income));
        assert_eq!("expense".parse(), Ok(TransactionType::Expense));
        assert!("Expense".parse::<TransactionType>().is_err());
    }

    #[test]
    fn signed_amount_is_negative_for_expenses() {
        let expense = Transaction::build(
            12.5,
            "Lunch",
            TransactionType::Expense,
            "Food",
            date!(2025 - 02 - 16),
        )
        .finalise(1);
        let income = Transaction::build(
            12.5,
            "Refund",
            TransactionType::Income,
            "Other",
            date!(2025 - 02 - 16),
        )
        .finalise(2);

        assert_eq!(expense.signed_amount(), -12.5);
        assert_eq!(income.signed_amount(), 12.5);
    }
}
