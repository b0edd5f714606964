//! The in-memory transaction collection and its two mutations.

use time::macros::date;

use crate::{
    Error,
    storage::{PersistenceAdapter, next_id},
    transaction::{Transaction, TransactionDraft, TransactionId, TransactionType},
};

/// Holds the current transactions, newest first, and mirrors every change to storage.
///
/// The in-memory collection is the source of truth for the running process.
/// A failed save is logged by the [PersistenceAdapter] and otherwise ignored.
#[derive(Debug)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    persistence: PersistenceAdapter,
}

impl TransactionStore {
    /// Load the stored transactions.
    ///
    /// If nothing could be loaded, the store is seeded with a few sample
    /// transactions which are saved straight away.
    pub fn open(persistence: PersistenceAdapter) -> Self {
        let mut transactions = persistence.load();

        if transactions.is_empty() {
            tracing::info!("No stored transactions found, adding sample transactions");
            transactions = sample_transactions();
            persistence.save(&transactions);
        } else {
            tracing::info!("Loaded {} transactions from storage", transactions.len());
        }

        Self {
            transactions,
            persistence,
        }
    }

    /// The current transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Assign `draft` the next ID, put it at the front of the collection and save.
    ///
    /// # Errors
    /// Returns [Error::IdExhaustedError] and leaves the collection unchanged
    /// if the largest ID is already in use.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<Transaction, Error> {
        let id = next_id(&self.transactions).ok_or(Error::IdExhaustedError(TransactionId::MAX))?;
        let transaction = draft.finalise(id);
        self.transactions.insert(0, transaction.clone());
        self.persistence.save(&self.transactions);

        Ok(transaction)
    }

    /// Remove the transaction with `id` and save.
    ///
    /// Deleting an ID that is not in the collection does nothing.
    pub fn delete(&mut self, id: TransactionId) {
        let count_before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);

        if self.transactions.len() == count_before {
            tracing::debug!("Tried to delete transaction {id} which does not exist");
            return;
        }

        self.persistence.save(&self.transactions);
    }
}

/// The transactions shown on first run.
fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::build(
            2500.0,
            "Salary",
            TransactionType::Income,
            "Salary",
            date!(2025 - 02 - 15),
        )
        .finalise(1),
        Transaction::build(
            50.0,
            "Groceries",
            TransactionType::Expense,
            "Food",
            date!(2025 - 02 - 16),
        )
        .finalise(2),
        Transaction::build(
            120.0,
            "Gas",
            TransactionType::Expense,
            "Transportation",
            date!(2025 - 02 - 17),
        )
        .finalise(3),
    ]
}
