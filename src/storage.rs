//! The durable slot that mirrors the transaction collection as JSON.
//!
//! The whole collection lives under a single key. Every save overwrites the
//! slot with the full collection in one write, so a reader never sees half of
//! an update.

use std::{fmt::Debug, sync::Arc};

use rusqlite::{Connection, OptionalExtension};

use crate::{
    Error,
    transaction::{Transaction, TransactionId},
};

/// The key the transaction collection is stored under by default.
pub const DEFAULT_STORAGE_KEY: &str = "moneymind_transactions";

/// A single named location in a key-value store that holds a string.
pub trait DurableSlot {
    /// Read the value stored in the slot, or `None` if nothing has been stored yet.
    ///
    /// # Errors
    /// Returns an error if the underlying store could not be read.
    fn read(&self) -> Result<Option<String>, Error>;

    /// Overwrite the slot with `value`.
    ///
    /// # Errors
    /// Returns an error if the underlying store could not be written.
    fn write(&self, value: &str) -> Result<(), Error>;
}

/// Create the key-value table that [SqliteSlot] reads and writes.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_storage_table(connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        (),
    )?;

    Ok(())
}

/// A [DurableSlot] stored as one row of the `storage` table in an SQLite database.
#[derive(Debug)]
pub struct SqliteSlot {
    connection: Connection,
    key: String,
}

impl SqliteSlot {
    /// Create a slot for `key` in the database behind `connection`.
    ///
    /// The `storage` table must already exist, see [crate::initialize_db].
    pub fn new(connection: Connection, key: &str) -> Self {
        Self {
            connection,
            key: key.to_owned(),
        }
    }
}

impl DurableSlot for SqliteSlot {
    fn read(&self) -> Result<Option<String>, Error> {
        self.connection
            .query_row(
                "SELECT value FROM storage WHERE key = :key",
                &[(":key", &self.key)],
                |row| row.get(0),
            )
            .optional()
            .map_err(|error| error.into())
    }

    fn write(&self, value: &str) -> Result<(), Error> {
        self.connection.execute(
            "INSERT INTO storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (&self.key, value),
        )?;

        Ok(())
    }
}

/// Called with every error the [PersistenceAdapter] swallows.
pub type PersistenceErrorHook = Arc<dyn Fn(&Error) + Send + Sync>;

/// Loads and saves the transaction collection as a JSON array in a [DurableSlot].
///
/// Storage failures never reach the caller: loading falls back to an empty
/// collection and saving gives up, and in both cases the error is passed to
/// the error hook, which logs it by default.
pub struct PersistenceAdapter {
    slot: Box<dyn DurableSlot + Send>,
    on_persistence_error: PersistenceErrorHook,
}

impl PersistenceAdapter {
    /// Create an adapter for `slot` that logs storage errors.
    pub fn new(slot: impl DurableSlot + Send + 'static) -> Self {
        Self {
            slot: Box::new(slot),
            on_persistence_error: Arc::new(log_persistence_error),
        }
    }

    /// Replace the error hook, e.g. to observe failures in tests.
    pub fn on_persistence_error(mut self, hook: impl Fn(&Error) + Send + Sync + 'static) -> Self {
        self.on_persistence_error = Arc::new(hook);
        self
    }

    /// Read the entire collection from the slot.
    ///
    /// Returns an empty collection if the slot is empty, unreadable or holds
    /// malformed data.
    pub fn load(&self) -> Vec<Transaction> {
        match self.try_load() {
            Ok(transactions) => transactions,
            Err(error) => {
                (self.on_persistence_error)(&error);
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> Result<Vec<Transaction>, Error> {
        match self.slot.read()? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Overwrite the slot with `transactions`.
    pub fn save(&self, transactions: &[Transaction]) {
        let result = serde_json::to_string(transactions)
            .map_err(Error::from)
            .and_then(|raw| self.slot.write(&raw));

        if let Err(error) = result {
            (self.on_persistence_error)(&error);
        }
    }
}

impl Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceAdapter").finish_non_exhaustive()
    }
}

fn log_persistence_error(error: &Error) {
    tracing::error!("could not access transaction storage: {error}");
}

/// The ID for the next transaction added to `transactions`.
///
/// Returns 1 for an empty collection, otherwise one more than the largest ID.
/// Returns `None` when the largest ID is already [TransactionId::MAX].
pub fn next_id(transactions: &[Transaction]) -> Option<TransactionId> {
    transactions
        .iter()
        .map(|transaction| transaction.id)
        .max()
        .map_or(Some(1), |max_id| max_id.checked_add(1))
}
