//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    storage::{PersistenceAdapter, SqliteSlot},
    timezone::get_local_offset,
    transaction::TransactionStore,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The transactions, mirrored to the database on every change.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl AppState {
    /// Create a new [AppState] whose transactions are stored under
    /// `storage_key` in a SQLite database.
    ///
    /// This function will initialize the database by adding the storage table,
    /// then load the stored transactions, see [TransactionStore::open].
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if `local_timezone` is not a valid timezone or the
    /// database cannot be initialized.
    pub fn new(
        db_connection: Connection,
        local_timezone: &str,
        storage_key: &str,
    ) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        initialize(&db_connection)?;

        let slot = SqliteSlot::new(db_connection, storage_key);
        let store = TransactionStore::open(PersistenceAdapter::new(slot));

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            store: Arc::new(Mutex::new(store)),
        })
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{Error, storage::DEFAULT_STORAGE_KEY};

    use super::AppState;

    #[test]
    fn new_state_is_seeded() {
        let state = AppState::new(
            Connection::open_in_memory().unwrap(),
            "Etc/UTC",
            DEFAULT_STORAGE_KEY,
        )
        .unwrap();

        assert_eq!(state.store.lock().unwrap().transactions().len(), 3);
    }

    #[test]
    fn invalid_timezone_is_rejected() {
        let result = AppState::new(
            Connection::open_in_memory().unwrap(),
            "Middle/Earth",
            DEFAULT_STORAGE_KEY,
        );

        assert_eq!(
            result.err(),
            Some(Error::InvalidTimezoneError("Middle/Earth".to_owned()))
        );
    }
}
