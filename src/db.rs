//! Sets up the application's SQLite database.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, storage::create_storage_table};

/// Create the tables the application needs, if they do not already exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_storage_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
