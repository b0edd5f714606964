#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    db::initialize,
    storage::{DEFAULT_STORAGE_KEY, PersistenceAdapter, SqliteSlot},
    transaction::TransactionStore,
};

pub(crate) use form::{assert_form_submit_button, assert_hx_endpoint, must_get_form};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
pub(crate) use http::{assert_content_type, assert_hx_redirect, assert_status_ok};

/// A store backed by an in-memory database, seeded with the sample transactions.
pub(crate) fn get_test_store() -> Arc<Mutex<TransactionStore>> {
    let connection = Connection::open_in_memory().unwrap();
    initialize(&connection).unwrap();
    let slot = SqliteSlot::new(connection, DEFAULT_STORAGE_KEY);

    Arc::new(Mutex::new(TransactionStore::open(PersistenceAdapter::new(
        slot,
    ))))
}
