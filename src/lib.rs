//! MoneyMind is a web app for tracking personal income and expenses.
//!
//! This library provides a REST API that directly serves HTML pages. The
//! transactions are kept in memory and mirrored as a JSON array to a single
//! key in a SQLite database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod category;
mod dashboard;
mod db;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod not_found;
mod routing;
mod storage;
#[cfg(test)]
mod test_utils;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use error::Error;
pub use routing::build_router;
pub use storage::{
    DEFAULT_STORAGE_KEY, DurableSlot, PersistenceAdapter, PersistenceErrorHook, SqliteSlot,
};
pub use transaction::{Transaction, TransactionId, TransactionStore, TransactionType};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
