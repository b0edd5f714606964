//! Defines the endpoint for deleting a transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    transaction::{TransactionId, TransactionStore},
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The transactions shown on the tracker page.
    store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting a transaction, redirects to the tracker page.
///
/// Deleting a transaction that does not exist leaves the transactions as they are.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire transaction store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    store.delete(transaction_id);

    (
        HxRedirect(endpoints::ROOT.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
        routing::delete,
    };
    use axum_test::TestServer;

    use crate::{
        endpoints::{self, format_endpoint},
        test_utils::{assert_hx_redirect, get_test_store},
    };

    use super::{DeleteTransactionState, delete_transaction_endpoint};

    fn get_test_state() -> DeleteTransactionState {
        DeleteTransactionState {
            store: get_test_store(),
        }
    }

    fn ids(state: &DeleteTransactionState) -> Vec<i64> {
        state
            .store
            .lock()
            .unwrap()
            .transactions()
            .iter()
            .map(|transaction| transaction.id)
            .collect()
    }

    #[tokio::test]
    async fn deletes_transaction() {
        let state = get_test_state();

        let response = delete_transaction_endpoint(State(state.clone()), Path(2))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::ROOT);
        assert_eq!(ids(&state), vec![1, 3]);
    }

    #[tokio::test]
    async fn deleting_missing_transaction_changes_nothing() {
        let state = get_test_state();
        let app = Router::new()
            .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
            .with_state(state.clone());
        let server = TestServer::new(app).expect("Could not create test server.");

        server
            .delete(&format_endpoint(endpoints::TRANSACTION, 42))
            .await
            .assert_status_see_other();

        assert_eq!(ids(&state), vec![1, 2, 3]);
    }
}
