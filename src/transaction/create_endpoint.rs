//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    transaction::{
        TransactionStore,
        form::{TransactionForm, validate},
    },
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The transactions shown on the tracker page.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for creating a new transaction, redirects to the tracker page on success.
///
/// An invalid form is answered with an alert explaining what to fix.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let draft = match validate(&form) {
        Ok(draft) => draft,
        Err(error) => {
            tracing::debug!("rejected transaction form {form:?}: {error}");
            return error.into_response();
        }
    };

    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire transaction store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    let transaction = match store.add(draft) {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
            return error.into_alert_response();
        }
    };
    tracing::info!(
        "Created {} transaction {} for {}",
        transaction.type_,
        transaction.id,
        transaction.amount
    );

    (
        HxRedirect(endpoints::ROOT.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
