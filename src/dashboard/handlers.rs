//! The tracker page: the entry form, the totals, this month's overview and
//! the transaction list.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    dashboard::{
        aggregation::{Summary, summarize},
        cards::{monthly_panel, totals_panel},
    },
    html::{CARD_STYLE, PAGE_CONTAINER_STYLE, base, dollar_input_styles},
    timezone::local_today,
    transaction::{
        Transaction, TransactionFormDefaults, TransactionStore, transaction_form, transaction_list,
    },
};

/// The state needed for displaying the tracker page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The transactions to display.
    pub store: Arc<Mutex<TransactionStore>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display the tracker page.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let store = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    let transactions = store.transactions();
    let summary = summarize(transactions, today);

    Ok(dashboard_view(
        &TransactionFormDefaults::new(today),
        &summary,
        transactions,
    )
    .into_response())
}

fn dashboard_view(
    form_defaults: &TransactionFormDefaults<'_>,
    summary: &Summary,
    transactions: &[Transaction],
) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            header class="text-center"
            {
                h1 class="text-3xl font-bold" { "MoneyMind" }
                p class="text-gray-600 dark:text-gray-400" { "Personal Finance Tracker" }
            }

            section id="transaction-form" class={ "w-full " (CARD_STYLE) }
            {
                (transaction_form(form_defaults))
            }

            (totals_panel(&summary.all_time))

            (monthly_panel(&summary.this_month))

            (transaction_list(transactions))
        }
    );

    base("Tracker", &[dollar_input_styles()], &content)
}
