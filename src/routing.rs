//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post},
};

use crate::{
    AppState,
    category::get_category_options,
    dashboard::get_dashboard_page,
    endpoints,
    not_found::get_404_not_found,
    transaction::{create_transaction_endpoint, delete_transaction_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page))
        .route(endpoints::COFFEE, get(get_coffee))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .route(endpoints::CATEGORIES_API, get(get_category_options))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, Html("I'm a teapot")).into_response()
}
