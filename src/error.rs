//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// The stored transactions could not be converted to or from JSON.
    #[error("could not convert transactions to or from JSON: {0}")]
    JsonError(String),

    /// Could not acquire the lock on the transaction store.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,

    /// The largest transaction ID is in use, so no new ID can be assigned.
    #[error("no transaction IDs are left after {0}")]
    IdExhaustedError(i64),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        Error::SqlError(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JsonError(value.to_string())
    }
}

const INVALID_TIMEZONE_FIX: &str = "Check your server settings and ensure the timezone has been \
    set to a valid, canonical timezone string";

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!("Could not get local timezone \"{timezone}\". {INVALID_TIMEZONE_FIX}"),
            }
            .into_response(),
            Error::StoreLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". {INVALID_TIMEZONE_FIX}"
                    ),
                },
            ),
            Error::IdExhaustedError(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::Error {
                    message: "Could not add transaction".to_owned(),
                    details: "The largest transaction ID is already in use. \
                        Delete that transaction and try again."
                        .to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
