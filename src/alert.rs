//! Alert messages swapped into the page's alert container by htmx.

use maud::{Markup, html};

/// An alert message with optional details.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An error with a headline and an explanation of how to fix it.
    Error { message: String, details: String },
    /// An error with only a headline.
    ErrorSimple { message: String },
}

impl Alert {
    /// Render the alert with a button that dismisses it.
    pub fn into_html(self) -> Markup {
        let (message, details) = match self {
            Alert::Error { message, details } => (message, Some(details)),
            Alert::ErrorSimple { message } => (message, None),
        };

        html! {
            div
                id="alert"
                role="alert"
                class="flex items-start p-4 mb-4 text-red-800 border
                    border-red-300 rounded-lg bg-red-50 dark:bg-gray-800
                    dark:text-red-400 dark:border-red-800"
            {
                div class="flex-1"
                {
                    p class="font-medium" { (message) }

                    @if let Some(details) = details {
                        p class="mt-1 text-sm" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="ms-3 -mx-1.5 -my-1.5 p-1.5 rounded-lg
                        hover:bg-red-200 dark:hover:bg-gray-700"
                    onclick="this.closest('#alert').remove()"
                {
                    "×"
                }
            }
        }
    }
}
