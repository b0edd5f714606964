//! The form for entering a new transaction: its fields, defaults and validation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    alert::Alert,
    category::{category_options, default_category},
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner},
    transaction::{ISO_DATE_FORMAT, TransactionDraft, TransactionType},
};

/// The form data for creating a transaction, exactly as submitted.
///
/// Every field is kept as the raw string so that [validate] decides what is
/// acceptable, rather than the extractor rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionForm {
    /// The value of the transaction in dollars.
    #[serde(default)]
    pub amount: String,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// Either "income" or "expense".
    #[serde(default)]
    pub type_: String,
    /// The category chosen from the catalog for the transaction type.
    #[serde(default)]
    pub category: String,
    /// The date when the transaction ocurred, e.g. "2025-02-16".
    #[serde(default)]
    pub date: String,
}

/// The reasons a submitted [TransactionForm] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The amount or description was left empty.
    #[error("Please fill in all fields")]
    MissingFields,

    /// The amount is not a number greater than zero.
    #[error("Please enter a valid amount")]
    InvalidAmount,

    /// The transaction type is neither income nor expense.
    #[error("Please choose either income or expense")]
    InvalidType,

    /// The date is not a calendar date in the format YYYY-MM-DD.
    #[error("Please enter a valid date")]
    InvalidDate,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Alert::ErrorSimple {
                message: self.to_string(),
            }
            .into_html(),
        )
            .into_response()
    }
}

/// Check the submitted form and turn it into a [TransactionDraft].
///
/// The amount and description must both be given before the amount itself
/// is checked.
///
/// # Errors
/// Returns the first rule the form breaks, see [ValidationError].
pub fn validate(form: &TransactionForm) -> Result<TransactionDraft, ValidationError> {
    if form.amount.is_empty() || form.description.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    let amount = form
        .amount
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidAmount)?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::InvalidAmount);
    }

    let type_ = form
        .type_
        .parse::<TransactionType>()
        .map_err(|_| ValidationError::InvalidType)?;

    let date = Date::parse(&form.date, ISO_DATE_FORMAT).map_err(|_| ValidationError::InvalidDate)?;

    Ok(TransactionDraft {
        amount,
        description: form.description.clone(),
        type_,
        category: form.category.clone(),
        date,
    })
}

/// The values shown in a freshly reset form.
pub struct TransactionFormDefaults<'a> {
    pub transaction_type: TransactionType,
    pub category: &'a str,
    pub date: Date,
}

impl TransactionFormDefaults<'static> {
    /// An empty expense form dated `today` with the first expense category selected.
    pub fn new(today: Date) -> Self {
        Self {
            transaction_type: TransactionType::Expense,
            category: default_category(TransactionType::Expense),
            date: today,
        }
    }
}

/// Renders the form for adding a transaction.
///
/// Validation errors are swapped into the alert container, and a change of
/// transaction type fetches the matching category options.
pub fn transaction_form(defaults: &TransactionFormDefaults<'_>) -> Markup {
    let is_expense = matches!(defaults.transaction_type, TransactionType::Expense);

    html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            h3 class="text-lg font-semibold" { "Add New Transaction" }

            div
            {
                label
                    for="type_"
                    class=(FORM_LABEL_STYLE)
                {
                    "Type"
                }

                select
                    name="type_"
                    id="type_"
                    hx-get=(endpoints::CATEGORIES_API)
                    hx-trigger="change"
                    hx-target="#category"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="expense" selected[is_expense] { "Expense" }
                    option value="income" selected[!is_expense] { "Income" }
                }
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                // w-full needed to ensure input takes the full width
                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="What was this for?"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

                select
                    name="category"
                    id="category"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    (category_options(defaults.transaction_type, defaults.category))
                }
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(defaults.date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span
                    id="indicator"
                    class="inline htmx-indicator"
                {
                    (loading_spinner())
                }
                " "
                span id="submit-label" { "Add " (defaults.transaction_type.label()) }
            }
        }
    }
}


#[cfg(test)]
mod view_tests {
    use scraper::{ElementRef, Html, Selector};
    use time::macros::date;

    use crate::{
        category::EXPENSE_CATEGORIES,
        endpoints,
        test_utils::{assert_hx_endpoint, assert_valid_html, must_get_form},
    };

    use super::{TransactionFormDefaults, transaction_form};

    fn render_form() -> Html {
        let markup = transaction_form(&TransactionFormDefaults::new(date!(2025 - 02 - 16)));
        Html::parse_fragment(&markup.into_string())
    }

    #[test]
    fn form_posts_to_transactions_api() {
        let document = render_form();
        assert_valid_html(&document);

        let form = must_get_form(&document);

        assert_hx_endpoint(&form, endpoints::TRANSACTIONS_API, "hx-post");
        assert_eq!(form.value().attr("hx-target-error"), Some("#alert-container"));
    }

    #[test]
    fn defaults_to_expense_dated_today() {
        let document = render_form();
        let form = must_get_form(&document);

        assert_eq!(selected_value(&form, "type_"), Some("expense"));
        assert_eq!(selected_value(&form, "category"), Some(EXPENSE_CATEGORIES[0]));

        let date = form
            .select(&Selector::parse("input[name=date]").unwrap())
            .next()
            .expect("No date input found");
        assert_eq!(date.value().attr("value"), Some("2025-02-16"));

        for name in ["amount", "description"] {
            let input = form
                .select(&Selector::parse(&format!("input[name={name}]")).unwrap())
                .next()
                .unwrap_or_else(|| panic!("No {name} input found"));
            assert_eq!(input.value().attr("value"), None, "want {name} to be empty");
        }
    }

    #[test]
    fn type_selector_fetches_categories() {
        let document = render_form();
        let form = must_get_form(&document);

        let type_select = form
            .select(&Selector::parse("select[name=type_]").unwrap())
            .next()
            .expect("No type selector found");

        assert_hx_endpoint(&type_select, endpoints::CATEGORIES_API, "hx-get");
        assert_eq!(type_select.value().attr("hx-target"), Some("#category"));
    }

    #[test]
    fn submit_button_names_transaction_type() {
        let document = render_form();
        let form = must_get_form(&document);

        let label = form
            .select(&Selector::parse("button[type=submit] #submit-label").unwrap())
            .next()
            .expect("No submit label found");

        assert_eq!(label.text().collect::<String>(), "Add Expense");
    }

    fn selected_value<'a>(form: &ElementRef<'a>, name: &str) -> Option<&'a str> {
        form.select(&Selector::parse(&format!("select[name={name}] option[selected]")).unwrap())
            .next()
            .and_then(|option| option.value().attr("value"))
    }
}
