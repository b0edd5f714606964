//! The fixed catalog of categories offered for each transaction type.
//!
//! The catalog only populates the category selector. Stored transactions keep
//! whatever category string they were entered with, and summaries group by
//! that string.

use axum::extract::Query;
use maud::{Markup, html};
use serde::Deserialize;

use crate::transaction::TransactionType;

/// The categories offered for expenses, in display order.
pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Food",
    "Transportation",
    "Housing",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Shopping",
    "Other",
];

/// The categories offered for income, in display order.
pub const INCOME_CATEGORIES: [&str; 5] = ["Salary", "Freelance", "Investment", "Gift", "Other"];

/// The categories offered for `transaction_type`.
pub fn categories_for(transaction_type: TransactionType) -> &'static [&'static str] {
    match transaction_type {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
    }
}

/// The category selected by default for `transaction_type`.
pub fn default_category(transaction_type: TransactionType) -> &'static str {
    categories_for(transaction_type)[0]
}

/// The `<option>` elements for the category selector, with `selected` chosen.
pub fn category_options(transaction_type: TransactionType, selected: &str) -> Markup {
    html! {
        @for category in categories_for(transaction_type) {
            option value=(category) selected[*category == selected] { (category) }
        }
    }
}

/// The query string for [get_category_options].
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    /// The transaction type selected in the form.
    pub type_: TransactionType,
}

/// Returns the category options for the selected transaction type.
///
/// The first category is selected, and the submit button label is swapped
/// out-of-band to match the type.
pub async fn get_category_options(Query(query): Query<CategoryQuery>) -> Markup {
    let transaction_type = query.type_;

    html! {
        (category_options(transaction_type, default_category(transaction_type)))

        span id="submit-label" hx-swap-oob="true" { "Add " (transaction_type.label()) }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{endpoints, transaction::TransactionType};

    use super::{
        EXPENSE_CATEGORIES, INCOME_CATEGORIES, categories_for, category_options,
        default_category, get_category_options,
    };

    #[test]
    fn categories_match_transaction_type() {
        assert_eq!(categories_for(TransactionType::Expense), &EXPENSE_CATEGORIES);
        assert_eq!(categories_for(TransactionType::Income), &INCOME_CATEGORIES);
    }

    #[test]
    fn default_category_is_first_in_list() {
        assert_eq!(default_category(TransactionType::Expense), "Food");
        assert_eq!(default_category(TransactionType::Income), "Salary");
    }

    #[test]
    fn options_mark_only_the_selected_category() {
        let markup = category_options(TransactionType::Expense, "Housing");
        let document = Html::parse_fragment(&format!("<select>{}</select>", markup.into_string()));

        let options = Selector::parse("option").unwrap();
        let selected = document
            .select(&options)
            .filter(|option| option.value().attr("selected").is_some())
            .map(|option| option.value().attr("value").unwrap_or_default())
            .collect::<Vec<_>>();

        assert_eq!(document.select(&options).count(), EXPENSE_CATEGORIES.len());
        assert_eq!(selected, vec!["Housing"]);
    }

    #[tokio::test]
    async fn swapping_type_returns_income_categories() {
        let app = Router::new().route(endpoints::CATEGORIES_API, get(get_category_options));
        let server = TestServer::new(app).expect("Could not create test server.");

        let response = server
            .get(endpoints::CATEGORIES_API)
            .add_query_param("type_", "income")
            .await;

        response.assert_status_ok();
        let document = Html::parse_fragment(&response.text());
        let options = document
            .select(&Selector::parse("option").unwrap())
            .map(|option| option.value().attr("value").unwrap_or_default().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(options, INCOME_CATEGORIES);

        let label = document
            .select(&Selector::parse("#submit-label").unwrap())
            .next()
            .expect("expected an out-of-band submit label");
        assert_eq!(label.text().collect::<String>(), "Add Income");
    }

    #[tokio::test]
    async fn unknown_type_is_rejected() {
        let app = Router::new().route(endpoints::CATEGORIES_API, get(get_category_options));
        let server = TestServer::new(app).expect("Could not create test server.");

        let response = server
            .get(endpoints::CATEGORIES_API)
            .add_query_param("type_", "transfer")
            .expect_failure()
            .await;

        response.assert_status_bad_request();
    }
}
