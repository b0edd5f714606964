//! HTML rendering for the transaction list.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    endpoints::{self, format_endpoint},
    html::{BUTTON_DELETE_STYLE, CARD_STYLE, format_currency},
    transaction::{Transaction, TransactionType},
};

/// The max number of graphemes to display in the transaction list before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

fn amount_class(type_: TransactionType) -> &'static str {
    match type_ {
        TransactionType::Income => "text-green-700 dark:text-green-300",
        TransactionType::Expense => "text-red-700 dark:text-red-300",
    }
}

/// The amount prefixed with its sign, e.g. "+$2,500.00" or "-$50.00".
fn format_signed_amount(transaction: &Transaction) -> String {
    let sign = match transaction.type_ {
        TransactionType::Income => '+',
        TransactionType::Expense => '-',
    };

    format!("{sign}{}", format_currency(transaction.amount))
}

/// Renders every transaction in the given order, each with a delete button.
pub fn transaction_list(transactions: &[Transaction]) -> Markup {
    html! {
        section id="transaction-list" class={ "w-full " (CARD_STYLE) }
        {
            h3 class="text-lg font-semibold mb-4" { "Recent Transactions" }

            @if transactions.is_empty() {
                p data-empty-state="true" class="text-center text-gray-600 dark:text-gray-400"
                {
                    "No transactions yet"
                }
            } @else {
                ul class="divide-y divide-gray-200 dark:divide-gray-700"
                {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let (description, tooltip) = format_description(&transaction.description);
    let delete_url = format_endpoint(endpoints::TRANSACTION, transaction.id);

    html! {
        li
            data-transaction-id=(transaction.id)
            data-transaction-type=(transaction.type_)
            class="flex items-center justify-between gap-4 py-3"
        {
            div class="min-w-0"
            {
                p class="description font-medium truncate" title=[tooltip] { (description) }
                p class="text-sm text-gray-600 dark:text-gray-400"
                {
                    span class="category" { (transaction.category) }
                    " · "
                    time class="date" datetime=(transaction.date) { (transaction.date) }
                }
            }

            div class="flex items-center gap-4"
            {
                span class={ "amount font-semibold " (amount_class(transaction.type_)) }
                {
                    (format_signed_amount(transaction))
                }

                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-target-error="#alert-container"
                    aria-label={ "Delete " (transaction.description) }
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

fn format_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        let truncated = truncated + "...";
        (truncated, Some(description))
    }
}
