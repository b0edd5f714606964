//! Panels for the all-time totals and the current month's breakdown.

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::{MonthlySummary, Totals},
    html::{CARD_STYLE, format_currency},
};

fn balance_class(amount: f64) -> &'static str {
    if amount >= 0.0 {
        "text-green-700 dark:text-green-300"
    } else {
        "text-red-700 dark:text-red-300"
    }
}

/// Renders total income, total expenses and the balance.
pub(super) fn totals_panel(totals: &Totals) -> Markup {
    html! {
        section id="totals" class="grid grid-cols-1 sm:grid-cols-3 gap-4 w-full"
        {
            div class=(CARD_STYLE)
            {
                h3 class="text-sm text-gray-600 dark:text-gray-400" { "Total Income" }
                p data-total="income" class="text-2xl font-bold text-green-700 dark:text-green-300"
                {
                    (format_currency(totals.income))
                }
            }

            div class=(CARD_STYLE)
            {
                h3 class="text-sm text-gray-600 dark:text-gray-400" { "Total Expenses" }
                p data-total="expenses" class="text-2xl font-bold text-red-700 dark:text-red-300"
                {
                    (format_currency(totals.expenses))
                }
            }

            div class=(CARD_STYLE)
            {
                h3 class="text-sm text-gray-600 dark:text-gray-400" { "Balance" }
                p data-total="balance" class={ "text-2xl font-bold " (balance_class(totals.balance)) }
                {
                    (format_currency(totals.balance))
                }
            }
        }
    }
}

/// Renders the current month's income, expenses, net, top spending
/// categories and transaction count.
pub(super) fn monthly_panel(month: &MonthlySummary) -> Markup {
    let net = month.totals.balance;

    html! {
        section id="monthly-stats" class={ "w-full " (CARD_STYLE) }
        {
            h3 class="text-lg font-semibold mb-4" { (month.month) " " (month.year) " Overview" }

            dl class="grid grid-cols-1 sm:grid-cols-3 gap-4"
            {
                div
                {
                    dt class="text-sm text-gray-600 dark:text-gray-400" { "This Month Income" }
                    dd data-month-total="income" class="text-xl font-semibold text-green-700 dark:text-green-300"
                    {
                        (format_currency(month.totals.income))
                    }
                }

                div
                {
                    dt class="text-sm text-gray-600 dark:text-gray-400" { "This Month Expenses" }
                    dd data-month-total="expenses" class="text-xl font-semibold text-red-700 dark:text-red-300"
                    {
                        (format_currency(month.totals.expenses))
                    }
                }

                div
                {
                    dt class="text-sm text-gray-600 dark:text-gray-400" { "Net This Month" }
                    dd data-month-total="net" class={ "text-xl font-semibold " (balance_class(net)) }
                    {
                        (format_currency(net))
                    }
                }
            }

            @if !month.top_categories.is_empty() {
                div class="mt-4"
                {
                    h4 class="font-semibold mb-2" { "Top Spending Categories" }

                    ol id="top-categories" class="space-y-1"
                    {
                        @for total in &month.top_categories {
                            li class="flex justify-between"
                            {
                                span class="category-name" { (total.category) }
                                span class="category-amount" { (format_currency(total.amount)) }
                            }
                        }
                    }
                }
            }

            p id="transaction-count" class="mt-4 text-sm text-gray-600 dark:text-gray-400"
            {
                (month.transaction_count) " transactions this month"
            }
        }
    }
}
