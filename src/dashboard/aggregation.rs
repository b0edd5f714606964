//! Totals and the current month's breakdown, computed from the transaction list.
//!
//! Everything here is a pure function of the transactions and "today", which
//! the caller supplies so that the monthly figures do not depend on the clock.

use std::collections::BTreeMap;

use time::{Date, Month};

use crate::transaction::{Transaction, TransactionType};

/// The maximum number of categories listed in the monthly breakdown.
pub(super) const TOP_CATEGORY_COUNT: usize = 3;

/// Income, expenses and their difference for a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    /// `income - expenses`.
    pub balance: f64,
}

impl Totals {
    fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut income = 0.0;
        let mut expenses = 0.0;

        for transaction in transactions {
            match transaction.type_ {
                TransactionType::Income => income += transaction.amount,
                TransactionType::Expense => expenses += transaction.amount,
            }
        }

        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

/// The amount spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// The figures for the month containing "today".
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: Month,
    /// Totals for the month, the balance is the month's net.
    pub totals: Totals,
    /// The categories with the highest spending this month, largest first.
    pub top_categories: Vec<CategoryTotal>,
    pub transaction_count: usize,
}

/// Everything the tracker page displays about the transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub all_time: Totals,
    pub this_month: MonthlySummary,
}

/// Compute the all-time totals and the summary for the month of `today`.
pub fn summarize(transactions: &[Transaction], today: Date) -> Summary {
    let this_month: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| is_same_month(transaction.date, today))
        .collect();

    Summary {
        all_time: Totals::from_transactions(transactions),
        this_month: MonthlySummary {
            year: today.year(),
            month: today.month(),
            totals: Totals::from_transactions(this_month.iter().copied()),
            top_categories: rank_expense_categories(&this_month),
            transaction_count: this_month.len(),
        },
    }
}

fn is_same_month(date: Date, today: Date) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Sums expenses per category and keeps the [TOP_CATEGORY_COUNT] largest.
///
/// Categories with equal sums are ordered alphabetically.
fn rank_expense_categories(transactions: &[&Transaction]) -> Vec<CategoryTotal> {
    let mut totals_by_category: BTreeMap<&str, f64> = BTreeMap::new();

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.type_ == TransactionType::Expense)
    {
        *totals_by_category
            .entry(transaction.category.as_str())
            .or_insert(0.0) += transaction.amount;
    }

    let mut ranked: Vec<CategoryTotal> = totals_by_category
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_owned(),
            amount,
        })
        .collect();

    // The sort is stable, so ties keep the alphabetical order of the BTreeMap.
    ranked.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    ranked.truncate(TOP_CATEGORY_COUNT);

    ranked
}
