use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Category, Expense};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryTotal {
    pub(crate) category: Category,
    pub(crate) total: Decimal,
}

/// Spending against the monthly budget as of one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetReport {
    /// One row per category that has expenses, in `Category::all()` order.
    pub(crate) by_category: Vec<CategoryTotal>,
    pub(crate) total_spent: Decimal,
    /// May be negative once the budget is overspent.
    pub(crate) remaining_budget: Decimal,
    pub(crate) days_in_month: u32,
    pub(crate) remaining_days: u32,
    /// Zero on the last day of the month.
    pub(crate) daily_budget: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Summary {
    NoExpenses,
    Report(BudgetReport),
}

/// Aggregate `entries` and compare them against `budget`, with `today`
/// deciding how many days are left to spread the remainder over.
///
/// Totals beyond the range of `Decimal` are reported as errors.
pub(crate) fn summarize(budget: Decimal, entries: &[Expense], today: NaiveDate) -> Result<Summary> {
    if entries.is_empty() {
        return Ok(Summary::NoExpenses);
    }

    let mut by_category = Vec::new();
    for &category in Category::all() {
        let mut members = entries.iter().filter(|e| e.category == category).peekable();
        if members.peek().is_none() {
            continue;
        }
        let total = checked_sum(members)
            .with_context(|| format!("Total for category {category} overflowed"))?;
        by_category.push(CategoryTotal { category, total });
    }

    let total_spent = checked_sum(entries.iter()).context("Total spent overflowed")?;
    let remaining_budget = budget
        .checked_sub(total_spent)
        .ok_or_else(|| anyhow::anyhow!("Remaining budget overflowed ({budget} - {total_spent})"))?;

    let days_in_month = days_in_month(today.year(), today.month());
    let remaining_days = days_in_month.saturating_sub(today.day());
    let daily_budget = if remaining_days > 0 {
        remaining_budget
            .checked_div(Decimal::from(remaining_days))
            .ok_or_else(|| anyhow::anyhow!("Daily budget overflowed"))?
    } else {
        Decimal::ZERO
    };

    Ok(Summary::Report(BudgetReport {
        by_category,
        total_spent,
        remaining_budget,
        days_in_month,
        remaining_days,
        daily_budget,
    }))
}

fn checked_sum<'a>(mut entries: impl Iterator<Item = &'a Expense>) -> Result<Decimal> {
    entries.try_fold(Decimal::ZERO, |acc, e| {
        acc.checked_add(e.amount)
            .ok_or_else(|| anyhow::anyhow!("adding {} to {acc} exceeds the supported range", e.amount))
    })
}

/// Number of days in `month` (1-12) of `year`, leap years included.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map_or(31, |last| last.day())
}
