use colored::Colorize;
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, Write};

use crate::report::{BudgetReport, Summary};

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.891` with `"₹"` → `"₹1,234,567.89"`
pub(crate) fn format_amount(val: Decimal, symbol: &str) -> String {
    let rounded = val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{:.2}", rounded.abs());
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if rounded < Decimal::ZERO {
        format!("-{symbol}{with_commas}.{dec_part}")
    } else {
        format!("{symbol}{with_commas}.{dec_part}")
    }
}

pub(crate) fn write_banner<W: Write>(out: &mut W, budget: Decimal, symbol: &str) -> io::Result<()> {
    writeln!(out, "🎯 Running Expense Tracker!")?;
    writeln!(out, "💰 Your Monthly Budget: {}", format_amount(budget, symbol))
}

pub(crate) fn write_summary<W: Write>(out: &mut W, summary: &Summary, symbol: &str) -> io::Result<()> {
    writeln!(out, "🎯 Summarizing user expense")?;
    match summary {
        Summary::NoExpenses => writeln!(out, "No expenses found."),
        Summary::Report(report) => write_report(out, report, symbol),
    }
}

fn write_report<W: Write>(out: &mut W, report: &BudgetReport, symbol: &str) -> io::Result<()> {
    writeln!(out, "Expenses By Category 📈:")?;
    for row in &report.by_category {
        writeln!(
            out,
            "  {} {:<6} {}",
            row.category.icon(),
            row.category,
            format_amount(row.total, symbol)
        )?;
    }
    writeln!(out, "💵 Total Spent: {}", format_amount(report.total_spent, symbol))?;
    writeln!(
        out,
        "✅ Budget Remaining: {}",
        format_amount(report.remaining_budget, symbol)
    )?;
    let per_day = format!(
        "👉 Budget Per Day: {} ({} of {} days left)",
        format_amount(report.daily_budget, symbol),
        report.remaining_days,
        report.days_in_month
    );
    writeln!(out, "{}", per_day.green())
}
