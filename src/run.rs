use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

use crate::config::Config;
use crate::display;
use crate::input::Prompter;
use crate::report::{self, Summary};
use crate::store::ExpenseStore;

/// One full cycle: record an expense, persist it, then report on everything stored.
pub(crate) fn run<R: BufRead, W: Write>(
    config: &Config,
    store: &mut dyn ExpenseStore,
    prompter: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<Summary> {
    let symbol = config.currency_symbol.as_str();
    display::write_banner(prompter.output(), config.monthly_budget, symbol)?;

    let expense = prompter
        .collect_expense()
        .context("Failed to collect expense")?;

    writeln!(prompter.output(), "🎯 Saving user expense")?;
    store.append(&expense)?;
    tracing::info!(
        name = %expense.name,
        amount = %expense.amount,
        category = %expense.category,
        "expense recorded"
    );

    let entries = store.load_all()?;
    let summary = report::summarize(config.monthly_budget, &entries, today)?;
    display::write_summary(prompter.output(), &summary, symbol)?;
    tracing::info!(entries = entries.len(), %today, "summary written");
    Ok(summary)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
