use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::schema::COLUMNS;
use super::{ExpenseStore, UnknownCategory};
use crate::models::{Category, Expense};

/// Flat-file backend: one CSV row per expense under a `name,amount,category` header.
pub(crate) struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Open the file, creating it with a header row if it is missing or empty.
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let needs_header = std::fs::metadata(path).map_or(true, |m| m.len() == 0);
        if needs_header {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            let mut wtr = csv::Writer::from_path(path)
                .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
            wtr.write_record(COLUMNS)?;
            wtr.flush()?;
            tracing::debug!(path = %path.display(), "created csv store");
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }
}

impl ExpenseStore for CsvStore {
    fn append(&mut self, expense: &Expense) -> Result<()> {
        let path = &self.path;
        let file = OpenOptions::new()
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to append expense to {}", path.display()))?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        let amount = expense.amount.to_string();
        wtr.write_record([
            expense.name.as_str(),
            amount.as_str(),
            expense.category.as_str(),
        ])
        .with_context(|| format!("Failed to append expense to {}", path.display()))?;
        wtr.flush()
            .with_context(|| format!("Failed to flush {}", path.display()))?;
        tracing::debug!(path = %path.display(), "appended expense");
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Expense>> {
        let path = &self.path;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .with_context(|| format!("Failed to read expenses from {}", path.display()))?;

        let mut expenses = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            // Line 1 is the header.
            let line = i + 2;
            let record = result.with_context(|| format!("Line {line}: failed to read CSV record"))?;
            let field = |idx: usize| record.get(idx).unwrap_or_default();

            // Names are kept verbatim; only the amount and category are trimmed.
            let amount = Decimal::from_str(field(1).trim())
                .with_context(|| format!("Line {line}: failed to parse amount '{}'", field(1)))?;
            let category = Category::parse(field(2))
                .ok_or_else(|| UnknownCategory(field(2).to_string()))
                .with_context(|| format!("Line {line}: bad category"))?;

            expenses.push(Expense::new(field(0).to_string(), amount, category));
        }
        tracing::debug!(path = %path.display(), count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }
}
