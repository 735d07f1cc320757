mod csv_file;
#[cfg(test)]
pub(crate) mod memory;
pub(crate) mod schema;
mod sqlite;

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{Backend, Config};
use crate::models::Expense;

pub(crate) use csv_file::CsvStore;
pub(crate) use sqlite::SqliteStore;

/// Append-only access to the durable expense table.
pub(crate) trait ExpenseStore {
    /// Write one new row. Existing rows are never touched.
    fn append(&mut self, expense: &Expense) -> Result<()>;

    /// Read every stored row, oldest first. An empty table yields an empty vec.
    fn load_all(&self) -> Result<Vec<Expense>>;
}

#[derive(Debug, thiserror::Error)]
#[error("unknown category '{0}'")]
pub(crate) struct UnknownCategory(pub(crate) String);

/// Open the backend selected by `config`.
pub(crate) fn open(config: &Config) -> Result<Box<dyn ExpenseStore>> {
    match config.backend {
        Backend::Sqlite => {
            ensure_parent_dir(&config.db_path)?;
            Ok(Box::new(SqliteStore::open(
                &config.db_path,
                &config.table_name,
            )?))
        }
        Backend::Csv => Ok(Box::new(CsvStore::open(&config.csv_path)?)),
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    }
    Ok(())
}
