use anyhow::Result;

use super::ExpenseStore;
use crate::models::Expense;

/// In-memory store for exercising code that takes an `ExpenseStore`.
#[derive(Default)]
pub(crate) struct MemoryStore {
    pub(crate) rows: Vec<Expense>,
    pub(crate) fail_writes: bool,
}

impl ExpenseStore for MemoryStore {
    fn append(&mut self, expense: &Expense) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("Failed to append expense: store is read-only");
        }
        self.rows.push(expense.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Expense>> {
        Ok(self.rows.clone())
    }
}
