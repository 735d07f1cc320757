use anyhow::{Context, Result};
use rusqlite::types::{Type, ValueRef};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use super::schema;
use super::{ExpenseStore, UnknownCategory};
use crate::models::{Category, Expense};

pub(crate) struct SqliteStore {
    conn: Connection,
    table: String,
}

impl SqliteStore {
    pub(crate) fn open(path: &Path, table: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        tracing::debug!(path = %path.display(), table, "opened sqlite store");
        Self::with_connection(conn, table)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory(table: &str) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, table)
    }

    fn with_connection(conn: Connection, table: &str) -> Result<Self> {
        if !schema::is_valid_table_name(table) {
            anyhow::bail!("Invalid table name: '{table}'");
        }
        conn.execute_batch(&schema::create_table_sql(table))
            .with_context(|| format!("Failed to create table '{table}'"))?;
        Ok(Self {
            conn,
            table: table.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl ExpenseStore for SqliteStore {
    fn append(&mut self, expense: &Expense) -> Result<()> {
        let table = &self.table;
        self.conn
            .execute(
                &format!(r#"INSERT INTO "{table}" (name, amount, category) VALUES (?1, ?2, ?3)"#),
                params![
                    expense.name,
                    expense.amount.to_string(),
                    expense.category.as_str(),
                ],
            )
            .with_context(|| format!("Failed to append expense to table '{table}'"))?;
        tracing::debug!(table = %table, id = self.conn.last_insert_rowid(), "appended expense");
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Expense>> {
        let table = &self.table;
        let read = || -> rusqlite::Result<Vec<Expense>> {
            let mut stmt = self.conn.prepare(&format!(
                r#"SELECT name, amount, category FROM "{table}" ORDER BY rowid"#
            ))?;
            let rows = stmt.query_map([], |row| {
                let category: String = row.get(2)?;
                Ok(Expense {
                    name: row.get(0)?,
                    amount: amount_from_sql(row.get_ref(1)?, 1)?,
                    category: Category::parse(&category).ok_or_else(|| {
                        rusqlite::Error::FromSqlConversionFailure(
                            2,
                            Type::Text,
                            Box::new(UnknownCategory(category.clone())),
                        )
                    })?,
                })
            })?;
            rows.collect()
        };
        let expenses =
            read().with_context(|| format!("Failed to read expenses from table '{table}'"))?;
        tracing::debug!(table = %table, count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }
}

/// Amounts are written as text, but tables filled by other tools may hold
/// REAL or INTEGER values. Accept all three.
fn amount_from_sql(value: ValueRef<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let conversion = |e: rust_decimal::Error, ty: Type| {
        rusqlite::Error::FromSqlConversionFailure(idx, ty, Box::new(e))
    };
    match value {
        ValueRef::Text(bytes) => {
            let text = std::str::from_utf8(bytes).map_err(rusqlite::Error::Utf8Error)?;
            Decimal::from_str(text.trim()).map_err(|e| conversion(e, Type::Text))
        }
        ValueRef::Real(f) => Decimal::try_from(f).map_err(|e| conversion(e, Type::Real)),
        ValueRef::Integer(i) => Ok(Decimal::from(i)),
        other => Err(rusqlite::Error::InvalidColumnType(
            idx,
            "amount".into(),
            other.data_type(),
        )),
    }
}
