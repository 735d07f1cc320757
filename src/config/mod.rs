use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::store::schema::is_valid_table_name;

pub(crate) const ENV_BACKEND: &str = "SPENDLOG_BACKEND";
pub(crate) const ENV_DB: &str = "SPENDLOG_DB";
pub(crate) const ENV_CSV: &str = "SPENDLOG_CSV";
pub(crate) const ENV_TABLE: &str = "SPENDLOG_TABLE";
pub(crate) const ENV_BUDGET: &str = "SPENDLOG_BUDGET";
pub(crate) const ENV_CURRENCY: &str = "SPENDLOG_CURRENCY";

const DEFAULT_TABLE: &str = "expenses";
const DEFAULT_BUDGET: i64 = 50_000;
const DEFAULT_CURRENCY: &str = "₹";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Backend {
    Sqlite,
    Csv,
}

impl Backend {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" | "db" => Some(Self::Sqlite),
            "csv" | "file" => Some(Self::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) backend: Backend,
    pub(crate) db_path: PathBuf,
    pub(crate) csv_path: PathBuf,
    pub(crate) table_name: String,
    pub(crate) monthly_budget: Decimal,
    pub(crate) currency_symbol: String,
}

impl Config {
    /// Read settings from the process environment, defaulting paths to the
    /// platform data directory.
    pub(crate) fn from_env() -> Result<Self> {
        let data_dir = default_data_dir()?;
        Self::from_lookup(&data_dir, |key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset and blank values fall back
    /// to defaults; malformed values are errors naming the variable.
    pub(crate) fn from_lookup(
        data_dir: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match get(ENV_BACKEND) {
            Some(raw) => Backend::parse(&raw).ok_or_else(|| {
                anyhow::anyhow!("{ENV_BACKEND}: unknown backend '{raw}' (expected sqlite or csv)")
            })?,
            None => Backend::Sqlite,
        };

        let table_name = get(ENV_TABLE).unwrap_or_else(|| DEFAULT_TABLE.into());
        if !is_valid_table_name(&table_name) {
            anyhow::bail!("{ENV_TABLE}: '{table_name}' is not a valid table name");
        }

        let monthly_budget = match get(ENV_BUDGET) {
            Some(raw) => parse_budget(&raw).with_context(|| format!("{ENV_BUDGET}: invalid budget"))?,
            None => Decimal::from(DEFAULT_BUDGET),
        };

        Ok(Self {
            backend,
            db_path: get(ENV_DB)
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join("spendlog.db")),
            csv_path: get(ENV_CSV)
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join("expenses.csv")),
            table_name,
            monthly_budget,
            currency_symbol: get(ENV_CURRENCY).unwrap_or_else(|| DEFAULT_CURRENCY.into()),
        })
    }
}

fn parse_budget(raw: &str) -> Result<Decimal> {
    let cleaned = raw.trim().replace([',', '_'], "");
    let budget = Decimal::from_str(&cleaned)
        .with_context(|| format!("Failed to parse '{raw}' as decimal"))?;
    if budget.is_sign_negative() && !budget.is_zero() {
        anyhow::bail!("budget must not be negative, got {budget}");
    }
    Ok(budget)
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "spendlog", "Spendlog")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}
