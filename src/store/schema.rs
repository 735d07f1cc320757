/// Column layout shared by every backend: `name`, `amount`, `category`.
pub(crate) const COLUMNS: [&str; 3] = ["name", "amount", "category"];

/// The amount is kept as the decimal's text form so no precision is lost.
pub(crate) fn create_table_sql(table: &str) -> String {
    format!(
        r#"
CREATE TABLE IF NOT EXISTS "{table}" (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL,
    amount    TEXT NOT NULL,
    category  TEXT NOT NULL
);
"#
    )
}

/// Table names are interpolated into SQL, so only plain identifiers are accepted.
pub(crate) fn is_valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    name.len() <= 64 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
