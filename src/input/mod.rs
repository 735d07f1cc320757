use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::models::{Category, Expense};

const CURRENCY_SYMBOLS: [char; 5] = ['$', '₹', '€', '£', '¥'];

#[derive(Debug, thiserror::Error)]
pub(crate) enum InputError {
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),
    #[error("'{input}' is not a category number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },
    #[error("input closed before an expense was entered")]
    Closed,
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Line-based console dialogue over any reader/writer pair.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }

    /// Ask for name, amount and category. Bad amounts and out-of-range
    /// selections are re-asked until valid; only I/O failure or end of
    /// input ends the dialogue early.
    pub(crate) fn collect_expense(&mut self) -> Result<Expense, InputError> {
        writeln!(self.output, "🎯 Getting User Expense")?;

        let name = self.read_line("Enter expense name: ")?.trim().to_string();
        let amount = loop {
            let raw = self.read_line("Enter expense amount: ")?;
            match parse_amount(&raw) {
                Ok(amount) => break amount,
                Err(e) => {
                    tracing::warn!("rejected amount: {e}");
                    writeln!(self.output, "{e}. Please try again!")?;
                }
            }
        };
        writeln!(self.output, "You have entered {name}, {amount}")?;

        let category = self.select_category()?;
        Ok(Expense::new(name, amount, category))
    }

    fn select_category(&mut self) -> Result<Category, InputError> {
        let categories = Category::all();
        loop {
            writeln!(self.output, "Select a category: ")?;
            for (i, category) in categories.iter().enumerate() {
                writeln!(self.output, "{}. {} {}", i + 1, category.icon(), category)?;
            }
            let prompt = format!("Enter a category number [1 - {}]: ", categories.len());
            let raw = self.read_line(&prompt)?;
            match parse_selection(&raw) {
                Ok(category) => return Ok(category),
                Err(e) => {
                    tracing::warn!("rejected category selection: {e}");
                    writeln!(self.output, "Invalid category. Please try again!")?;
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Parse a typed amount, tolerating a currency symbol and well-formed
/// thousands separators (`1,250.50`). Anything else, such as `1,5` or `1 2`,
/// is rejected rather than guessed at.
pub(crate) fn parse_amount(raw: &str) -> Result<Decimal, InputError> {
    let invalid = || InputError::InvalidAmount(raw.trim().into());
    let without_symbol: String = raw.chars().filter(|c| !CURRENCY_SYMBOLS.contains(c)).collect();
    let text = without_symbol.trim();
    if text.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let digits = strip_thousands_separators(text).ok_or_else(invalid)?;
    let amount = Decimal::from_str(&digits).map_err(|_| invalid())?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(InputError::NegativeAmount(amount));
    }
    Ok(amount)
}

/// Remove commas only when they separate groups of exactly three digits in
/// the integer part.
fn strip_thousands_separators(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_string());
    }
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (text, None),
    };
    if frac_part.is_some_and(|f| f.contains(',')) {
        return None;
    }
    let unsigned = int_part.trim_start_matches(['-', '+']);
    let mut groups = unsigned.split(',');
    let lead = groups.next()?;
    if lead.is_empty() || lead.len() > 3 || !lead.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !groups.all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }
    let mut cleaned = int_part.replace(',', "");
    if let Some(frac) = frac_part {
        cleaned.push('.');
        cleaned.push_str(frac);
    }
    Some(cleaned)
}

/// Parse a 1-based category menu selection.
pub(crate) fn parse_selection(raw: &str) -> Result<Category, InputError> {
    let invalid = || InputError::InvalidSelection {
        input: raw.trim().into(),
        max: Category::all().len(),
    };
    let selection: i64 = raw.trim().parse().map_err(|_| invalid())?;
    Category::from_selection(selection).ok_or_else(invalid)
}

#[cfg(test)]
mod tests;
