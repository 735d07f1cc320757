#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn prompter(script: &str) -> Prompter<&[u8], Vec<u8>> {
    Prompter::new(script.as_bytes(), Vec::new())
}

fn transcript(p: Prompter<&[u8], Vec<u8>>) -> String {
    String::from_utf8(p.into_output()).unwrap()
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_basic() {
    assert_eq!(parse_amount("100.50").unwrap(), dec!(100.50));
    assert_eq!(parse_amount("42").unwrap(), dec!(42));
    assert_eq!(parse_amount("  7.25 ").unwrap(), dec!(7.25));
}

#[test]
fn test_parse_amount_with_currency_and_commas() {
    assert_eq!(parse_amount("₹1,250.50").unwrap(), dec!(1250.50));
    assert_eq!(parse_amount("$12").unwrap(), dec!(12));
    assert_eq!(parse_amount("€ 3,000").unwrap(), dec!(3000));
}

#[test]
fn test_parse_amount_thousands_groups() {
    assert_eq!(parse_amount("1,000").unwrap(), dec!(1000));
    assert_eq!(parse_amount("12,345,678.9").unwrap(), dec!(12345678.9));
    assert_eq!(parse_amount("999,999").unwrap(), dec!(999999));
}

#[test]
fn test_parse_amount_malformed_separators_rejected() {
    for raw in ["1,5", "1,50", "1,5000", ",100", "1000,000", "1,000,00", "1.5,00", "1,,000", "1 2", "1 000"] {
        assert!(
            matches!(parse_amount(raw), Err(InputError::InvalidAmount(_))),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_amount_max_decimal() {
    let raw = rust_decimal::Decimal::MAX.to_string();
    assert_eq!(parse_amount(&raw).unwrap(), rust_decimal::Decimal::MAX);
}

#[test]
fn test_parse_amount_zero_allowed() {
    assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
    assert_eq!(parse_amount("0.00").unwrap(), Decimal::ZERO);
}

#[test]
fn test_parse_amount_invalid() {
    assert!(matches!(
        parse_amount("abc"),
        Err(InputError::InvalidAmount(s)) if s == "abc"
    ));
    assert!(matches!(parse_amount(""), Err(InputError::InvalidAmount(_))));
    assert!(matches!(parse_amount("1.2.3"), Err(InputError::InvalidAmount(_))));
}

#[test]
fn test_parse_amount_negative_rejected() {
    assert!(matches!(
        parse_amount("-5"),
        Err(InputError::NegativeAmount(a)) if a == dec!(-5)
    ));
}

// ── parse_selection ───────────────────────────────────────────

#[test]
fn test_parse_selection_every_valid_index() {
    for (i, cat) in Category::all().iter().enumerate() {
        let raw = (i + 1).to_string();
        assert_eq!(parse_selection(&raw).unwrap(), *cat);
    }
}

#[test]
fn test_parse_selection_out_of_range() {
    for raw in ["0", "-1", "6", "100", "", "two", "1.5"] {
        assert!(
            matches!(parse_selection(raw), Err(InputError::InvalidSelection { max: 5, .. })),
            "{raw:?} should be rejected"
        );
    }
}

// ── collect_expense ───────────────────────────────────────────

#[test]
fn test_collect_expense_happy_path() {
    let mut p = prompter("Coffee\n4.50\n1\n");
    let expense = p.collect_expense().unwrap();
    assert_eq!(
        expense,
        Expense::new("Coffee".into(), dec!(4.50), Category::Food)
    );
    let out = transcript(p);
    assert!(out.contains("You have entered Coffee, 4.50"));
    assert!(out.contains("1. 🍔 Food"));
    assert!(out.contains("5. ✨ Misc"));
    assert!(out.contains("[1 - 5]"));
}

#[test]
fn test_collect_expense_each_selection() {
    for (i, cat) in Category::all().iter().enumerate() {
        let script = format!("Thing\n10\n{}\n", i + 1);
        let mut p = prompter(&script);
        assert_eq!(p.collect_expense().unwrap().category, *cat);
    }
}

#[test]
fn test_collect_expense_reprompts_on_bad_selection() {
    let mut p = prompter("Rent\n12000\n0\n9\n-3\nhome\n2\n");
    let expense = p.collect_expense().unwrap();
    assert_eq!(expense.category, Category::Home);
    let out = transcript(p);
    assert_eq!(out.matches("Invalid category. Please try again!").count(), 4);
    assert_eq!(out.matches("Select a category:").count(), 5);
}

#[test]
fn test_collect_expense_reprompts_on_bad_amount() {
    let mut p = prompter("Taxi\nlots\n-20\n1,5\n₹250\n3\n");
    let expense = p.collect_expense().unwrap();
    assert_eq!(expense.amount, dec!(250));
    assert_eq!(expense.category, Category::Work);
    let out = transcript(p);
    assert!(out.contains("'lots' is not a valid amount. Please try again!"));
    assert!(out.contains("amount must not be negative"));
    assert!(out.contains("'1,5' is not a valid amount"));
    assert_eq!(out.matches("Enter expense amount:").count(), 4);
}

#[test]
fn test_collect_expense_trims_name_and_crlf() {
    let mut p = prompter("  Movie night \r\n15\r\n4\r\n");
    let expense = p.collect_expense().unwrap();
    assert_eq!(expense.name, "Movie night");
    assert_eq!(expense.category, Category::Fun);
}

#[test]
fn test_collect_expense_input_closed_during_selection() {
    // Only invalid selections, then EOF: no expense is produced.
    let mut p = prompter("Snacks\n5\n7\n0\n");
    assert!(matches!(p.collect_expense(), Err(InputError::Closed)));
}

#[test]
fn test_collect_expense_input_closed_immediately() {
    let mut p = prompter("");
    assert!(matches!(p.collect_expense(), Err(InputError::Closed)));
}

#[test]
fn test_collect_expense_last_line_without_newline() {
    let mut p = prompter("Gift\n30\n5");
    let expense = p.collect_expense().unwrap();
    assert_eq!(expense.category, Category::Misc);
}
