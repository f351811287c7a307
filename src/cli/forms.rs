//! Interactive entry form for a single transaction.

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;
use once_cell::sync::Lazy;

use crate::cli::core::{parse_date, CommandError};
use crate::cli::io;
use crate::domain::{Displayable, Kind, Transaction};

/// Outcome of a form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult<T> {
    Completed(T),
    Cancelled,
}

static KIND_ITEMS: Lazy<Vec<String>> =
    Lazy::new(|| Kind::ALL.iter().map(|kind| kind.display_label()).collect());

/// Collects date, kind, category, amount, and memo. Typing an empty amount
/// cancels the form.
pub fn transaction_form(
    theme: &ColorfulTheme,
    today: NaiveDate,
) -> Result<FormResult<Transaction>, CommandError> {
    let date = loop {
        let raw = io::prompt_text(theme, "Date (YYYY-MM-DD)", Some(&today.to_string()))?;
        match parse_date(raw.trim()) {
            Ok(date) => break date,
            Err(err) => io::print_warning(err),
        }
    };

    let kind = Kind::ALL[io::select_index(theme, "Kind", &KIND_ITEMS, 0)?];

    let mut categories: Vec<String> = kind.categories().iter().map(|c| c.to_string()).collect();
    categories.push("Other (type a name)".into());
    let picked = io::select_index(theme, "Category", &categories, 0)?;
    let category = if picked + 1 == categories.len() {
        io::prompt_text(theme, "Category name", None)?.trim().to_string()
    } else {
        categories[picked].clone()
    };

    let amount = loop {
        let raw = io::prompt_text(theme, "Amount (empty to cancel)", None)?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(FormResult::Cancelled);
        }
        match parse_amount(raw) {
            Ok(amount) => break amount,
            Err(err) => io::print_warning(err),
        }
    };

    let memo = io::prompt_text(theme, "Memo", None)?;
    Ok(FormResult::Completed(
        Transaction::new(date, kind, category, amount).with_memo(memo.trim()),
    ))
}

/// Accepts plain digits with optional `,` or `_` grouping.
pub(crate) fn parse_amount(raw: &str) -> Result<u64, CommandError> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '_').collect();
    cleaned.parse::<u64>().map_err(|_| {
        CommandError::InvalidArguments(format!(
            "invalid amount `{}` (use a whole, non-negative number)",
            raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_accepts_grouping() {
        assert_eq!(parse_amount("280,000").unwrap(), 280000);
        assert_eq!(parse_amount("1_500").unwrap(), 1500);
        assert_eq!(parse_amount("0").unwrap(), 0);
    }

    #[test]
    fn amount_rejects_negative_and_fractional() {
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("12.5").is_err());
        assert!(parse_amount("abc").is_err());
    }
}
