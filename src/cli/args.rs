//! Splits command arguments into positionals and `--flag [value]` options.

use std::collections::HashMap;

use crate::cli::core::{parse_date, CommandError};
use crate::core::services::TransactionFilter;
use crate::domain::{DateRange, Kind};

#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub positionals: Vec<String>,
    flags: HashMap<String, Option<String>>,
}

impl ParsedArgs {
    /// `value_flags` take the next token (or an inline `=value`) as their
    /// value; `switches` take none. Any other `--name` is rejected.
    pub fn parse(
        args: &[&str],
        value_flags: &[&str],
        switches: &[&str],
    ) -> Result<Self, CommandError> {
        let mut parsed = ParsedArgs::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let Some(name) = arg.strip_prefix("--") else {
                parsed.positionals.push(arg.to_string());
                continue;
            };
            let (name, inline) = match name.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (name, None),
            };
            let value = if value_flags.contains(&name) {
                match inline {
                    Some(value) => Some(value),
                    None => Some(iter.next().map(|v| v.to_string()).ok_or_else(|| {
                        CommandError::InvalidArguments(format!("`--{}` needs a value", name))
                    })?),
                }
            } else if switches.contains(&name) {
                if inline.is_some() {
                    return Err(CommandError::InvalidArguments(format!(
                        "`--{}` takes no value",
                        name
                    )));
                }
                None
            } else {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown option `--{}`",
                    name
                )));
            };
            parsed.flags.insert(name.to_string(), value);
        }
        Ok(parsed)
    }

    /// Fails when more than `max` positional arguments were given.
    pub fn expect_positionals(&self, max: usize, usage: &str) -> Result<(), CommandError> {
        if self.positionals.len() > max {
            return Err(CommandError::InvalidArguments(format!(
                "unexpected argument `{}` (usage: {})",
                self.positionals[max], usage
            )));
        }
        Ok(())
    }

    pub fn has(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.flags.get(name).and_then(|value| value.as_deref())
    }

    /// Comma-separated list value, with empty items dropped.
    pub fn list(&self, name: &str) -> Option<Vec<String>> {
        self.value(name).map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
    }
}

pub(crate) const FILTER_FLAGS: &[&str] = &["kind", "category", "from", "to"];

/// Builds a history filter from `--kind`, `--category`, `--from` and `--to`.
pub(crate) fn filter_from_args(args: &ParsedArgs) -> Result<TransactionFilter, CommandError> {
    let mut filter = TransactionFilter::all();
    if let Some(kinds) = args.list("kind") {
        let kinds = kinds
            .iter()
            .map(|raw| raw.parse::<Kind>())
            .collect::<Result<Vec<_>, _>>()?;
        filter = filter.with_kinds(kinds);
    }
    if let Some(categories) = args.list("category") {
        filter = filter.with_categories(categories);
    }
    let from = args.value("from").map(parse_date).transpose()?;
    let to = args.value("to").map(parse_date).transpose()?;
    let range = match (from, to) {
        (Some(start), Some(end)) => Some(DateRange::new(start, end)?),
        (Some(start), None) => Some(DateRange::starting(start)),
        (None, Some(end)) => Some(DateRange::ending(end)),
        (None, None) => None,
    };
    if let Some(range) = range {
        filter = filter.with_date_range(range);
    }
    Ok(filter)
}
