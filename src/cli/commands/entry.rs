use crate::cli::args::ParsedArgs;
use crate::cli::core::{parse_date, CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms::{parse_amount, transaction_form, FormResult};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::Formatter;
use crate::core::services::{TransactionFilter, TransactionService};
use crate::domain::{Displayable, Kind, Ledger, Transaction};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an income or expense",
            "add [<kind> <category> <amount> [memo] [--date YYYY-MM-DD]]",
            cmd_add,
        ),
        CommandEntry::new(
            "categories",
            "List suggested and recorded categories",
            "categories [expense|income]",
            cmd_categories,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let transaction = if args.is_empty() {
        if context.mode == CliMode::Script {
            return Err(CommandError::InvalidArguments(
                "usage: add <kind> <category> <amount> [memo] [--date YYYY-MM-DD]".into(),
            ));
        }
        match transaction_form(&context.theme, context.today())? {
            FormResult::Completed(transaction) => transaction,
            FormResult::Cancelled => {
                io::print_info("Entry cancelled.");
                return Ok(());
            }
        }
    } else {
        transaction_from_args(context, args)?
    };

    // Validation happens before the store is touched.
    transaction.validate_entry()?;
    let ledger = context.load_ledger()?;
    let ledger = TransactionService::record(ledger, transaction.clone())?;
    context.commit(ledger)?;

    let formatter = Formatter::new(context.config.currency_suffix.clone());
    io::print_success(format!(
        "Recorded {} {} {} on {}.",
        transaction.kind,
        transaction.category,
        formatter.amount(transaction.amount),
        transaction.date
    ));
    Ok(())
}

fn transaction_from_args(
    context: &ShellContext,
    args: &[&str],
) -> Result<Transaction, CommandError> {
    let parsed = ParsedArgs::parse(args, &["date", "memo"], &[])?;
    let [kind, category, amount, rest @ ..] = parsed.positionals.as_slice() else {
        return Err(CommandError::InvalidArguments(
            "usage: add <kind> <category> <amount> [memo] [--date YYYY-MM-DD]".into(),
        ));
    };
    let kind: Kind = kind.parse()?;
    let amount = parse_amount(amount)?;
    let date = match parsed.value("date") {
        Some(raw) => parse_date(raw)?,
        None => context.today(),
    };
    let memo = match parsed.value("memo") {
        Some(memo) => memo.to_string(),
        None => rest.join(" "),
    };
    Ok(Transaction::new(date, kind, category.trim(), amount).with_memo(memo))
}

fn cmd_categories(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kinds: Vec<Kind> = match args {
        [] => Kind::ALL.to_vec(),
        [raw] => vec![raw.parse()?],
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: categories [expense|income]".into(),
            ))
        }
    };
    let ledger = context.load_ledger()?;
    for kind in kinds {
        output_section(kind.display_label());
        io::print_info(format!("  Suggested: {}", kind.categories().join(", ")));
        let used = categories_in_use(&ledger, kind);
        if used.is_empty() {
            io::print_info("  In your ledger: none yet");
        } else {
            io::print_info(format!("  In your ledger: {}", used.join(", ")));
        }
    }
    Ok(())
}

/// Categories already recorded under `kind`, in first-seen order.
fn categories_in_use(ledger: &Ledger, kind: Kind) -> Vec<String> {
    TransactionService::filter(ledger, &TransactionFilter::all().with_kinds(vec![kind]))
        .categories()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::{run_lines, test_context};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn date_defaults_to_today_and_memo_joins_trailing_words() {
        let temp = TempDir::new().unwrap();
        let today = NaiveDate::from_ymd_opt(2023, 4, 30).unwrap();
        let mut ctx = test_context(temp.path(), today);
        let outcomes = run_lines(&mut ctx, &["add 支出 交通費 320 bus to work"]);
        assert!(outcomes[0].is_ok(), "{outcomes:?}");

        let ledger = ctx.load_ledger().unwrap();
        let txn = &ledger.transactions[0];
        assert_eq!(txn.date, today);
        assert_eq!(txn.kind, Kind::Expense);
        assert_eq!(txn.memo, "bus to work");
    }

    #[test]
    fn missing_arguments_are_reported() {
        let temp = TempDir::new().unwrap();
        let mut ctx = test_context(temp.path(), NaiveDate::from_ymd_opt(2023, 4, 30).unwrap());
        let outcomes = run_lines(
            &mut ctx,
            &["add", "add expense 食費", "add transfer 食費 100", "add expense 食費 -1"],
        );
        assert!(outcomes.iter().all(|o| o.is_err()), "{outcomes:?}");
        assert!(ctx.load_ledger().unwrap().is_empty());
    }

    #[test]
    fn categories_accepts_kind_filter() {
        let temp = TempDir::new().unwrap();
        let mut ctx = test_context(temp.path(), NaiveDate::from_ymd_opt(2023, 4, 30).unwrap());
        let outcomes = run_lines(&mut ctx, &["categories", "categories income", "categories x"]);
        assert!(outcomes[0].is_ok());
        assert!(outcomes[1].is_ok());
        assert!(outcomes[2].is_err());
    }

    #[test]
    fn categories_in_use_follow_the_ledger() {
        let temp = TempDir::new().unwrap();
        let mut ctx = test_context(temp.path(), NaiveDate::from_ymd_opt(2023, 4, 30).unwrap());
        let outcomes = run_lines(
            &mut ctx,
            &["add expense ペット 800", "add expense 食費 1200", "add income 給料 1000"],
        );
        assert!(outcomes.iter().all(|o| o.is_ok()), "{outcomes:?}");

        let ledger = ctx.load_ledger().unwrap();
        assert_eq!(
            categories_in_use(&ledger, Kind::Expense),
            vec!["ペット".to_string(), "食費".to_string()]
        );
        assert_eq!(categories_in_use(&ledger, Kind::Income), vec!["給料".to_string()]);
        assert!(categories_in_use(&Ledger::new(), Kind::Income).is_empty());
        assert!(run_lines(&mut ctx, &["categories expense income"])[0].is_err());
    }
}
