use crate::cli::args::{filter_from_args, ParsedArgs, FILTER_FLAGS};
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{Formatter, Table, TableColumn};
use crate::core::services::{SummaryService, Totals, TransactionService};
use crate::domain::Ledger;

const HISTORY_USAGE: &str =
    "history [--kind k,..] [--category c,..] [--from YYYY-MM-DD] [--to YYYY-MM-DD]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "history",
        "Show recorded transactions, newest first",
        HISTORY_USAGE,
        cmd_history,
    )
    .with_aliases(&["list"])]
}

fn cmd_history(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, FILTER_FLAGS, &[])?;
    parsed.expect_positionals(0, HISTORY_USAGE)?;
    let filter = filter_from_args(&parsed)?;
    let ledger = context.load_ledger()?;
    let filtered = TransactionService::filter(&ledger, &filter);

    output_section(format!("History ({} of {})", filtered.len(), ledger.len()));
    if filtered.is_empty() {
        io::print_info("No transactions match.");
        return Ok(());
    }

    let formatter = Formatter::new(context.config.currency_suffix.clone());
    let sorted = TransactionService::sorted_for_history(&filtered);
    println!("{}", history_table(&sorted, &formatter).render());
    print_totals(&SummaryService::totals(&filtered), &formatter);
    Ok(())
}

pub(crate) fn history_table(ledger: &Ledger, formatter: &Formatter) -> Table {
    let mut table = Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::left("Kind"),
        TableColumn::left("Category").max_width(16),
        TableColumn::right("Amount"),
        TableColumn::left("Memo").max_width(32),
    ]);
    for txn in ledger {
        table.add_row(vec![
            txn.date.to_string(),
            txn.kind.to_string(),
            txn.category.clone(),
            formatter.amount(txn.amount),
            txn.memo.clone(),
        ]);
    }
    table
}

pub(crate) fn print_totals(totals: &Totals, formatter: &Formatter) {
    println!();
    formatter.print_two_column(&[
        ("Income", formatter.amount(totals.income)),
        ("Expense", formatter.amount(totals.expense)),
        ("Balance", formatter.balance(totals.balance)),
    ]);
}
