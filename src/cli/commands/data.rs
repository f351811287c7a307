use std::path::PathBuf;

use crate::cli::args::{filter_from_args, ParsedArgs, FILTER_FLAGS};
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::core::services::TransactionService;
use crate::export;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "sample",
            "Add the sample transactions that are not yet recorded",
            "sample",
            cmd_sample,
        ),
        CommandEntry::new(
            "clear",
            "Delete every recorded transaction",
            "clear [--yes]",
            cmd_clear,
        ),
        CommandEntry::new(
            "export",
            "Write transactions to a CSV file",
            "export <path> [--kind k,..] [--category c,..] [--from YYYY-MM-DD] [--to YYYY-MM-DD]",
            cmd_export,
        ),
        CommandEntry::new(
            "retry",
            "Retry the last failed save",
            "retry",
            cmd_retry,
        ),
    ]
}

fn cmd_sample(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.load_ledger()?;
    let (ledger, added) = TransactionService::seed_samples(ledger);
    if added == 0 {
        io::print_info("Sample data is already present.");
        return Ok(());
    }
    context.commit(ledger)?;
    io::print_success(format!("Added {} sample transactions.", added));
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &[], &["yes"])?;
    parsed.expect_positionals(0, "clear [--yes]")?;
    let ledger = context.load_ledger()?;
    if ledger.is_empty() {
        io::print_info("The ledger is already empty.");
        return Ok(());
    }

    if !parsed.has("yes") {
        if context.mode == CliMode::Script {
            return Err(CommandError::InvalidArguments(
                "clear deletes every transaction; run `clear --yes` to confirm".into(),
            ));
        }
        let prompt = format!("Delete all {} transactions? This cannot be undone.", ledger.len());
        if !io::confirm_action(&context.theme, &prompt, false)? {
            io::print_info("Nothing deleted.");
            return Ok(());
        }
    }

    let removed = ledger.len();
    context.commit(ledger.clear())?;
    tracing::info!(removed, "ledger cleared");
    io::print_success(format!("Deleted {} transactions.", removed));
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, FILTER_FLAGS, &[])?;
    parsed.expect_positionals(1, "export <path> [history filters]")?;
    let [path] = parsed.positionals.as_slice() else {
        return Err(CommandError::InvalidArguments(
            "usage: export <path> [history filters]".into(),
        ));
    };
    let filter = filter_from_args(&parsed)?;
    let ledger = context.load_ledger()?;
    let selected = TransactionService::filter(&ledger, &filter);

    let path = PathBuf::from(path);
    export::export_to_path(&selected, &path)?;
    io::print_success(format!(
        "Exported {} transactions to {}.",
        selected.len(),
        path.display()
    ));
    Ok(())
}

fn cmd_retry(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let Some(ledger) = context.take_pending_save() else {
        io::print_info("Nothing to retry.");
        return Ok(());
    };
    let count = ledger.len();
    context.commit(ledger)?;
    io::print_success(format!("Saved {} transactions.", count));
    Ok(())
}
