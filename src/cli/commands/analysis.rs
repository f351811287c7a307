use crate::cli::args::ParsedArgs;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{render_bars, Bar, BarStyle, Formatter, Table, TableColumn, BAR_WIDTH};
use crate::core::services::{
    CategoryRow, MonthlyRow, SummaryService, TransactionFilter, TransactionService,
};
use crate::domain::{DateRange, Kind, LookbackPeriod};

use super::history::print_totals;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "analysis",
        "Monthly and per-category summaries",
        "analysis [7d|30d|3m|6m|1y|all] [--breakdown expense|income]",
        cmd_analysis,
    )
    .with_aliases(&["summary"])]
}

fn cmd_analysis(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &["breakdown"], &[])?;
    // Two words allow labels such as "30 days".
    parsed.expect_positionals(2, "analysis [period] [--breakdown expense|income]")?;
    let period: LookbackPeriod = match parsed.positionals.first() {
        Some(raw) => parsed_period(raw, &parsed.positionals)?,
        None => context.config.default_period,
    };
    let breakdown: Kind = match parsed.value("breakdown") {
        Some(raw) => raw.parse()?,
        None => context.config.default_breakdown,
    };

    let ledger = context.load_ledger()?;
    output_section(format!("Analysis: {}", period.label()));

    let Some(start) = SummaryService::period_start(period, context.today(), &ledger) else {
        io::print_info("No transactions recorded yet. Try `add` or `sample`.");
        return Ok(());
    };
    let window = TransactionFilter::all().with_date_range(DateRange::starting(start));
    let in_window = TransactionService::filter(&ledger, &window);
    if in_window.is_empty() {
        io::print_info(format!("No transactions since {}.", start));
        return Ok(());
    }

    let formatter = Formatter::new(context.config.currency_suffix.clone());
    io::print_info(format!("From {} ({} transactions)", start, in_window.len()));
    print_totals(&SummaryService::totals(&in_window), &formatter);

    let months = SummaryService::monthly_breakdown(&in_window);
    output_section("Monthly");
    println!("{}", monthly_table(&months, &formatter).render());
    println!();
    for line in render_bars(&monthly_bars(&months, &formatter), BAR_WIDTH) {
        println!("{}", line);
    }

    let categories = SummaryService::category_breakdown(&in_window, breakdown);
    output_section(format!("{} by category", breakdown));
    if categories.is_empty() {
        io::print_info(format!("No {} in this period.", breakdown.as_str().to_lowercase()));
        return Ok(());
    }
    let shares = SummaryService::category_share(&categories);
    println!("{}", category_table(&categories, &shares, &formatter).render());
    println!();
    let bars: Vec<Bar> = categories
        .iter()
        .zip(&shares)
        .map(|(row, share)| Bar {
            label: row.category.clone(),
            value: row.total,
            caption: formatter.percent(*share),
            style: BarStyle::Share,
        })
        .collect();
    for line in render_bars(&bars, BAR_WIDTH) {
        println!("{}", line);
    }
    Ok(())
}

fn parsed_period(
    first: &str,
    positionals: &[String],
) -> Result<LookbackPeriod, CommandError> {
    // Labels such as "30 days" arrive split into two words.
    match first.parse() {
        Ok(period) => Ok(period),
        Err(err) if positionals.len() > 1 => {
            positionals.join(" ").parse().map_err(|_| err.into())
        }
        Err(err) => Err(err.into()),
    }
}

fn monthly_table(months: &[MonthlyRow], formatter: &Formatter) -> Table {
    let mut table = Table::new(vec![
        TableColumn::left("Month"),
        TableColumn::right("Income"),
        TableColumn::right("Expense"),
        TableColumn::right("Balance"),
    ]);
    for row in months {
        table.add_row(vec![
            row.year_month.to_string(),
            formatter.amount(row.income),
            formatter.amount(row.expense),
            formatter.signed(row.balance),
        ]);
    }
    table
}

/// Two bars per month, income then expense, on a shared scale.
fn monthly_bars(months: &[MonthlyRow], formatter: &Formatter) -> Vec<Bar> {
    months
        .iter()
        .flat_map(|row| {
            [
                Bar {
                    label: format!("{} in", row.year_month),
                    value: row.income,
                    caption: formatter.amount(row.income),
                    style: BarStyle::Income,
                },
                Bar {
                    label: format!("{} out", row.year_month),
                    value: row.expense,
                    caption: formatter.amount(row.expense),
                    style: BarStyle::Expense,
                },
            ]
        })
        .collect()
}

fn category_table(rows: &[CategoryRow], shares: &[f64], formatter: &Formatter) -> Table {
    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::left("Category").max_width(16),
        TableColumn::right("Total"),
        TableColumn::right("Share"),
    ]);
    for (rank, (row, share)) in rows.iter().zip(shares).enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            row.category.clone(),
            formatter.amount(row.total),
            formatter.percent(*share),
        ]);
    }
    table
}
