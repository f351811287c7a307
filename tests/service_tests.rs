mod common;

use common::{date, expense, income, salary_and_groceries};
use kakeibo::{
    core::services::{sample_transactions, SummaryService, TransactionFilter, TransactionService},
    domain::{DateRange, Kind, Ledger, LookbackPeriod},
};

fn seeded() -> Ledger {
    TransactionService::seed_samples(Ledger::new()).0
}

#[test]
fn salary_and_groceries_balance() {
    let totals = SummaryService::totals(&salary_and_groceries());
    assert_eq!(totals.income, 280_000);
    assert_eq!(totals.expense, 5_000);
    assert_eq!(totals.balance, 275_000);
}

#[test]
fn kind_filters_partition_the_totals() {
    let ledger = seeded();
    let all = SummaryService::totals(&ledger);
    for kind in Kind::ALL {
        let only = TransactionService::filter(&ledger, &TransactionFilter::all().with_kinds([kind]));
        let totals = SummaryService::totals(&only);
        match kind {
            Kind::Income => {
                assert_eq!(totals.income, all.income);
                assert_eq!(totals.expense, 0);
            }
            Kind::Expense => {
                assert_eq!(totals.expense, all.expense);
                assert_eq!(totals.income, 0);
            }
        }
    }
}

#[test]
fn seeding_twice_adds_nothing_new() {
    let (once, added) = TransactionService::seed_samples(Ledger::new());
    assert_eq!(added, sample_transactions().len());
    let (twice, added_again) = TransactionService::seed_samples(once.clone());
    assert_eq!(added_again, 0);
    assert_eq!(twice, once);
}

#[test]
fn seeding_keeps_user_entries_first() {
    let ledger = Ledger::new().append(expense(date(2023, 5, 1), "医療", 3_000));
    let (seeded, added) = TransactionService::seed_samples(ledger);
    assert_eq!(added, 13);
    assert_eq!(seeded.transactions[0].category, "医療");
    assert_eq!(seeded.len(), 14);
}

#[test]
fn monthly_rows_cover_each_month_once_ascending() {
    let rows = SummaryService::monthly_breakdown(&seeded());
    let months: Vec<String> = rows.iter().map(|row| row.year_month.to_string()).collect();
    assert_eq!(months, vec!["2023-03", "2023-04"]);
    assert_eq!(rows[0].income, 280_000);
    assert_eq!(rows[0].expense, 120_000);
    assert_eq!(rows[1].income, 310_000);
    assert_eq!(rows[1].expense, 124_000);
}

#[test]
fn category_rows_are_unique_and_descending() {
    let rows = SummaryService::category_breakdown(&seeded(), Kind::Expense);
    assert!(rows.windows(2).all(|pair| pair[0].total >= pair[1].total));
    let mut names: Vec<&str> = rows.iter().map(|row| row.category.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), rows.len());
    let share: f64 = SummaryService::category_share(&rows).iter().sum();
    assert!((share - 100.0).abs() < 1e-9);
}

#[test]
fn analysis_window_starts_at_period_start() {
    let ledger = seeded();
    let today = date(2023, 4, 30);
    let start = SummaryService::period_start(LookbackPeriod::ThirtyDays, today, &ledger).unwrap();
    assert_eq!(start, date(2023, 3, 31));

    let window = TransactionFilter::all().with_date_range(DateRange::starting(start));
    let in_window = TransactionService::filter(&ledger, &window);
    assert_eq!(in_window.len(), 7);
    assert!(in_window.iter().all(|txn| txn.date >= start));
}

#[test]
fn history_order_is_newest_first_and_stable() {
    let same_day = date(2023, 3, 5);
    let ledger = Ledger::new()
        .append(expense(same_day, "食費", 100))
        .append(income(date(2023, 3, 1), "給料", 1))
        .append(expense(same_day, "娯楽", 200));
    let sorted = TransactionService::sorted_for_history(&ledger);
    let categories: Vec<&str> = sorted.iter().map(|t| t.category.as_str()).collect();
    assert_eq!(categories, vec!["食費", "娯楽", "給料"]);
}
