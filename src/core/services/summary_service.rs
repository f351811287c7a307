use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::domain::{Kind, Ledger, LookbackPeriod, YearMonth};

/// Income, expense and their difference over a ledger snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: u64,
    pub expense: u64,
    pub balance: i64,
}

/// One row of the monthly income/expense breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyRow {
    pub year_month: YearMonth,
    pub income: u64,
    pub expense: u64,
    pub balance: i64,
}

/// Sum of one category's amounts for a single kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: String,
    pub total: u64,
}

pub struct SummaryService;

impl SummaryService {
    pub fn totals(ledger: &Ledger) -> Totals {
        let mut totals = Totals::default();
        for txn in ledger {
            match txn.kind {
                Kind::Income => totals.income = totals.income.saturating_add(txn.amount),
                Kind::Expense => totals.expense = totals.expense.saturating_add(txn.amount),
            }
        }
        totals.balance = balance(totals.income, totals.expense);
        totals
    }

    /// Start date of `period` relative to `today`. The all-time window starts
    /// at the earliest ledger date and is `None` for an empty ledger.
    pub fn period_start(
        period: LookbackPeriod,
        today: NaiveDate,
        ledger: &Ledger,
    ) -> Option<NaiveDate> {
        match period.days() {
            Some(days) => today.checked_sub_signed(chrono::Duration::days(days)),
            None => ledger.earliest_date(),
        }
    }

    /// One row per year-month holding any transaction, ascending.
    pub fn monthly_breakdown(ledger: &Ledger) -> Vec<MonthlyRow> {
        let mut months: BTreeMap<YearMonth, (u64, u64)> = BTreeMap::new();
        for txn in ledger {
            let entry = months.entry(YearMonth::of(txn.date)).or_default();
            match txn.kind {
                Kind::Income => entry.0 = entry.0.saturating_add(txn.amount),
                Kind::Expense => entry.1 = entry.1.saturating_add(txn.amount),
            }
        }
        months
            .into_iter()
            .map(|(year_month, (income, expense))| MonthlyRow {
                year_month,
                income,
                expense,
                balance: balance(income, expense),
            })
            .collect()
    }

    /// Per-category totals for `kind`, largest first. Equal totals are ordered
    /// by category name.
    pub fn category_breakdown(ledger: &Ledger, kind: Kind) -> Vec<CategoryRow> {
        let mut sums: HashMap<&str, u64> = HashMap::new();
        for txn in ledger.iter().filter(|txn| txn.kind == kind) {
            let sum = sums.entry(txn.category.as_str()).or_default();
            *sum = sum.saturating_add(txn.amount);
        }
        let mut rows: Vec<CategoryRow> = sums
            .into_iter()
            .map(|(category, total)| CategoryRow {
                category: category.to_string(),
                total,
            })
            .collect();
        rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
        rows
    }

    /// Percentage share of each row in the breakdown total. All zero when the
    /// total is zero.
    pub fn category_share(rows: &[CategoryRow]) -> Vec<f64> {
        let total: u64 = rows.iter().map(|row| row.total).sum();
        rows.iter()
            .map(|row| {
                if total == 0 {
                    0.0
                } else {
                    row.total as f64 * 100.0 / total as f64
                }
            })
            .collect()
    }
}

fn balance(income: u64, expense: u64) -> i64 {
    let income = i64::try_from(income).unwrap_or(i64::MAX);
    let expense = i64::try_from(expense).unwrap_or(i64::MAX);
    income.saturating_sub(expense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::transaction_service::{TransactionFilter, TransactionService};
    use crate::domain::{DateRange, Transaction};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scenario_ledger() -> Ledger {
        Ledger::new()
            .append(Transaction::new(date(2023, 3, 1), Kind::Income, "給料", 280_000))
            .append(Transaction::new(date(2023, 3, 5), Kind::Expense, "食費", 5_000))
    }

    #[test]
    fn totals_for_scenario() {
        let totals = SummaryService::totals(&scenario_ledger());
        assert_eq!(
            totals,
            Totals {
                income: 280_000,
                expense: 5_000,
                balance: 275_000,
            }
        );
    }

    #[test]
    fn totals_of_empty_ledger_are_zero() {
        assert_eq!(SummaryService::totals(&Ledger::new()), Totals::default());
    }

    #[test]
    fn balance_can_be_negative() {
        let ledger = Ledger::new().append(Transaction::new(date(2024, 1, 1), Kind::Expense, "食費", 10));
        assert_eq!(SummaryService::totals(&ledger).balance, -10);
    }

    #[test]
    fn filtered_income_total_matches_unfiltered_income_total() {
        let (ledger, _) = TransactionService::seed_samples(scenario_ledger());
        let income_only = TransactionService::filter(
            &ledger,
            &TransactionFilter::all().with_kinds([Kind::Income]),
        );
        assert_eq!(
            SummaryService::totals(&income_only).income,
            SummaryService::totals(&ledger).income
        );
        assert_eq!(SummaryService::totals(&income_only).expense, 0);
    }

    #[test]
    fn period_start_uses_fixed_day_counts() {
        let today = date(2024, 3, 31);
        let ledger = Ledger::new();
        assert_eq!(
            SummaryService::period_start(LookbackPeriod::SevenDays, today, &ledger),
            Some(date(2024, 3, 24))
        );
        assert_eq!(
            SummaryService::period_start(LookbackPeriod::ThreeMonths, today, &ledger),
            Some(date(2024, 1, 1))
        );
        assert_eq!(
            SummaryService::period_start(LookbackPeriod::OneYear, today, &ledger),
            Some(date(2023, 4, 1))
        );
    }

    #[test]
    fn all_time_starts_at_earliest_entry() {
        let today = date(2024, 3, 31);
        assert_eq!(
            SummaryService::period_start(LookbackPeriod::AllTime, today, &Ledger::new()),
            None
        );
        assert_eq!(
            SummaryService::period_start(LookbackPeriod::AllTime, today, &scenario_ledger()),
            Some(date(2023, 3, 1))
        );
    }

    #[test]
    fn monthly_breakdown_is_strictly_ascending() {
        let ledger = Ledger::new()
            .append(Transaction::new(date(2023, 4, 2), Kind::Expense, "食費", 300))
            .append(Transaction::new(date(2023, 3, 2), Kind::Expense, "食費", 100))
            .append(Transaction::new(date(2023, 4, 25), Kind::Income, "給料", 1_000))
            .append(Transaction::new(date(2022, 12, 31), Kind::Income, "給料", 50));
        let rows = SummaryService::monthly_breakdown(&ledger);
        let keys: Vec<String> = rows.iter().map(|r| r.year_month.to_string()).collect();
        assert_eq!(keys, vec!["2022-12", "2023-03", "2023-04"]);
        assert!(rows.windows(2).all(|w| w[0].year_month < w[1].year_month));
        assert_eq!(rows[2].income, 1_000);
        assert_eq!(rows[2].expense, 300);
        assert_eq!(rows[2].balance, 700);
    }

    #[test]
    fn income_only_month_has_zero_expense() {
        let ledger = Ledger::new().append(Transaction::new(date(2023, 5, 1), Kind::Income, "給料", 10));
        let rows = SummaryService::monthly_breakdown(&ledger);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].expense, 0);
        assert_eq!(rows[0].balance, 10);
    }

    #[test]
    fn category_breakdown_sorted_descending_with_unique_categories() {
        let (ledger, _) = TransactionService::seed_samples(Ledger::new());
        let rows = SummaryService::category_breakdown(&ledger, Kind::Expense);
        assert!(rows.windows(2).all(|w| w[0].total >= w[1].total));
        assert_eq!(rows[0].category, "住居費");
        assert_eq!(rows[0].total, 160_000);
        let mut names: Vec<_> = rows.iter().map(|r| r.category.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), rows.len());
        assert_eq!(rows.len(), 6);
    }

    #[test]
    fn category_breakdown_only_counts_requested_kind() {
        let rows = SummaryService::category_breakdown(&scenario_ledger(), Kind::Income);
        assert_eq!(
            rows,
            vec![CategoryRow {
                category: "給料".into(),
                total: 280_000
            }]
        );
    }

    #[test]
    fn empty_window_yields_empty_breakdowns() {
        let today = date(2024, 6, 1);
        let start = SummaryService::period_start(LookbackPeriod::SevenDays, today, &scenario_ledger())
            .expect("fixed window has a start");
        let window = TransactionService::filter(
            &scenario_ledger(),
            &TransactionFilter::all().with_date_range(DateRange::starting(start)),
        );
        assert!(window.is_empty());
        assert!(SummaryService::monthly_breakdown(&window).is_empty());
        assert!(SummaryService::category_breakdown(&window, Kind::Expense).is_empty());
        assert_eq!(SummaryService::totals(&window), Totals::default());
    }

    #[test]
    fn category_share_sums_to_hundred() {
        let rows = vec![
            CategoryRow {
                category: "a".into(),
                total: 75,
            },
            CategoryRow {
                category: "b".into(),
                total: 25,
            },
        ];
        assert_eq!(SummaryService::category_share(&rows), vec![75.0, 25.0]);
        assert!(SummaryService::category_share(&[]).is_empty());
    }
}
