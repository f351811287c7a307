use chrono::NaiveDate;

use crate::domain::{Kind, Transaction};

type SampleRow = (i32, u32, u32, &'static str, Kind, u64, &'static str);

const SAMPLE_ROWS: &[SampleRow] = &[
    (2023, 3, 1, "給料", Kind::Income, 280_000, "3月分給料"),
    (2023, 3, 5, "食費", Kind::Expense, 5_000, "スーパーでの買い物"),
    (2023, 3, 10, "住居費", Kind::Expense, 80_000, "家賃"),
    (2023, 3, 15, "通信費", Kind::Expense, 8_000, "携帯料金"),
    (2023, 3, 20, "光熱費", Kind::Expense, 12_000, "電気・ガス・水道"),
    (2023, 3, 25, "娯楽", Kind::Expense, 15_000, "映画と食事"),
    (2023, 4, 1, "給料", Kind::Income, 280_000, "4月分給料"),
    (2023, 4, 5, "食費", Kind::Expense, 6_000, "スーパーでの買い物"),
    (2023, 4, 10, "住居費", Kind::Expense, 80_000, "家賃"),
    (2023, 4, 12, "衣類", Kind::Expense, 20_000, "春物衣類"),
    (2023, 4, 15, "通信費", Kind::Expense, 8_000, "携帯料金"),
    (2023, 4, 20, "光熱費", Kind::Expense, 10_000, "電気・ガス・水道"),
    (2023, 4, 28, "副収入", Kind::Income, 30_000, "副業収入"),
];

/// Two months of demo entries used by the `sample` command.
pub fn sample_transactions() -> Vec<Transaction> {
    SAMPLE_ROWS
        .iter()
        .filter_map(|&(year, month, day, category, kind, amount, memo)| {
            NaiveDate::from_ymd_opt(year, month, day)
                .map(|date| Transaction::new(date, kind, category, amount).with_memo(memo))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_row_is_valid() {
        let rows = sample_transactions();
        assert_eq!(rows.len(), SAMPLE_ROWS.len());
        assert!(rows.iter().all(|txn| txn.validate_entry().is_ok()));
    }
}
