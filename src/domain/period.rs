use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::common::Displayable;
use crate::errors::LedgerError;

/// Named lookback window for the analysis view.
///
/// Month and year windows are fixed day counts (90/180/365), not calendar aware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LookbackPeriod {
    SevenDays,
    ThirtyDays,
    ThreeMonths,
    SixMonths,
    OneYear,
    #[default]
    AllTime,
}

impl LookbackPeriod {
    pub const ALL: [LookbackPeriod; 6] = [
        LookbackPeriod::SevenDays,
        LookbackPeriod::ThirtyDays,
        LookbackPeriod::ThreeMonths,
        LookbackPeriod::SixMonths,
        LookbackPeriod::OneYear,
        LookbackPeriod::AllTime,
    ];

    /// Fixed number of days looked back, or `None` for the whole ledger.
    pub fn days(&self) -> Option<i64> {
        match self {
            LookbackPeriod::SevenDays => Some(7),
            LookbackPeriod::ThirtyDays => Some(30),
            LookbackPeriod::ThreeMonths => Some(90),
            LookbackPeriod::SixMonths => Some(180),
            LookbackPeriod::OneYear => Some(365),
            LookbackPeriod::AllTime => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            LookbackPeriod::SevenDays => "7d",
            LookbackPeriod::ThirtyDays => "30d",
            LookbackPeriod::ThreeMonths => "3m",
            LookbackPeriod::SixMonths => "6m",
            LookbackPeriod::OneYear => "1y",
            LookbackPeriod::AllTime => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LookbackPeriod::SevenDays => "7 days",
            LookbackPeriod::ThirtyDays => "30 days",
            LookbackPeriod::ThreeMonths => "3 months",
            LookbackPeriod::SixMonths => "6 months",
            LookbackPeriod::OneYear => "1 year",
            LookbackPeriod::AllTime => "all time",
        }
    }
}

impl fmt::Display for LookbackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Displayable for LookbackPeriod {
    fn display_label(&self) -> String {
        format!("{} ({})", self.label(), self.code())
    }
}

impl FromStr for LookbackPeriod {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace(['_', '-'], " ");
        let period = match normalized.as_str() {
            "7d" | "7 days" | "seven days" | "week" | "過去7日間" => LookbackPeriod::SevenDays,
            "30d" | "30 days" | "thirty days" | "month" | "過去30日間" => {
                LookbackPeriod::ThirtyDays
            }
            "3m" | "90d" | "3 months" | "three months" | "過去3ヶ月" => {
                LookbackPeriod::ThreeMonths
            }
            "6m" | "180d" | "6 months" | "six months" | "過去6ヶ月" => LookbackPeriod::SixMonths,
            "1y" | "365d" | "1 year" | "one year" | "year" | "過去1年" => LookbackPeriod::OneYear,
            "all" | "all time" | "全期間" => LookbackPeriod::AllTime,
            _ => {
                return Err(LedgerError::InvalidInput(format!(
                    "unknown period `{}` (use 7d, 30d, 3m, 6m, 1y or all)",
                    value.trim()
                )))
            }
        };
        Ok(period)
    }
}

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LedgerError> {
        if end < start {
            return Err(LedgerError::InvalidInput(format!(
                "range end {} is before start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Range from `start` with no upper bound.
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start,
            end: NaiveDate::MAX,
        }
    }

    /// Range from the earliest representable date through `end`.
    pub fn ending(end: NaiveDate) -> Self {
        Self {
            start: NaiveDate::MIN,
            end,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Calendar month used as the grouping key of monthly breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
