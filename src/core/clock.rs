use chrono::{Local, NaiveDate};

/// Source of the current calendar date for lookback windows and entry defaults.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date. Dates are timezone-naive everywhere else.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
