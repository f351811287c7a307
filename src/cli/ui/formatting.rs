use colored::Colorize;

use crate::cli::output::{current_preferences, OutputPreferences};

/// Renders amounts with thousands separators and the configured currency
/// suffix, e.g. `280,000円`.
pub struct Formatter {
    prefs: OutputPreferences,
    suffix: String,
}

impl Formatter {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            prefs: current_preferences(),
            suffix: suffix.into(),
        }
    }

    pub fn amount(&self, value: u64) -> String {
        format!("{}{}", group_thousands(&value.to_string()), self.suffix)
    }

    pub fn signed(&self, value: i64) -> String {
        let digits = group_thousands(&value.unsigned_abs().to_string());
        if value < 0 {
            format!("-{}{}", digits, self.suffix)
        } else {
            format!("{}{}", digits, self.suffix)
        }
    }

    /// Signed amount colored by sign unless plain output is active.
    pub fn balance(&self, value: i64) -> String {
        let text = self.signed(value);
        if self.prefs.plain_mode {
            return text;
        }
        if value < 0 {
            text.red().to_string()
        } else {
            text.green().to_string()
        }
    }

    pub fn percent(&self, value: f64) -> String {
        format!("{:.1}%", value)
    }

    pub fn print_two_column(&self, entries: &[(&str, String)]) {
        let label_width = entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);
        for (label, value) in entries {
            println!("  {:<width$}  {}", label, value, width = label_width);
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_suffix() {
        let fmt = Formatter::new("円");
        assert_eq!(fmt.amount(0), "0円");
        assert_eq!(fmt.amount(999), "999円");
        assert_eq!(fmt.amount(280000), "280,000円");
        assert_eq!(fmt.amount(1234567), "1,234,567円");
    }

    #[test]
    fn negative_values_keep_sign_before_digits() {
        let fmt = Formatter::new(" JPY");
        assert_eq!(fmt.signed(-5000), "-5,000 JPY");
        assert_eq!(fmt.signed(i64::MIN), "-9,223,372,036,854,775,808 JPY");
    }
}
