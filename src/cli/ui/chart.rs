//! Horizontal text bar charts for the analysis view.

use colored::Colorize;

use crate::cli::output::current_preferences;
use crate::cli::ui::table::display_width;

pub const BAR_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarStyle {
    Income,
    Expense,
    Share,
}

/// One labelled bar; `value` is scaled against the chart maximum.
#[derive(Clone, Debug)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    pub caption: String,
    pub style: BarStyle,
}

/// Number of cells a bar of `value` occupies when `max` fills `width`.
/// Any non-zero value gets at least one cell.
pub fn scaled_len(value: u64, max: u64, width: usize) -> usize {
    if max == 0 || value == 0 {
        return 0;
    }
    let cells = (value as u128 * width as u128 / max as u128) as usize;
    cells.max(1)
}

pub fn render_bars(bars: &[Bar], width: usize) -> Vec<String> {
    let max = bars.iter().map(|bar| bar.value).max().unwrap_or(0);
    let label_width = bars
        .iter()
        .map(|bar| display_width(&bar.label))
        .max()
        .unwrap_or(0);
    let plain = current_preferences().plain_mode;

    bars.iter()
        .map(|bar| {
            let pad = label_width.saturating_sub(display_width(&bar.label));
            let cells = scaled_len(bar.value, max, width);
            let glyph = if plain { "#" } else { "█" };
            let body = glyph.repeat(cells);
            let body = if plain {
                body
            } else {
                match bar.style {
                    BarStyle::Income => body.green().to_string(),
                    BarStyle::Expense => body.red().to_string(),
                    BarStyle::Share => body.cyan().to_string(),
                }
            };
            format!(
                "{}{} | {} {}",
                bar.label,
                " ".repeat(pad),
                body,
                bar.caption
            )
            .trim_end()
            .to_string()
        })
        .collect()
}
