use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::cli::output::current_preferences;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            max_width: None,
            alignment: Alignment::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            alignment: Alignment::Right,
            ..Self::left(header)
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Represents a table with column metadata and rows of data to render.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            padding: 1,
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Computes the display width of each column from headers, rows, and
    /// column constraints.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = display_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(display_width(cell));
                    }
                }
                if let Some(max_width) = column.max_width {
                    width = width.min(max_width);
                }
                width
            })
            .collect()
    }

    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, widths[idx], column.alignment, self.padding)
            })
            .collect();
        cells.join(" ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let mut lines = vec![
            self.render_row(&header, &widths),
            horizontal_rule(&widths, self.padding),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

/// Terminal columns occupied by `text`: wide CJK and emoji take two,
/// combining marks take none.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn truncate_text(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let target = width - 1;
    let mut used = 0;
    let mut result = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > target {
            break;
        }
        result.push(ch);
        used += w;
    }
    result.push('…');
    result
}

/// Renders a single cell with padding and alignment applied.
pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(display_width(&fitted));

    let (left_spaces, right_spaces) = match alignment {
        Alignment::Left => (0, remaining),
        Alignment::Right => (remaining, 0),
    };

    let mut cell = String::new();
    cell.push_str(&" ".repeat(padding + left_spaces));
    cell.push_str(&fitted);
    cell.push_str(&" ".repeat(right_spaces + padding));
    cell
}

/// Builds a horizontal rule that spans the width of the table.
pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let total_width: usize =
        widths.iter().map(|w| w + (padding * 2)).sum::<usize>() + widths.len().saturating_sub(1);
    let ch = if current_preferences().plain_mode {
        '-'
    } else {
        '─'
    };
    ch.to_string().repeat(total_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(display_width("食費"), 4);
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("2023-03"), 7);
        assert_eq!(display_width("サラダ🥗"), 8);
        assert_eq!(display_width("cafe\u{301}"), 4);
    }

    #[test]
    fn width_calculation_respects_constraints() {
        let mut table = Table::new(vec![
            TableColumn::left("Category").max_width(6),
            TableColumn::right("Amount"),
        ]);
        table.add_row(vec!["光熱費".into(), "12,000円".into()]);
        table.add_row(vec!["x".into(), "1円".into()]);
        assert_eq!(table.compute_widths(), vec![6, 8]);
    }

    #[test]
    fn render_cell_respects_alignment() {
        assert_eq!(render_cell("AB", 4, Alignment::Left, 1), " AB   ");
        assert_eq!(render_cell("AB", 4, Alignment::Right, 1), "   AB ");
    }

    #[test]
    fn truncation_adds_ellipsis_without_splitting_wide_chars() {
        assert_eq!(truncate_text("電気・ガス・水道", 5), "電気…");
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("🥗🥗🥗", 4), "🥗…");
        assert_eq!(truncate_text("re\u{301}sume\u{301}", 10), "re\u{301}sume\u{301}");
    }
}
