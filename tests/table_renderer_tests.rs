use kakeibo::cli::output::{set_preferences, OutputPreferences};
use kakeibo::cli::ui::table::{display_width, horizontal_rule, Table, TableColumn};

fn plain() {
    set_preferences(OutputPreferences { plain_mode: true });
}

#[test]
fn header_is_followed_by_rule_of_full_width() {
    plain();
    let mut table = Table::new(vec![TableColumn::left("Month"), TableColumn::right("Income")]);
    table.add_row(vec!["2023-03".into(), "280,000円".into()]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], " Month        Income");
    assert_eq!(lines[1], "-".repeat(9 + 11 + 1));
    assert_eq!(lines[2], " 2023-03   280,000円");
}

#[test]
fn wide_category_names_stay_aligned() {
    plain();
    let mut table = Table::new(vec![TableColumn::left("Category"), TableColumn::right("Total")]);
    table.add_row(vec!["住居費".into(), "160,000円".into()]);
    table.add_row(vec!["衣類".into(), "20,000円".into()]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    let widths: Vec<usize> = lines[2..].iter().map(|line| display_width(line)).collect();
    assert_eq!(widths[0], widths[1]);
}

#[test]
fn long_memos_are_truncated_to_max_width() {
    plain();
    let mut table = Table::new(vec![TableColumn::left("Memo").max_width(6)]);
    table.add_row(vec!["スーパーでの買い物".into()]);

    let rendered = table.render();
    let last = rendered.lines().last().unwrap();
    assert_eq!(last.trim(), "スー…");
    assert!(display_width(last) <= 8);
}

#[test]
fn empty_width_list_has_no_rule() {
    assert_eq!(horizontal_rule(&[], 1), "");
}
