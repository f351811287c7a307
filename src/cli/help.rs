use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::table::display_width;

pub fn print_overview(registry: &CommandRegistry) {
    output_section("Commands");
    let width = registry
        .list()
        .map(|entry| display_width(entry.name))
        .max()
        .unwrap_or(0);
    for entry in registry.list() {
        io::print_info(format!(
            "  {:<width$}  {}",
            entry.name,
            entry.description,
            width = width
        ));
    }
    io::print_hint("`help <command>` shows usage. Dates are YYYY-MM-DD.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(entry.name);
    io::print_info(format!("  {}", entry.description));
    io::print_info(format!("  usage: {}", entry.usage));
    if !entry.aliases.is_empty() {
        io::print_info(format!("  aliases: {}", entry.aliases.join(", ")));
    }
}
