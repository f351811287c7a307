use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::{section as output_section, set_preferences, OutputPreferences};
use crate::cli::registry::CommandEntry;
use crate::cli::ui::Formatter;
use crate::cli::CliMode;
use crate::config::CONFIG_KEYS;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        "config [show|set <data-file|currency|period|breakdown|plain> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    CONFIG_KEYS.join("|")
                )));
            }
            let key = args[1].to_lowercase();
            let value = args[2..].join(" ");
            set_config_value(context, &key, value.trim())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{}` (expected show or set)",
            other
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    let formatter = Formatter::new(config.currency_suffix.clone());
    output_section("Configuration");
    let data_file = match &config.data_file {
        Some(path) => path.display().to_string(),
        None => "default".to_string(),
    };
    formatter.print_two_column(&[
        ("config file", context.config_manager.path().display().to_string()),
        ("data-file", data_file),
        ("ledger in use", context.data_path().display().to_string()),
        ("currency", format!("`{}`", config.currency_suffix)),
        ("period", config.default_period.code().to_string()),
        ("breakdown", config.default_breakdown.as_str().to_lowercase()),
        ("plain", config.plain_output.to_string()),
    ]);
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let previous = context.config.clone();
    context.config.set(key, value)?;
    if let Err(err) = context.persist_config() {
        context.config = previous;
        return Err(err);
    }

    if context.config.data_file != previous.data_file {
        context.reopen_store();
        io::print_info(format!(
            "Ledger file is now {}.",
            context.data_path().display()
        ));
    }
    if context.config.plain_output != previous.plain_output {
        set_preferences(OutputPreferences {
            plain_mode: context.config.plain_output || context.mode == CliMode::Script,
        });
    }
    io::print_success(format!("Updated `{}`.", key));
    Ok(())
}
