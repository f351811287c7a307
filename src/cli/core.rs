//! Core CLI loop, dispatch, and shell context helpers.

use std::{io, path::PathBuf};

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;

use crate::{
    config::{Config, ConfigManager},
    core::clock::{Clock, SystemClock},
    domain::Ledger,
    errors::{LedgerError, StorageError},
    storage::{JsonFileStore, LedgerStore},
};

use super::commands;
use super::io as cli_io;
use super::output::{set_preferences, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// State shared by every command of one shell session.
///
/// The ledger is deliberately not part of it: each command loads the current
/// ledger from the store, and mutating commands save before returning. The
/// only ledger kept between commands is one whose save failed, held for
/// `retry`.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
    store: Box<dyn LedgerStore>,
    data_path: PathBuf,
    clock: Box<dyn Clock>,
    pending_save: Option<Ledger>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let data_path = config_manager.data_file(&config);
        let store = Box::new(JsonFileStore::new(data_path.clone()));
        Ok(Self::with_parts(
            mode,
            config_manager,
            config,
            store,
            data_path,
            Box::new(SystemClock),
        ))
    }

    pub fn with_parts(
        mode: CliMode,
        config_manager: ConfigManager,
        config: Config,
        store: Box<dyn LedgerStore>,
        data_path: PathBuf,
        clock: Box<dyn Clock>,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        set_preferences(OutputPreferences {
            plain_mode: config.plain_output || mode == CliMode::Script,
        });
        tracing::debug!(path = %data_path.display(), ?mode, "shell context ready");

        Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            running: true,
            store,
            data_path,
            clock,
            pending_save: None,
        }
    }

    pub fn data_path(&self) -> &PathBuf {
        &self.data_path
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn prompt(&self) -> String {
        match self.pending_save {
            Some(_) => "kakeibo (unsaved) > ".to_string(),
            None => "kakeibo > ".to_string(),
        }
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    /// First step of every command cycle: a fresh snapshot from storage.
    pub fn load_ledger(&self) -> Result<Ledger, CommandError> {
        Ok(self.store.load()?)
    }

    /// Persists `ledger`. When the save fails the ledger is kept for `retry`
    /// and the error is returned.
    pub fn commit(&mut self, ledger: Ledger) -> CommandResult {
        match self.store.save(&ledger) {
            Ok(()) => {
                self.pending_save = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "save failed; ledger kept for retry");
                self.pending_save = Some(ledger);
                Err(CommandError::SaveFailed(err))
            }
        }
    }

    pub(crate) fn take_pending_save(&mut self) -> Option<Ledger> {
        self.pending_save.take()
    }

    pub fn has_pending_save(&self) -> bool {
        self.pending_save.is_some()
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Points the store at the ledger file the current config selects.
    pub(crate) fn reopen_store(&mut self) {
        let path = self.config_manager.data_file(&self.config);
        self.store = Box::new(JsonFileStore::new(path.clone()));
        self.data_path = path;
        self.pending_save = None;
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let raw = &tokens[0];
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        let prompt = if self.has_pending_save() {
            "Exit shell and discard the unsaved ledger?"
        } else {
            "Exit shell?"
        };
        Ok(cli_io::confirm_action(&self.theme, prompt, true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::SaveFailed(inner) => {
                cli_io::print_error(format!("Could not save the ledger: {}", inner));
                cli_io::print_hint("Use `retry` to attempt the save again.");
            }
            CommandError::Core(LedgerError::Validation(message)) => {
                cli_io::print_warning(format!("Not recorded: {}", message));
            }
            other => cli_io::print_error(other.to_string()),
        }
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("save failed: {0}")]
    SaveFailed(#[source] StorageError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// User-facing CLI error wrapper.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn test_context(
    base: &std::path::Path,
    today: NaiveDate,
) -> ShellContext {
    use crate::core::clock::FixedClock;

    let manager = ConfigManager::with_base_dir(base.to_path_buf()).expect("config manager");
    let config = Config::default();
    let data_path = base.join("household_data.json");
    ShellContext::with_parts(
        CliMode::Script,
        manager,
        config,
        Box::new(JsonFileStore::new(data_path.clone())),
        data_path,
        Box::new(FixedClock(today)),
    )
}

#[cfg(test)]
pub(crate) fn run_lines(context: &mut ShellContext, lines: &[&str]) -> Vec<Result<(), String>> {
    let mut outcomes = Vec::new();
    for line in lines {
        match context.process_line(line) {
            Ok(LoopControl::Continue) => outcomes.push(Ok(())),
            Ok(LoopControl::Exit) => {
                outcomes.push(Ok(()));
                break;
            }
            Err(err) => outcomes.push(Err(err.to_string())),
        }
    }
    outcomes
}
