use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::output::info as output_info;
use crate::config::CONFIG_KEYS;
use crate::domain::{Kind, LookbackPeriod};

pub const SCRIPT_ENV: &str = "KAKEIBO_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context, io::stdin().lock()),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    output_info(format!(
        "Ledger file: {} (type `help` for commands)",
        context.data_path().display()
    ));

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if run_line(context, trimmed) == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Runs one command per input line. Blank lines and `#` comments are skipped;
/// a failing command is reported and the script continues.
fn run_script<R: BufRead>(context: &mut ShellContext, input: R) -> Result<(), CliError> {
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if run_line(context, trimmed) == LoopControl::Exit || !context.running {
            break;
        }
    }
    Ok(())
}

fn run_line(context: &mut ShellContext, line: &str) -> LoopControl {
    match context.process_line(line) {
        Ok(control) => control,
        Err(err) => {
            context.report_error(err);
            LoopControl::Continue
        }
    }
}

/// Completes command names, then the fixed argument values each command
/// accepts (kinds, categories, periods, config keys).
struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_string).collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    fn candidates(&self, previous: &[&str]) -> Vec<String> {
        let kinds = || vec!["expense".to_string(), "income".to_string()];
        let Some((command, rest)) = previous.split_first() else {
            return self.commands.clone();
        };
        if rest.last() == Some(&"--breakdown") || rest.last() == Some(&"--kind") {
            return kinds();
        }
        match (command.to_lowercase().as_str(), rest) {
            ("add", []) | ("categories", []) => kinds(),
            ("add", [kind]) => match kind.parse::<Kind>() {
                Ok(kind) => kind.categories().iter().map(|c| c.to_string()).collect(),
                Err(_) => Vec::new(),
            },
            ("analysis", []) => LookbackPeriod::ALL
                .iter()
                .map(|period| period.code().to_string())
                .collect(),
            ("config", []) => vec!["show".to_string(), "set".to_string()],
            ("config", ["set"]) => CONFIG_KEYS.iter().map(|key| key.to_string()).collect(),
            ("help", []) => self.commands.clone(),
            _ => Vec::new(),
        }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let previous: Vec<&str> = prefix[..start].split_whitespace().collect();
        let needle = prefix[start..].to_lowercase();

        let matches = self
            .candidates(&previous)
            .into_iter()
            .filter(|candidate| candidate.to_lowercase().starts_with(&needle))
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    shell_words::split(input).map_err(|err| ParseError {
        message: format!("could not parse `{}`: {}", input, err),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
