//! Shell context, dispatch and error types shared by all commands.

use std::{io, path::PathBuf};

use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;
use tracing::warn;

use crate::{
    config::{Config, ConfigError, ConfigManager},
    core::utils,
    domain::DraftError,
    errors::LedgerError,
    ledger::{LedgerStore, ViewState},
    storage::JsonStorage,
};

use super::commands;
use super::io as cli_io;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

/// Environment variable switching the shell into line-by-line script mode.
pub const SCRIPT_ENV: &str = "LEDGER_VIEW_CLI_SCRIPT";

const MAX_SUGGESTION_DISTANCE: usize = 3;

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

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Terminal error: {0}")]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Command failed: {0}")]
    Command(String),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

/// Everything a command handler can reach: the ledger store, view state and settings.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub store: LedgerStore,
    pub view: ViewState,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    /// Loads configuration and opens the ledger under the application home directory.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let home = utils::app_home_dir();
        let config_manager = ConfigManager::with_home_dir(&home);
        let config = config_manager.load()?;
        let store = open_store(&config, &home)?;
        Ok(Self::with_parts(mode, config, config_manager, store))
    }

    pub fn with_parts(
        mode: CliMode,
        config: Config,
        config_manager: ConfigManager,
        store: LedgerStore,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        let mut context = Self {
            mode,
            registry,
            store,
            view: ViewState::new(),
            config,
            config_manager,
            theme: ColorfulTheme::default(),
            running: true,
        };
        context.flush_persistence_warning();
        context
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub fn prompt(&self) -> String {
        format!("ledger [{}]> ", self.view.filter())
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    /// Surfaces a pending storage problem reported by the store.
    pub fn flush_persistence_warning(&mut self) {
        if let Some(warning) = self.store.take_persistence_warning() {
            cli_io::print_warning(format!("Changes may not be saved: {}", warning));
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        let result = handler(self, args);
        self.flush_persistence_warning();
        match result {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();

        let control = self.dispatch(&command, raw, &args)?;
        if control == LoopControl::Exit {
            self.running = false;
        }
        Ok(control)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = closest(input, self.registry.names()) {
            cli_io::print_info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_info("Use `help <command>` for usage details.");
            }
            other => cli_io::print_error(other),
        }
    }
}

/// Closest candidate by edit distance, when it is near enough to be a likely typo.
pub(crate) fn closest<'a, I>(input: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(|candidate| (levenshtein(candidate, input), candidate))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

fn open_store(config: &Config, home: &std::path::Path) -> Result<LedgerStore, CliError> {
    let defaults = config.default_category_set();
    let data_dir: PathBuf = config.resolve_data_dir(home);
    match JsonStorage::new(data_dir.clone()) {
        Ok(storage) => Ok(LedgerStore::open(Box::new(storage), &defaults)?),
        Err(err) => {
            warn!(path = %data_dir.display(), error = %err, "data directory unavailable");
            output::warning(format!(
                "Data directory {} is unavailable ({}); changes will not be saved this session.",
                data_dir.display(),
                err
            ));
            Ok(LedgerStore::in_memory(&defaults))
        }
    }
}

#[cfg(test)]
pub(crate) fn test_context(mode: CliMode) -> ShellContext {
    let config = Config::default();
    let store = LedgerStore::in_memory(&config.default_category_set());
    let manager = ConfigManager::with_home_dir(&std::env::temp_dir().join("ledger_view_unit"));
    ShellContext::with_parts(mode, config, manager, store)
}
