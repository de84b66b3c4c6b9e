// crates/hon-i18n-cli/src/main.rs
// ============================================================================
// Module: hon-i18n CLI Entry Point
// Description: Command dispatcher for translation catalog sync workflows.
// Purpose: Provide a localized CLI for fetch, sync, and config validation.
// Dependencies: clap, hon-i18n-core, thiserror, tokio.
// ============================================================================

//! ## Overview
//! The hon-i18n CLI keeps a Home Assistant integration's translation files in
//! step with the hOn vendor catalog. Running without a subcommand performs a
//! full sync: missing catalogs are fetched into the cache and every
//! integration file is updated with resolved sensor state labels. All
//! user-facing strings are routed through the i18n catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use hon_i18n_cli::api::HonApiClient;
use hon_i18n_cli::config::SyncConfig;
use hon_i18n_cli::i18n::Locale;
use hon_i18n_cli::i18n::set_locale;
use hon_i18n_cli::sync;
use hon_i18n_cli::t;
use hon_i18n_core::Language;
use hon_i18n_core::SUPPORTED_LANGUAGES;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "HON_I18N_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "hon-i18n", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `HON_I18N_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch missing catalogs and update every integration translation file.
    Sync(SyncCommand),
    /// Download vendor catalogs into the cache without touching integration files.
    Fetch(FetchCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for the `sync` command.
#[derive(Args, Debug)]
struct SyncCommand {
    /// Optional config file path (defaults to hon-i18n.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for the `fetch` command.
#[derive(Args, Debug)]
struct FetchCommand {
    /// Optional config file path (defaults to hon-i18n.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Restrict the fetch to specific language codes (repeatable).
    #[arg(long = "language", value_name = "CODE")]
    languages: Vec<String>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a hon-i18n configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to hon-i18n.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// German.
    De,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::De => Self::De,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        let command = SyncCommand {
            config: None,
        };
        return command_sync(&command).await;
    };

    match command {
        Commands::Sync(command) => command_sync(&command).await,
        Commands::Fetch(command) => command_fetch(&command).await,
        Commands::Config {
            command,
        } => command_config(command),
    }
}

// ============================================================================
// SECTION: Sync Command
// ============================================================================

/// Executes the `sync` command.
async fn command_sync(command: &SyncCommand) -> CliResult<ExitCode> {
    let config = SyncConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let client = HonApiClient::new(&config.api.endpoint, config.api.timeout())
        .map_err(|err| CliError::new(t!("api.client_failed", error = err)))?;
    let report = sync::run(&config, &client)
        .await
        .map_err(|err| CliError::new(t!("sync.failed", error = err)))?;
    for update in &report.languages {
        write_stdout_line(&t!(
            "sync.language.updated",
            language = update.language,
            written = update.stats.written,
            missing = update.stats.missing,
            path = update.path.display()
        ))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    write_stdout_line(&t!(
        "sync.summary",
        languages = report.languages.len(),
        written = report.total_written(),
        missing = report.total_missing()
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Fetch Command
// ============================================================================

/// Executes the `fetch` command.
async fn command_fetch(command: &FetchCommand) -> CliResult<ExitCode> {
    let config = SyncConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let languages = parse_language_filters(&command.languages)?;
    let client = HonApiClient::new(&config.api.endpoint, config.api.timeout())
        .map_err(|err| CliError::new(t!("api.client_failed", error = err)))?;
    let outcome = sync::ensure_catalogs(&client, &config.cache_dir, &languages)
        .await
        .map_err(|err| CliError::new(t!("fetch.failed", error = err)))?;
    for status in &outcome.catalogs {
        let line = if status.fetched {
            t!("fetch.fetched", language = status.language, path = status.path.display())
        } else {
            t!("fetch.cached", language = status.language, path = status.path.display())
        };
        write_stdout_line(&line).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    write_stdout_line(&t!("fetch.summary", fetched = outcome.fetched(), cached = outcome.cached()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Resolves `--language` filters to concrete languages, defaulting to all.
fn parse_language_filters(filters: &[String]) -> CliResult<Vec<Language>> {
    if filters.is_empty() {
        return Ok(SUPPORTED_LANGUAGES.to_vec());
    }
    let mut languages = Vec::with_capacity(filters.len());
    for filter in filters {
        let language = Language::parse(filter).ok_or_else(|| {
            CliError::new(t!(
                "fetch.language.invalid",
                value = filter,
                supported = supported_language_codes()
            ))
        })?;
        if !languages.contains(&language) {
            languages.push(language);
        }
    }
    Ok(languages)
}

/// Joins the supported language codes for error messages.
fn supported_language_codes() -> String {
    let codes: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|language| language.as_str()).collect();
    codes.join(", ")
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = SyncConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Locale Helpers
// ============================================================================

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
