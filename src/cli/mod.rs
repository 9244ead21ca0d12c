//! Command-line interface for typeahead
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and CLI overrides
//! - Subcommands (version, completion, config, query)

pub mod completion;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::config::{Config, LogLevel, MAX_DELAY_MS};
use crate::error::{Result, TypeaheadError};
use crate::loader;
use crate::widget::{Autocomplete, LoadStatus};

/// Country autocomplete in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "typeahead",
    version,
    about = "Country autocomplete in the terminal",
    long_about = "Type part of a country name to see matching countries, press Tab to pick one
from the suggestion menu. Candidates are loaded once, asynchronously, on start."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// JSON file with candidates instead of the built-in country list
    ///
    /// Format: [{"name": "Albania", "code": "AL"}, ...]
    #[arg(long, value_name = "FILE")]
    pub candidates: Option<PathBuf>,

    /// Simulated fetch delay in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(..=MAX_DELAY_MS))]
    pub delay_ms: Option<u64>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (debug logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for typeahead
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },

    /// Load the candidates, type TEXT and print the suggestions
    Query {
        /// Text typed into the field
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        let args = CliArgs::parse();
        let config = Self::load_config(&args)?;

        Ok(Self { args, config })
    }

    /// Build an interface from already parsed arguments and configuration
    pub fn from_parts(args: CliArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let config_path = args.config_file.as_deref();
        let mut config = Config::load_from_file(config_path)?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_loader_args(config, args);
        Self::apply_display_args(config, args);
        Self::apply_logging_args(config, args);
    }

    /// Apply loader-related CLI arguments to configuration
    fn apply_loader_args(config: &mut Config, args: &CliArgs) {
        if let Some(path) = &args.candidates {
            config.loader.candidates_file = Some(path.clone());
        }

        if let Some(delay_ms) = args.delay_ms {
            config.loader.delay_ms = delay_ms;
        }
    }

    /// Apply display-related CLI arguments to configuration
    fn apply_display_args(config: &mut Config, args: &CliArgs) {
        if args.no_color {
            config.display.color_output = false;
        }
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Handle subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub async fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell)?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            Some(Commands::Query { text }) => {
                let output = self.run_query(text).await?;
                println!("{}", output);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Show version information
    fn show_version(&self) {
        println!("typeahead version {}", env!("CARGO_PKG_VERSION"));
        println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    }

    /// Mount a widget, wait for its candidates and type `text` into it
    ///
    /// # Returns
    /// * `Result<String>` - Rendered suggestion list, or "No matches"
    pub async fn run_query(&self, text: &str) -> Result<String> {
        let mut widget = Autocomplete::mount(loader::from_config(&self.config.loader));

        let spinner = (!self.args.quiet).then(|| {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
            {
                bar.set_style(style);
            }
            bar.set_message("Loading candidates...");
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });

        let status = widget.wait_for_load().await.clone();
        if let Some(bar) = spinner {
            bar.finish_and_clear();
        }

        if let LoadStatus::Failed(reason) = status {
            return Err(TypeaheadError::Generic(format!(
                "Candidate load failed: {}",
                reason
            )));
        }

        widget.on_text_change(text);
        debug!(text, matches = widget.state().matches.len(), "Query applied");

        let view = widget.view();
        if view.shows_suggestions() {
            Ok(view.to_styled_string(self.config.display.color_output))
        } else {
            Ok("No matches".to_string())
        }
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file()?;
        }

        if show || !validate {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("❌ Configuration file does not exist");
            return Ok(());
        }

        match Config::load_from_file(Some(&path)) {
            Ok(config) => match config.validate() {
                Ok(_) => println!("✅ Configuration is valid"),
                Err(e) => println!("❌ Configuration validation failed: {}", e),
            },
            Err(e) => println!("❌ Failed to load configuration: {}", e),
        }

        Ok(())
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Configuration file: {}", path.display());
        println!();
        println!("=== Effective Configuration ===");
        println!();

        match self.config.to_toml_with_comments() {
            Ok(toml_str) => println!("{}", toml_str),
            Err(e) => {
                eprintln!("Error formatting configuration: {}", e);
                println!("{:#?}", self.config);
            }
        }

        Ok(())
    }

    /// Get configuration file path (from args or default)
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_config_path)
    }

    /// Print banner with version and usage hints
    pub fn print_banner(&self) {
        if !self.args.quiet {
            println!("Using typeahead: {}", env!("CARGO_PKG_VERSION"));
            println!("Type part of a country name. Tab opens suggestions, .help lists commands.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn interface(argv: &[&str]) -> CliInterface {
        let args = CliArgs::try_parse_from(argv.iter().copied()).unwrap();
        let mut config = Config::default();
        CliInterface::apply_args_to_config(&mut config, &args);
        CliInterface::from_parts(args, config)
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(vec!["typeahead"]).unwrap();
        assert!(args.config_file.is_none());
        assert!(args.candidates.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_with_flags() {
        let args =
            CliArgs::try_parse_from(vec!["typeahead", "--no-color", "--quiet", "--vv"]).unwrap();
        assert!(args.no_color);
        assert!(args.quiet);
        assert!(args.very_verbose);
    }

    #[test]
    fn test_delay_limit() {
        let args = CliArgs::try_parse_from(vec!["typeahead", "--delay-ms", "250"]).unwrap();
        assert_eq!(args.delay_ms, Some(250));
        assert!(CliArgs::try_parse_from(vec!["typeahead", "--delay-ms", "60001"]).is_err());
    }

    #[test]
    fn test_subcommands() {
        let args = CliArgs::try_parse_from(vec!["typeahead", "query", "Al"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Query { ref text }) if text == "Al"));

        let args = CliArgs::try_parse_from(vec!["typeahead", "completion", "zsh"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Completion { ref shell }) if shell == "zsh"));

        let args = CliArgs::try_parse_from(vec!["typeahead", "config", "--show"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Commands::Config {
                show: true,
                validate: false
            })
        ));
    }

    #[test]
    fn test_args_override_config() {
        let cli = interface(&[
            "typeahead",
            "--candidates",
            "/tmp/list.json",
            "--delay-ms",
            "5",
            "--no-color",
            "-v",
        ]);
        assert_eq!(
            cli.config().loader.candidates_file,
            Some(PathBuf::from("/tmp/list.json"))
        );
        assert_eq!(cli.config().loader.delay_ms, 5);
        assert!(!cli.config().display.color_output);
        assert_eq!(cli.config().logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_quiet_lowers_log_level() {
        let cli = interface(&["typeahead", "-q"]);
        assert_eq!(cli.config().logging.level, LogLevel::Error);

        let cli = interface(&["typeahead", "-q", "--vv"]);
        assert_eq!(cli.config().logging.level, LogLevel::Trace);
    }

    #[tokio::test]
    async fn test_run_query_builtin_list() {
        let cli = interface(&["typeahead", "-q", "--no-color", "--delay-ms", "0", "query", "alb"]);
        let output = cli.run_query("alb").await.unwrap();
        assert_eq!(output, "  [Alb]ania (AL)");

        assert_eq!(cli.run_query("zzz").await.unwrap(), "No matches");
        assert_eq!(cli.run_query("").await.unwrap(), "No matches");
    }

    #[tokio::test]
    async fn test_run_query_missing_file_fails() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
        let path_arg = path.to_string_lossy().to_string();
        let cli = interface(&[
            "typeahead",
            "-q",
            "--delay-ms",
            "0",
            "--candidates",
            &path_arg,
        ]);
        let err = cli.run_query("a").await.unwrap_err();
        assert!(err.to_string().contains("Candidate load failed"));
    }

    #[tokio::test]
    async fn test_run_query_from_file() {
        let path = std::env::temp_dir().join(format!("candidates-{}.json", uuid::Uuid::new_v4()));
        fs::write(
            &path,
            r#"[{"name": "Mars", "code": "MA"}, {"name": "Mercury", "code": "ME"}]"#,
        )
        .unwrap();
        let path_arg = path.to_string_lossy().to_string();
        let cli = interface(&[
            "typeahead",
            "-q",
            "--no-color",
            "--delay-ms",
            "0",
            "--candidates",
            &path_arg,
        ]);

        let output = cli.run_query("m").await.unwrap();
        assert_eq!(output, "  [M]ars (MA)\n  [M]ercury (ME)");
        fs::remove_file(&path).unwrap();
    }
}
