//! Command-line interface for aqreport
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Applying CLI overrides (color, verbosity) to the configuration
//! - Dispatching subcommands

mod commands;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::config::{Config, LogLevel};
use crate::error::Result;
use crate::provider::AVAILABLE_YEARS;
use crate::report::{Indicator, ViewMode};

/// Station used when none is given and none was remembered
pub const DEFAULT_STATION: &str = "A001";

/// Air-quality station reports in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "aqreport",
    version,
    about = "Air-quality station reports",
    long_about = "Browse monthly or daily air-quality readings per station as paginated
tables, and export the filtered records to an Excel workbook."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Very verbose mode (debug logging)
    #[arg(long = "vv", global = true)]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands for aqreport
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List monitoring stations
    Stations,

    /// Print one page of a report
    Report {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Export a report to an .xlsx workbook
    Export {
        #[command(flatten)]
        query: QueryArgs,

        /// Directory to write the workbook into
        #[arg(short = 'o', long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Page through a report interactively
    Browse {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        page: PageArgs,
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
}

/// Report selection shared by the data subcommands
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Station id (defaults to the last station used)
    #[arg(short = 's', long, value_name = "ID")]
    pub station: Option<String>,

    /// Monthly or daily rows
    #[arg(long, value_enum, default_value_t = ViewMode::Monthly)]
    pub view: ViewMode,

    /// Indicator columns to show
    #[arg(short = 'i', long, value_enum, default_value_t = Indicator::All)]
    pub indicator: Indicator,

    /// Report year, used when --from/--to are omitted
    #[arg(short = 'y', long, default_value_t = AVAILABLE_YEARS[0])]
    pub year: i32,

    /// First date of the range (inclusive)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from: Option<NaiveDate>,

    /// Last date of the range (inclusive)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to: Option<NaiveDate>,
}

impl QueryArgs {
    /// Effective date range; a missing bound takes the edge of `year`
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        let from = self
            .from
            .or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1))
            .unwrap_or(NaiveDate::MIN);
        let to = self
            .to
            .or_else(|| NaiveDate::from_ymd_opt(self.year, 12, 31))
            .unwrap_or(NaiveDate::MAX);
        (from, to)
    }
}

/// Table layout options
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Page to show first
    #[arg(short = 'p', long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the saved preference, then the config)
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Hide the STT index column
    #[arg(long)]
    pub no_index: bool,
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

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

    /// Whether colored output is enabled after CLI overrides
    pub fn use_colors(&self) -> bool {
        self.config.display.color_output
    }

    /// Apply CLI arguments to configuration
    ///
    /// # Arguments
    /// * `config` - Configuration to modify
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        if args.no_color {
            config.display.color_output = false;
        }

        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else {
            config.logging.level
        };
    }

    /// Get configuration file path (from args or default)
    fn config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_path)
    }

    /// Run the selected subcommand
    pub async fn run(&self) -> Result<()> {
        match &self.args.command {
            Commands::Stations => self.list_stations().await,
            Commands::Report { query, page } => self.print_report(query, page).await,
            Commands::Export { query, output } => self.export_report(query, output.as_deref()).await,
            Commands::Browse { query, page } => self.browse_report(query, page).await,
            Commands::Config { show, validate } => self.handle_config_command(*show, *validate),
        }
    }

    /// Handle config subcommand
    ///
    /// # Arguments
    /// * `show` - Whether to show configuration
    /// * `validate` - Whether to validate configuration
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file();
        }

        if show || !validate {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file
    fn validate_config_file(&self) {
        let path = self.config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("Configuration file does not exist, defaults apply");
            return;
        }

        match Config::from_file(&path) {
            Ok(config) => match config.validate() {
                Ok(()) => println!("Configuration is valid"),
                Err(e) => println!("Configuration validation failed: {}", e),
            },
            Err(e) => println!("Failed to load configuration: {}", e),
        }
    }

    /// Show effective configuration
    fn show_config(&self) -> Result<()> {
        println!("Configuration file: {}", self.config_path().display());
        println!();
        println!("=== Effective Configuration ===");
        println!();
        println!("{}", toml::to_string_pretty(&self.config)?);
        Ok(())
    }
}
