//! aqreport - air-quality station reports
//!
//! Paginated report tables in the terminal and Excel export of the
//! filtered records.
//!
//! # Usage
//!
//! ```bash
//! # One page of the monthly report for a station
//! aqreport report --station A001 --page 2
//!
//! # Interactive pager over daily readings
//! aqreport browse --station A002 --view daily
//!
//! # Write the PM2.5 report to a workbook
//! aqreport export --station A003 --indicator pm25 --output ./reports
//! ```

use aqreport::cli::CliInterface;
use aqreport::error::Result;

/// Application entry point
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments
/// 2. Load configuration
/// 3. Initialize logging
/// 4. Run the subcommand
async fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    cli.run().await
}

/// Initialize logging system based on verbosity level
///
/// CLI verbosity flags are already folded into the configured level.
///
/// # Arguments
/// * `cli` - CLI interface with the effective configuration
fn initialize_logging(cli: &CliInterface) {
    let level = cli.config().logging.level.to_tracing_level();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(cli.use_colors());

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
