//! CLI definition, tracing setup, and the build command.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use sans_index_core::pipeline::{BuildResult, ProgressReporter, build_workbook};
use sans_index_shared::BuildConfig;
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Creates an Excel workbook containing SANS course contents and index.
///
/// The workbook is written to the current directory. Its file name is the
/// same as COURSE_CONTENT_PATH, except its extension is .xlsx.
#[derive(Parser)]
#[command(name = "sans-index", version)]
pub(crate) struct Cli {
    /// Location of YAML document containing SANS course content.
    pub course_content_path: PathBuf,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "sans_index=info",
        1 => "sans_index=debug",
        _ => "sans_index=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Build the workbook for the outline named on the command line.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = BuildConfig::for_input(cli.course_content_path)?;

    info!(input = %config.input.display(), "building workbook");

    let reporter = CliProgress::new();
    let result = build_workbook(&config, &reporter)?;

    println!();
    println!("  Workbook created!");
    println!("  Path:     {}", result.output_path.display());
    println!("  Books:    {}", result.book_count);
    println!("  Chapters: {}", result.chapter_count);
    println!("  Entries:  {}", result.entry_count);
    println!("  Time:     {:.2}s", result.elapsed.as_secs_f64());
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .map(|s| s.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]))
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _result: &BuildResult) {
        self.spinner.finish_and_clear();
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        // Failed builds never reach `done`.
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_path() {
        let cli = Cli::try_parse_from(["sans-index", "sec504.yaml"]).unwrap();
        assert_eq!(cli.course_content_path, PathBuf::from("sec504.yaml"));
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.log_format, LogFormat::Text));
    }

    #[test]
    fn global_flags() {
        let cli =
            Cli::try_parse_from(["sans-index", "-vv", "--log-format", "json", "for508.yaml"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.log_format, LogFormat::Json));
    }

    #[test]
    fn path_is_required() {
        assert!(Cli::try_parse_from(["sans-index"]).is_err());
    }
}
