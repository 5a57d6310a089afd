// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use org2mdx::app_config::{self, Config};
use org2mdx::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for org2mdx
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// org2mdx - convert org-mode blog posts to MDX
///
/// Without arguments, converts every `org/*.org` document into
/// `src/content/blog/` and copies referenced images under `src/images/posts/`.
#[derive(Parser, Debug)]
#[command(name = "org2mdx")]
#[command(version)]
#[command(about = "Convert org-mode documents into MDX blog posts")]
#[command(long_about = "org2mdx converts dated org-mode documents (YYYY-MM-DD-slug.org) into MDX.

EXAMPLES:
    org2mdx                                  # Convert org/ into src/content/blog/
    org2mdx --source-dir notes               # Read documents from notes/
    org2mdx --log-level debug                # Show image registrations
    org2mdx completions bash > org2mdx.bash  # Generate bash completions

CONFIGURATION:
    Settings are read from org2mdx.json when it exists. Command line options
    override the file; missing settings use the built-in defaults.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the org documents
    #[arg(long)]
    source_dir: Option<String>,

    /// Directory the MDX documents are written to
    #[arg(long)]
    output_dir: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "org2mdx.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() {
    // The logger accepts everything; the max level set below does the filtering
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialise logger: {}", e);
    }
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "org2mdx", &mut std::io::stdout());
        return;
    }

    if let Err(e) = run_convert(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run_convert(options: CommandLineOptions) -> Result<()> {
    let mut config = Config::load_or_default(&options.config_path)
        .with_context(|| format!("Failed to load config: {}", options.config_path))?;

    if let Some(source_dir) = options.source_dir {
        config.source_dir = source_dir;
    }
    if let Some(output_dir) = options.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    log::set_max_level(config.log_level.to_level_filter());
    debug!("Using configuration: {:?}", config);

    let controller = Controller::with_config(config)?;
    let report = controller.run()?;

    debug!(
        "{} document(s) converted, {} image(s) registered",
        report.documents_converted(),
        report.images_registered
    );

    Ok(())
}
