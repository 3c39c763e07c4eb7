// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use subfix::app_config::{Config, LogLevel};
use subfix::app_controller::Controller;
use subfix::reporter;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for subfix
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// subfix - copy downloaded subtitles next to their videos
#[derive(Parser, Debug)]
#[command(name = "subfix")]
#[command(version)]
#[command(about = "Match subtitle bundles to video files and copy them with normalized names")]
#[command(long_about = "subfix looks for a `Subs` folder and the video files in ROOT_DIR, picks the
full, SDH and forced subtitles for every video and copies them next to it as
<video>.en.srt, <video>.en.sdh.srt and <video>.en.forced.srt.

EXAMPLES:
    subfix                             # Process the current directory
    subfix ~/Movies/Some.Movie.2023    # Process a given directory
    subfix -c fr                       # French subtitles, matched as '2_French'
    subfix -e .mkv -e .avi /shows/s01  # Custom video extensions
    subfix -n /shows/s01               # Show what would be copied
    subfix completions bash > subfix.bash

LAYOUT:
    One video:       ROOT_DIR/Subs/*.srt
    Several videos:  ROOT_DIR/Subs/<video name>/*.srt")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the videos and the Subs folder (defaults to the current directory)
    #[arg(value_name = "ROOT_DIR")]
    root_dir: Option<PathBuf>,

    /// Language name matched in subtitle file names (e.g. 'English')
    #[arg(short, long)]
    language: Option<String>,

    /// Language code used in the copied file names (e.g. 'en', 'fr')
    #[arg(short = 'c', long)]
    language_code: Option<String>,

    /// Allowed video extension, repeat for several (default: .mkv and .mp4)
    #[arg(short = 'e', long = "video-ext", value_name = "EXT")]
    video_extensions: Vec<String>,

    /// Only report what would be copied
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: stderr logger, keeps stdout free for the report
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now = chrono::Local::now().format("%H:%M:%S.%3f");
        let label = format!("{:<5}", record.level());
        let label = match record.level() {
            Level::Error => label.red().bold().to_string(),
            Level::Warn => label.yellow().bold().to_string(),
            Level::Info => label.green().to_string(),
            Level::Debug => label.cyan().to_string(),
            Level::Trace => label.magenta().to_string(),
        };

        let _ = writeln!(std::io::stderr(), "{} {} {}", now.bright_black(), label, record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

impl CommandLineOptions {
    /// Build the run configuration from the parsed flags
    fn to_config(&self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(code) = &self.language_code {
            config = config
                .with_language_code(code)
                .with_context(|| format!("Unsupported language code: {}", code))?;
        }

        if let Some(language) = &self.language {
            config.language = language.clone();
        }

        if !self.video_extensions.is_empty() {
            config = config.with_video_extensions(&self.video_extensions);
        }

        config.dry_run = self.dry_run;

        if let Some(level) = &self.log_level {
            config.log_level = level.clone().into();
        }

        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run_cli().await {
        Ok(code) => code,
        Err(e) => {
            reporter::print_abort(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run_cli() -> Result<ExitCode> {
    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "subfix", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let config = cli.to_config()?;
    CustomLogger::init(config.log_level.into())?;
    debug!("Configuration: {:?}", config);

    let root_dir = match &cli.root_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to resolve the current directory")?,
    };

    let controller = Controller::with_config(config).context("Configuration validation failed")?;

    match controller.run(&root_dir).await {
        Ok(report) => {
            reporter::print_report(&report);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            reporter::print_abort(&e.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}
