use anyhow::{anyhow, Result};
use std::default::Default;

/// Application configuration module
/// There is no configuration file: every value is built from command line
/// flags once per run and then shared read-only by all per-video tasks.
/// Represents the run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Language name matched inside subtitle file names (e.g. "English")
    pub language: String,

    /// Language code written into destination file names (e.g. "en")
    pub language_code: String,

    /// Allowed video extensions, with leading dot, compared case-sensitively
    pub video_extensions: Vec<String>,

    /// Subtitle extension, with leading dot, compared case-insensitively
    pub subtitle_extension: String,

    /// Name of the subtitle root folder, compared case-insensitively
    pub subs_folder_name: String,

    /// Plan copies without writing anything
    pub dry_run: bool,

    /// Log level
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_language() -> String {
    "English".to_string()
}

fn default_language_code() -> String {
    "en".to_string()
}

fn default_video_extensions() -> Vec<String> {
    vec![".mkv".to_string(), ".mp4".to_string()]
}

/// Ensure an extension carries exactly one leading dot: `mkv` -> `.mkv`
pub fn normalize_extension(extension: &str) -> String {
    format!(".{}", extension.trim().trim_start_matches('.'))
}

impl Config {
    /// Set the language code; the language name is derived from it via ISO 639
    pub fn with_language_code(mut self, code: &str) -> Result<Self> {
        self.language = crate::language_utils::get_language_name(code)?;
        self.language_code = code.trim().to_lowercase();
        Ok(self)
    }

    /// Replace the video extension allow-list
    pub fn with_video_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.video_extensions = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(anyhow!("Language name must not be empty"));
        }

        crate::language_utils::validate_language_code(&self.language_code)?;

        if self.video_extensions.is_empty() {
            return Err(anyhow!("At least one video extension is required"));
        }

        if let Some(ext) = self.video_extensions.iter().find(|ext| ext.trim_start_matches('.').is_empty()) {
            return Err(anyhow!("Invalid video extension: '{}'", ext));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            language_code: default_language_code(),
            video_extensions: default_video_extensions(),
            subtitle_extension: ".srt".to_string(),
            subs_folder_name: "subs".to_string(),
            dry_run: false,
            log_level: LogLevel::default(),
        }
    }
}
