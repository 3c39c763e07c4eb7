/*!
 * # subfix - copy downloaded subtitles next to their videos
 *
 * Subtitle bundles from the usual providers arrive in a `Subs` folder with
 * numeric category prefixes (`2_English.srt`, `3_English.srt`,
 * `4_English.srt`). This library finds those files for every video in a
 * directory and copies them beside the video under player-friendly names
 * (`Movie.en.srt`, `Movie.en.sdh.srt`, `Movie.en.forced.srt`).
 *
 * ## Expected layout
 *
 * - one video: `<root>/Movie.mkv` and `<root>/Subs/<name>.srt`
 * - several videos: `<root>/A.mkv`, `<root>/B.mkv` and
 *   `<root>/Subs/A/<name>.srt`, `<root>/Subs/B/<name>.srt`
 *
 * ## Architecture
 *
 * - `file_utils`: single-level directory scans and file copy
 * - `subtitle_matcher`: picks one subtitle per category
 * - `subtitle_copier`: destination naming and concurrent copies
 * - `app_controller`: runs the whole pipeline for a root directory
 * - `reporter`: colored console summary
 * - `app_config`: run configuration
 * - `language_utils`: ISO language code utilities
 * - `errors`: error type shared by all of the above
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

#![allow(clippy::uninlined_format_args)]

pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod reporter;
pub mod subtitle_copier;
pub mod subtitle_matcher;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunReport, SubtitleLayout, SubtitleResult};
pub use errors::SubtitleError;
pub use subtitle_matcher::{match_subtitles, SubtitleKind, SubtitleSet};
