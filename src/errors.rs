/*!
 * Error types for the subfix application.
 *
 * Every failure is surfaced to the user as its message only; callers branch on
 * success versus failure, never on the variant.
 */

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering, matching or copying subtitles
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The root directory has no `subs` subdirectory
    #[error("Subs folder not found")]
    SubsFolderNotFound,

    /// The root directory holds no file with an allowed video extension
    #[error("No video files found")]
    NoVideoFiles,

    /// A subtitle directory holds no `.srt` file mentioning the target language
    #[error("No suitable subtitle found in directory {directory}")]
    NoSubtitlesFound {
        /// Display name (last component) of the scanned directory
        directory: String,
    },

    /// A single subtitle copy failed
    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory could not be listed
    #[error("Failed to read directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
