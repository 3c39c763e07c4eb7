/*!
 * Tests for error messages
 */

use std::io;
use std::path::PathBuf;
use subfix::errors::SubtitleError;

#[test]
fn test_subsFolderNotFound_shouldDisplayCorrectly() {
    assert_eq!(SubtitleError::SubsFolderNotFound.to_string(), "Subs folder not found");
}

#[test]
fn test_noVideoFiles_shouldDisplayCorrectly() {
    assert_eq!(SubtitleError::NoVideoFiles.to_string(), "No video files found");
}

#[test]
fn test_noSubtitlesFound_shouldNameDirectory() {
    let error = SubtitleError::NoSubtitlesFound { directory: "Movie".to_string() };
    assert_eq!(error.to_string(), "No suitable subtitle found in directory Movie");
}

#[test]
fn test_copyFailed_shouldDisplayPathsAndCause() {
    let error = SubtitleError::CopyFailed {
        from: PathBuf::from("/s/2_English.srt"),
        to: PathBuf::from("/x/Movie.en.srt"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    let display = error.to_string();
    assert!(display.contains("/s/2_English.srt"));
    assert!(display.contains("/x/Movie.en.srt"));
    assert!(display.contains("denied"));
    assert!(std::error::Error::source(&error).is_some());
}
