/*!
 * Common test utilities for the subfix test suite
 */

// Not every helper is used by every test module
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a directory (and parents) below `dir`
pub fn create_test_dir(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Creates a sample subtitle file whose content names the file, so copies can be traced
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = format!("1\n00:00:01,000 --> 00:00:04,000\n{}\n", filename);
    create_test_file(dir, filename, &content)
}

/// Creates an empty stand-in for a video file
pub fn create_test_video(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, "")
}

/// Single video layout: `Movie.mkv` with `Subs/2_English.srt` and `Subs/3_English.srt`
pub fn create_single_video_layout(root: &Path) -> Result<PathBuf> {
    let video = create_test_video(root, "Movie.mkv")?;
    let subs = create_test_dir(root, "Subs")?;
    create_test_subtitle(&subs, "2_English.srt")?;
    create_test_subtitle(&subs, "3_English.srt")?;
    Ok(video)
}
