/*!
 * Tests running the subfix binary
 */

use std::path::Path;
use std::process::{Command, Output};
use anyhow::Result;
use crate::common;

fn run_subfix(root: &Path) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_subfix"))
        .arg(root)
        .env("NO_COLOR", "1")
        .output()?)
}

/// Test that a completed run prints one line per video and exits 0
#[test]
fn test_cli_withPartialFailure_shouldExitZero() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_video(root, "A.mkv")?;
    common::create_test_video(root, "B.mkv")?;
    let subs = common::create_test_dir(root, "Subs")?;
    common::create_test_subtitle(&subs.join("A"), "2_English.srt")?;
    common::create_test_subtitle(&subs.join("A"), "3_English.srt")?;
    common::create_test_subtitle(&subs.join("B"), "2_German.srt")?;

    let output = run_subfix(root)?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec![
        "✔ A.mkv [FULL,SDH]",
        "✖ B.mkv [No suitable subtitle found in directory B]",
    ]);
    Ok(())
}

/// Test that a missing subs folder exits 1 with the error message
#[test]
fn test_cli_withoutSubsFolder_shouldExitOne() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_video(temp_dir.path(), "Movie.mkv")?;

    let output = run_subfix(temp_dir.path())?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Subs folder not found");
    assert!(!temp_dir.path().join("Movie.en.srt").exists());
    Ok(())
}

/// Test that the root directory defaults to the working directory
#[test]
fn test_cli_withoutRootArgument_shouldUseWorkingDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_single_video_layout(temp_dir.path())?;

    let output = Command::new(env!("CARGO_BIN_EXE_subfix"))
        .current_dir(temp_dir.path())
        .env("NO_COLOR", "1")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(temp_dir.path().join("Movie.en.srt").exists());
    Ok(())
}

/// Test that an invalid configuration is rejected once, before any scan
#[test]
fn test_cli_withInvalidVideoExtension_shouldExitOne() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_single_video_layout(temp_dir.path())?;

    let output = Command::new(env!("CARGO_BIN_EXE_subfix"))
        .arg(temp_dir.path())
        .args(["-e", "."])
        .env("NO_COLOR", "1")
        .output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout.matches("Configuration validation failed").count(), 1);
    assert!(stdout.contains("Invalid video extension"));
    assert!(!temp_dir.path().join("Movie.en.srt").exists());
    Ok(())
}
