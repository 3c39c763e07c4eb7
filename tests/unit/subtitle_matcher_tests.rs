/*!
 * Tests for subtitle category matching
 */

use std::path::{Path, PathBuf};
use subfix::subtitle_matcher::{match_subtitles, SubtitleKind};

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|name| PathBuf::from(format!("/subs/{}", name))).collect()
}

/// Test the reference example: full and sdh present, forced absent
#[test]
fn test_match_subtitles_withFullAndSdh_shouldYieldTwoCategories() {
    let candidates = paths(&["Movie.2_English.srt", "Movie.3_English.srt", "Other.mkv"]);

    let set = match_subtitles(&candidates, "English");

    assert_eq!(set.get(SubtitleKind::Full), Some(Path::new("/subs/Movie.2_English.srt")));
    assert_eq!(set.get(SubtitleKind::Sdh), Some(Path::new("/subs/Movie.3_English.srt")));
    assert_eq!(set.get(SubtitleKind::Forced), None);
    assert_eq!(set.kinds().collect::<Vec<_>>(), vec![SubtitleKind::Full, SubtitleKind::Sdh]);
}

/// Test that all three categories are matched case-insensitively
#[test]
fn test_match_subtitles_withAllCategories_shouldMatchEach() {
    let candidates = paths(&["4_ENGLISH.srt", "3_english.srt", "2_English.srt"]);

    let set = match_subtitles(&candidates, "english");

    assert_eq!(set.len(), 3);
    assert_eq!(set.get(SubtitleKind::Forced), Some(Path::new("/subs/4_ENGLISH.srt")));
}

/// Test that candidates without a category prefix yield an empty set
#[test]
fn test_match_subtitles_withoutPrefixes_shouldYieldEmptySet() {
    let candidates = paths(&["English.srt", "5_English.srt"]);

    assert!(match_subtitles(&candidates, "English").is_empty());
}

/// Test that an empty candidate list yields an empty set
#[test]
fn test_match_subtitles_withNoCandidates_shouldYieldEmptySet() {
    assert!(match_subtitles(&[], "English").is_empty());
}

/// Test that the language name is part of the marker
#[test]
fn test_match_subtitles_withOtherLanguage_shouldUseThatLanguage() {
    let candidates = paths(&["2_English.srt", "2_French.srt"]);

    let set = match_subtitles(&candidates, "French");

    assert_eq!(set.get(SubtitleKind::Full), Some(Path::new("/subs/2_French.srt")));
    assert_eq!(set.len(), 1);
}

/// Test the category markers
#[test]
fn test_subtitle_kind_marker_shouldCombinePrefixAndLowercasedLanguage() {
    assert_eq!(SubtitleKind::Full.marker("English"), "2_english");
    assert_eq!(SubtitleKind::Sdh.marker("English"), "3_english");
    assert_eq!(SubtitleKind::Forced.marker("English"), "4_english");
}
