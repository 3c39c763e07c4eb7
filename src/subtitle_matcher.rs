/*!
 * Subtitle category matching.
 *
 * Subtitle bundles from the supported provider prefix each file with a
 * numeric category: `2_English.srt` is the full track, `3_English.srt` the
 * hearing-impaired (SDH) track and `4_English.srt` the forced track.
 */

use log::{debug, warn};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::file_utils::file_name_lossy;

/// Subtitle category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubtitleKind {
    /// Full dialogue track
    Full,
    /// Subtitles for the deaf and hard of hearing
    Sdh,
    /// Forced (foreign dialogue only) track
    Forced,
}

impl SubtitleKind {
    /// All categories, in report order
    pub const ALL: [SubtitleKind; 3] = [SubtitleKind::Full, SubtitleKind::Sdh, SubtitleKind::Forced];

    // @returns: Numeric prefix the provider uses for this category
    fn provider_prefix(self) -> u8 {
        match self {
            Self::Full => 2,
            Self::Sdh => 3,
            Self::Forced => 4,
        }
    }

    /// Lowercase identifier, as used in destination file names
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Sdh => "sdh",
            Self::Forced => "forced",
        }
    }

    /// Substring a candidate's lowercased file name must contain, e.g. `2_english`
    pub fn marker(self, language: &str) -> String {
        format!("{}_{}", self.provider_prefix(), language.to_lowercase())
    }

    /// Destination suffix: `.en` for the full track, `.en.<kind>` otherwise
    pub fn suffix(self, language_code: &str) -> String {
        match self {
            Self::Full => format!(".{}", language_code),
            _ => format!(".{}.{}", language_code, self.as_str()),
        }
    }
}

impl fmt::Display for SubtitleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// At most one subtitle path per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleSet {
    entries: BTreeMap<SubtitleKind, PathBuf>,
}

impl SubtitleSet {
    pub fn get(&self, kind: SubtitleKind) -> Option<&Path> {
        self.entries.get(&kind).map(PathBuf::as_path)
    }

    pub fn contains(&self, kind: SubtitleKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Matched categories, in category order
    pub fn kinds(&self) -> impl Iterator<Item = SubtitleKind> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SubtitleKind, &Path)> {
        self.entries.iter().map(|(kind, path)| (*kind, path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(SubtitleKind, PathBuf)> for SubtitleSet {
    /// Later duplicates of a category are ignored, first one wins
    fn from_iter<I: IntoIterator<Item = (SubtitleKind, PathBuf)>>(iter: I) -> Self {
        let mut entries = BTreeMap::new();
        for (kind, path) in iter {
            entries.entry(kind).or_insert(path);
        }
        Self { entries }
    }
}

/// Pick at most one candidate per category.
///
/// For each category the first candidate, in input order, whose lowercased
/// file name contains the category marker wins. Categories without a match are
/// left out; an empty result is not an error here.
pub fn match_subtitles(candidates: &[PathBuf], language: &str) -> SubtitleSet {
    let set: SubtitleSet = SubtitleKind::ALL
        .iter()
        .filter_map(|&kind| {
            let marker = kind.marker(language);
            candidates
                .iter()
                .find(|path| file_name_lossy(path).to_lowercase().contains(&marker))
                .map(|path| {
                    debug!("Matched {} subtitle: {:?}", kind, path);
                    (kind, path.clone())
                })
        })
        .collect();

    if set.is_empty() && !candidates.is_empty() {
        warn!(
            "None of {} subtitle candidate(s) carries a known category prefix for {}",
            candidates.len(),
            language
        );
    }

    set
}
