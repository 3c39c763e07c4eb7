use futures::future::try_join_all;
use log::info;
use std::path::{Path, PathBuf};

use crate::errors::SubtitleError;
use crate::file_utils::{dotted_extension, file_stem_lossy, FileManager};
use crate::subtitle_matcher::{SubtitleKind, SubtitleSet};

// @module: Copies matched subtitles next to their video

/// One planned subtitle copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOperation {
    pub kind: SubtitleKind,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Destination for a subtitle of `kind` belonging to `video`.
///
/// `/x/Movie.mkv` + full + `sub.srt` gives `/x/Movie.en.srt`, sdh gives
/// `/x/Movie.en.sdh.srt`. The subtitle keeps its own extension.
pub fn destination_path(video: &Path, kind: SubtitleKind, subtitle: &Path, language_code: &str) -> PathBuf {
    let mut file_name = file_stem_lossy(video);
    file_name.push_str(&kind.suffix(language_code));
    if let Some(ext) = dotted_extension(subtitle) {
        file_name.push_str(&ext);
    }

    match video.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Plan one copy per category present in `subtitles`, in category order
pub fn plan_copies(video: &Path, subtitles: &SubtitleSet, language_code: &str) -> Vec<CopyOperation> {
    subtitles
        .iter()
        .map(|(kind, source)| CopyOperation {
            kind,
            source: source.to_path_buf(),
            destination: destination_path(video, kind, source, language_code),
        })
        .collect()
}

/// Copy every subtitle in `subtitles` next to `video`.
///
/// All copies run concurrently and the first failure fails the whole call.
/// Copies that already finished stay on disk. Existing destinations are
/// overwritten. With `dry_run` nothing is written and the plan is returned.
pub async fn copy_all(
    video: &Path,
    subtitles: &SubtitleSet,
    language_code: &str,
    dry_run: bool,
) -> Result<Vec<CopyOperation>, SubtitleError> {
    let operations = plan_copies(video, subtitles, language_code);

    if dry_run {
        for op in &operations {
            info!("Would copy {} -> {}", op.source.display(), op.destination.display());
        }
        return Ok(operations);
    }

    try_join_all(operations.iter().map(|op| async move {
        FileManager::copy_file(&op.source, &op.destination).await?;
        info!("Copied {} -> {}", op.source.display(), op.destination.display());
        Ok::<_, SubtitleError>(())
    }))
    .await?;

    Ok(operations)
}
