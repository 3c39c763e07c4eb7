use anyhow::Result;
use futures::future::join_all;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::SubtitleError;
use crate::file_utils::{file_name_lossy, file_stem_lossy, FileManager};
use crate::subtitle_copier::copy_all;
use crate::subtitle_matcher::{match_subtitles, SubtitleSet};

// @module: Application controller for subtitle discovery and copying

/// Outcome of processing one video
#[derive(Debug)]
pub enum SubtitleResult {
    /// Subtitles were matched and copied
    Ok { video: PathBuf, subtitles: SubtitleSet },
    /// Lookup, match or copy failed for this video
    Error { video: PathBuf, error: SubtitleError },
}

impl SubtitleResult {
    pub fn video(&self) -> &Path {
        match self {
            Self::Ok { video, .. } | Self::Error { video, .. } => video,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

/// Where subtitles live relative to the subs folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleLayout {
    /// One video: subtitles sit directly in `Subs/`
    Shared,
    /// Several videos: each has its own `Subs/<video stem>/`
    PerVideo,
}

impl SubtitleLayout {
    /// Decided once per run from the total number of videos
    pub fn for_video_count(count: usize) -> Self {
        if count == 1 { Self::Shared } else { Self::PerVideo }
    }

    /// Directory holding the subtitles of `video`
    pub fn source_dir(self, subs_dir: &Path, video: &Path) -> PathBuf {
        match self {
            Self::Shared => subs_dir.to_path_buf(),
            Self::PerVideo => subs_dir.join(file_stem_lossy(video)),
        }
    }
}

/// Result of a completed run, one entry per video in listing order
#[derive(Debug)]
pub struct RunReport {
    pub subs_dir: PathBuf,
    pub layout: SubtitleLayout,
    pub results: Vec<SubtitleResult>,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }
}

/// Main application controller
pub struct Controller {
    // @field: Run configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Match and copy subtitles for every video directly under `root`.
    ///
    /// Fails only when the subs folder or the video list cannot be found; in
    /// that case no video is processed. Per-video failures are reported in the
    /// returned `RunReport` and never stop the other videos.
    pub async fn run(&self, root: &Path) -> Result<RunReport, SubtitleError> {
        info!("Processing directory: {}", root.display());

        let (subs_dir, videos) = tokio::try_join!(
            FileManager::find_subs_dir(root, &self.config.subs_folder_name),
            FileManager::find_video_files(root, &self.config.video_extensions),
        )?;

        let layout = SubtitleLayout::for_video_count(videos.len());
        info!(
            "Found {} video(s), reading subtitles from {} ({:?} layout)",
            videos.len(),
            subs_dir.display(),
            layout
        );

        let results = join_all(
            videos
                .into_iter()
                .map(|video| {
                    let source_dir = layout.source_dir(&subs_dir, &video);
                    self.process_video(video, source_dir)
                }),
        )
        .await;

        let report = RunReport { subs_dir, layout, results };
        info!("Done: {} succeeded, {} failed", report.succeeded(), report.failed());

        Ok(report)
    }

    /// Lookup, match and copy for a single video; never fails, the error is captured
    async fn process_video(&self, video: PathBuf, source_dir: PathBuf) -> SubtitleResult {
        debug!("Looking up subtitles for {} in {}", file_name_lossy(&video), source_dir.display());

        match self.fix_video(&video, &source_dir).await {
            Ok(subtitles) => SubtitleResult::Ok { video, subtitles },
            Err(error) => {
                warn!("{}: {}", file_name_lossy(&video), error);
                SubtitleResult::Error { video, error }
            }
        }
    }

    async fn fix_video(&self, video: &Path, source_dir: &Path) -> Result<SubtitleSet, SubtitleError> {
        let candidates = FileManager::find_subtitle_candidates(
            source_dir,
            &self.config.subtitle_extension,
            &self.config.language,
        )
        .await?;

        let subtitles = match_subtitles(&candidates, &self.config.language);
        copy_all(video, &subtitles, &self.config.language_code, self.config.dry_run).await?;

        Ok(subtitles)
    }
}
