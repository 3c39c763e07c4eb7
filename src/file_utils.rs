use log::debug;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::errors::SubtitleError;

// @module: Directory scanning and file copy utilities

/// Kind of directory entry to keep when listing a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Subdirectories only
    Directory,
    /// Everything that is not a directory
    File,
}

// @struct: File system operations utility
pub struct FileManager;

impl FileManager {
    /// List the entries of `dir` (single level) of the given kind, sorted by file name.
    ///
    /// Symlinks are not followed, so a link to a directory counts as a file.
    pub async fn list_entries<P: AsRef<Path>>(dir: P, kind: EntryKind) -> Result<Vec<PathBuf>, SubtitleError> {
        let dir = dir.as_ref();
        let unreadable = |source: std::io::Error| SubtitleError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        };

        let mut reader = fs::read_dir(dir).await.map_err(unreadable)?;
        let mut entries = Vec::new();

        while let Some(entry) = reader.next_entry().await.map_err(unreadable)? {
            let is_dir = entry.file_type().await.map_err(unreadable)?.is_dir();
            if is_dir == (kind == EntryKind::Directory) {
                entries.push(entry.path());
            }
        }

        // Listing order is platform dependent
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        debug!("Listed {} {:?} entries in {:?}", entries.len(), kind, dir);
        Ok(entries)
    }

    /// Find the subtitle root folder (e.g. `Subs`) directly under `dir`.
    ///
    /// An unreadable `dir` is treated as having no such folder.
    pub async fn find_subs_dir<P: AsRef<Path>>(dir: P, folder_name: &str) -> Result<PathBuf, SubtitleError> {
        let wanted = folder_name.to_lowercase();
        let dirs = Self::list_entries(dir, EntryKind::Directory)
            .await
            .unwrap_or_default();

        dirs.into_iter()
            .find(|path| file_name_lossy(path).to_lowercase() == wanted)
            .ok_or(SubtitleError::SubsFolderNotFound)
    }

    /// Find the video files directly under `dir` whose extension is in `extensions`.
    ///
    /// Extensions carry their leading dot and are compared case-sensitively.
    pub async fn find_video_files<P: AsRef<Path>>(dir: P, extensions: &[String]) -> Result<Vec<PathBuf>, SubtitleError> {
        let videos: Vec<PathBuf> = Self::list_entries(dir, EntryKind::File)
            .await?
            .into_iter()
            .filter(|path| {
                dotted_extension(path).is_some_and(|ext| extensions.iter().any(|allowed| *allowed == ext))
            })
            .collect();

        if videos.is_empty() {
            return Err(SubtitleError::NoVideoFiles);
        }

        Ok(videos)
    }

    /// Find the subtitle files in `dir` that can belong to `language`.
    ///
    /// A candidate has `extension` (case-insensitive) and mentions `language`
    /// anywhere in its file name (case-insensitive).
    pub async fn find_subtitle_candidates<P: AsRef<Path>>(
        dir: P,
        extension: &str,
        language: &str,
    ) -> Result<Vec<PathBuf>, SubtitleError> {
        let dir = dir.as_ref();
        let language = language.to_lowercase();

        let candidates: Vec<PathBuf> = Self::list_entries(dir, EntryKind::File)
            .await?
            .into_iter()
            .filter(|path| dotted_extension(path).is_some_and(|ext| ext.eq_ignore_ascii_case(extension)))
            .filter(|path| file_name_lossy(path).to_lowercase().contains(&language))
            .collect();

        if candidates.is_empty() {
            return Err(SubtitleError::NoSubtitlesFound {
                directory: file_name_lossy(dir),
            });
        }

        debug!("Found {} subtitle candidate(s) in {:?}", candidates.len(), dir);
        Ok(candidates)
    }

    /// Copy a file, overwriting any existing destination
    pub async fn copy_file<P1: AsRef<Path>, P2: AsRef<Path>>(from: P1, to: P2) -> Result<(), SubtitleError> {
        let from = from.as_ref();
        let to = to.as_ref();

        fs::copy(from, to).await.map_err(|source| SubtitleError::CopyFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}

/// Extension of `path` including the leading dot, e.g. `.mkv`
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension().map(|ext| format!(".{}", ext.to_string_lossy()))
}

/// Last path component as a string, or the whole path if it has none
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// File name of `path` without its extension
pub fn file_stem_lossy(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}
