//! Serving published media from the local media root.
use std::path::{Path, PathBuf};

use mime_guess::Mime;
use tokio::fs::{self, File};

/// A media file that passed every check and is ready to stream.
#[derive(Debug)]
pub struct MediaFile {
    /// The open file, positioned at its start.
    pub file: File,
    /// The file's size in bytes.
    pub len: u64,
    /// The content type inferred from the file's extension.
    pub content_type: Mime,
}

/// Resolve `requested` against `root`, refusing anything that canonicalizes to
/// a location outside of the canonical root.
pub async fn resolve(root: &Path, requested: &str) -> Result<PathBuf, errors::MediaError> {
    let candidate = fs::canonicalize(root.join(requested)).await?;
    let root = fs::canonicalize(root).await?;
    // Component-wise, so `/srv/media-private` does not pass for `/srv/media`.
    if !candidate.starts_with(&root) {
        return Err(errors::MediaError::OutsideRoot);
    }
    Ok(candidate)
}

/// Resolve and open a media file for streaming.
pub async fn open(root: &Path, requested: &str) -> Result<MediaFile, errors::MediaError> {
    let path = resolve(root, requested).await?;
    let metadata = fs::metadata(&path).await?;
    if !metadata.is_file() {
        return Err(errors::MediaError::NotAFile);
    }
    let file = File::open(&path).await?;
    Ok(MediaFile {
        file,
        len: metadata.len(),
        content_type: mime_guess::from_path(&path).first_or_octet_stream(),
    })
}

pub mod errors {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum MediaError {
        #[error("Requested path resolves outside of the media root")]
        OutsideRoot,
        #[error("Requested path is not a regular file")]
        NotAFile,
        #[error(transparent)]
        Io(#[from] std::io::Error),
    }
}
