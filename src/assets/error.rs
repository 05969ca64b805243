use crate::core::IconSize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing assets
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode {}: {source}", .path.display())]
    EncodePng {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {size} icon frame: {source}")]
    EncodeFrame {
        size: IconSize,
        #[source]
        source: io::Error,
    },

    #[error("Failed to assemble icon container {}: {source}", .path.display())]
    EncodeContainer {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Icon container frames must be 1 to 256 pixels per side, got {0}")]
    InvalidFrameSize(IconSize),
}

impl AssetError {
    /// Whether the failure came from the filesystem rather than encoding
    pub fn is_filesystem(&self) -> bool {
        matches!(self, AssetError::CreateDir { .. } | AssetError::Write { .. })
    }
}
