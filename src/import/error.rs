use std::path::PathBuf;

use crate::error::WebpError;

/// Errors that abort an import. No asset is produced when one is returned.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ImportError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] WebpError),

    #[error("invalid sprite manifest {}: {source}", display_path(.path))]
    Manifest {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid sprite entry {key:?}: {reason}")]
    InvalidSpriteEntry { key: String, reason: String },

    #[error("sprite {name:?} at ({x}, {y}) {width}x{height} lies outside the {atlas_width}x{atlas_height} atlas")]
    SpriteOutOfBounds {
        name: String,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        atlas_width: u32,
        atlas_height: u32,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<inline>".into(),
    }
}
