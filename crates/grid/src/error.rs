use std::path::PathBuf;
use thiserror::Error;

/// Result type for grid decoding
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while loading an occupancy grid
#[derive(Error, Debug)]
pub enum GridError {
    /// Input file could not be opened
    #[error("No such file or directory: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input ended before the 8-byte width/height header
    #[error("Grid header is truncated: expected 8 bytes, got {actual}")]
    TruncatedHeader { actual: usize },

    /// Body is shorter than `width * height`
    #[error("Grid body is shorter than expected: expected {expected} bytes, got {actual}")]
    Malformed { expected: usize, actual: usize },

    /// `width * height` does not fit in memory
    #[error("Grid dimensions {width}x{height} are too large")]
    TooLarge { width: u32, height: u32 },

    /// IO error occurred while reading an opened input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GridError {
    /// Create a not-found error for `path`
    pub fn not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::NotFound {
            path: path.into(),
            source,
        }
    }

    /// True for every variant that means "the bytes do not describe a grid"
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::TruncatedHeader { .. } | Self::Malformed { .. } | Self::TooLarge { .. }
        )
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
