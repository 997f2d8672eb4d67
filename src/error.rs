//! Errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the rendering pipeline
///
/// All errors are fatal to the current render job
#[derive(Debug, Error)]
pub enum Error {
    /// Operation is not valid with the current pipeline state
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Draw call referenced an element past the end of a buffer
    #[error("{buffer} index {index} out of range (length {len})")]
    IndexOutOfRange {
        buffer: &'static str,
        index: usize,
        len: usize,
    },

    /// Vertex produced a zero or non-finite homogeneous divide
    #[error("degenerate geometry at vertex {vertex}")]
    DegenerateGeometry { vertex: usize },

    /// Texture image could not be read or decoded
    #[error("unable to load {path}: {source}")]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Malformed command in a scene file
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn state<S: Into<String>>(msg: S) -> Self {
        Error::InvalidState(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
