//! Error taxonomy shared by the codec, kernel builder, engine and CLI.
//!
//! Every variant is fatal at this layer: callers propagate with `?` and the
//! binary turns any of them into a non-zero exit status.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type BlurResult<T> = Result<T, BlurError>;

#[derive(Error, Debug)]
pub enum BlurError {
    /// σ must be a positive, finite number.
    #[error("sigma must be a positive finite number (got {sigma})")]
    InvalidParameter { sigma: f64 },

    /// The kernel footprint is wider or taller than the image.
    #[error("kernel order {order} exceeds image dimensions {width}x{height}")]
    KernelTooLarge {
        order: usize,
        width: usize,
        height: usize,
    },

    /// σ is valid but its kernel would exceed `MAX_KERNEL_ORDER`.
    #[error("kernel order {order} exceeds the supported maximum {limit}")]
    KernelOrderLimit { order: usize, limit: usize },

    #[error("malformed PGM header: {0}")]
    MalformedHeader(String),

    #[error("truncated pixel payload: expected {expected} bytes, found {actual}")]
    TruncatedPayload { expected: usize, actual: usize },

    /// A buffer whose length disagrees with the declared dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to load config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl BlurError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
