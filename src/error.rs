//! Domain error types for fzpick
//!
//! Everything that can go wrong during a selection round trip is a
//! [`PickError`]. There are no retries or partial-failure semantics; a
//! failed call surfaces directly to the caller.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Top-level error type for fzpick
#[derive(Debug, Error)]
pub enum PickError {
    #[error("cannot find `{0}` on PATH (install it from https://github.com/junegunn/fzf)")]
    FinderNotFound(String),

    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}")]
    FinderFailed {
        command: String,
        status: ExitStatus,
    },

    #[error("finder returned `{0}`, which was never offered for selection")]
    UnknownSelection(String),

    #[error("finder output is not valid UTF-8: {0}")]
    NonUtf8Output(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for PickError
pub type Result<T> = std::result::Result<T, PickError>;
