//! Error types for the playback core

use thiserror::Error;

/// Result type used throughout the playback core
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the playback core.
///
/// Playlist-load failures are the only errors surfaced to the caller;
/// per-track failures (`Resolve`, `Engine`) are contained inside the
/// session and handled by skipping forward.
#[derive(Error, Debug)]
pub enum Error {
    /// The playlist endpoint rejected the URL or returned no tracks
    #[error("playlist load failed: {0}")]
    PlaylistLoad(String),

    /// The media resolver reported an error or returned no audio URL
    #[error("resolution failed for {query:?}: {reason}")]
    Resolve { query: String, reason: String },

    /// The playback engine rejected a command
    #[error("playback engine error: {0}")]
    Engine(String),

    /// HTTP transport error (wraps reqwest::Error)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    pub fn resolve(query: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Resolve {
            query: query.into(),
            reason: reason.into(),
        }
    }
}
