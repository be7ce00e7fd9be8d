//! Core data types for tracks and resolved media

use serde::{Deserialize, Serialize};

/// One playlist entry with display metadata and a resolver query string.
///
/// Immutable once produced by the playlist endpoint; `query` is the cache
/// key and the input to media resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub query: String,
}

/// Playable media produced by the external resolver
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedMedia {
    pub audio_url: String,
    /// Display title reported by the resolver, when it differs from the track's
    pub resolved_title: Option<String>,
    pub thumbnail: Option<String>,
    pub youtube_url: Option<String>,
}

/// Source descriptor handed to the playback engine
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioSource {
    pub url: String,
    pub mime_type: String,
}

/// Per-track status reported to the UI sink
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackStatus {
    Loading,
    Playing,
    Error,
}
