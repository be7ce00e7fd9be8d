//! Outbound status notifications for a presentation layer
//!
//! The session pushes these over a channel and never reads UI state back.
//! A dropped receiver is tolerated; status delivery must never affect
//! playback.

use tokio::sync::mpsc;

use crate::model::types::{ResolvedMedia, Track, TrackStatus};

/// State-change notifications consumed by a presentation layer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusEvent {
    /// A new playlist finished loading and replaced the old one
    PlaylistLoaded { count: usize },
    /// A track was selected for playback; any now-playing metadata from the
    /// previous track is stale and should be dropped
    TrackSelected { index: usize, track: Track },
    /// Per-index status change (loading / playing / error)
    TrackStatus { index: usize, status: TrackStatus },
    /// The selected track resolved and the engine was commanded to play it
    NowPlaying { index: usize, media: ResolvedMedia },
    /// Navigation found no further target; playback halted
    PlaylistEnded,
}

pub type StatusSender = mpsc::UnboundedSender<StatusEvent>;
pub type StatusReceiver = mpsc::UnboundedReceiver<StatusEvent>;

pub fn status_channel() -> (StatusSender, StatusReceiver) {
    mpsc::unbounded_channel()
}
