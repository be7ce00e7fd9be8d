//! Playback session - orchestration of queue navigation, resolution,
//! prefetch and failure recovery
//!
//! Organized into submodules by responsibility:
//!
//! - `playback`: load/advance/skip operations and the generation guard
//! - `prefetch`: speculative resolution of the probable next track
//! - `engine_events`: listener for playback engine `ended`/`error` events

mod engine_events;
mod playback;
mod prefetch;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::engine::PlaybackEngine;
use crate::model::cache::ResolutionCache;
use crate::model::types::Track;
use crate::resolver::MediaResolver;
use crate::status::{StatusEvent, StatusSender};

/// Mutable session state behind one lock.
///
/// `generation` is a monotonic token identifying the most recent load;
/// any async result carrying an older value is discarded without side
/// effects.
pub(crate) struct SessionState {
    pub playlist: Vec<Track>,
    pub current_index: Option<usize>,
    pub shuffle: bool,
    pub looping: bool,
    pub generation: u64,
}

impl SessionState {
    fn new() -> Self {
        Self {
            playlist: Vec::new(),
            current_index: None,
            shuffle: false,
            looping: false,
            generation: 0,
        }
    }
}

/// Orchestrates which track plays next, resolves media through the cache,
/// commands the playback engine and reports status to the UI sink.
///
/// Cheap to clone; clones share the same state, cache and collaborators,
/// so the session can be handed to spawned tasks.
#[derive(Clone)]
pub struct PlaybackSession {
    pub(crate) state: Arc<Mutex<SessionState>>,
    pub(crate) cache: ResolutionCache,
    pub(crate) resolver: Arc<dyn MediaResolver>,
    pub(crate) engine: Arc<dyn PlaybackEngine>,
    pub(crate) status_tx: StatusSender,
    pub(crate) config: Config,
}

impl PlaybackSession {
    pub fn new(
        config: Config,
        resolver: Arc<dyn MediaResolver>,
        engine: Arc<dyn PlaybackEngine>,
        status_tx: StatusSender,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::new())),
            cache: ResolutionCache::new(),
            resolver,
            engine,
            status_tx,
            config,
        }
    }

    /// The receiver side may be dropped by the front end; that must never
    /// affect playback.
    pub(crate) fn emit(&self, event: StatusEvent) {
        let _ = self.status_tx.send(event);
    }

    pub(crate) async fn is_stale(&self, generation: u64) -> bool {
        self.state.lock().await.generation != generation
    }

    pub async fn current_index(&self) -> Option<usize> {
        self.state.lock().await.current_index
    }

    pub async fn playlist_len(&self) -> usize {
        self.state.lock().await.playlist.len()
    }

    pub async fn is_shuffle(&self) -> bool {
        self.state.lock().await.shuffle
    }

    pub async fn is_looping(&self) -> bool {
        self.state.lock().await.looping
    }

    pub async fn set_shuffle(&self, shuffle: bool) {
        let mut state = self.state.lock().await;
        state.shuffle = shuffle;
        tracing::debug!(shuffle, "shuffle mode changed");
    }

    pub async fn set_looping(&self, looping: bool) {
        let mut state = self.state.lock().await;
        state.looping = looping;
        tracing::debug!(looping, "loop mode changed");
    }

    /// The cache is exposed so a front end can inspect what has been
    /// resolved; it is shared with the prefetcher.
    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }
}
