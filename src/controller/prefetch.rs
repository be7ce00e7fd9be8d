//! Speculative resolution of the probable next track
//!
//! Best-effort only: failures are swallowed and must never affect the
//! foreground track. Under shuffle the prefetched index is one fresh draw
//! of the navigator, so the eventual advance may pick a different track;
//! a miss only costs latency.

use crate::model::navigator;

use super::PlaybackSession;

impl PlaybackSession {
    /// Fire-and-forget prefetch of the track the navigator would choose
    /// after `after_index`. Called once the current track has successfully
    /// started playing; `generation` is the token of that load, so a
    /// prefetch outlived by a newer load (or playlist) never writes into
    /// the cache that replaced it.
    pub(crate) fn spawn_prefetch(&self, after_index: usize, generation: u64) {
        let session = self.clone();
        tokio::spawn(async move {
            session.prefetch(after_index, generation).await;
        });
    }

    async fn prefetch(&self, after_index: usize, generation: u64) {
        let target = {
            let state = self.state.lock().await;
            navigator::next_index(
                Some(after_index),
                state.playlist.len(),
                state.shuffle,
                state.looping,
            )
        };
        let Some(next) = target else {
            return;
        };

        let query = {
            let state = self.state.lock().await;
            match state.playlist.get(next) {
                Some(track) => track.query.clone(),
                None => return,
            }
        };

        if self.cache.contains(&query).await {
            return;
        }

        tracing::debug!(next, query = %query, "prefetching probable next track");
        match self.resolver.resolve_media(&query).await {
            Ok(media) => {
                if self.is_stale(generation).await {
                    tracing::debug!(next, generation, "discarding stale prefetch result");
                    return;
                }
                self.cache.insert(query, media).await;
            }
            Err(e) => {
                // Best-effort: the foreground load will resolve it again
                // (and report the failure) if this track is ever played.
                tracing::debug!(next, error = %e, "prefetch failed, ignoring");
            }
        }
    }
}
