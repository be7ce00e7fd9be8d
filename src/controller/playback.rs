//! Load, advance and skip operations

use crate::error::Result;
use crate::model::navigator;
use crate::model::types::{AudioSource, TrackStatus};
use crate::status::StatusEvent;

use super::PlaybackSession;

impl PlaybackSession {
    /// Fetch a playlist from the resolver and start playing its first track.
    ///
    /// On failure the error is returned to the caller and no playback state
    /// is mutated; retry is up to the user. On success the old playlist and
    /// its cache entries are replaced wholesale.
    pub async fn load_playlist(&self, url: &str) -> Result<usize> {
        tracing::info!(%url, "loading playlist");
        let tracks = self.resolver.fetch_tracks(url).await?;
        let count = tracks.len();

        // Queries are not globally unique across unrelated playlists, so
        // the cache is invalidated before the first track is requested.
        self.cache.clear().await;
        {
            let mut state = self.state.lock().await;
            state.playlist = tracks;
            state.current_index = None;
            // Invalidates anything still in flight for the old playlist.
            state.generation += 1;
        }

        self.emit(StatusEvent::PlaylistLoaded { count });
        if count > 0 {
            self.play_index(0).await;
        }
        Ok(count)
    }

    /// Load and play the track at `index`. Out-of-range indices are ignored.
    ///
    /// Resolution runs without the state lock held; when it completes, the
    /// captured generation is compared against the live one and a stale
    /// result is dropped on the floor.
    pub async fn play_index(&self, index: usize) {
        let (generation, track) = {
            let mut state = self.state.lock().await;
            let Some(track) = state.playlist.get(index).cloned() else {
                tracing::warn!(
                    index,
                    len = state.playlist.len(),
                    "play_index out of range, ignoring"
                );
                return;
            };
            state.generation += 1;
            state.current_index = Some(index);
            (state.generation, track)
        };

        self.emit(StatusEvent::TrackSelected {
            index,
            track: track.clone(),
        });
        self.emit(StatusEvent::TrackStatus {
            index,
            status: TrackStatus::Loading,
        });
        tracing::info!(index, title = %track.title, artist = %track.artist, "loading track");

        match self
            .cache
            .get_or_resolve(&track.query, self.resolver.as_ref())
            .await
        {
            Ok(media) => {
                if self.is_stale(generation).await {
                    tracing::debug!(index, generation, "discarding stale resolution");
                    return;
                }

                let source = AudioSource {
                    url: media.audio_url.clone(),
                    mime_type: self.config.mime_type.clone(),
                };
                if let Err(e) = self.engine.play(source, generation).await {
                    tracing::error!(index, error = %e, "engine rejected play command");
                    self.fail_and_schedule_skip(index, generation);
                    return;
                }

                self.emit(StatusEvent::TrackStatus {
                    index,
                    status: TrackStatus::Playing,
                });
                self.emit(StatusEvent::NowPlaying { index, media });
                tracing::info!(index, "playback started");

                // Only after confirmed playback; prefetching earlier would
                // couple the failure domains of two tracks.
                self.spawn_prefetch(index, generation);
            }
            Err(e) => {
                if self.is_stale(generation).await {
                    tracing::debug!(index, generation, "discarding stale resolution failure");
                    return;
                }
                tracing::warn!(index, query = %track.query, error = %e, "track resolution failed");
                self.fail_and_schedule_skip(index, generation);
            }
        }
    }

    /// Move to whatever the navigator picks next, or halt at the end of the
    /// playlist.
    pub async fn advance(&self) {
        let (target, len) = {
            let state = self.state.lock().await;
            let target = navigator::next_index(
                state.current_index,
                state.playlist.len(),
                state.shuffle,
                state.looping,
            );
            (target, state.playlist.len())
        };

        match target {
            Some(index) => self.play_index(index).await,
            None if len > 0 => {
                tracing::info!("end of playlist, playback halted");
                self.emit(StatusEvent::PlaylistEnded);
            }
            None => {}
        }
    }

    /// Explicit skip forward; honors shuffle and loop like an automatic
    /// advance.
    pub async fn next(&self) {
        self.advance().await;
    }

    /// Explicit skip backward. Always sequential, independent of shuffle;
    /// from index 0 there is no target and the call is a no-op.
    pub async fn previous(&self) {
        let target = {
            let state = self.state.lock().await;
            navigator::previous_index(state.current_index)
        };

        if let Some(index) = target {
            self.play_index(index).await;
        }
    }

    /// Mark `index` as failed and schedule an automatic advance after the
    /// configured delay. The delay turns a failing track into forward
    /// progress without tight-looping when many tracks fail back to back;
    /// a newer load during the delay cancels the skip.
    pub(crate) fn fail_and_schedule_skip(&self, index: usize, generation: u64) {
        self.emit(StatusEvent::TrackStatus {
            index,
            status: TrackStatus::Error,
        });

        let session = self.clone();
        let delay = self.config.error_skip_delay();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if session.is_stale(generation).await {
                tracing::debug!(index, generation, "auto-skip cancelled by newer load");
                return;
            }
            tracing::info!(index, "auto-skipping failed track");
            session.advance().await;
        });
    }
}
