//! Listener for playback engine events

use crate::engine::{EngineEvent, EngineEventReceiver};

use super::PlaybackSession;

impl PlaybackSession {
    /// Spawn a task consuming `ended`/`error` events from the playback
    /// engine. Events whose generation no longer matches the session's are
    /// discarded; only one foreground track is ever current.
    pub fn start_engine_listener(&self, mut events: EngineEventReceiver) {
        let session = self.clone();
        tracing::info!("starting playback engine event listener");

        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    EngineEvent::Ended { generation } => {
                        if session.is_stale(generation).await {
                            tracing::trace!(generation, "discarding stale ended event");
                            continue;
                        }
                        tracing::debug!(generation, "track ended");
                        session.handle_track_ended().await;
                    }
                    EngineEvent::Error { generation, message } => {
                        if session.is_stale(generation).await {
                            tracing::trace!(generation, "discarding stale error event");
                            continue;
                        }
                        tracing::warn!(generation, %message, "playback engine error");
                        session.handle_engine_error(generation).await;
                    }
                }
            }
            tracing::debug!("engine event channel closed, listener exiting");
        });
    }

    /// With looping on a single-track playlist the same track repeats;
    /// everything else advances through the navigator.
    async fn handle_track_ended(&self) {
        let repeat_same = {
            let state = self.state.lock().await;
            state.looping && state.playlist.len() == 1 && state.current_index.is_some()
        };

        if repeat_same {
            if let Err(e) = self.engine.restart().await {
                tracing::error!(error = %e, "restart command failed");
            }
            return;
        }

        self.advance().await;
    }

    /// Post-resolution stream failures take the same recovery path as
    /// resolution failures: error status, then a delayed auto-advance.
    async fn handle_engine_error(&self, generation: u64) {
        let index = self.current_index().await;
        if let Some(index) = index {
            self.fail_and_schedule_skip(index, generation);
        }
    }
}
