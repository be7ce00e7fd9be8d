//! Playback engine boundary - commands out, events in

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::Result;
use crate::model::types::AudioSource;

/// Commands accepted by the external playback engine.
///
/// `play` receives the generation of the load that produced the source.
/// The engine echoes that value on every event it emits for the source,
/// so callbacks belonging to a superseded load can be discarded.
#[async_trait]
pub trait PlaybackEngine: Send + Sync {
    /// Replace the current source and start playing it.
    async fn play(&self, source: AudioSource, generation: u64) -> Result<()>;

    /// Restart the current source from the beginning.
    async fn restart(&self) -> Result<()>;
}

/// Events emitted by the playback engine
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// The current source played to completion
    Ended { generation: u64 },
    /// Decoding or streaming failed after playback was commanded
    Error { generation: u64, message: String },
}

pub type EngineEventSender = mpsc::UnboundedSender<EngineEvent>;
pub type EngineEventReceiver = mpsc::UnboundedReceiver<EngineEvent>;

/// Channel on which an engine implementation reports its events
pub fn engine_event_channel() -> (EngineEventSender, EngineEventReceiver) {
    mpsc::unbounded_channel()
}
