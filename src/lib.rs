//! playdeck - playback-queue controller for a streamed playlist
//!
//! Decides which track plays next under sequential/shuffle/loop modes,
//! resolves each track's playable media lazily through an external
//! resolver service, memoizes resolutions, speculatively prefetches the
//! probable next track, and recovers from resolution or playback failures
//! by skipping forward.
//!
//! Rendering, network transport and audio decoding live behind the
//! [`resolver::MediaResolver`] and [`engine::PlaybackEngine`] seams and the
//! outbound [`status`] channel; the core never reads UI state back.

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;
pub mod resolver;
pub mod status;

pub use config::Config;
pub use controller::PlaybackSession;
pub use engine::{EngineEvent, EngineEventReceiver, EngineEventSender, PlaybackEngine, engine_event_channel};
pub use error::{Error, Result};
pub use model::cache::ResolutionCache;
pub use model::types::{AudioSource, ResolvedMedia, Track, TrackStatus};
pub use resolver::{HttpResolver, MediaResolver};
pub use status::{StatusEvent, StatusReceiver, StatusSender, status_channel};
