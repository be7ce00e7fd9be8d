//! Data model - tracks, resolved media, queue navigation and the
//! resolution cache

pub mod cache;
pub mod navigator;
pub mod types;

pub use cache::ResolutionCache;
pub use types::{AudioSource, ResolvedMedia, Track, TrackStatus};
