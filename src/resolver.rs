//! Resolver service client - playlist fetch and media resolution endpoints

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::types::{ResolvedMedia, Track};

/// Boundary to the external resolver service.
///
/// One implementation talks HTTP to the real service; tests substitute
/// programmable fakes.
#[async_trait]
pub trait MediaResolver: Send + Sync {
    /// Convert a playlist URL into track metadata. Called once per
    /// "load playlist" action.
    async fn fetch_tracks(&self, url: &str) -> Result<Vec<Track>>;

    /// Resolve a search query into playable media. Called by the
    /// resolution cache on a miss and by the prefetcher.
    async fn resolve_media(&self, query: &str) -> Result<ResolvedMedia>;
}

#[derive(Serialize)]
struct PlaylistRequest<'a> {
    url: &'a str,
}

#[derive(Deserialize)]
struct PlaylistResponse {
    #[serde(default)]
    tracks: Vec<Track>,
    error: Option<String>,
}

#[derive(Serialize)]
struct MediaRequest<'a> {
    query: &'a str,
}

/// Wire format of the media endpoint. `audioUrl` may be absent when the
/// service reports an error.
#[derive(Deserialize)]
struct MediaResponse {
    #[serde(rename = "audioUrl")]
    audio_url: Option<String>,
    title: Option<String>,
    thumbnail: Option<String>,
    #[serde(rename = "youtubeUrl")]
    youtube_url: Option<String>,
    error: Option<String>,
}

/// HTTP client for the resolver service endpoints
#[derive(Clone)]
pub struct HttpResolver {
    client: reqwest::Client,
    base_url: String,
}

impl HttpResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MediaResolver for HttpResolver {
    async fn fetch_tracks(&self, url: &str) -> Result<Vec<Track>> {
        tracing::debug!(%url, "fetching playlist tracks");

        let response: PlaylistResponse = self
            .client
            .post(format!("{}/api/get_tracks", self.base_url))
            .json(&PlaylistRequest { url })
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(Error::PlaylistLoad(error));
        }
        if response.tracks.is_empty() {
            return Err(Error::PlaylistLoad("playlist contains no tracks".into()));
        }

        tracing::info!(count = response.tracks.len(), "playlist tracks fetched");
        Ok(response.tracks)
    }

    async fn resolve_media(&self, query: &str) -> Result<ResolvedMedia> {
        tracing::debug!(query, "resolving media");

        let response: MediaResponse = self
            .client
            .post(format!("{}/api/find_video", self.base_url))
            .json(&MediaRequest { query })
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(Error::resolve(query, error));
        }

        let audio_url = response
            .audio_url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| Error::resolve(query, "no audio url in response"))?;

        Ok(ResolvedMedia {
            audio_url,
            resolved_title: response.title,
            thumbnail: response.thumbnail,
            youtube_url: response.youtube_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_response_parses_successful_payload() {
        let json = r#"{
            "audioUrl": "https://cdn.example/a.m4a",
            "title": "Song (Official Audio)",
            "thumbnail": "https://img.example/t.jpg"
        }"#;
        let parsed: MediaResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.audio_url.as_deref(), Some("https://cdn.example/a.m4a"));
        assert_eq!(parsed.title.as_deref(), Some("Song (Official Audio)"));
        assert!(parsed.youtube_url.is_none());
        assert!(parsed.error.is_none());
    }

    #[test]
    fn media_response_parses_error_payload() {
        let parsed: MediaResponse = serde_json::from_str(r#"{"error": "Not found"}"#).unwrap();
        assert!(parsed.audio_url.is_none());
        assert_eq!(parsed.error.as_deref(), Some("Not found"));
    }

    #[test]
    fn playlist_response_parses_tracks_and_errors() {
        let json = r#"{"tracks": [
            {"title": "One", "artist": "A", "query": "A - One"},
            {"title": "Two", "artist": "B", "query": "B - Two"}
        ]}"#;
        let parsed: PlaylistResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.tracks.len(), 2);
        assert_eq!(parsed.tracks[0].query, "A - One");

        let failed: PlaylistResponse =
            serde_json::from_str(r#"{"error": "Service not supported"}"#).unwrap();
        assert!(failed.tracks.is_empty());
        assert_eq!(failed.error.as_deref(), Some("Service not supported"));
    }

    #[test]
    fn request_bodies_match_the_wire_contract() {
        let playlist = serde_json::to_value(PlaylistRequest { url: "https://p" }).unwrap();
        assert_eq!(playlist, serde_json::json!({"url": "https://p"}));

        let media = serde_json::to_value(MediaRequest { query: "A - One" }).unwrap();
        assert_eq!(media, serde_json::json!({"query": "A - One"}));
    }
}
