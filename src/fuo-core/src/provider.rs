use crate::models::{Album, Artist, Media, Mv, Playlist, Quality, SearchResult, Song};
use crate::reader::SequentialReader;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Capability flags describing optional provider features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProviderCapabilities {
    pub playlists: bool,
    pub lyrics: bool,
    pub mv: bool,
    pub multi_quality: bool,
}

impl ProviderCapabilities {
    pub fn supports_playlists(&self) -> bool {
        self.playlists
    }

    pub fn supports_lyrics(&self) -> bool {
        self.lyrics
    }

    pub fn supports_multi_quality(&self) -> bool {
        self.multi_quality
    }
}

/// Common categories of provider failures surfaced to the core/UI.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {message}")]
    NetworkError { message: String },
    #[error("remote request failed with HTTP {status}")]
    RemoteRequestFailed { status: u16 },
    #[error("failed to parse provider response: {message}")]
    Parse { message: String },
    #[error("entity not found: {entity}")]
    NotFound { entity: String },
    #[error("operation not supported: {operation}")]
    NotSupported { operation: String },
    #[error("{message}")]
    Other { message: String },
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// What a search should look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchType {
    Song,
    Album,
    Artist,
    Playlist,
    Video,
}

impl SearchType {
    /// Short code used on the command line and in library queries.
    pub fn code(&self) -> &'static str {
        match self {
            SearchType::Song => "so",
            SearchType::Album => "al",
            SearchType::Artist => "ar",
            SearchType::Playlist => "pl",
            SearchType::Video => "vi",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search type '{0}'")]
pub struct UnknownSearchType(pub String);

impl FromStr for SearchType {
    type Err = UnknownSearchType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "so" | "song" => Ok(SearchType::Song),
            "al" | "album" => Ok(SearchType::Album),
            "ar" | "artist" => Ok(SearchType::Artist),
            "pl" | "playlist" => Ok(SearchType::Playlist),
            "vi" | "video" | "mv" => Ok(SearchType::Video),
            other => Err(UnknownSearchType(other.to_string())),
        }
    }
}

/// Provider interface.
///
/// Providers return **media URLs only**; playback is handled by the player.
/// Every call blocks until the remote side answers.
pub trait Provider: Send + Sync {
    /// Stable provider identifier (e.g., "migu").
    fn id(&self) -> &str;

    /// Human-friendly provider name.
    fn name(&self) -> &str;

    /// Advertised capabilities.
    fn capabilities(&self) -> ProviderCapabilities;

    fn search(&self, keyword: &str, kind: SearchType) -> ProviderResult<SearchResult>;

    fn get_song(&self, identifier: &str) -> ProviderResult<Song>;

    fn get_album(&self, identifier: &str) -> ProviderResult<Album>;

    fn get_artist(&self, identifier: &str) -> ProviderResult<Artist>;

    fn list_album_songs(&self, identifier: &str) -> ProviderResult<SequentialReader<'_, Song>>;

    fn list_artist_songs(&self, identifier: &str) -> ProviderResult<SequentialReader<'_, Song>>;

    /// Returns the playable media for `song` at `quality`.
    fn song_media(&self, song: &Song, quality: Quality) -> ProviderResult<Media>;

    fn get_playlist(&self, _identifier: &str) -> ProviderResult<Playlist> {
        Err(ProviderError::NotSupported {
            operation: "get_playlist".into(),
        })
    }

    fn list_playlist_songs(&self, _identifier: &str) -> ProviderResult<SequentialReader<'_, Song>> {
        Err(ProviderError::NotSupported {
            operation: "list_playlist_songs".into(),
        })
    }

    /// Returns `Ok(None)` when the video exists but has nothing playable.
    fn get_mv(&self, _identifier: &str) -> ProviderResult<Option<Mv>> {
        Err(ProviderError::NotSupported {
            operation: "get_mv".into(),
        })
    }

    /// Qualities the provider can serve for `song`, highest first.
    fn list_quality(&self, song: &Song) -> Vec<Quality> {
        song.qualities.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_type_parses_short_and_long_codes() {
        assert_eq!("so".parse::<SearchType>(), Ok(SearchType::Song));
        assert_eq!("playlist".parse::<SearchType>(), Ok(SearchType::Playlist));
        assert_eq!("mv".parse::<SearchType>(), Ok(SearchType::Video));
        assert_eq!(
            "ly".parse::<SearchType>(),
            Err(UnknownSearchType("ly".into()))
        );
    }

    #[test]
    fn search_type_display_uses_code() {
        assert_eq!(SearchType::Artist.to_string(), "ar");
    }
}
