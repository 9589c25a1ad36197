use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anything that carries a provider-scoped identifier.
///
/// Providers MUST treat identifiers as opaque, case-sensitive strings that are
/// stable across runs.
pub trait Identifiable {
    fn identifier(&self) -> &str;
}

/// Audio quality tiers, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Lossless.
    Shq,
    Hq,
    Sq,
    Lq,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Shq => "shq",
            Quality::Hq => "hq",
            Quality::Sq => "sq",
            Quality::Lq => "lq",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownQuality(pub String);

impl fmt::Display for UnknownQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown quality '{}'", self.0)
    }
}

impl std::error::Error for UnknownQuality {}

impl FromStr for Quality {
    type Err = UnknownQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shq" => Ok(Quality::Shq),
            "hq" => Ok(Quality::Hq),
            "sq" => Ok(Quality::Sq),
            "lq" => Ok(Quality::Lq),
            other => Err(UnknownQuality(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub identifier: String,
    pub name: Option<String>,
    pub cover: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub identifier: String,
    pub name: Option<String>,
    pub cover: Option<String>,
    pub description: String,
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lyric {
    pub identifier: String,
    pub content: Option<String>,
    /// Translated lyric, when the provider has one.
    pub trans_content: Option<String>,
}

/// Track metadata as handed to the player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub identifier: String,
    pub title: Option<String>,
    pub artists: Vec<Artist>,
    pub album: Option<Album>,
    /// Available tiers, highest first.
    pub qualities: Vec<Quality>,
    /// Id of the encoded asset, required next to `identifier` to resolve media.
    pub content_id: String,
    pub url: Option<String>,
    pub mv_cpid: Option<String>,
    pub has_mv: bool,
    pub lyric: Option<Lyric>,
}

impl Song {
    pub fn artists_name(&self) -> String {
        self.artists
            .iter()
            .filter_map(|a| a.name.as_deref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub identifier: String,
    pub name: Option<String>,
    pub cover: Option<String>,
    pub description: Option<String>,
}

/// A playable resource. The player is responsible for reading/decoding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    pub format: Option<String>,
    /// Kbps when known.
    pub bitrate: Option<u32>,
}

impl Media {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            format: None,
            bitrate: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mv {
    pub identifier: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub media: Media,
}

/// A video as listed by search; resolve it to an [`Mv`] for playback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub identifier: String,
    pub title: Option<String>,
}

/// Aggregated search output; only the list matching the search type is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub songs: Option<Vec<Song>>,
    pub artists: Option<Vec<Artist>>,
    pub albums: Option<Vec<Album>>,
    pub playlists: Option<Vec<Playlist>>,
    pub videos: Option<Vec<Video>>,
}

macro_rules! impl_identifiable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identifiable for $ty {
                fn identifier(&self) -> &str {
                    &self.identifier
                }
            }
        )*
    };
}

impl_identifiable!(Artist, Album, Lyric, Song, Playlist, Mv, Video);
