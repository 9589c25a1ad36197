//! Binding between host models and the vendor: fetch-by-id and the album song cache.

use crate::client::MiguClient;
use crate::error::{MiguError, MiguResult};
use crate::mapping::{map_album_detail, map_artist_detail, map_playlist_detail, map_song_detail};
use fuo_core::models::{Album, Artist, Identifiable, Playlist, Song};

/// Models that can be loaded from the vendor by identifier.
pub trait Fetchable: Sized {
    fn fetch(client: &MiguClient, identifier: &str) -> MiguResult<Self>;
}

fn missing(kind: &str, identifier: &str) -> MiguError {
    MiguError::ResourceNotFound(format!("{kind} {identifier}"))
}

impl Fetchable for Song {
    fn fetch(client: &MiguClient, identifier: &str) -> MiguResult<Self> {
        let result = client.song_detail(identifier)?;
        result
            .data
            .as_ref()
            .map(map_song_detail)
            .ok_or_else(|| missing("song", identifier))
    }
}

impl Fetchable for Artist {
    fn fetch(client: &MiguClient, identifier: &str) -> MiguResult<Self> {
        let result = client.artist_detail(identifier)?;
        result
            .data
            .as_ref()
            .map(map_artist_detail)
            .ok_or_else(|| missing("artist", identifier))
    }
}

impl Fetchable for Album {
    fn fetch(client: &MiguClient, identifier: &str) -> MiguResult<Self> {
        let result = client.album_detail(identifier)?;
        result
            .data
            .as_ref()
            .map(map_album_detail)
            .ok_or_else(|| missing("album", identifier))
    }
}

impl Fetchable for Playlist {
    fn fetch(client: &MiguClient, identifier: &str) -> MiguResult<Self> {
        let result = client.playlist_detail(identifier)?;
        result
            .first_playlist()
            .map(map_playlist_detail)
            .ok_or_else(|| missing("playlist", identifier))
    }
}

/// A value loaded at most once.
///
/// Unfetched until the first successful [`CacheCell::get_or_fetch`], fetched for
/// good afterwards. There is no setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheCell<T> {
    fetched: Option<T>,
}

impl<T> Default for CacheCell<T> {
    fn default() -> Self {
        Self { fetched: None }
    }
}

impl<T> CacheCell<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&T> {
        self.fetched.as_ref()
    }

    pub fn is_fetched(&self) -> bool {
        self.fetched.is_some()
    }

    /// Run `fetch` on first access only. A failed fetch leaves the cell empty.
    pub fn get_or_fetch<E>(&mut self, fetch: impl FnOnce() -> Result<T, E>) -> Result<&T, E> {
        match &mut self.fetched {
            Some(value) => Ok(&*value),
            slot => Ok(&*slot.insert(fetch()?)),
        }
    }
}

/// An album plus its lazily fetched first page of songs.
#[derive(Debug, Clone, PartialEq)]
pub struct MiguAlbum {
    pub album: Album,
    cached_songs: CacheCell<Vec<Song>>,
}

impl MiguAlbum {
    pub fn new(album: Album) -> Self {
        Self {
            album,
            cached_songs: CacheCell::new(),
        }
    }

    /// Songs of the album; the first call hits the vendor, later calls do not.
    ///
    /// Only page 1 is loaded. Use the provider's album listing for the full set.
    pub fn songs(&mut self, client: &MiguClient) -> MiguResult<&[Song]> {
        let identifier = self.album.identifier.as_str();
        let page_size = client.config().page_size;
        let songs = self.cached_songs.get_or_fetch(|| {
            let page = client.album_songs(identifier, 1, page_size)?;
            Ok::<_, MiguError>(
                page.result
                    .and_then(|list| list.results)
                    .unwrap_or_default()
                    .iter()
                    .map(map_song_detail)
                    .collect(),
            )
        })?;
        Ok(songs.as_slice())
    }

    pub fn cached_songs(&self) -> Option<&[Song]> {
        self.cached_songs.get().map(Vec::as_slice)
    }
}

impl Fetchable for MiguAlbum {
    fn fetch(client: &MiguClient, identifier: &str) -> MiguResult<Self> {
        Album::fetch(client, identifier).map(MiguAlbum::new)
    }
}

impl Identifiable for MiguAlbum {
    fn identifier(&self) -> &str {
        &self.album.identifier
    }
}
