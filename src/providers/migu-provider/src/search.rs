//! Search-type dispatch: which vendor code to send, which list to read off the
//! envelope, and which list of the aggregate [`SearchResult`] to fill.

use crate::error::{MiguError, MiguResult};
use crate::mapping::{
    map_search_album, map_search_artist, map_search_mv, map_search_playlist, map_search_song,
};
use crate::schema::{
    AlbumSearchResult, ArtistSearchResult, MiguSearchType, MvSearchResult, PlaylistSearchResult,
    SearchAlbum, SearchArtist, SearchMeta, SearchMv, SearchPlaylist, SearchSong,
    SongSearchResult,
};
use fuo_core::models::SearchResult;
use fuo_core::SearchType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRoute {
    pub vendor: MiguSearchType,
    /// List field on the vendor envelope (canonical name).
    pub envelope_field: &'static str,
    /// List field on [`SearchResult`].
    pub output_field: &'static str,
}

pub fn route(kind: SearchType) -> SearchRoute {
    let (vendor, envelope_field, output_field) = match kind {
        SearchType::Song => (MiguSearchType::Song, "musics", "songs"),
        SearchType::Album => (MiguSearchType::Album, "albums", "albums"),
        SearchType::Artist => (MiguSearchType::Artist, "artists", "artists"),
        SearchType::Playlist => (MiguSearchType::Playlist, "playlists", "playlists"),
        SearchType::Video => (MiguSearchType::Mv, "mv", "videos"),
    };
    SearchRoute {
        vendor,
        envelope_field,
        output_field,
    }
}

/// Parse a host search-type code (`so`, `al`, `ar`, `pl`, `vi`).
pub fn parse_search_type(raw: &str) -> MiguResult<SearchType> {
    raw.parse()
        .map_err(|_| MiguError::UnsupportedSearchType(raw.to_string()))
}

/// A decoded search response; the variant follows the vendor code that was sent.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEnvelope {
    Songs(SongSearchResult),
    Artists(ArtistSearchResult),
    Albums(AlbumSearchResult),
    Playlists(PlaylistSearchResult),
    Mvs(MvSearchResult),
}

/// One list pulled off an envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchItems {
    Songs(Vec<SearchSong>),
    Artists(Vec<SearchArtist>),
    Albums(Vec<SearchAlbum>),
    Playlists(Vec<SearchPlaylist>),
    Mvs(Vec<SearchMv>),
}

impl SearchItems {
    pub fn len(&self) -> usize {
        match self {
            SearchItems::Songs(v) => v.len(),
            SearchItems::Artists(v) => v.len(),
            SearchItems::Albums(v) => v.len(),
            SearchItems::Playlists(v) => v.len(),
            SearchItems::Mvs(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SearchEnvelope {
    pub fn parse(kind: MiguSearchType, body: &[u8]) -> MiguResult<Self> {
        Ok(match kind {
            MiguSearchType::Song => SearchEnvelope::Songs(serde_json::from_slice(body)?),
            MiguSearchType::Artist => SearchEnvelope::Artists(serde_json::from_slice(body)?),
            MiguSearchType::Album => SearchEnvelope::Albums(serde_json::from_slice(body)?),
            MiguSearchType::Playlist => SearchEnvelope::Playlists(serde_json::from_slice(body)?),
            MiguSearchType::Mv => SearchEnvelope::Mvs(serde_json::from_slice(body)?),
        })
    }

    pub fn meta(&self) -> &SearchMeta {
        match self {
            SearchEnvelope::Songs(r) => &r.meta,
            SearchEnvelope::Artists(r) => &r.meta,
            SearchEnvelope::Albums(r) => &r.meta,
            SearchEnvelope::Playlists(r) => &r.meta,
            SearchEnvelope::Mvs(r) => &r.meta,
        }
    }

    /// Take the list named `field`. A missing list on the wire reads as empty;
    /// a name this envelope does not have is [`MiguError::FieldNotFound`].
    pub fn take(self, field: &str) -> MiguResult<SearchItems> {
        match (self, field) {
            (SearchEnvelope::Songs(r), "musics") => {
                Ok(SearchItems::Songs(r.musics.unwrap_or_default()))
            }
            (SearchEnvelope::Artists(r), "artists") => {
                Ok(SearchItems::Artists(r.artists.unwrap_or_default()))
            }
            (SearchEnvelope::Albums(r), "albums") => {
                Ok(SearchItems::Albums(r.albums.unwrap_or_default()))
            }
            (SearchEnvelope::Playlists(r), "playlists") => {
                Ok(SearchItems::Playlists(r.playlists.unwrap_or_default()))
            }
            (SearchEnvelope::Mvs(r), "mv") => Ok(SearchItems::Mvs(r.mv.unwrap_or_default())),
            (_, other) => Err(MiguError::FieldNotFound(other.to_string())),
        }
    }
}

/// Adapt `items` into the `output_field` list of a fresh [`SearchResult`].
pub fn aggregate(output_field: &str, items: SearchItems) -> MiguResult<SearchResult> {
    let mut result = SearchResult::default();
    match (output_field, items) {
        ("songs", SearchItems::Songs(rows)) => {
            result.songs = Some(rows.iter().map(map_search_song).collect());
        }
        ("artists", SearchItems::Artists(rows)) => {
            result.artists = Some(rows.iter().map(map_search_artist).collect());
        }
        ("albums", SearchItems::Albums(rows)) => {
            result.albums = Some(rows.iter().map(map_search_album).collect());
        }
        ("playlists", SearchItems::Playlists(rows)) => {
            result.playlists = Some(rows.iter().map(map_search_playlist).collect());
        }
        ("videos", SearchItems::Mvs(rows)) => {
            result.videos = Some(rows.iter().map(map_search_mv).collect());
        }
        (other, _) => return Err(MiguError::FieldNotFound(other.to_string())),
    }
    Ok(result)
}

/// Read the routed list off `envelope` and adapt it.
pub fn collect(kind: SearchType, envelope: SearchEnvelope) -> MiguResult<SearchResult> {
    let route = route(kind);
    let items = envelope.take(route.envelope_field)?;
    aggregate(route.output_field, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ALL: [SearchType; 5] = [
        SearchType::Song,
        SearchType::Album,
        SearchType::Artist,
        SearchType::Playlist,
        SearchType::Video,
    ];

    fn envelope_for(kind: MiguSearchType) -> SearchEnvelope {
        let body = json!({
            "success": true,
            "musics": [{"copyrightId": "1"}],
            "artists": [{"id": "2"}],
            "albums": [{"id": "3"}],
            "songLists": [{"id": "4"}],
            "mv": [{"copyrightId": "5"}]
        });
        SearchEnvelope::parse(kind, body.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn routing_table_is_exact() {
        let table: Vec<_> = ALL
            .iter()
            .map(|kind| {
                let r = route(*kind);
                (r.vendor.code(), r.envelope_field, r.output_field)
            })
            .collect();
        assert_eq!(
            table,
            vec![
                (2, "musics", "songs"),
                (4, "albums", "albums"),
                (1, "artists", "artists"),
                (6, "playlists", "playlists"),
                (5, "mv", "videos"),
            ]
        );
    }

    #[test]
    fn each_type_fills_only_its_list() {
        for kind in ALL {
            let result = collect(kind, envelope_for(route(kind).vendor)).unwrap();
            let filled = [
                result.songs.is_some(),
                result.albums.is_some(),
                result.artists.is_some(),
                result.playlists.is_some(),
                result.videos.is_some(),
            ];
            assert_eq!(filled.iter().filter(|f| **f).count(), 1, "{kind:?}");
        }

        let result = collect(SearchType::Playlist, envelope_for(MiguSearchType::Playlist)).unwrap();
        assert_eq!(result.playlists.unwrap()[0].identifier, "4");
        let result = collect(SearchType::Video, envelope_for(MiguSearchType::Mv)).unwrap();
        assert_eq!(result.videos.unwrap()[0].identifier, "5");
    }

    #[test]
    fn wrong_field_is_field_not_found() {
        let err = envelope_for(MiguSearchType::Song).take("albums").unwrap_err();
        assert!(matches!(err, MiguError::FieldNotFound(f) if f == "albums"));

        // The wire name is not the canonical field name.
        let err = envelope_for(MiguSearchType::Playlist)
            .take("songLists")
            .unwrap_err();
        assert!(matches!(err, MiguError::FieldNotFound(_)));

        // Envelope for one type, route for another.
        let err = collect(SearchType::Album, envelope_for(MiguSearchType::Song)).unwrap_err();
        assert!(matches!(err, MiguError::FieldNotFound(f) if f == "albums"));
    }

    #[test]
    fn wrong_output_field_is_field_not_found() {
        let items = SearchItems::Songs(Vec::new());
        assert!(matches!(
            aggregate("videos", items),
            Err(MiguError::FieldNotFound(f)) if f == "videos"
        ));
    }

    #[test]
    fn missing_list_reads_as_empty() {
        let envelope =
            SearchEnvelope::parse(MiguSearchType::Song, br#"{"success": false}"#).unwrap();
        assert_eq!(envelope.meta().success, Some(false));
        let result = collect(SearchType::Song, envelope).unwrap();
        assert_eq!(result.songs, Some(Vec::new()));
    }

    #[test]
    fn malformed_body_is_parse_failure() {
        let err = SearchEnvelope::parse(MiguSearchType::Song, b"<html>").unwrap_err();
        assert!(matches!(err, MiguError::ParseFailure(_)));
    }

    #[test]
    fn unknown_type_code_is_unsupported() {
        assert_eq!(parse_search_type("so").unwrap(), SearchType::Song);
        assert!(matches!(
            parse_search_type("lyric"),
            Err(MiguError::UnsupportedSearchType(t)) if t == "lyric"
        ));
    }
}
