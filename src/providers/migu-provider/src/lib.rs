//! Migu music provider for the fuo host.
//!
//! Talks to the vendor's mobile-web JSON endpoints and adapts what comes back
//! into host models. Every call blocks.

pub mod client;
pub mod config;
pub mod error;
mod lenient;
pub mod mapping;
pub mod models;
pub mod pager;
pub mod plugin;
pub mod schema;
pub mod search;
pub mod transport;

pub use client::MiguClient;
pub use config::{MiguConfig, MiguConfigOverrides};
pub use error::{MiguError, MiguResult};
pub use models::{CacheCell, Fetchable, MiguAlbum};
pub use pager::SongPager;
pub use plugin::{disable, enable};

use fuo_core::models::{Album, Artist, Media, Mv, Playlist, Quality, SearchResult, Song};
use fuo_core::{
    Provider, ProviderCapabilities, ProviderError, ProviderResult, SearchType, SequentialReader,
};
use mapping::{map_mv_detail, map_playlist_song};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::warn;

pub const PROVIDER_ID: &str = "migu";
pub const PROVIDER_NAME: &str = "咪咕音乐";
pub const PROVIDER_SYMBOL: &str = "🎵️ ";

/// Container and bitrate (kbps) the stream endpoint serves for `quality`.
pub fn media_format(quality: Quality) -> (&'static str, u32) {
    match quality {
        Quality::Shq => ("flac", 2000),
        Quality::Hq | Quality::Sq | Quality::Lq => ("mp3", 320),
    }
}

pub struct MiguProvider {
    client: Arc<MiguClient>,
}

impl MiguProvider {
    pub fn new(config: MiguConfig) -> MiguResult<Self> {
        Ok(Self::with_client(Arc::new(MiguClient::new(config)?)))
    }

    pub fn with_client(client: Arc<MiguClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &MiguClient {
        &self.client
    }

    /// First page of results for `keyword`.
    pub fn search_by_type(&self, keyword: &str, kind: SearchType) -> MiguResult<SearchResult> {
        let route = search::route(kind);
        let envelope =
            self.client
                .search(keyword, route.vendor, 1, self.client.config().page_size)?;
        search::collect(kind, envelope)
    }

    /// Search by host type code (`so`, `al`, `ar`, `pl`, `vi`).
    pub fn search_by_code(&self, keyword: &str, code: &str) -> MiguResult<SearchResult> {
        self.search_by_type(keyword, search::parse_search_type(code)?)
    }

    pub fn album(&self, identifier: &str) -> MiguResult<MiguAlbum> {
        MiguAlbum::fetch(&self.client, identifier)
    }

    pub fn artist_song_pager(&self, identifier: &str) -> MiguResult<SongPager<'_>> {
        let client = &self.client;
        SongPager::new(
            identifier,
            client.config().page_size,
            Box::new(move |id: &str, page: u32, size: u32| {
                client
                    .artist_songs(id, page, size)
                    .map(|list| list.result.unwrap_or_default())
            }),
        )
    }

    pub fn album_song_pager(&self, identifier: &str) -> MiguResult<SongPager<'_>> {
        let client = &self.client;
        SongPager::new(
            identifier,
            client.config().page_size,
            Box::new(move |id: &str, page: u32, size: u32| {
                client
                    .album_songs(id, page, size)
                    .map(|list| list.result.unwrap_or_default())
            }),
        )
    }

    pub fn playlist_songs(&self, identifier: &str) -> MiguResult<Vec<Song>> {
        let detail = self.client.playlist_detail(identifier)?;
        let playlist = detail
            .first_playlist()
            .ok_or_else(|| MiguError::ResourceNotFound(format!("playlist {identifier}")))?;
        let contents = self.client.playlist_songs(
            identifier,
            playlist.playlist_type.unwrap_or(1),
            playlist.content_count.unwrap_or(0),
        )?;
        Ok(contents
            .content_list
            .unwrap_or_default()
            .iter()
            .map(map_playlist_song)
            .collect())
    }

    /// `Ok(None)` when the MV has no playable URL.
    pub fn mv(&self, identifier: &str) -> MiguResult<Option<Mv>> {
        let result = self.client.mv_detail(identifier)?;
        let detail = result
            .data
            .ok_or_else(|| MiguError::ResourceNotFound(format!("mv {identifier}")))?;
        Ok(map_mv_detail(&detail))
    }

    /// Songs from search or listings lack tiers and content id; load the detail.
    fn complete<'s>(&self, song: &'s Song) -> MiguResult<Cow<'s, Song>> {
        if song.qualities.is_empty() || song.content_id.is_empty() {
            Song::fetch(&self.client, &song.identifier).map(Cow::Owned)
        } else {
            Ok(Cow::Borrowed(song))
        }
    }

    pub fn media(&self, song: &Song, quality: Quality) -> ProviderResult<Media> {
        let song = self.complete(song)?;
        if !song.qualities.contains(&quality) {
            return Err(ProviderError::NotSupported {
                operation: format!("quality {quality} for song {}", song.identifier),
            });
        }
        let url = self
            .client
            .resolve_stream_url(&song.identifier, &song.content_id, quality)?;
        let (format, bitrate) = media_format(quality);
        Ok(Media {
            url,
            format: Some(format.to_string()),
            bitrate: Some(bitrate),
        })
    }
}

impl Provider for MiguProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            playlists: true,
            lyrics: true,
            mv: true,
            multi_quality: true,
        }
    }

    fn search(&self, keyword: &str, kind: SearchType) -> ProviderResult<SearchResult> {
        Ok(self.search_by_type(keyword, kind)?)
    }

    fn get_song(&self, identifier: &str) -> ProviderResult<Song> {
        Ok(Song::fetch(&self.client, identifier)?)
    }

    fn get_album(&self, identifier: &str) -> ProviderResult<Album> {
        Ok(Album::fetch(&self.client, identifier)?)
    }

    fn get_artist(&self, identifier: &str) -> ProviderResult<Artist> {
        Ok(Artist::fetch(&self.client, identifier)?)
    }

    fn list_album_songs(&self, identifier: &str) -> ProviderResult<SequentialReader<'_, Song>> {
        Ok(self.album_song_pager(identifier)?.into_reader())
    }

    fn list_artist_songs(&self, identifier: &str) -> ProviderResult<SequentialReader<'_, Song>> {
        Ok(self.artist_song_pager(identifier)?.into_reader())
    }

    fn song_media(&self, song: &Song, quality: Quality) -> ProviderResult<Media> {
        self.media(song, quality)
    }

    fn get_playlist(&self, identifier: &str) -> ProviderResult<Playlist> {
        Ok(Playlist::fetch(&self.client, identifier)?)
    }

    fn list_playlist_songs(&self, identifier: &str) -> ProviderResult<SequentialReader<'_, Song>> {
        Ok(SequentialReader::from_vec(self.playlist_songs(identifier)?))
    }

    fn get_mv(&self, identifier: &str) -> ProviderResult<Option<Mv>> {
        Ok(self.mv(identifier)?)
    }

    fn list_quality(&self, song: &Song) -> Vec<Quality> {
        match self.complete(song) {
            Ok(song) => song.qualities.clone(),
            Err(err) => {
                warn!(song = %song.identifier, error = %err, "could not load song qualities");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{client, FakeTransport};
    use crate::transport::{HttpResponse, Method};
    use fuo_core::provider_contract::{
        run_provider_contract, PlaylistExpectation, ProviderContractExpectations,
        SearchExpectation,
    };
    use serde_json::json;

    fn provider(transport: &Arc<FakeTransport>) -> MiguProvider {
        MiguProvider::with_client(Arc::new(client(transport)))
    }

    fn detailed_song() -> Song {
        Song {
            identifier: "600".into(),
            qualities: vec![Quality::Hq, Quality::Sq, Quality::Lq],
            content_id: "6005".into(),
            ..Default::default()
        }
    }

    #[test]
    fn song_search_end_to_end() {
        let transport = FakeTransport::new();
        transport.push_json(json!({
            "success": true,
            "keyword": "only my railgun",
            "musics": [{
                "copyrightId": "123",
                "songName": "X",
                "singerId": "1, 2",
                "singerName": "A, B"
            }]
        }));
        let result = provider(&transport)
            .search("only my railgun", SearchType::Song)
            .unwrap();

        let songs = result.songs.unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].identifier, "123");
        assert_eq!(songs[0].title.as_deref(), Some("X"));
        let artists: Vec<_> = songs[0]
            .artists
            .iter()
            .map(|a| (a.identifier.as_str(), a.name.as_deref().unwrap_or("")))
            .collect();
        assert_eq!(artists, vec![("1", "A"), ("2", "B")]);
        assert!(result.albums.is_none() && result.videos.is_none());

        let request = &transport.requests()[0];
        assert_eq!(request.query_value("type"), Some("2"));
        assert_eq!(request.query_value("rows"), Some("30"));
    }

    #[test]
    fn unknown_type_code_fails_before_any_request() {
        let transport = FakeTransport::new();
        let err = provider(&transport)
            .search_by_code("x", "lyric")
            .unwrap_err();
        assert!(matches!(err, MiguError::UnsupportedSearchType(_)));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn media_maps_quality_to_tone_and_format() {
        let transport = FakeTransport::new();
        transport.push(HttpResponse::new(305).with_header("location", "http://u/hq.mp3"));
        let media = provider(&transport)
            .song_media(&detailed_song(), Quality::Hq)
            .unwrap();
        assert_eq!(media.url, "http://u/hq.mp3");
        assert_eq!(media.format.as_deref(), Some("mp3"));
        assert_eq!(media.bitrate, Some(320));
        assert_eq!(transport.requests()[0].query_value("toneFlag"), Some("HQ"));
    }

    #[test]
    fn lossless_media_is_flac() {
        assert_eq!(media_format(Quality::Shq), ("flac", 2000));
        assert_eq!(media_format(Quality::Lq), ("mp3", 320));
    }

    #[test]
    fn unavailable_quality_is_not_supported() {
        let transport = FakeTransport::new();
        let err = provider(&transport)
            .song_media(&detailed_song(), Quality::Shq)
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotSupported { .. }));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn search_song_is_completed_before_probe() {
        let transport = FakeTransport::new();
        transport.push_json(json!({"data": {
            "copyrightId": "600",
            "qq": {"productId": "6005"}
        }}));
        transport.push(HttpResponse::new(305).with_header("location", "http://u"));
        let bare = Song {
            identifier: "600".into(),
            ..Default::default()
        };
        let media = provider(&transport).song_media(&bare, Quality::Lq).unwrap();
        assert_eq!(media.url, "http://u");

        let requests = transport.requests();
        assert_eq!(requests[1].method, Method::Head);
        assert_eq!(requests[1].query_value("contentId"), Some("6005"));
    }

    #[test]
    fn probe_failure_maps_to_provider_error() {
        let transport = FakeTransport::new();
        transport.push(HttpResponse::new(305));
        let err = provider(&transport)
            .song_media(&detailed_song(), Quality::Lq)
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotFound { .. }));
    }

    #[test]
    fn playlist_songs_use_detail_counts() {
        let transport = FakeTransport::new();
        transport.push_json(json!({"code": "000000", "rsp": {"playlist": [
            {"playListId": "42", "playListType": 2, "contentCount": 2}
        ]}}));
        transport.push_json(json!({"code": "000000", "contentList": [
            {"contentId": "1", "contentName": "a", "singerId": "7", "singerName": "S"},
            {"contentId": "2", "contentName": "b"}
        ]}));
        let provider = provider(&transport);
        let reader = provider.list_playlist_songs("42").unwrap();
        assert_eq!(reader.total(), 2);
        let songs = reader.read_all().unwrap();
        assert_eq!(songs[0].artists_name(), "S");
        assert_eq!(songs[1].identifier, "2");

        let requests = transport.requests();
        assert_eq!(requests[1].query_value("playListType"), Some("2"));
        assert_eq!(requests[1].query_value("contentCount"), Some("2"));
    }

    #[test]
    fn unknown_playlist_is_not_found() {
        let transport = FakeTransport::new();
        transport.push_json(json!({"code": "000000", "rsp": {"playlist": []}}));
        let err = provider(&transport).list_playlist_songs("0").unwrap_err();
        assert!(matches!(err, ProviderError::NotFound { .. }));
    }

    #[test]
    fn mv_without_urls_is_none() {
        let transport = FakeTransport::new();
        transport.push_json(json!({"data": {
            "copyrightId": "600",
            "videoUrlMap": {"entry": [{"key": "1080", "value": ""}]}
        }}));
        assert_eq!(provider(&transport).get_mv("600").unwrap(), None);
    }

    #[test]
    fn artist_listing_pages_lazily() {
        let transport = FakeTransport::new();
        transport.push_json(json!({"result": {
            "totalCount": 0,
            "currentPage": 0,
            "results": [{"copyrightId": "1"}]
        }}));
        transport.push_json(json!({"result": {"currentPage": 1, "results": []}}));
        let provider = provider(&transport);
        let reader = provider.list_artist_songs("112").unwrap();
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(reader.total(), 0);
        assert_eq!(reader.read_all().unwrap().len(), 1);
        assert_eq!(transport.requests()[1].query_value("pageNo"), Some("1"));
    }

    #[test]
    fn provider_contract_holds() {
        let transport = FakeTransport::new();
        transport.push_json(json!({"musics": [{"copyrightId": "60054701923", "songName": "only my railgun"}]}));
        transport.push_json(json!({"data": {
            "copyrightId": "60054701923",
            "songName": "only my railgun",
            "hasHQqq": "1",
            "qq": {"productId": "6005661JBQ8"}
        }}));
        transport.push(HttpResponse::new(305).with_header("location", "http://u/lq.mp3"));
        transport.push_json(json!({"code": "000000", "rsp": {"playlist": [{"playListId": "181694965"}]}}));

        let expectations = ProviderContractExpectations {
            provider_id: PROVIDER_ID.into(),
            search: SearchExpectation {
                keyword: "only my railgun".into(),
                expected_first_song_id: "60054701923".into(),
            },
            playlist: Some(PlaylistExpectation {
                playlist_id: "181694965".into(),
            }),
        };
        run_provider_contract(&provider(&transport), &expectations).unwrap();
        assert_eq!(transport.requests()[2].query_value("toneFlag"), Some("LQ"));
    }
}
