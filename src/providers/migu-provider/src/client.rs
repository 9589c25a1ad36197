//! One method per vendor endpoint. No business logic lives here.

use crate::config::MiguConfig;
use crate::error::{MiguError, MiguResult};
use crate::schema::{
    AlbumDetailResult, AlbumSongsResult, ArtistDetailResult, ArtistSongsResult, MiguSearchType,
    MvDetailResult, PlaylistDetailResult, PlaylistSongsResult, SongDetailResult,
};
use crate::search::SearchEnvelope;
use crate::transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
use fuo_core::models::Quality;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

const SEARCH_PATH: &str = "migu/remoting/scr_search_tag";
const SONG_DETAIL_PATH: &str = "migu/remoting/cms_detail_tag";
const ARTIST_DETAIL_PATH: &str = "migu/remoting/cms_artist_detail_tag";
const ALBUM_DETAIL_PATH: &str = "migu/remoting/cms_album_detail_tag";
const ARTIST_SONGS_PATH: &str = "migu/remoting/cms_artist_song_list_tag";
const ALBUM_SONGS_PATH: &str = "migu/remoting/cms_album_song_list_tag";
const PLAYLIST_DETAIL_PATH: &str = "migu/remoting/query_playlist_by_id_tag";
const PLAYLIST_SONGS_PATH: &str = "migu/remoting/playlistcontents_query_tag";
const MV_DETAIL_PATH: &str = "migu/remoting/mv_detail_tag";
const LISTEN_PATH: &str = "MIGUM2.0/v1.0/content/sub/listenSong.do";

/// The vendor answers a successful stream probe with "Use Proxy".
const STREAM_PROBE_STATUS: u16 = 305;

/// Tone flag sent to the stream endpoint for each quality tier.
pub fn tone_flag(quality: Quality) -> &'static str {
    match quality {
        Quality::Shq => "SQ",
        Quality::Hq => "HQ",
        Quality::Sq => "PQ",
        Quality::Lq => "LQ",
    }
}

fn parse_base(raw: &str) -> MiguResult<Url> {
    let mut url =
        Url::parse(raw).map_err(|e| MiguError::Transport(format!("invalid base url {raw}: {e}")))?;
    // `join` drops the last path segment unless the base ends with a slash.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn host_header(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

pub struct MiguClient {
    transport: Arc<dyn Transport>,
    config: MiguConfig,
    api_base: Url,
    stream_base: Url,
    api_host: Option<String>,
}

impl std::fmt::Debug for MiguClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiguClient")
            .field("api_base", &self.api_base.as_str())
            .field("stream_base", &self.stream_base.as_str())
            .finish_non_exhaustive()
    }
}

impl MiguClient {
    /// Client over a fresh blocking `reqwest` transport.
    pub fn new(config: MiguConfig) -> MiguResult<Self> {
        Self::with_transport(Arc::new(ReqwestTransport::new()?), config)
    }

    pub fn with_transport(transport: Arc<dyn Transport>, config: MiguConfig) -> MiguResult<Self> {
        let api_base = parse_base(&config.api_base_url)?;
        let stream_base = parse_base(&config.stream_base_url)?;
        let api_host = host_header(&api_base);
        Ok(Self {
            transport,
            config,
            api_base,
            stream_base,
            api_host,
        })
    }

    pub fn config(&self) -> &MiguConfig {
        &self.config
    }

    fn endpoint(base: &Url, path: &str) -> MiguResult<String> {
        base.join(path)
            .map(String::from)
            .map_err(|e| MiguError::Transport(format!("invalid endpoint {path}: {e}")))
    }

    fn with_identity(&self, request: HttpRequest) -> HttpRequest {
        request
            .header("referer", self.config.referer.as_str())
            .header("user-agent", self.config.user_agent.as_str())
    }

    fn api_get(&self, path: &str) -> MiguResult<HttpRequest> {
        let mut request = HttpRequest::new(Method::Get, Self::endpoint(&self.api_base, path)?);
        if let Some(host) = &self.api_host {
            request = request.header("host", host.as_str());
        }
        Ok(self.with_identity(request))
    }

    fn send(&self, request: &HttpRequest) -> MiguResult<HttpResponse> {
        debug!(method = request.method.as_str(), url = %request.url, "migu request");
        self.transport.execute(request)
    }

    fn get_json<T: DeserializeOwned>(&self, request: HttpRequest) -> MiguResult<T> {
        let body = self.get_body(request)?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn get_body(&self, request: HttpRequest) -> MiguResult<Vec<u8>> {
        let response = self.send(&request)?;
        if response.status != 200 {
            warn!(status = response.status, url = %request.url, "unexpected status");
            return Err(MiguError::RemoteRequestFailed {
                status: response.status,
            });
        }
        Ok(response.body)
    }

    /// `page` is 1-based.
    pub fn search(
        &self,
        keyword: &str,
        kind: MiguSearchType,
        page: u32,
        page_size: u32,
    ) -> MiguResult<SearchEnvelope> {
        let request = self
            .api_get(SEARCH_PATH)?
            .query("rows", page_size)
            .query("type", kind.code())
            .query("keyword", keyword)
            .query("pgc", page);
        let body = self.get_body(request)?;
        SearchEnvelope::parse(kind, &body)
    }

    pub fn song_detail(&self, cpid: &str) -> MiguResult<SongDetailResult> {
        self.get_json(self.api_get(SONG_DETAIL_PATH)?.query("cpid", cpid))
    }

    pub fn artist_detail(&self, artist_id: &str) -> MiguResult<ArtistDetailResult> {
        self.get_json(self.api_get(ARTIST_DETAIL_PATH)?.query("artistId", artist_id))
    }

    pub fn album_detail(&self, album_id: &str) -> MiguResult<AlbumDetailResult> {
        self.get_json(self.api_get(ALBUM_DETAIL_PATH)?.query("albumId", album_id))
    }

    /// `page` is 1-based; the vendor counts from 0.
    pub fn artist_songs(
        &self,
        artist_id: &str,
        page: u32,
        page_size: u32,
    ) -> MiguResult<ArtistSongsResult> {
        self.get_json(
            self.api_get(ARTIST_SONGS_PATH)?
                .query("artistId", artist_id)
                .query("pageNo", page.saturating_sub(1))
                .query("pageSize", page_size),
        )
    }

    /// `page` is 1-based; the vendor counts from 0.
    pub fn album_songs(
        &self,
        album_id: &str,
        page: u32,
        page_size: u32,
    ) -> MiguResult<AlbumSongsResult> {
        self.get_json(
            self.api_get(ALBUM_SONGS_PATH)?
                .query("albumId", album_id)
                .query("pageNo", page.saturating_sub(1))
                .query("pageSize", page_size),
        )
    }

    pub fn playlist_detail(&self, playlist_id: &str) -> MiguResult<PlaylistDetailResult> {
        self.get_json(
            self.api_get(PLAYLIST_DETAIL_PATH)?
                .query("playListId", playlist_id),
        )
    }

    pub fn playlist_songs(
        &self,
        playlist_id: &str,
        playlist_type: i64,
        content_count: i64,
    ) -> MiguResult<PlaylistSongsResult> {
        self.get_json(
            self.api_get(PLAYLIST_SONGS_PATH)?
                .query("playListId", playlist_id)
                .query("playListType", playlist_type)
                .query("contentCount", content_count),
        )
    }

    pub fn mv_detail(&self, cpid: &str) -> MiguResult<MvDetailResult> {
        self.get_json(
            self.api_get(MV_DETAIL_PATH)?
                .query("cpid", cpid)
                .query("n", 3),
        )
    }

    /// Probe the stream endpoint and return the playable URL from the 305's
    /// `location`. Redirects are never followed.
    pub fn resolve_stream_url(
        &self,
        cpid: &str,
        content_id: &str,
        quality: Quality,
    ) -> MiguResult<String> {
        let request = self.with_identity(
            HttpRequest::new(Method::Head, Self::endpoint(&self.stream_base, LISTEN_PATH)?)
                .query("toneFlag", tone_flag(quality))
                .query("copyrightId", cpid)
                .query("contentId", content_id)
                .query("resourceType", 2)
                .query("channel", 0)
                .query("netType", "00")
                .query("ua", "Android_migu")
                .query("version", "5.1")
                .query("userId", self.config.stream_user_id.as_str()),
        );
        let response = self.send(&request)?;
        if response.status != STREAM_PROBE_STATUS {
            warn!(status = response.status, cpid, "stream probe did not answer 305");
            return Err(MiguError::RemoteRequestFailed {
                status: response.status,
            });
        }
        response
            .header("location")
            .map(str::to_string)
            .ok_or_else(|| MiguError::ResourceNotFound(format!("stream url for {cpid}")))
    }
}
