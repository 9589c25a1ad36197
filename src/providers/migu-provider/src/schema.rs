//! Wire shapes of the vendor's `remoting` endpoints.
//!
//! Every field is optional. Structs decode from the vendor's camelCase (plus
//! a handful of irregular names) and serialize back under their snake_case
//! field names.

use crate::lenient;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

static LIST_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s+").expect("valid regex"));

/// Split a vendor `"1, 2, 3"` list. Blank or missing input yields nothing.
///
/// Only a comma followed by whitespace separates; `"1,2"` is one entry.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    match raw.map(str::trim) {
        None | Some("") => Vec::new(),
        Some(s) => LIST_SEPARATOR.split(s).map(str::to_string).collect(),
    }
}

/// Vendor numeric search-type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MiguSearchType {
    Artist = 1,
    Song = 2,
    Album = 4,
    Mv = 5,
    Playlist = 6,
}

impl MiguSearchType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Artist),
            2 => Some(Self::Song),
            4 => Some(Self::Album),
            5 => Some(Self::Mv),
            6 => Some(Self::Playlist),
            _ => None,
        }
    }
}

// =================================================================
// Search rows (`scr_search_tag`)
// =================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SearchSong {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub album_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub album_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub copyright_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mp3: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub song_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mv_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub lyrics: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mv_copyright_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub singer_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub cover: Option<String>,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub has_mv: Option<bool>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub singer_name: Option<String>,
    #[serde(
        default,
        rename(deserialize = "hasSQqq"),
        deserialize_with = "lenient::boolean"
    )]
    pub has_sq: Option<bool>,
    #[serde(
        default,
        rename(deserialize = "hasHQqq"),
        deserialize_with = "lenient::boolean"
    )]
    pub has_hq: Option<bool>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub artist: Option<String>,
}

impl SearchSong {
    pub fn artist_ids(&self) -> Vec<String> {
        split_list(self.singer_id.as_deref())
    }

    pub fn artist_names(&self) -> Vec<String> {
        split_list(self.singer_name.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SearchArtist {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub full_song_total: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub album_num: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub artist_pic_l: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub artist_pic_m: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub artist_pic_s: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub song_num: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub highlight_str: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SearchAlbumSinger {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SearchAlbum {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub album_pic_s: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub album_pic_m: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub album_pic_l: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub movie_name: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub full_song_total: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default)]
    pub singer: Option<Vec<SearchAlbumSinger>>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub song_num: Option<i64>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub publish_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub highlight_str: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SearchPlaylist {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub img: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub keep_num: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub music_num: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub highlight_str: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub play_num: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub priority: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub share_num: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub songlist_type: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SearchMv {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub album_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub album_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub copyright_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub song_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mv_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub singer_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub singer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub artist: Option<String>,
}

// =================================================================
// Detail payloads
// =================================================================

/// `cms_detail_tag`; also the row type of song lists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SongDetail {
    #[serde(
        default,
        rename(deserialize = "songId"),
        deserialize_with = "lenient::string"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub song_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub copyright_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub lyric_lrc: Option<String>,
    /// Translated lyric.
    #[serde(default, deserialize_with = "lenient::string")]
    pub fanyi_lrc: Option<String>,
    #[serde(
        default,
        rename(deserialize = "has24Bitqq"),
        deserialize_with = "lenient::boolean"
    )]
    pub has24bit: Option<bool>,
    #[serde(
        default,
        rename(deserialize = "has3Dqq"),
        deserialize_with = "lenient::boolean"
    )]
    pub has3d: Option<bool>,
    #[serde(
        default,
        rename(deserialize = "hasHQqq"),
        deserialize_with = "lenient::boolean"
    )]
    pub has_hq: Option<bool>,
    #[serde(
        default,
        rename(deserialize = "hasSQqq"),
        deserialize_with = "lenient::boolean"
    )]
    pub has_sq: Option<bool>,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub has_mv: Option<bool>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub listen_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mv_copyright_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub pic_l: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub pic_s: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub pic_m: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub singer_id: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub singer_name: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub song_desc: Option<String>,
    /// Quality-availability blob; only `productId` is read.
    #[serde(default)]
    pub qq: Option<Map<String, Value>>,
}

impl SongDetail {
    /// The encoded-asset id, or `""` when the quality blob is missing.
    pub fn content_id(&self) -> String {
        match self.qq.as_ref().and_then(|qq| qq.get("productId")) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }
}

/// `cms_artist_detail_tag`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ArtistDetail {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub artist_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub another_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub artist_name: Option<String>,
    // The non-local picture URLs are frequently unreachable.
    #[serde(default, deserialize_with = "lenient::string")]
    pub artist_pic_l: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub artist_pic_s: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub artist_pic_m: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub local_artist_pic_l: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub local_artist_pic_s: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub local_artist_pic_m: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub awards: Option<String>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub birth_place: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub english_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub former_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub gender: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub height: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub hobby: Option<String>,
    /// Full biography.
    #[serde(default, deserialize_with = "lenient::string")]
    pub intro: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub lover: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub nation: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub represent_works: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub school: Option<String>,
    /// Names of similar artists.
    #[serde(default, deserialize_with = "lenient::string")]
    pub similar_artist: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub weight: Option<i64>,
}

/// `cms_album_detail_tag`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct AlbumDetail {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub album_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub album_intro: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub album_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub album_pic_l: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub album_pic_s: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub album_pic_m: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub local_album_pic_l: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub local_album_pic_s: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub local_album_pic_m: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub awards: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub publish_company: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub production_company: Option<String>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub publish_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub singer_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub track_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MvUrlEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MvUrlMap {
    #[serde(default)]
    pub entry: Option<Vec<MvUrlEntry>>,
}

/// `mv_detail_tag`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct MvDetail {
    #[serde(default, deserialize_with = "lenient::string")]
    pub copyright_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub content_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub actor_name: Option<String>,
    #[serde(default, rename(deserialize = "videoUrlMap"))]
    pub videos: Option<MvUrlMap>,
}

impl MvDetail {
    /// First non-empty URL in entry order.
    pub fn url(&self) -> Option<&str> {
        self.videos
            .as_ref()?
            .entry
            .as_ref()?
            .iter()
            .filter_map(|kv| kv.value.as_deref())
            .find(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PlaylistTag {
    #[serde(default, deserialize_with = "lenient::string")]
    pub tagid: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub tag_name: Option<String>,
}

/// One playlist from `query_playlist_by_id_tag`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PlaylistDetail {
    #[serde(
        default,
        rename(deserialize = "playListId"),
        deserialize_with = "lenient::string"
    )]
    pub playlist_id: Option<String>,
    #[serde(
        default,
        rename(deserialize = "playListName"),
        deserialize_with = "lenient::string"
    )]
    pub playlist_name: Option<String>,
    #[serde(
        default,
        rename(deserialize = "playListType"),
        deserialize_with = "lenient::int"
    )]
    pub playlist_type: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub content_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub channel: Option<i64>,
    #[serde(default, rename(deserialize = "tagLists"))]
    pub tag_list: Option<Vec<PlaylistTag>>,
}

/// A page of songs from the artist/album song-list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SongListSchema {
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub asc: Option<bool>,
    /// 0-based.
    #[serde(default, deserialize_with = "lenient::int")]
    pub current_page: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub page_size: Option<i64>,
    /// Often reported as 0 regardless of the real size.
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub results: Option<Vec<SongDetail>>,
}

impl SongListSchema {
    /// 1-based page number, 0 when unknown.
    pub fn page(&self) -> i64 {
        self.current_page.map_or(0, |p| p + 1)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PlaylistSong {
    #[serde(default, deserialize_with = "lenient::string")]
    pub content_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub content_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub content_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub singer_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub singer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub song_id: Option<String>,
}

impl PlaylistSong {
    pub fn artist_ids(&self) -> Vec<String> {
        split_list(self.singer_id.as_deref())
    }

    pub fn artist_names(&self) -> Vec<String> {
        split_list(self.singer_name.as_deref())
    }
}

// =================================================================
// Envelopes
// =================================================================

/// Metadata shared by every search envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SearchMeta {
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub keyword: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub page_no: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub pgt: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SongSearchResult {
    #[serde(flatten)]
    pub meta: SearchMeta,
    #[serde(default)]
    pub musics: Option<Vec<SearchSong>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArtistSearchResult {
    #[serde(flatten)]
    pub meta: SearchMeta,
    #[serde(default)]
    pub artists: Option<Vec<SearchArtist>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AlbumSearchResult {
    #[serde(flatten)]
    pub meta: SearchMeta,
    #[serde(default)]
    pub albums: Option<Vec<SearchAlbum>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlaylistSearchResult {
    #[serde(flatten)]
    pub meta: SearchMeta,
    #[serde(default, rename(deserialize = "songLists"))]
    pub playlists: Option<Vec<SearchPlaylist>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MvSearchResult {
    #[serde(flatten)]
    pub meta: SearchMeta,
    #[serde(default)]
    pub mv: Option<Vec<SearchMv>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SongDetailResult {
    #[serde(default)]
    pub data: Option<SongDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArtistDetailResult {
    #[serde(default)]
    pub data: Option<ArtistDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AlbumDetailResult {
    #[serde(default)]
    pub data: Option<AlbumDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MvDetailResult {
    #[serde(default)]
    pub data: Option<MvDetail>,
}

/// Shared by `ArtistSongsResult` and `AlbumSongsResult`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SongListResult {
    #[serde(default)]
    pub result: Option<SongListSchema>,
}

pub type ArtistSongsResult = SongListResult;
pub type AlbumSongsResult = SongListResult;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct PlaylistSongsResult {
    #[serde(default, deserialize_with = "lenient::string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub info: Option<String>,
    #[serde(default)]
    pub content_list: Option<Vec<PlaylistSong>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlaylistDetailResponse {
    #[serde(default, deserialize_with = "lenient::string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub info: Option<String>,
    #[serde(default)]
    pub playlist: Option<Vec<PlaylistDetail>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlaylistDetailResult {
    #[serde(default, deserialize_with = "lenient::int")]
    pub code: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub msg: Option<String>,
    #[serde(default)]
    pub rsp: Option<PlaylistDetailResponse>,
}

impl PlaylistDetailResult {
    pub fn first_playlist(&self) -> Option<&PlaylistDetail> {
        self.rsp.as_ref()?.playlist.as_ref()?.first()
    }
}
