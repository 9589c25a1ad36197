use crate::schema::{
    AlbumDetail, ArtistDetail, MvDetail, PlaylistDetail, PlaylistSong, SearchAlbum,
    SearchArtist, SearchMv, SearchPlaylist, SearchSong, SongDetail,
};
use fuo_core::models::{Album, Artist, Lyric, Media, Mv, Playlist, Quality, Song, Video};

fn id_or_empty(id: Option<&String>) -> String {
    id.cloned().unwrap_or_default()
}

/// Pair ids with names by position; the shorter list wins.
fn zip_artists<I, N>(ids: I, names: N) -> Vec<Artist>
where
    I: IntoIterator<Item = String>,
    N: IntoIterator<Item = String>,
{
    ids.into_iter()
        .zip(names)
        .map(|(identifier, name)| Artist {
            identifier,
            name: Some(name),
            ..Default::default()
        })
        .collect()
}

/// Tiers a song can be streamed at, highest first. `sq` and `lq` are always there.
pub fn qualities(has_sq: Option<bool>, has_hq: Option<bool>) -> Vec<Quality> {
    let mut tiers = Vec::with_capacity(4);
    if has_sq.unwrap_or(false) {
        tiers.push(Quality::Shq);
    }
    if has_hq.unwrap_or(false) {
        tiers.push(Quality::Hq);
    }
    tiers.push(Quality::Sq);
    tiers.push(Quality::Lq);
    tiers
}

pub fn map_search_song(row: &SearchSong) -> Song {
    Song {
        identifier: id_or_empty(row.copyright_id.as_ref()),
        title: row.song_name.clone().or_else(|| row.title.clone()),
        artists: zip_artists(row.artist_ids(), row.artist_names()),
        album: row.album_id.as_ref().map(|album_id| Album {
            identifier: album_id.clone(),
            name: row.album_name.clone(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn map_search_artist(row: &SearchArtist) -> Artist {
    Artist {
        identifier: id_or_empty(row.id.as_ref()),
        name: row.title.clone(),
        cover: row.artist_pic_m.clone(),
        description: None,
    }
}

pub fn map_search_album(row: &SearchAlbum) -> Album {
    Album {
        identifier: id_or_empty(row.id.as_ref()),
        name: row.title.clone(),
        cover: row.album_pic_m.clone(),
        description: String::new(),
        artists: row
            .singer
            .iter()
            .flatten()
            .map(|singer| Artist {
                identifier: id_or_empty(singer.id.as_ref()),
                name: singer.name.clone(),
                ..Default::default()
            })
            .collect(),
    }
}

pub fn map_search_playlist(row: &SearchPlaylist) -> Playlist {
    Playlist {
        identifier: id_or_empty(row.id.as_ref()),
        name: row.name.clone(),
        cover: row.img.clone(),
        description: None,
    }
}

pub fn map_search_mv(row: &SearchMv) -> Video {
    Video {
        identifier: id_or_empty(row.copyright_id.as_ref()),
        title: row.title.clone(),
    }
}

pub fn map_song_detail(detail: &SongDetail) -> Song {
    let identifier = id_or_empty(detail.copyright_id.as_ref());
    Song {
        artists: zip_artists(
            detail.singer_id.clone().unwrap_or_default(),
            detail.singer_name.clone().unwrap_or_default(),
        ),
        title: detail.song_name.clone(),
        album: None,
        qualities: qualities(detail.has_sq, detail.has_hq),
        content_id: detail.content_id(),
        url: detail.listen_url.clone(),
        mv_cpid: detail.mv_copyright_id.clone(),
        has_mv: detail.has_mv.unwrap_or(false),
        lyric: Some(Lyric {
            identifier: identifier.clone(),
            content: detail.lyric_lrc.clone(),
            trans_content: detail.fanyi_lrc.clone(),
        }),
        identifier,
    }
}

pub fn map_artist_detail(detail: &ArtistDetail) -> Artist {
    Artist {
        identifier: id_or_empty(detail.artist_id.as_ref()),
        name: detail.artist_name.clone(),
        cover: detail
            .local_artist_pic_m
            .clone()
            .or_else(|| detail.artist_pic_m.clone()),
        description: detail.intro.clone(),
    }
}

pub fn map_album_detail(detail: &AlbumDetail) -> Album {
    Album {
        identifier: id_or_empty(detail.album_id.as_ref()),
        name: detail.album_name.clone(),
        cover: detail
            .local_album_pic_m
            .clone()
            .or_else(|| detail.album_pic_m.clone()),
        description: detail.album_intro.clone().unwrap_or_default(),
        artists: Vec::new(),
    }
}

/// `None` when the vendor lists no playable URL; that is not an error.
pub fn map_mv_detail(detail: &MvDetail) -> Option<Mv> {
    let url = detail.url()?;
    Some(Mv {
        identifier: id_or_empty(detail.copyright_id.as_ref()),
        name: detail.content_name.clone(),
        description: detail.actor_name.clone(),
        media: Media::new(url),
    })
}

pub fn map_playlist_detail(detail: &PlaylistDetail) -> Playlist {
    Playlist {
        identifier: id_or_empty(detail.playlist_id.as_ref()),
        name: detail.playlist_name.clone(),
        cover: detail.image.clone(),
        description: detail.summary.clone(),
    }
}

pub fn map_playlist_song(row: &PlaylistSong) -> Song {
    Song {
        identifier: id_or_empty(row.content_id.as_ref()),
        title: row.content_name.clone(),
        artists: zip_artists(row.artist_ids(), row.artist_names()),
        ..Default::default()
    }
}
