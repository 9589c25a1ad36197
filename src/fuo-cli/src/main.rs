use anyhow::Result;
use clap::{Parser, Subcommand};
use fuo_core::models::{Album, Artist, Mv, Playlist, Quality, SearchResult, Song};
use fuo_core::{init_logging, App, AppDirs, AppMode, Config};
use migu_provider::search::parse_search_type;
use migu_provider::{MiguConfig, MiguConfigOverrides, MiguProvider, PROVIDER_ID};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "fuo", version, about = "Browse the Migu music catalogue")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search the catalogue
    Search {
        keyword: String,
        /// so (songs), al (albums), ar (artists), pl (playlists) or vi (videos)
        #[arg(short = 't', long = "type", default_value = "so")]
        kind: String,
    },
    /// Show a song with its qualities and lyric
    Song { id: String },
    /// Show an album and its songs
    Album {
        id: String,
        /// Walk every page instead of the first one
        #[arg(long)]
        all: bool,
    },
    /// Show an artist, optionally with all their songs
    Artist {
        id: String,
        #[arg(long)]
        songs: bool,
    },
    /// Show a playlist, optionally with its songs
    Playlist {
        id: String,
        #[arg(long)]
        songs: bool,
    },
    /// Resolve an MV to its playable URL
    Mv { id: String },
    /// Resolve a playable URL for a song
    Media {
        id: String,
        /// shq, hq, sq or lq; defaults to the best available
        #[arg(short = 'q', long)]
        quality: Option<Quality>,
    },
}

#[derive(Debug, Error)]
enum CommandError {
    #[error("provider '{0}' is not registered")]
    ProviderMissing(String),
    #[error("song {0} lists no qualities")]
    NoQualities(String),
}

fn song_line(song: &Song) -> String {
    let mut line = format!(
        "{}  {}",
        song.identifier,
        song.title.as_deref().unwrap_or("<untitled>")
    );
    let artists = song.artists_name();
    if !artists.is_empty() {
        line.push_str(&format!(" - {artists}"));
    }
    if let Some(album) = song.album.as_ref().and_then(|a| a.name.as_deref()) {
        line.push_str(&format!(" [{album}]"));
    }
    line
}

fn named_line(identifier: &str, name: Option<&str>) -> String {
    format!("{identifier}  {}", name.unwrap_or("<unnamed>"))
}

fn album_line(album: &Album) -> String {
    named_line(&album.identifier, album.name.as_deref())
}

fn artist_line(artist: &Artist) -> String {
    named_line(&artist.identifier, artist.name.as_deref())
}

fn playlist_line(playlist: &Playlist) -> String {
    named_line(&playlist.identifier, playlist.name.as_deref())
}

fn search_lines(result: &SearchResult) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(songs) = &result.songs {
        lines.extend(songs.iter().map(song_line));
    }
    if let Some(albums) = &result.albums {
        lines.extend(albums.iter().map(album_line));
    }
    if let Some(artists) = &result.artists {
        lines.extend(artists.iter().map(artist_line));
    }
    if let Some(playlists) = &result.playlists {
        lines.extend(playlists.iter().map(playlist_line));
    }
    if let Some(videos) = &result.videos {
        lines.extend(
            videos
                .iter()
                .map(|v| named_line(&v.identifier, v.title.as_deref())),
        );
    }
    lines
}

fn qualities_label(qualities: &[Quality]) -> String {
    qualities
        .iter()
        .map(Quality::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn mv_line(identifier: &str, mv: Option<&Mv>) -> String {
    match mv {
        Some(mv) => format!(
            "{}  {}  {}",
            mv.identifier,
            mv.name.as_deref().unwrap_or("<unnamed>"),
            mv.media.url
        ),
        None => format!("{identifier}  no playable MV"),
    }
}

fn print_all(lines: impl IntoIterator<Item = String>) {
    for line in lines {
        println!("{line}");
    }
}

fn run(app: &App, migu: &MiguProvider, command: Command) -> Result<()> {
    let provider = app
        .library
        .get(PROVIDER_ID)
        .ok_or_else(|| CommandError::ProviderMissing(PROVIDER_ID.into()))?;

    match command {
        Command::Search { keyword, kind } => {
            let kind = parse_search_type(&kind)?;
            tracing::info!(%keyword, %kind, "searching");
            let result = app.library.search(PROVIDER_ID, &keyword, kind)??;
            let lines = search_lines(&result);
            if lines.is_empty() {
                println!("No results for \"{keyword}\".");
            }
            print_all(lines);
        }
        Command::Song { id } => {
            let song = provider.get_song(&id)?;
            println!("{}", song_line(&song));
            println!("qualities: {}", qualities_label(&song.qualities));
            if let Some(content) = song.lyric.as_ref().and_then(|l| l.content.as_deref()) {
                println!("{content}");
            }
        }
        Command::Album { id, all } => {
            if all {
                let album = provider.get_album(&id)?;
                println!("{}", album_line(&album));
                for song in provider.list_album_songs(&id)? {
                    println!("  {}", song_line(&song?));
                }
            } else {
                let mut album = migu.album(&id)?;
                println!("{}", album_line(&album.album));
                if !album.album.description.is_empty() {
                    println!("{}", album.album.description);
                }
                print_all(
                    album
                        .songs(migu.client())?
                        .iter()
                        .map(|s| format!("  {}", song_line(s))),
                );
            }
        }
        Command::Artist { id, songs } => {
            let artist = provider.get_artist(&id)?;
            println!("{}", artist_line(&artist));
            if songs {
                let reader = provider.list_artist_songs(&id)?;
                tracing::debug!(announced = reader.total(), "listing artist songs");
                for song in reader {
                    println!("  {}", song_line(&song?));
                }
            } else if let Some(description) = &artist.description {
                println!("{description}");
            }
        }
        Command::Playlist { id, songs } => {
            let playlist = provider.get_playlist(&id)?;
            println!("{}", playlist_line(&playlist));
            if songs {
                let songs = provider.list_playlist_songs(&id)?.read_all()?;
                print_all(songs.iter().map(|s| format!("  {}", song_line(s))));
            }
        }
        Command::Mv { id } => {
            let mv = provider.get_mv(&id)?;
            println!("{}", mv_line(&id, mv.as_ref()));
        }
        Command::Media { id, quality } => {
            let song = provider.get_song(&id)?;
            let quality = match quality {
                Some(quality) => quality,
                None => provider
                    .list_quality(&song)
                    .first()
                    .copied()
                    .ok_or_else(|| CommandError::NoQualities(id.clone()))?,
            };
            let media = provider.song_media(&song, quality)?;
            println!("{quality}  {}", media.url);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dirs = AppDirs::discover()?;
    let config = Config::load_or_default(&dirs)?;
    let _logging = init_logging(&config.logging, dirs.log_dir())?;

    let overrides: MiguConfigOverrides = config.provider_settings(PROVIDER_ID)?;
    let migu = Arc::new(MiguProvider::new(
        MiguConfig::default().with_overrides(overrides),
    )?);

    let mut app = App::new(AppMode::Cli);
    migu_provider::enable(&mut app, migu.clone())?;
    let outcome = run(&app, &migu, cli.command);
    migu_provider::disable(&mut app)?;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuo_core::models::{Media, Video};

    #[test]
    fn search_defaults_to_songs() {
        let cli = Cli::try_parse_from(["fuo", "search", "only my railgun"]).unwrap();
        match cli.command {
            Command::Search { keyword, kind } => {
                assert_eq!(keyword, "only my railgun");
                assert_eq!(kind, "so");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn media_quality_is_parsed() {
        let cli = Cli::try_parse_from(["fuo", "media", "600", "-q", "hq"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Media {
                quality: Some(Quality::Hq),
                ..
            }
        ));
        assert!(Cli::try_parse_from(["fuo", "media", "600", "-q", "ultra"]).is_err());
    }

    #[test]
    fn song_line_shows_artists_and_album() {
        let song = Song {
            identifier: "123".into(),
            title: Some("X".into()),
            artists: vec![
                Artist {
                    identifier: "1".into(),
                    name: Some("A".into()),
                    ..Default::default()
                },
                Artist {
                    identifier: "2".into(),
                    name: Some("B".into()),
                    ..Default::default()
                },
            ],
            album: Some(Album {
                identifier: "9".into(),
                name: Some("Al".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(song_line(&song), "123  X - A, B [Al]");
    }

    #[test]
    fn search_lines_cover_videos() {
        let result = SearchResult {
            videos: Some(vec![Video {
                identifier: "5".into(),
                title: None,
            }]),
            ..Default::default()
        };
        assert_eq!(search_lines(&result), vec!["5  <unnamed>".to_string()]);
        assert!(search_lines(&SearchResult::default()).is_empty());
    }

    #[test]
    fn mv_line_reports_missing_url() {
        assert_eq!(mv_line("600", None), "600  no playable MV");
        let mv = Mv {
            identifier: "600".into(),
            name: Some("PV".into()),
            description: None,
            media: Media::new("http://x"),
        };
        assert_eq!(mv_line("600", Some(&mv)), "600  PV  http://x");
    }

    #[test]
    fn qualities_label_keeps_order() {
        assert_eq!(
            qualities_label(&[Quality::Shq, Quality::Sq, Quality::Lq]),
            "shq sq lq"
        );
    }
}
