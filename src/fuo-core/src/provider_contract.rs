use crate::models::Song;
use crate::provider::{Provider, ProviderError, SearchType};
use thiserror::Error;

/// Expectations supplied by a provider implementation to run the shared contract suite.
#[derive(Debug, Clone)]
pub struct ProviderContractExpectations {
    /// The provider id that `Provider::id` should return.
    pub provider_id: String,
    /// Required song search expectation; validates stable ids and metadata.
    pub search: SearchExpectation,
    /// Playlist expectations (only required if playlists capability is advertised).
    pub playlist: Option<PlaylistExpectation>,
}

/// Search expectation used to validate provider search behavior.
#[derive(Debug, Clone)]
pub struct SearchExpectation {
    pub keyword: String,
    /// The first song id expected for the keyword (deterministic ordering).
    pub expected_first_song_id: String,
}

#[derive(Debug, Clone)]
pub struct PlaylistExpectation {
    pub playlist_id: String,
}

/// Errors surfaced by the provider contract test harness.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderContractError {
    #[error("provider reported id {actual}, expected {expected}")]
    ProviderIdMismatch { expected: String, actual: String },
    #[error("search returned no songs for keyword: {keyword}")]
    EmptySearch { keyword: String },
    #[error("song search populated a non-song list")]
    SearchWrongKind,
    #[error("search returned wrong first song id: expected {expected}, got {actual}")]
    SearchWrongFirstSong { expected: String, actual: String },
    #[error("get_song returned mismatched id: expected {expected}, got {actual}")]
    SongLookupMismatch { expected: String, actual: String },
    #[error("song {song_id} lists no qualities")]
    NoQualities { song_id: String },
    #[error("media URL was empty for song {song_id}")]
    EmptyMediaUrl { song_id: String },
    #[error("provider advertises playlists capability but no playlist expectation supplied")]
    MissingPlaylistExpectation,
    #[error("get_playlist returned mismatched id: expected {expected}, got {actual}")]
    PlaylistLookupMismatch { expected: String, actual: String },
    #[error("provider does not advertise playlists but get_playlist did not return NotSupported")]
    PlaylistsNotSupportedExpected,
    #[error("provider error while running contract: {0}")]
    ProviderFailure(String),
}

fn failure(err: ProviderError) -> ProviderContractError {
    ProviderContractError::ProviderFailure(err.to_string())
}

/// Run the shared provider contract suite against a provider implementation.
///
/// Providers should call this from their crate-level tests with fixtures that
/// exist in their test setup.
pub fn run_provider_contract<P: Provider>(
    provider: &P,
    expectations: &ProviderContractExpectations,
) -> Result<(), ProviderContractError> {
    if provider.id() != expectations.provider_id {
        return Err(ProviderContractError::ProviderIdMismatch {
            expected: expectations.provider_id.clone(),
            actual: provider.id().to_string(),
        });
    }
    let song = verify_search(provider, expectations)?;
    verify_media(provider, &song)?;
    verify_playlists(provider, expectations)?;
    Ok(())
}

fn verify_search<P: Provider>(
    provider: &P,
    expectations: &ProviderContractExpectations,
) -> Result<Song, ProviderContractError> {
    let result = provider
        .search(&expectations.search.keyword, SearchType::Song)
        .map_err(failure)?;

    if result.albums.is_some()
        || result.artists.is_some()
        || result.playlists.is_some()
        || result.videos.is_some()
    {
        return Err(ProviderContractError::SearchWrongKind);
    }

    let first = result
        .songs
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| ProviderContractError::EmptySearch {
            keyword: expectations.search.keyword.clone(),
        })?;

    if first.identifier != expectations.search.expected_first_song_id {
        return Err(ProviderContractError::SearchWrongFirstSong {
            expected: expectations.search.expected_first_song_id.clone(),
            actual: first.identifier,
        });
    }

    let song = provider.get_song(&first.identifier).map_err(failure)?;
    if song.identifier != first.identifier {
        return Err(ProviderContractError::SongLookupMismatch {
            expected: first.identifier,
            actual: song.identifier,
        });
    }

    Ok(song)
}

fn verify_media<P: Provider>(provider: &P, song: &Song) -> Result<(), ProviderContractError> {
    let qualities = provider.list_quality(song);
    let lowest = qualities
        .last()
        .copied()
        .ok_or_else(|| ProviderContractError::NoQualities {
            song_id: song.identifier.clone(),
        })?;

    let media = provider.song_media(song, lowest).map_err(failure)?;
    if media.url.is_empty() {
        return Err(ProviderContractError::EmptyMediaUrl {
            song_id: song.identifier.clone(),
        });
    }
    Ok(())
}

fn verify_playlists<P: Provider>(
    provider: &P,
    expectations: &ProviderContractExpectations,
) -> Result<(), ProviderContractError> {
    if provider.capabilities().supports_playlists() {
        let expected = expectations
            .playlist
            .as_ref()
            .ok_or(ProviderContractError::MissingPlaylistExpectation)?;
        let playlist = provider
            .get_playlist(&expected.playlist_id)
            .map_err(failure)?;
        if playlist.identifier != expected.playlist_id {
            return Err(ProviderContractError::PlaylistLookupMismatch {
                expected: expected.playlist_id.clone(),
                actual: playlist.identifier,
            });
        }
    } else {
        match provider.get_playlist("irrelevant") {
            Err(ProviderError::NotSupported { .. }) => {}
            _ => return Err(ProviderContractError::PlaylistsNotSupportedExpected),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Album, Artist, Media, Playlist, Quality, SearchResult};
    use crate::provider::{ProviderCapabilities, ProviderResult};
    use crate::reader::SequentialReader;

    #[derive(Clone)]
    struct FakeProvider {
        capabilities: ProviderCapabilities,
        songs: Vec<Song>,
        playlists: Vec<Playlist>,
        media_prefix: String,
    }

    impl FakeProvider {
        fn new(playlists: bool) -> Self {
            let song = Song {
                identifier: "song-1".into(),
                title: Some("Song One".into()),
                qualities: vec![Quality::Sq, Quality::Lq],
                ..Default::default()
            };
            Self {
                capabilities: ProviderCapabilities {
                    playlists,
                    ..Default::default()
                },
                songs: vec![song],
                playlists: vec![Playlist {
                    identifier: "pl-1".into(),
                    name: Some("Favorites".into()),
                    ..Default::default()
                }],
                media_prefix: "http://media.test/".into(),
            }
        }
    }

    impl Provider for FakeProvider {
        fn id(&self) -> &str {
            "fake"
        }

        fn name(&self) -> &str {
            "Fake Provider"
        }

        fn capabilities(&self) -> ProviderCapabilities {
            self.capabilities
        }

        fn search(&self, _keyword: &str, kind: SearchType) -> ProviderResult<SearchResult> {
            match kind {
                SearchType::Song => Ok(SearchResult {
                    songs: Some(self.songs.clone()),
                    ..Default::default()
                }),
                _ => Ok(SearchResult::default()),
            }
        }

        fn get_song(&self, identifier: &str) -> ProviderResult<Song> {
            self.songs
                .iter()
                .find(|s| s.identifier == identifier)
                .cloned()
                .ok_or_else(|| ProviderError::NotFound {
                    entity: identifier.to_string(),
                })
        }

        fn get_album(&self, identifier: &str) -> ProviderResult<Album> {
            Err(ProviderError::NotFound {
                entity: identifier.to_string(),
            })
        }

        fn get_artist(&self, identifier: &str) -> ProviderResult<Artist> {
            Err(ProviderError::NotFound {
                entity: identifier.to_string(),
            })
        }

        fn list_album_songs(&self, _identifier: &str) -> ProviderResult<SequentialReader<'_, Song>> {
            Ok(SequentialReader::empty())
        }

        fn list_artist_songs(
            &self,
            _identifier: &str,
        ) -> ProviderResult<SequentialReader<'_, Song>> {
            Ok(SequentialReader::empty())
        }

        fn song_media(&self, song: &Song, quality: Quality) -> ProviderResult<Media> {
            if self.media_prefix.is_empty() {
                return Ok(Media::new(""));
            }
            Ok(Media::new(format!(
                "{}{}?q={}",
                self.media_prefix, song.identifier, quality
            )))
        }

        fn get_playlist(&self, identifier: &str) -> ProviderResult<Playlist> {
            if !self.capabilities.playlists {
                return Err(ProviderError::NotSupported {
                    operation: "get_playlist".into(),
                });
            }
            self.playlists
                .iter()
                .find(|p| p.identifier == identifier)
                .cloned()
                .ok_or_else(|| ProviderError::NotFound {
                    entity: identifier.to_string(),
                })
        }
    }

    fn expectations(playlist: bool) -> ProviderContractExpectations {
        ProviderContractExpectations {
            provider_id: "fake".into(),
            search: SearchExpectation {
                keyword: "song".into(),
                expected_first_song_id: "song-1".into(),
            },
            playlist: playlist.then(|| PlaylistExpectation {
                playlist_id: "pl-1".into(),
            }),
        }
    }

    #[test]
    fn contract_passes_with_playlists() {
        let result = run_provider_contract(&FakeProvider::new(true), &expectations(true));
        assert!(result.is_ok(), "expected contract to pass: {result:?}");
    }

    #[test]
    fn contract_validates_not_supported_when_playlists_disabled() {
        let result = run_provider_contract(&FakeProvider::new(false), &expectations(false));
        assert!(result.is_ok(), "expected contract to pass: {result:?}");
    }

    #[test]
    fn contract_requires_playlist_expectation() {
        let result = run_provider_contract(&FakeProvider::new(true), &expectations(false));
        assert_eq!(
            result,
            Err(ProviderContractError::MissingPlaylistExpectation)
        );
    }

    #[test]
    fn contract_fails_when_media_url_empty() {
        let mut provider = FakeProvider::new(true);
        provider.media_prefix.clear();
        let result = run_provider_contract(&provider, &expectations(true));
        assert!(matches!(
            result,
            Err(ProviderContractError::EmptyMediaUrl { .. })
        ));
    }

    #[test]
    fn contract_fails_on_wrong_first_song() {
        let mut provider = FakeProvider::new(false);
        provider.songs[0].identifier = "song-2".into();
        let result = run_provider_contract(&provider, &expectations(false));
        assert!(matches!(
            result,
            Err(ProviderContractError::SearchWrongFirstSong { .. })
        ));
    }
}
