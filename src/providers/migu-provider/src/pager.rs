//! Lazy multi-page song listings.

use crate::error::MiguResult;
use crate::mapping::map_song_detail;
use crate::schema::{SongDetail, SongListSchema};
use fuo_core::models::Song;
use fuo_core::{ProviderError, SequentialReader};
use std::collections::VecDeque;
use tracing::trace;

/// Fetches one page of a listing: `(identifier, page, page_size)`, page 1-based.
pub type PageFetch<'a> = Box<dyn FnMut(&str, u32, u32) -> MiguResult<SongListSchema> + Send + 'a>;

/// Iterator over every song of a listing, one page at a time.
///
/// Page 1 is fetched by [`SongPager::new`] to learn the announced total. Later
/// pages are pulled when the buffer runs dry. The first empty page ends the
/// listing even when fewer than `total_count` songs were seen, since the
/// vendor's count is unreliable.
pub struct SongPager<'a> {
    fetch: PageFetch<'a>,
    identifier: String,
    page_size: u32,
    next_page: u32,
    buffer: VecDeque<SongDetail>,
    exhausted: bool,
    total_count: usize,
}

impl<'a> SongPager<'a> {
    pub fn new(
        identifier: impl Into<String>,
        page_size: u32,
        mut fetch: PageFetch<'a>,
    ) -> MiguResult<Self> {
        let identifier = identifier.into();
        let first = fetch(&identifier, 1, page_size)?;
        let total_count = first
            .total_count
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        let buffer: VecDeque<_> = first.results.unwrap_or_default().into();
        trace!(%identifier, page = 1, rows = buffer.len(), total_count, "fetched page");
        Ok(Self {
            fetch,
            identifier,
            page_size,
            next_page: 2,
            exhausted: buffer.is_empty(),
            buffer,
            total_count,
        })
    }

    /// The total announced by the first page.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    fn pull_next_page(&mut self) -> MiguResult<()> {
        let page = self.next_page;
        let rows = (self.fetch)(&self.identifier, page, self.page_size)?
            .results
            .unwrap_or_default();
        trace!(identifier = %self.identifier, page, rows = rows.len(), "fetched page");
        self.next_page += 1;
        if rows.is_empty() {
            self.exhausted = true;
        }
        self.buffer.extend(rows);
        Ok(())
    }

    /// Hand the pager to the host as a [`SequentialReader`].
    pub fn into_reader(self) -> SequentialReader<'a, Song> {
        let count = self.total_count;
        SequentialReader::new(self.map(|item| item.map_err(ProviderError::from)), count)
    }
}

impl Iterator for SongPager<'_> {
    type Item = MiguResult<Song>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(row) = self.buffer.pop_front() {
                return Some(Ok(map_song_detail(&row)));
            }
            if self.exhausted {
                return None;
            }
            if let Err(err) = self.pull_next_page() {
                self.exhausted = true;
                return Some(Err(err));
            }
        }
    }
}
