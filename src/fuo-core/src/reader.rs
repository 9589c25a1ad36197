//! Lazy readers used by providers to stream multi-page listings.

use crate::provider::{ProviderError, ProviderResult};

type BoxedItems<'a, T> = Box<dyn Iterator<Item = ProviderResult<T>> + Send + 'a>;

/// A lazily consumed listing with a declared length.
///
/// `total` is what the provider announced up front. Providers are allowed to
/// end the underlying iterator early when the remote side turns out to hold
/// fewer items, so `total` is an upper bound for display, not a guarantee.
/// Reading it never advances the iterator.
pub struct SequentialReader<'a, T> {
    items: BoxedItems<'a, T>,
    total: usize,
}

impl<'a, T> SequentialReader<'a, T> {
    pub fn new<I>(items: I, total: usize) -> Self
    where
        I: Iterator<Item = ProviderResult<T>> + Send + 'a,
    {
        Self {
            items: Box::new(items),
            total,
        }
    }

    /// Wrap an already materialized list.
    pub fn from_vec(items: Vec<T>) -> Self
    where
        T: Send + 'a,
    {
        let total = items.len();
        Self::new(items.into_iter().map(Ok), total)
    }

    pub fn empty() -> Self
    where
        T: Send + 'a,
    {
        Self::from_vec(Vec::new())
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Drain the reader, stopping at the first error.
    pub fn read_all(self) -> ProviderResult<Vec<T>> {
        self.items.collect()
    }

    /// Read at most `n` items.
    pub fn read_range(&mut self, n: usize) -> ProviderResult<Vec<T>> {
        let mut out = Vec::with_capacity(n.min(self.total));
        for item in self.items.by_ref().take(n) {
            out.push(item?);
        }
        Ok(out)
    }
}

impl<T> Iterator for SequentialReader<'_, T> {
    type Item = Result<T, ProviderError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }
}

impl<T> std::fmt::Debug for SequentialReader<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequentialReader")
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_reports_len() {
        let reader = SequentialReader::from_vec(vec![1, 2, 3]);
        assert_eq!(reader.total(), 3);
        assert_eq!(reader.read_all().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn total_does_not_consume() {
        let pulled = std::sync::atomic::AtomicUsize::new(0);
        let items = (0..5).map(|i| {
            pulled.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(i)
        });
        let mut reader = SequentialReader::new(items, 9);
        assert_eq!(reader.total(), 9);
        assert_eq!(pulled.load(std::sync::atomic::Ordering::SeqCst), 0);
        assert_eq!(reader.read_range(2).unwrap(), vec![0, 1]);
        assert_eq!(reader.total(), 9);
    }

    #[test]
    fn read_range_is_incremental() {
        let mut reader = SequentialReader::from_vec(vec!["a", "b", "c"]);
        assert_eq!(reader.read_range(2).unwrap(), vec!["a", "b"]);
        assert_eq!(reader.read_range(2).unwrap(), vec!["c"]);
        assert!(reader.read_range(2).unwrap().is_empty());
    }

    #[test]
    fn read_all_stops_on_error() {
        let items = vec![
            Ok(1),
            Err(ProviderError::Other {
                message: "boom".into(),
            }),
            Ok(3),
        ];
        let reader = SequentialReader::new(items.into_iter(), 3);
        assert!(matches!(
            reader.read_all(),
            Err(ProviderError::Other { .. })
        ));
    }
}
