//! Process-local trending store.

use std::collections::HashMap;

use async_trait::async_trait;
use moviehub_core::trending::DEFAULT_TRENDING_LIMIT;
use moviehub_core::{Movie, SearchRecord, TrendingEntry, TrendingError, TrendingStore};
use parking_lot::Mutex;
use uuid::Uuid;

/// In-memory search-frequency store.
///
/// Records live for the lifetime of the process. Ties in count are broken
/// by creation order, oldest first.
#[derive(Debug)]
pub struct InMemoryTrendingStore {
    records: Mutex<RecordTable>,
    limit: usize,
    image_base_url: String,
}

#[derive(Debug, Default)]
struct RecordTable {
    by_term: HashMap<String, StoredRecord>,
    next_sequence: u64,
}

#[derive(Debug, Clone)]
struct StoredRecord {
    record: SearchRecord,
    sequence: u64,
}

impl Default for InMemoryTrendingStore {
    fn default() -> Self {
        Self::new(DEFAULT_TRENDING_LIMIT, "https://image.tmdb.org/t/p/w500")
    }
}

impl InMemoryTrendingStore {
    /// Creates an empty store returning at most `limit` trending entries.
    pub fn new(limit: usize, image_base_url: impl Into<String>) -> Self {
        Self {
            records: Mutex::new(RecordTable::default()),
            limit,
            image_base_url: image_base_url.into(),
        }
    }

    /// All records, most searched first.
    pub fn records(&self) -> Vec<SearchRecord> {
        let table = self.records.lock();
        let mut stored: Vec<&StoredRecord> = table.by_term.values().collect();
        stored.sort_by(|a, b| {
            b.record
                .count
                .cmp(&a.record.count)
                .then_with(|| a.sequence.cmp(&b.sequence))
        });
        stored.into_iter().map(|s| s.record.clone()).collect()
    }
}

#[async_trait]
impl TrendingStore for InMemoryTrendingStore {
    async fn report_search(&self, query: &str, top_movie: &Movie) -> Result<(), TrendingError> {
        let mut table = self.records.lock();

        if let Some(existing) = table.by_term.get_mut(query) {
            existing.record.count += 1;
            tracing::trace!(
                "Search count for {:?} is now {}",
                query,
                existing.record.count
            );
            return Ok(());
        }

        let sequence = table.next_sequence;
        table.next_sequence += 1;
        let record = SearchRecord {
            id: Uuid::new_v4().simple().to_string(),
            search_term: query.to_string(),
            count: 1,
            movie_id: top_movie.id,
            title: top_movie.title.clone(),
            poster_url: top_movie.poster_url(&self.image_base_url),
        };
        table
            .by_term
            .insert(query.to_string(), StoredRecord { record, sequence });

        Ok(())
    }

    async fn trending(&self) -> Result<Vec<TrendingEntry>, TrendingError> {
        Ok(self
            .records()
            .iter()
            .take(self.limit)
            .map(SearchRecord::to_trending_entry)
            .collect())
    }
}
