use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{info, warn};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::types::{EntityKind, EntityRecord};
use crate::directory::source::IndexSource;
use crate::index::search_index::SearchIndex;

/// Search index for one entity kind, built at most once
///
/// Concurrent first accesses block on a single build and all observe the
/// same instance. A failed build leaves the slot empty so it can be retried.
pub struct LazyIndex<T> {
    kind: EntityKind,
    config: Config,
    cell: OnceCell<RwLock<SearchIndex<T>>>,
    builds: AtomicUsize,
}

impl<T> LazyIndex<T>
where
    T: Clone + Eq + Hash + Debug + Send + Sync,
{
    pub fn new(kind: EntityKind, config: Config) -> Self {
        LazyIndex {
            kind,
            config,
            cell: OnceCell::new(),
            builds: AtomicUsize::new(0),
        }
    }

    pub fn get(&self) -> Option<&RwLock<SearchIndex<T>>> {
        self.cell.get()
    }

    pub fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Completed builds; never more than one
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Acquire)
    }

    pub fn get_or_build(&self, source: &dyn IndexSource<T>) -> Result<&RwLock<SearchIndex<T>>> {
        self.cell.get_or_try_init(|| self.build(source).map(RwLock::new))
    }

    fn build(&self, source: &dyn IndexSource<T>) -> Result<SearchIndex<T>> {
        info!(kind = %self.kind, "Creating search index");

        let records = source.records().map_err(|err| {
            warn!(kind = %self.kind, error = %err, "Search index source failed");
            err
        })?;

        let mut index = SearchIndex::try_with_config(&self.config)?;
        for record in &records {
            index_record(&mut index, self.kind, record);
        }

        self.builds.fetch_add(1, Ordering::AcqRel);
        let stats = index.stats();
        info!(
            kind = %self.kind,
            records = records.len(),
            matches = stats.match_count,
            "Search index created"
        );
        Ok(index)
    }
}

/// Replace whatever `index` holds for `record.id` with the record's current
/// display strings
///
/// Records that are not searchable for `kind` end up invalidated only.
pub fn index_record<T>(index: &mut SearchIndex<T>, kind: EntityKind, record: &EntityRecord<T>)
where
    T: Clone + Eq + Hash + Debug,
{
    index.invalidate(&record.id);

    for entry in record.entries(kind) {
        info!(kind = %kind, id = ?entry.value, name = %entry.text, "Adding to search index");
        index.insert(&entry.text, entry.value);
    }
}
