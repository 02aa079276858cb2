use parking_lot::RwLock;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::stats::DirectoryStats;
use crate::core::types::{EntityKind, EntityRecord};
use crate::directory::lazy_index::{index_record, LazyIndex};
use crate::directory::source::IndexSource;
use crate::index::search_index::SearchIndex;

/// One search index per entity kind
///
/// Constructed once at startup and shared by reference with the modules
/// that create, rename and delete records. Each kind must be initialized
/// from its source before it is searched or mutated.
pub struct Directory<T = String> {
    users: LazyIndex<T>,
    groups: LazyIndex<T>,
    locations: LazyIndex<T>,
    events: LazyIndex<T>,
}

impl<T> Directory<T>
where
    T: Clone + Eq + Hash + Debug + Send + Sync,
{
    pub fn new(config: Config) -> Self {
        Directory {
            users: LazyIndex::new(EntityKind::User, config.clone()),
            groups: LazyIndex::new(EntityKind::Group, config.clone()),
            locations: LazyIndex::new(EntityKind::Location, config.clone()),
            events: LazyIndex::new(EntityKind::Event, config),
        }
    }

    pub fn index(&self, kind: EntityKind) -> &LazyIndex<T> {
        match kind {
            EntityKind::User => &self.users,
            EntityKind::Group => &self.groups,
            EntityKind::Location => &self.locations,
            EntityKind::Event => &self.events,
        }
    }

    /// Build the index for `kind` unless it already exists
    pub fn initialize(&self, kind: EntityKind, source: &dyn IndexSource<T>) -> Result<()> {
        self.index(kind).get_or_build(source)?;
        Ok(())
    }

    /// Record created or renamed: drop its old names, index the new ones
    pub fn upsert(&self, kind: EntityKind, record: &EntityRecord<T>) -> Result<()> {
        let index = self.built(kind)?;
        index_record(&mut index.write(), kind, record);
        Ok(())
    }

    /// Record deleted
    pub fn remove(&self, kind: EntityKind, id: &T) -> Result<()> {
        let index = self.built(kind)?;
        let invalidated = index.write().invalidate(id);
        debug!(kind = %kind, id = ?id, invalidated, "Removed record from search index");
        Ok(())
    }

    /// Ranked ids for `query`; callers fetch the full records themselves
    pub fn search(&self, kind: EntityKind, query: &str) -> Result<Vec<T>> {
        let index = self.built(kind)?;
        let results = index.read().search(query);
        Ok(results)
    }

    pub fn stats(&self) -> DirectoryStats {
        let indexes = EntityKind::ALL
            .iter()
            .filter_map(|&kind| {
                self.index(kind)
                    .get()
                    .map(|index| (kind, index.read().stats()))
            })
            .collect();
        DirectoryStats { indexes }
    }

    fn built(&self, kind: EntityKind) -> Result<&RwLock<SearchIndex<T>>> {
        self.index(kind).get().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidState,
                format!("{} search index used before initialization", kind),
            )
        })
    }
}
