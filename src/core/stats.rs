use serde::{Serialize, Deserialize};
use crate::core::types::EntityKind;
use crate::query::cache::CacheStats;

/// Size of a single search index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    // Trie nodes including the root
    pub node_count: usize,

    // Matches ever created, valid or not
    pub match_count: usize,
    pub valid_match_count: usize,

    // Distinct values with at least one match
    pub value_count: usize,

    pub cache: Option<CacheStats>,
}

impl IndexStats {
    /// Invalidated matches still held in memory
    pub fn dead_match_count(&self) -> usize {
        self.match_count - self.valid_match_count
    }
}

/// Stats for every index a directory has built so far
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub indexes: Vec<(EntityKind, IndexStats)>,
}

impl DirectoryStats {
    pub fn get(&self, kind: EntityKind) -> Option<&IndexStats> {
        self.indexes
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, stats)| stats)
    }
}
