use std::cmp::Ordering;
use serde::{Serialize, Deserialize};

/// Per-query tally for one candidate value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    // Valid matches across all query terms
    pub count: usize,
    // Smallest key length minus term length seen so far
    pub closest: usize,
}

impl Score {
    pub fn new(distance: usize) -> Self {
        Score {
            count: 0,
            closest: distance,
        }
    }

    pub fn record(&mut self, distance: usize) {
        self.count += 1;
        self.closest = self.closest.min(distance);
    }

    /// More hits first, then closer keys
    pub fn rank_cmp(&self, other: &Score) -> Ordering {
        other.count
            .cmp(&self.count)
            .then(self.closest.cmp(&other.closest))
    }
}

/// Value with relevance score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredValue<T> {
    pub value: T,
    pub score: Score,
}

/// Search results container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub hits: Vec<ScoredValue<T>>,
    pub total_hits: usize,
    pub took_us: u64,
}

impl<T> SearchResults<T> {
    pub fn values(self) -> Vec<T> {
        self.hits.into_iter().map(|hit| hit.value).collect()
    }
}
