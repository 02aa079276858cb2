use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;
use crate::analysis::analyzer::Analyzer;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::IndexStats;
use crate::core::types::IndexEntry;
use crate::index::matches::{Match, MatchId};
use crate::index::node::TrieNode;
use crate::query::cache::QueryCache;
use crate::search::aggregator::MatchAggregator;
use crate::search::results::SearchResults;

/// Prefix search index over display strings
///
/// Every prefix of an indexed token that is at least `min_prefix_len`
/// characters long resolves to the token's value. Matches are never
/// removed: `invalidate` only hides them from later searches.
pub struct SearchIndex<T> {
    root: TrieNode,

    // Every match ever created; `MatchId` indexes into it
    arena: Vec<Match<T>>,

    // Value → all of its matches, in insertion order
    reverse: HashMap<T, Vec<MatchId>>,

    analyzer: Analyzer,
    min_prefix_len: usize,
    cache: Option<QueryCache<T>>,
}

impl<T> SearchIndex<T>
where
    T: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Build an empty index from `config`, rejecting invalid settings
    pub fn try_with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Build an empty index from `config`
    ///
    /// `config.min_prefix_len` must be at least 1; use `try_with_config`
    /// for configuration that has not been validated.
    pub fn with_config(config: &Config) -> Self {
        debug_assert!(config.min_prefix_len > 0, "min_prefix_len must be at least 1");
        SearchIndex {
            root: TrieNode::new(0),
            arena: Vec::new(),
            reverse: HashMap::new(),
            analyzer: Analyzer::prefix_index(config.normalization),
            min_prefix_len: config.min_prefix_len,
            cache: QueryCache::new(config.query_cache_size),
        }
    }

    /// Build an index from an enumeration of display strings
    pub fn build<I>(entries: I, config: &Config) -> Self
    where
        I: IntoIterator<Item = IndexEntry<T>>,
    {
        let mut index = Self::with_config(config);
        for entry in entries {
            index.insert(&entry.text, entry.value);
        }
        index
    }

    /// Insert a value under every token of `text`
    ///
    /// Returns the number of matches created (one per non-empty token).
    pub fn insert(&mut self, text: &str, value: T) -> usize {
        let keys = self.analyzer.terms(text);
        let created = keys.len();
        for key in keys {
            self.insert_single(key, value.clone());
        }

        if created > 0 {
            self.clear_cache();
        }
        created
    }

    fn insert_single(&mut self, key: String, value: T) {
        let id = MatchId(self.arena.len());

        let mut node = &mut self.root;
        for c in key.chars() {
            if node.depth() >= self.min_prefix_len {
                node.push_match(id);
            }
            node = node.child_or_insert(c);
        }
        if node.depth() >= self.min_prefix_len {
            node.push_match(id);
        }

        self.reverse.entry(value.clone()).or_default().push(id);
        self.arena.push(Match::new(key, value));
    }

    /// Hide every existing match of `value` from future searches
    ///
    /// Returns how many matches went from valid to invalid.
    pub fn invalidate(&mut self, value: &T) -> usize {
        let Some(ids) = self.reverse.get(value) else {
            return 0;
        };

        let mut invalidated = 0;
        for id in ids {
            if self.arena[id.0].invalidate() {
                invalidated += 1;
            }
        }

        if invalidated > 0 {
            self.clear_cache();
        }
        invalidated
    }

    /// Matches for a single normalized term, valid or not
    pub(crate) fn find(&self, term: &str) -> &[MatchId] {
        let mut node = &self.root;
        for c in term.chars() {
            match node.child(c) {
                Some(child) => node = child,
                None => return &[],
            }
        }
        node.matches()
    }

    pub(crate) fn get_match(&self, id: MatchId) -> &Match<T> {
        &self.arena[id.0]
    }

    /// Ranked values for a free-text query
    ///
    /// Values matching more terms come first, then values whose closest
    /// key is shortest, then the order in which they were first matched.
    pub fn search(&self, query: &str) -> Vec<T> {
        let terms = self.analyzer.terms(query);

        let Some(cache) = &self.cache else {
            return self.aggregate(&terms).aggregate_results();
        };

        let key = terms.join(" ");
        if let Some(results) = cache.get(&key) {
            return results;
        }
        let results = self.aggregate(&terms).aggregate_results();
        cache.put(key, results.clone());
        results
    }

    /// Same ranking as `search`, with the scores kept
    pub fn search_scored(&self, query: &str) -> SearchResults<T> {
        let start = Instant::now();
        let terms = self.analyzer.terms(query);
        let hits = self.aggregate(&terms).aggregate_scored();

        SearchResults {
            total_hits: hits.len(),
            hits,
            took_us: start.elapsed().as_micros() as u64,
        }
    }

    fn aggregate(&self, terms: &[String]) -> MatchAggregator<'_, T> {
        let mut aggregator = MatchAggregator::new(self);
        for term in terms {
            aggregator.search(term);
        }
        aggregator
    }

    /// True if `value` has at least one valid match
    pub fn contains(&self, value: &T) -> bool {
        self.reverse
            .get(value)
            .is_some_and(|ids| ids.iter().any(|id| self.arena[id.0].is_valid()))
    }

    pub fn normalize(&self, text: &str) -> String {
        self.analyzer.normalize(text)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            node_count: self.root.node_count(),
            match_count: self.arena.len(),
            valid_match_count: self.arena.iter().filter(|m| m.is_valid()).count(),
            value_count: self.reverse.len(),
            cache: self.cache.as_ref().map(|cache| cache.stats()),
        }
    }

    fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}

impl<T> Default for SearchIndex<T>
where
    T: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
