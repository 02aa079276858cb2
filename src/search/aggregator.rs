use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use crate::index::search_index::SearchIndex;
use crate::search::results::{Score, ScoredValue};

/// Aggregates matches for the terms of one query
pub struct MatchAggregator<'a, T> {
    index: &'a SearchIndex<T>,

    // Value → slot in `scored`
    positions: HashMap<T, usize>,

    // Kept in first-observed order until ranked
    scored: Vec<ScoredValue<T>>,
}

impl<'a, T> MatchAggregator<'a, T>
where
    T: Clone + Eq + Hash + Debug,
{
    pub fn new(index: &'a SearchIndex<T>) -> Self {
        MatchAggregator {
            index,
            positions: HashMap::new(),
            scored: Vec::new(),
        }
    }

    /// Look up one normalized term and add its valid matches to the tally
    pub fn search(&mut self, term: &str) {
        for &id in self.index.find(term) {
            let found = self.index.get_match(id);
            if !found.is_valid() {
                continue;
            }

            let distance = found.distance(term);
            let slot = match self.positions.get(&found.value) {
                Some(&slot) => slot,
                None => {
                    let slot = self.scored.len();
                    self.positions.insert(found.value.clone(), slot);
                    self.scored.push(ScoredValue {
                        value: found.value.clone(),
                        score: Score::new(distance),
                    });
                    slot
                }
            };
            self.scored[slot].score.record(distance);
        }
    }

    /// Scored values in rank order; ties keep first-observed order
    pub fn aggregate_scored(self) -> Vec<ScoredValue<T>> {
        let mut scored = self.scored;
        scored.sort_by(|a, b| a.score.rank_cmp(&b.score));
        scored
    }

    pub fn aggregate_results(self) -> Vec<T> {
        self.aggregate_scored()
            .into_iter()
            .map(|hit| hit.value)
            .collect()
    }
}
