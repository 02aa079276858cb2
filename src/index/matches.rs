/// Handle to a match in the owning index's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchId(pub usize);

/// Association between one normalized token and one value
#[derive(Debug, Clone)]
pub struct Match<T> {
    pub key: String,
    pub value: T,
    key_len: usize,
    valid: bool,
}

impl<T> Match<T> {
    pub fn new(key: String, value: T) -> Self {
        let key_len = key.chars().count();
        Match {
            key,
            value,
            key_len,
            valid: true,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns true if the match was still valid
    pub fn invalidate(&mut self) -> bool {
        std::mem::replace(&mut self.valid, false)
    }

    /// Characters of the key left over after `term`
    pub fn distance(&self, term: &str) -> usize {
        self.key_len.saturating_sub(term.chars().count())
    }
}
