use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::alphanumeric::AlphanumericFilter;
use crate::analysis::filters::empty::EmptyTokenFilter;
use crate::analysis::filters::lowercase::LowercaseFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::config::NormalizationMode;

/// Text analysis pipeline
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
}

impl Analyzer {
    pub fn new(tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// Normalized terms of `text`, in order
    pub fn terms(&self, text: &str) -> Vec<String> {
        self.analyze(text)
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    /// Terms joined by a single space
    pub fn normalize(&self, text: &str) -> String {
        self.terms(text).join(" ")
    }

    /// Whitespace split, strip to `[A-Za-z0-9]`, lowercase, drop empties
    pub fn prefix_index(mode: NormalizationMode) -> Self {
        Analyzer::new(Box::new(WhitespaceTokenizer))
            .add_filter(Box::new(AlphanumericFilter::new(mode)))
            .add_filter(Box::new(LowercaseFilter))
            .add_filter(Box::new(EmptyTokenFilter))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::prefix_index(NormalizationMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_each_token_independently() {
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.terms("Computer  Science-Building!"),
                   vec!["computer", "sciencebuilding"]);
    }

    #[test]
    fn tokens_emptied_by_stripping_are_dropped() {
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.terms("Art & Design"), vec!["art", "design"]);
        assert!(analyzer.terms(" -- ").is_empty());
    }

    #[test]
    fn strip_first_keeps_later_symbols() {
        let analyzer = Analyzer::prefix_index(NormalizationMode::StripFirst);
        assert_eq!(analyzer.terms("Rock'n'Roll"), vec!["rockn'roll"]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let analyzer = Analyzer::default();
        let once = analyzer.normalize("  O'Neil's  Caf\u{e9} #42 ");
        assert_eq!(once, "oneils caf 42");
        assert_eq!(analyzer.normalize(&once), once);
    }
}
