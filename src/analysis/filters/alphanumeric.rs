use once_cell::sync::Lazy;
use regex::Regex;
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;
use crate::core::config::NormalizationMode;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^a-zA-Z0-9]").expect("static pattern"));

/// Removes characters outside `[A-Za-z0-9]`
pub struct AlphanumericFilter {
    pub mode: NormalizationMode,
}

impl AlphanumericFilter {
    pub fn new(mode: NormalizationMode) -> Self {
        AlphanumericFilter { mode }
    }

    pub fn strip(&self, text: &str) -> String {
        match self.mode {
            NormalizationMode::StripAll => DISALLOWED.replace_all(text, "").into_owned(),
            NormalizationMode::StripFirst => DISALLOWED.replace(text, "").into_owned(),
        }
    }
}

impl TokenFilter for AlphanumericFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .map(|mut token| {
                token.text = self.strip(&token.text);
                token
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_all_removes_every_symbol() {
        let filter = AlphanumericFilter::new(NormalizationMode::StripAll);
        assert_eq!(filter.strip("o'brien-smith"), "obriensmith");
        assert_eq!(filter.strip("--"), "");
    }

    #[test]
    fn strip_first_removes_only_leading_symbol() {
        let filter = AlphanumericFilter::new(NormalizationMode::StripFirst);
        assert_eq!(filter.strip("o'brien-smith"), "obrien-smith");
        assert_eq!(filter.strip("café"), "caf");
        assert_eq!(filter.strip("plain"), "plain");
    }
}
