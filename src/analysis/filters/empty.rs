use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// Drops tokens that normalization emptied out
pub struct EmptyTokenFilter;

impl TokenFilter for EmptyTokenFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .filter(|token| !token.is_empty())
            .collect()
    }
}
