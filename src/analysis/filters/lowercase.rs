use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// Lowercases tokens; ASCII text skips the Unicode case tables
pub struct LowercaseFilter;

impl LowercaseFilter {
    fn lower(text: &str) -> String {
        if text.is_ascii() {
            text.to_ascii_lowercase()
        } else {
            text.to_lowercase()
        }
    }
}

impl TokenFilter for LowercaseFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .map(|mut token| {
                token.text = Self::lower(&token.text);
                token
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_ascii_and_unicode() {
        let tokens = vec![
            Token::new("CSB".to_string()),
            Token::new("\u{c9}COLE".to_string()),
        ];
        let texts: Vec<_> = LowercaseFilter.filter(tokens)
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["csb", "\u{e9}cole"]);
    }
}
