use crate::analysis::token::Token;

/// One stage of the analysis pipeline, applied after tokenization
pub trait TokenFilter: Send + Sync {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token>;
}
