/// Token representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: String) -> Self {
        Token { text }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
