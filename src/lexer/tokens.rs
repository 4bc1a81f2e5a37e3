use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Type);
        map.insert("bool", TokenKind::Type);
        map.insert("char", TokenKind::Type);
        map
    };

    pub static ref PUNCTUATION_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('{', TokenKind::OpenCurly);
        map.insert('}', TokenKind::CloseCurly);
        map.insert(';', TokenKind::Semicolon);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Type,
    Identifier,

    OpenCurly,
    CloseCurly,
    Semicolon,

    // Any other single character, carried verbatim
    Symbol(char),
}

impl TokenKind {
    /// Kind of a single-character token.
    pub fn punctuation(ch: char) -> TokenKind {
        PUNCTUATION_LOOKUP
            .get(&ch)
            .copied()
            .unwrap_or(TokenKind::Symbol(ch))
    }

    pub fn has_payload(&self) -> bool {
        matches!(self, TokenKind::Type | TokenKind::Identifier)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Symbol(ch) => write!(f, "Symbol({:?})", ch),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.has_payload() {
            write!(f, "Token({}, {})", self.kind, self.value)
        } else if self.kind == TokenKind::EOF {
            write!(f, "Token(EOF)")
        } else {
            write!(f, "Token('{}')", self.value)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| *kind == self.kind)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
