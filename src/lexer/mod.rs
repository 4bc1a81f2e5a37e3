//! Lexical analysis module.
//!
//! Converts source text into a lazy stream of tokens:
//!
//! - Keywords `int`, `bool` and `char` become `Type` tokens
//! - Lowercase words (letters, then letters or digits) become identifiers
//! - Spaces, tabs and newlines are skipped; newlines bump the line counter
//! - Every other character is returned as a single-character token

pub mod lexer;
pub mod tokens;
