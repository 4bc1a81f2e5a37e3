use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref WORD_REGEX: Regex = Regex::new("^[a-z][a-z0-9]*").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new("^[ \t\n]+").unwrap();
}

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

#[derive(Clone, Copy)]
pub struct RegexPattern {
    regex: &'static Regex,
    handler: RegexHandler,
}

/// Pulls tokens out of the source one at a time.
///
/// Once the source is exhausted every further call to [`Lexer::next_token`]
/// yields an `EOF` token.
#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    source: String,
    pos: usize,
    line: u32,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            pos: 0,
            line: 1,
            patterns: vec![
                RegexPattern { regex: &*WHITESPACE_REGEX, handler: skip_handler },
                RegexPattern { regex: &*WORD_REGEX, handler: word_handler },
            ],
            source,
        }
    }

    /// 1-based line of the most recently consumed character.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn next_token(&mut self) -> Token {
        let token = self.lex();
        trace!("line {}: {}", self.line, token);
        token
    }

    fn lex(&mut self) -> Token {
        'scan: while !self.at_eof() {
            for index in 0..self.patterns.len() {
                let pattern = self.patterns[index];
                if !pattern.regex.is_match(self.remainder()) {
                    continue;
                }

                match (pattern.handler)(self, pattern.regex) {
                    Some(token) => return token,
                    None => continue 'scan,
                }
            }

            return punctuation_handler(self);
        }

        MK_TOKEN!(TokenKind::EOF, String::new())
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder())?.as_str();
    let newlines = matched.matches('\n').count() as u32;
    let len = matched.len();

    lexer.line += newlines;
    lexer.advance_n(len);
    None
}

fn word_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let value = String::from(regex.find(lexer.remainder())?.as_str());
    lexer.advance_n(value.len());

    if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        Some(MK_TOKEN!(*kind, value))
    } else {
        Some(MK_TOKEN!(TokenKind::Identifier, value))
    }
}

fn punctuation_handler(lexer: &mut Lexer) -> Token {
    // Only reached when not at EOF, so there is always a next char.
    let ch = lexer.remainder().chars().next().unwrap_or('\0');
    lexer.advance_n(ch.len_utf8());

    MK_TOKEN!(TokenKind::punctuation(ch), ch.to_string())
}

/// Collects every token of `source`, ending with (and including) the first `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(String::from(source));
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
