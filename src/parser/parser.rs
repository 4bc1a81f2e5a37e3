//! Parser state and the main entry point.
//!
//! The [`Parser`] owns everything the translation mutates: the lexer it
//! pulls tokens from, the single lookahead token, the scope stack, the
//! indentation depth and the output buffer. Grammar productions live in
//! [`super::stmt`] and only talk to the parser through the methods here.

use std::collections::HashMap;

use log::info;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    scope::scope::ScopeStack,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_code,
};

/// Most blocks that may be open at once. Each open block costs a few
/// stack frames of recursion.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The lookahead: the next unconsumed token
    current: Token,
    /// Blocks currently open, outermost first
    scopes: ScopeStack,
    /// Annotated output accumulated so far
    output: String,
    /// Indentation depth of the next emitted line
    tabs: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
}

impl Parser {
    /// Creates a parser over `source` with the lookahead already primed.
    pub fn new(source: String) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();

        Parser {
            lexer,
            current,
            scopes: ScopeStack::new(),
            output: String::new(),
            tabs: 0,
            stmt_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Consumes the current token, pulling the next one from the lexer.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Consumes the current token if it is of `expected_kind`.
    ///
    /// # Returns
    ///
    /// The consumed token, or an `ExpectedToken` error carrying `message`
    /// and the current line.
    pub fn expect_error(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.error(ErrorImpl::ExpectedToken {
                expected: expected_kind,
                found: self.current.to_string(),
                message: String::from(message),
            }));
        }

        Ok(self.advance())
    }

    /// Line of the current token.
    pub fn line(&self) -> u32 {
        self.lexer.line()
    }

    /// Wraps `error_impl` with the line the lexer is on.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.line())
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    pub fn scopes_mut(&mut self) -> &mut ScopeStack {
        &mut self.scopes
    }

    /// Appends one line at the current indentation.
    pub fn emit_line(&mut self, text: &str) {
        for _ in 0..self.tabs {
            self.output.push('\t');
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub fn indent(&mut self) {
        self.tabs += 1;
    }

    pub fn dedent(&mut self) {
        self.tabs = self.tabs.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.tabs
    }

    /// Everything emitted so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

/// Checks `source` and produces its annotated rewrite.
///
/// Each identifier use becomes a `name: type;` line, blocks are reproduced
/// with tab indentation and declarations produce no output. The first
/// error aborts the whole translation and no partial output is returned.
pub fn annotate(source: &str) -> Result<String, Error> {
    let mut parser = Parser::new(String::from(source));
    create_token_lookups(&mut parser);

    parse_code(&mut parser)?;

    info!("annotation finished, lexer stopped on line {}", parser.line());
    Ok(parser.into_output())
}
