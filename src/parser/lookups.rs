use std::collections::HashMap;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<(), Error>;

// A statement starts only on a token that has a handler here; any other
// lookahead ends the statement list.
pub fn create_token_lookups(parser: &mut Parser) {
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::Type, parse_decl_stmt);
    parser.stmt(TokenKind::Identifier, parse_use_stmt);
}

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
