use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::{Parser, MAX_NESTING_DEPTH};

pub fn parse_code(parser: &mut Parser) -> Result<(), Error> {
    parse_block_stmt(parser)
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<(), Error> {
    if parser.depth() >= MAX_NESTING_DEPTH {
        return Err(parser.error(ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        }));
    }

    parser.expect_error(TokenKind::OpenCurly, "Expect a '{'")?;
    parser.emit_line("{");
    parser.indent();
    parser.scopes_mut().push_new();

    parse_stmts(parser)?;

    parser.expect_error(TokenKind::CloseCurly, "Expect a '}'")?;
    parser.dedent();
    parser.emit_line("}");
    parser.scopes_mut().pop();

    Ok(())
}

pub fn parse_stmts(parser: &mut Parser) -> Result<(), Error> {
    loop {
        let handler = match parser.get_stmt_lookup().get(&parser.current_token_kind()) {
            Some(handler) => *handler,
            None => return Ok(()),
        };

        handler(parser)?;
    }
}

pub fn parse_decl_stmt(parser: &mut Parser) -> Result<(), Error> {
    let variable_type = parser.advance().value;
    let line = parser.line();
    let name = parser
        .expect_error(TokenKind::Identifier, "Expect a id after a type")?
        .value;
    parser.expect_error(TokenKind::Semicolon, "Expect a ';'")?;

    // Only the innermost scope is checked; shadowing an outer name is fine.
    let declared = parser.scopes_mut().declare(name, variable_type);
    declared.map_err(|error_impl| Error::new(error_impl, line))
}

pub fn parse_use_stmt(parser: &mut Parser) -> Result<(), Error> {
    let line = parser.line();
    let name = parser.advance().value;
    parser.expect_error(TokenKind::Semicolon, "Expect a ';'")?;

    let variable_type = match parser.scopes().resolve(&name) {
        Some(variable_type) => String::from(variable_type),
        None => return Err(Error::new(ErrorImpl::UndeclaredIdentifier { name }, line)),
    };

    debug!("resolved {} to {}", name, variable_type);
    parser.emit_line(&format!("{}: {};", name, variable_type));

    Ok(())
}
