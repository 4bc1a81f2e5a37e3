//! Syntax-directed translation.
//!
//! The parser is a recursive-descent reader of the grammar
//!
//! ```text
//! code   = block ;
//! block  = "{" stmts "}" ;
//! stmts  = { stmt } ;
//! stmt   = block | decl | use ;
//! decl   = TYPE ID ";" ;
//! use    = ID ";" ;
//! ```
//!
//! with a single token of lookahead. While it parses it keeps the scope
//! stack up to date, rejects redeclarations and undeclared uses, and
//! accumulates the annotated rewrite of the program.

pub mod lookups;
pub mod parser;
pub mod stmt;
