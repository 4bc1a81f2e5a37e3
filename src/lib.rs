#![allow(clippy::module_inception)]

//! A small "type getter": checks that every identifier in a block-structured
//! program is declared once per block before it is used, and rewrites each
//! use as `name: type;`.

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod scope;

extern crate regex;

pub use errors::errors::Error;
pub use parser::parser::annotate;
