use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::AlreadyDeclared { .. } => "AlreadyDeclared",
            ErrorImpl::UndeclaredIdentifier { .. } => "UndeclaredIdentifier",
            ErrorImpl::DeclarationOutsideBlock { .. } => "DeclarationOutsideBlock",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::UnreadableSource { .. } => "UnreadableSource",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { expected, found, .. } => ErrorTip::Suggestion(format!(
                "Expected {}, found `{}`",
                expected, found
            )),
            ErrorImpl::AlreadyDeclared { name } => ErrorTip::Suggestion(format!(
                "`{}` is already declared in this block, rename one of them",
                name
            )),
            ErrorImpl::UndeclaredIdentifier { name } => ErrorTip::Suggestion(format!(
                "Declare `{}` with a type before using it",
                name
            )),
            ErrorImpl::DeclarationOutsideBlock { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "At most {} blocks may be open at once",
                limit
            )),
            ErrorImpl::UnreadableSource { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SyntaxError: {} on line {}.", self.internal_error, self.line)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("{message}")]
    ExpectedToken {
        expected: TokenKind,
        found: String,
        message: String,
    },
    #[error("Id `{name}` was defined")]
    AlreadyDeclared { name: String },
    #[error("Id `{name}` not found")]
    UndeclaredIdentifier { name: String },
    #[error("Id `{name}` declared outside of any block")]
    DeclarationOutsideBlock { name: String },
    #[error("Blocks nested deeper than {limit}")]
    NestingTooDeep { limit: usize },
    #[error("Cannot read {source_name}: {reason}")]
    UnreadableSource { source_name: String, reason: String },
}
