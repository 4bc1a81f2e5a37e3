//! Error types and error handling.
//!
//! Every failure is fatal: the first error aborts the parse and is reported
//! as a single `SyntaxError: <message> on line <N>.` line.

pub mod errors;

#[cfg(test)]
mod tests;
