//! Symbol tables for nested blocks.
//!
//! A [`scope::Scope`] binds names to types for one block; a
//! [`scope::ScopeStack`] keeps the currently open blocks, outermost first,
//! and resolves names innermost-first.

pub mod scope;

#[cfg(test)]
mod tests;
