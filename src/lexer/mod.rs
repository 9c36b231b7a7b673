//! Lexical analysis module for the interpreter.
//!
//! The lexer turns script text into tokens one at a time, on demand. It handles:
//!
//! - Anchored regex patterns tried in priority order
//! - Recognition of the `let` keyword, identifiers, numbers, operators and punctuation
//! - Token spans for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
