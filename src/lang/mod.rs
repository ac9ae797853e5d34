/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

/// A line number, or `None` for a statement entered in immediate mode.
pub type LineNumber = Option<u16>;

/// Character range of a token or error within a statement.
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
