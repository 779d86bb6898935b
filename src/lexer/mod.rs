//! Lexical analysis module.
//!
//! This module contains the scanner that converts source bytes into a
//! stream of tokens for parsing. It handles:
//!
//! - Recognition of keywords, identifiers, integer and bool literals
//! - Maximal-munch operator scanning with one byte of lookahead
//! - Line/column tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
