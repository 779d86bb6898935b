//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the scanner's token
//! stream into a [`File`](crate::ast::ast::File). Declarations and
//! statements are parsed by recursive descent; expressions by precedence
//! climbing over per-operator binding strengths.
//!
//! The first syntax error aborts the parse. There is no recovery.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
