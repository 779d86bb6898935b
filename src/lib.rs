#![allow(clippy::module_inception)]

use std::fmt::{Display, Write};

use crate::{
    ast::ast::File,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Scanner,
    parser::parser::parse,
    type_checker::{info::Info, type_checker::type_check},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod logger;
pub mod macros;
pub mod parser;
pub mod type_checker;

/// Line and column of a source byte, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Position of the first byte of a buffer.
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Output of a successful front-end run.
#[derive(Debug, Clone, PartialEq)]
pub struct Compilation {
    pub file: File,
    pub info: Info,
}

/// Runs scan, parse and check over `source`, stopping at the first error.
pub fn compile_source(source: &[u8]) -> Result<Compilation, Error> {
    let file = parse(Scanner::new(source))?;
    let info = type_check(&file)?;

    Ok(Compilation { file, info })
}

/// Returns the text of 1-based line `line`, without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source
        .split('\n')
        .nth(index)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: UnknownType (Unknown type `foo`, ...)
/// -> prog.nv
///   |
/// 1 | let a: foo = 1;
///   | -------^
/// ```
pub fn render_error(error: &Error, path: &str, source: &str) -> String {
    let position = error.get_position();
    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    let mut out = String::new();

    // Writing into a String cannot fail
    match error.get_tip() {
        ErrorTip::None => {
            let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_impl());
        }
        tip => {
            let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), tip);
        }
    }
    let _ = writeln!(out, "-> {}", path);
    let _ = writeln!(out, "{:>padding$}", "|");

    if let Some(line_text) = get_line_at_position(source, position.line) {
        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
        let _ = writeln!(out, "{} | {}", line_str, line_text_removed.trim_end());

        let arrows = (position.column as usize)
            .saturating_sub(removed_whitespace)
            .max(1);
        let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    }

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}
