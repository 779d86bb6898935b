use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("return", TokenKind::Return);
        map.insert("let", TokenKind::Let);
        map.insert("mut", TokenKind::Mut);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("loop", TokenKind::Loop);
        map.insert("continue", TokenKind::Continue);
        map.insert("break", TokenKind::Break);
        // Literal words, not keywords
        map.insert("true", TokenKind::Bool);
        map.insert("false", TokenKind::Bool);
        map
    };
}

/// Maps a scanned word to its reserved token kind, or `Ident`.
pub fn lookup_word(word: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(word)
        .copied()
        .unwrap_or(TokenKind::Ident)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // Literals
    Ident,
    Int,
    Bool,

    Add, // +
    Sub, // -
    Mul, // *
    Quo, // /
    Rem, // %

    AddAssign, // +=
    SubAssign, // -=
    MulAssign, // *=
    QuoAssign, // /=
    RemAssign, // %=

    And, // &
    Or,  // |
    Xor, // ^
    Shl, // <<
    Shr, // >>

    Inc, // ++
    Dec, // --

    LAnd, // &&
    LOr,  // ||

    Eql,    // ==
    Neq,    // !=
    Lss,    // <
    Gtr,    // >
    Assign, // =
    Not,    // !
    Leq,    // <=
    Geq,    // >=

    LParen,
    LBrace,
    RParen,
    RBrace,
    Colon,
    Semicolon,
    Comma,
    Arrow, // ->
    Tilde, // ~

    // Reserved
    Fn,
    Return,
    Let,
    Mut,
    If,
    Else,
    Loop,
    Continue,
    Break,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Bool => "BOOL",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::Quo => "/",
            TokenKind::Rem => "%",
            TokenKind::AddAssign => "+=",
            TokenKind::SubAssign => "-=",
            TokenKind::MulAssign => "*=",
            TokenKind::QuoAssign => "/=",
            TokenKind::RemAssign => "%=",
            TokenKind::And => "&",
            TokenKind::Or => "|",
            TokenKind::Xor => "^",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::Inc => "++",
            TokenKind::Dec => "--",
            TokenKind::LAnd => "&&",
            TokenKind::LOr => "||",
            TokenKind::Eql => "==",
            TokenKind::Neq => "!=",
            TokenKind::Lss => "<",
            TokenKind::Gtr => ">",
            TokenKind::Assign => "=",
            TokenKind::Not => "!",
            TokenKind::Leq => "<=",
            TokenKind::Geq => ">=",
            TokenKind::LParen => "(",
            TokenKind::LBrace => "{",
            TokenKind::RParen => ")",
            TokenKind::RBrace => "}",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Arrow => "->",
            TokenKind::Tilde => "~",
            TokenKind::Fn => "fn",
            TokenKind::Return => "return",
            TokenKind::Let => "let",
            TokenKind::Mut => "mut",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Loop => "loop",
            TokenKind::Continue => "continue",
            TokenKind::Break => "break",
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Int | TokenKind::Bool)
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Fn
                | TokenKind::Return
                | TokenKind::Let
                | TokenKind::Mut
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Loop
                | TokenKind::Continue
                | TokenKind::Break
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text for literal kinds, empty otherwise.
    pub literal: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_literal() {
            write!(f, "{}({})", self.kind, self.literal)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
