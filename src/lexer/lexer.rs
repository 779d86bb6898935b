use lazy_static::lazy_static;
use regex::bytes::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{lookup_word, Token, TokenKind};

lazy_static! {
    // Byte mode: comment bodies need not be valid UTF-8
    static ref SKIP_PATTERN: Regex = Regex::new(r"(?-u)^(?:[ \t\r\n]+|//[^\n]*)+").unwrap();
    static ref WORD_PATTERN: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new(r"^[0-9]+").unwrap();
}

/// Pulls tokens one at a time from a source buffer.
///
/// The scanner holds no token lookahead of its own, only a cursor into the
/// buffer and the position of the byte under it. Once the input is
/// exhausted every call to [`Scanner::scan`] returns `EOF`.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a [u8],
    offset: usize,
    position: Position,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Scanner {
            source,
            offset: 0,
            position: Position::start(),
        }
    }

    /// Scans the next token.
    pub fn scan(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();

        let position = self.position;
        let Some(&ch) = self.at() else {
            return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), position));
        };

        let token = if let Some(word) = self.match_pattern(&WORD_PATTERN) {
            let kind = lookup_word(&word);
            let literal = if kind.is_literal() { word } else { String::new() };
            MK_TOKEN!(kind, literal, position)
        } else if let Some(digits) = self.match_pattern(&NUMBER_PATTERN) {
            MK_TOKEN!(TokenKind::Int, digits, position)
        } else {
            let kind = self.scan_operator(ch, position)?;
            MK_TOKEN!(kind, String::new(), position)
        };

        trace!(token = %token, %position, "scanned token");
        Ok(token)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn at_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    fn at(&self) -> Option<&u8> {
        self.source.get(self.offset)
    }

    fn remainder(&self) -> &'a [u8] {
        &self.source[self.offset..]
    }

    /// Consumes one byte, keeping the position in step.
    fn bump(&mut self) {
        if let Some(&ch) = self.at() {
            if ch == b'\n' {
                self.position.line += 1;
                self.position.column = 0;
            }
            self.position.column += 1;
            self.offset += 1;
        }
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    /// Consumes the current byte if it equals `expected`.
    fn eat(&mut self, expected: u8) -> bool {
        if self.at() == Some(&expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn match_pattern(&mut self, regex: &Regex) -> Option<String> {
        let matched = regex.find(self.remainder())?;
        let text = String::from_utf8_lossy(matched.as_bytes()).into_owned();
        self.advance_n(matched.end());
        Some(text)
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = SKIP_PATTERN.find(self.remainder()) {
            self.advance_n(matched.end());
        }
    }

    fn scan_operator(&mut self, ch: u8, position: Position) -> Result<TokenKind, Error> {
        self.bump();

        let kind = match ch {
            b'+' => {
                if self.eat(b'+') {
                    TokenKind::Inc
                } else if self.eat(b'=') {
                    TokenKind::AddAssign
                } else {
                    TokenKind::Add
                }
            }
            b'-' => {
                if self.eat(b'-') {
                    TokenKind::Dec
                } else if self.eat(b'=') {
                    TokenKind::SubAssign
                } else if self.eat(b'>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Sub
                }
            }
            b'*' => self.with_assign(TokenKind::Mul, TokenKind::MulAssign),
            b'/' => self.with_assign(TokenKind::Quo, TokenKind::QuoAssign),
            b'%' => self.with_assign(TokenKind::Rem, TokenKind::RemAssign),
            b'&' => {
                if self.eat(b'&') {
                    TokenKind::LAnd
                } else {
                    TokenKind::And
                }
            }
            b'|' => {
                if self.eat(b'|') {
                    TokenKind::LOr
                } else {
                    TokenKind::Or
                }
            }
            b'^' => TokenKind::Xor,
            b'=' => self.with_assign(TokenKind::Assign, TokenKind::Eql),
            b'!' => self.with_assign(TokenKind::Not, TokenKind::Neq),
            b'<' => {
                if self.eat(b'<') {
                    TokenKind::Shl
                } else if self.eat(b'=') {
                    TokenKind::Leq
                } else {
                    TokenKind::Lss
                }
            }
            b'>' => {
                if self.eat(b'>') {
                    TokenKind::Shr
                } else if self.eat(b'=') {
                    TokenKind::Geq
                } else {
                    TokenKind::Gtr
                }
            }
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'~' => TokenKind::Tilde,
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedCharacter {
                        character: ch as char,
                    },
                    position,
                ))
            }
        };

        Ok(kind)
    }

    /// Picks `with_eq` when the next byte is `=`, else `plain`.
    fn with_assign(&mut self, plain: TokenKind, with_eq: TokenKind) -> TokenKind {
        if self.eat(b'=') {
            with_eq
        } else {
            plain
        }
    }
}

/// Scans the whole buffer, up to and including the first `EOF` token.
pub fn tokenize(source: &[u8]) -> Result<Vec<Token>, Error> {
    let mut scanner = Scanner::new(source);
    let mut tokens = vec![];

    loop {
        let token = scanner.scan()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
