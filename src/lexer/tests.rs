//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, integer and bool literals, maximal-munch
//! operators, comments, position tracking and error cases.

use super::{
    lexer::{tokenize, Scanner},
    tokens::TokenKind,
};
use crate::{errors::errors::ErrorKind, Position};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.as_bytes())
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_simple_sum() {
    let tokens = tokenize(b"1+2").unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "1");
    assert_eq!(tokens[1].kind, TokenKind::Add);
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].literal, "2");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("fn return let mut if else loop continue break"),
        vec![
            TokenKind::Fn,
            TokenKind::Return,
            TokenKind::Let,
            TokenKind::Mut,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Loop,
            TokenKind::Continue,
            TokenKind::Break,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize(b"foo bar baz_123 _underscore CamelCase").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].literal, "bar");
    assert_eq!(tokens[2].literal, "baz_123");
    assert_eq!(tokens[3].literal, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Ident);
    assert_eq!(tokens[4].literal, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifier_boundary() {
    let tokens = tokenize(b"letx").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].literal, "letx");
}

#[test]
fn test_keyword_prefix_of_identifier() {
    assert_eq!(
        kinds("loopy fnord iff"),
        vec![
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize(b"42 0 18446744073709551615").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "42");
    assert_eq!(tokens[1].literal, "0");
    assert_eq!(tokens[2].literal, "18446744073709551615");
}

#[test]
fn test_number_followed_by_word() {
    let tokens = tokenize(b"12ab").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "12");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].literal, "ab");
}

#[test]
fn test_tokenize_bools() {
    let tokens = tokenize(b"true false truth").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Bool);
    assert_eq!(tokens[0].literal, "true");
    assert_eq!(tokens[1].kind, TokenKind::Bool);
    assert_eq!(tokens[1].literal, "false");
    assert_eq!(tokens[2].kind, TokenKind::Ident);
}

#[test]
fn test_maximal_munch_assign() {
    let tokens = tokenize(b"a+=1").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].literal, "a");
    assert_eq!(tokens[1].kind, TokenKind::AddAssign);
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].literal, "1");

    let tokens = tokenize(b"a+1").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Add);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % += -= *= /= %= & | ^ << >> ++ -- && || == != < > = ! <= >= -> ~"),
        vec![
            TokenKind::Add,
            TokenKind::Sub,
            TokenKind::Mul,
            TokenKind::Quo,
            TokenKind::Rem,
            TokenKind::AddAssign,
            TokenKind::SubAssign,
            TokenKind::MulAssign,
            TokenKind::QuoAssign,
            TokenKind::RemAssign,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Xor,
            TokenKind::Shl,
            TokenKind::Shr,
            TokenKind::Inc,
            TokenKind::Dec,
            TokenKind::LAnd,
            TokenKind::LOr,
            TokenKind::Eql,
            TokenKind::Neq,
            TokenKind::Lss,
            TokenKind::Gtr,
            TokenKind::Assign,
            TokenKind::Not,
            TokenKind::Leq,
            TokenKind::Geq,
            TokenKind::Arrow,
            TokenKind::Tilde,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_operators_without_spaces() {
    // `+++` is `++` then `+`; `->>` is `->` then `>`
    assert_eq!(
        kinds("+++ ->> <<="),
        vec![
            TokenKind::Inc,
            TokenKind::Add,
            TokenKind::Arrow,
            TokenKind::Gtr,
            TokenKind::Shl,
            TokenKind::Assign,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_delimiters() {
    assert_eq!(
        kinds("(){}:;,"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    assert_eq!(
        kinds("a // comment + 1\nb"),
        vec![TokenKind::Ident, TokenKind::Ident, TokenKind::EOF]
    );
}

#[test]
fn test_comment_at_end_of_input() {
    assert_eq!(kinds("a // trailing"), vec![TokenKind::Ident, TokenKind::EOF]);
}

#[test]
fn test_comment_with_non_utf8_bytes() {
    // Latin-1 `é` is a lone 0xE9 byte
    let tokens = tokenize(b"// caf\xe9\nx").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].literal, "x");
    assert_eq!(tokens[0].position, Position::new(2, 1));
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_non_utf8_byte_outside_comment() {
    let error = tokenize(b"a \xe9").unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Lex);
    assert_eq!(*error.get_position(), Position::new(1, 3));
}

#[test]
fn test_single_slash_is_quo() {
    assert_eq!(
        kinds("a / b"),
        vec![
            TokenKind::Ident,
            TokenKind::Quo,
            TokenKind::Ident,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds(" \t\r\n "), vec![TokenKind::EOF]);
}

#[test]
fn test_eof_is_repeated() {
    let mut scanner = Scanner::new(b"x");

    assert_eq!(scanner.scan().unwrap().kind, TokenKind::Ident);
    for _ in 0..3 {
        assert_eq!(scanner.scan().unwrap().kind, TokenKind::EOF);
    }
    assert!(scanner.at_eof());
}

#[test]
fn test_scanner_position_tracks_cursor() {
    let mut scanner = Scanner::new(b"ab\n  cd");
    assert_eq!(scanner.position(), Position::new(1, 1));

    scanner.scan().unwrap();
    assert_eq!(scanner.position(), Position::new(1, 3));

    let token = scanner.scan().unwrap();
    assert_eq!(token.position, Position::new(2, 3));
    assert_eq!(scanner.position(), Position::new(2, 5));
    assert!(scanner.at_eof());
}

#[test]
fn test_positions() {
    let tokens = tokenize(b"let a\n  = 10;").unwrap();

    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].position, Position::new(1, 5));
    assert_eq!(tokens[2].position, Position::new(2, 3));
    assert_eq!(tokens[3].position, Position::new(2, 5));
    assert_eq!(tokens[4].position, Position::new(2, 7));
}

#[test]
fn test_positions_after_comment() {
    let tokens = tokenize(b"// header\nfn").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[0].position, Position::new(2, 1));
}

#[test]
fn test_unexpected_character() {
    let error = tokenize(b"let a = #;").unwrap_err();

    assert_eq!(error.get_kind(), ErrorKind::Lex);
    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(*error.get_position(), Position::new(1, 9));
}

#[test]
fn test_unexpected_character_after_valid_tokens() {
    let mut scanner = Scanner::new(b"a $");

    assert_eq!(scanner.scan().unwrap().kind, TokenKind::Ident);
    assert!(scanner.scan().is_err());
}

#[test]
fn test_keyword_classification() {
    let tokens = tokenize(b"fn mut break true letx +").unwrap();

    assert!(tokens[0].kind.is_keyword());
    assert!(tokens[1].kind.is_keyword());
    assert!(tokens[2].kind.is_keyword());
    // Literal words are not keywords
    assert!(!tokens[3].kind.is_keyword());
    assert!(tokens[3].kind.is_literal());
    assert!(!tokens[4].kind.is_keyword());
    assert!(!tokens[5].kind.is_keyword());
}

#[test]
fn test_token_display() {
    let tokens = tokenize(b"foo 7 +=").unwrap();

    assert_eq!(tokens[0].to_string(), "IDENT(foo)");
    assert_eq!(tokens[1].to_string(), "INT(7)");
    assert_eq!(tokens[2].to_string(), "+=");
    assert_eq!(tokens[3].to_string(), "EOF");
}
