//! Parser state and entry point.
//!
//! The parser keeps exactly one token of lookahead, pulled from the scanner
//! on demand, and dispatches through lookup tables:
//! - Declaration handlers
//! - Statement handlers
//! - NUD (null denotation) handlers for expression factors
//! - LED (left denotation) handlers for binary operators
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use tracing::trace;

use crate::{
    ast::ast::{File, Ident, IdentId, TypeName},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Scanner,
        tokens::{Token, TokenKind},
    },
};

use super::{
    decl::parse_decl,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, DeclHandler, DeclLookup, LEDHandler,
        LEDLookup, NUDHandler, NUDLookup, StmtHandler, StmtLookup,
    },
};

/// Deepest statement/expression nesting accepted before the parse is aborted.
pub const MAX_NESTING: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Source of tokens
    scanner: Scanner<'a>,
    /// The single token of lookahead
    current: Token,
    /// Lookup table for declaration handlers
    decl_lookup: DeclLookup,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Counter for identifier ids
    current_id: u32,
    /// Open statement and expression productions
    nesting: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser and reads the first token.
    ///
    /// # Errors
    ///
    /// Returns the scanner's error if the first token cannot be scanned.
    pub fn new(mut scanner: Scanner<'a>) -> Result<Self, Error> {
        let current = scanner.scan()?;

        Ok(Parser {
            scanner,
            current,
            decl_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            current_id: 0,
            nesting: 0,
        })
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.scanner.scan()?;
        let previous = mem::replace(&mut self.current, next);
        trace!(token = %previous, position = %previous.position, "consumed token");
        Ok(previous)
    }

    /// Consumes the current token if it is of the expected kind.
    ///
    /// # Errors
    ///
    /// Returns an `UnexpectedToken` error carrying the found token, the
    /// expected kind and the found token's position.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    found: self.current.to_string(),
                    expected: expected_kind,
                },
                self.current.position,
            ));
        }

        self.advance()
    }

    /// Builds an error for the current token when no single token was expected.
    pub fn unexpected(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                found: self.current.to_string(),
                message: message.to_string(),
            },
            self.current.position,
        )
    }

    /// Returns true until the current token is EOF.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Consumes an identifier token and gives it a fresh id.
    pub fn parse_ident(&mut self) -> Result<Ident, Error> {
        let token = self.expect(TokenKind::Ident)?;
        Ok(Ident {
            id: self.advance_id(),
            name: token.literal,
            position: token.position,
        })
    }

    /// Consumes an identifier token naming a type.
    pub fn parse_type_name(&mut self) -> Result<TypeName, Error> {
        let token = self.expect(TokenKind::Ident)?;
        Ok(TypeName {
            name: token.literal,
            position: token.position,
        })
    }

    /// Consumes an identifier if one is next, for optional labels.
    pub fn parse_optional_label(&mut self) -> Result<Option<String>, Error> {
        if self.current.kind == TokenKind::Ident {
            Ok(Some(self.advance()?.literal))
        } else {
            Ok(None)
        }
    }

    pub fn get_decl_handler(&self, kind: TokenKind) -> Option<DeclHandler> {
        self.decl_lookup.get(&kind).copied()
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    pub fn get_binding_power(&self, kind: TokenKind) -> Option<BindingPower> {
        self.binding_power_lookup.get(&kind).copied()
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a declaration handler for a token.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: DeclHandler) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Opens a nested production, failing once [`MAX_NESTING`] is exceeded.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.nesting >= MAX_NESTING {
            return Err(self.unexpected("nesting too deep"));
        }
        self.nesting += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    /// Advances the internal ID counter and returns the previous value.
    pub fn advance_id(&mut self) -> IdentId {
        let id = self.current_id;
        self.current_id += 1;
        IdentId(id)
    }
}

/// Parses every declaration the scanner yields into a [`File`].
///
/// This is the main entry point for parsing. The first scan or syntax error
/// aborts the parse and no partial tree is returned.
pub fn parse(scanner: Scanner<'_>) -> Result<File, Error> {
    let mut parser = Parser::new(scanner)?;
    create_token_lookups(&mut parser);

    let mut decls = vec![];
    while parser.has_tokens() {
        decls.push(parse_decl(&mut parser)?);
    }

    Ok(File { decls })
}
