use std::fmt::Display;

use crate::Position;

use super::declarations::Decl;

/// Identity of one identifier node.
///
/// Handed out by the parser in creation order, starting from zero for
/// every parse. Two occurrences of the same name get different ids, so the
/// symbol table can tell them apart without relying on node addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentId(pub u32);

impl Display for IdentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An identifier occurrence in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub id: IdentId,
    pub name: String,
    pub position: Position,
}

/// A declared type name, resolved later by the type checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    pub name: String,
    pub position: Position,
}

/// Parse root: the top-level declarations in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct File {
    pub decls: Vec<Decl>,
}

impl File {
    pub fn iter(&self) -> std::slice::Iter<'_, Decl> {
        self.decls.iter()
    }
}
