use super::{
    ast::{Ident, TypeName},
    expressions::Expr,
    statements::BlockStmt,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Var(VarDecl),
    Func(FuncDecl),
}

impl Decl {
    /// The identifier this declaration introduces.
    pub fn name(&self) -> &Ident {
        match self {
            Decl::Var(decl) => &decl.name,
            Decl::Func(decl) => &decl.name,
        }
    }
}

/// `let [mut] name: type = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Ident,
    pub mutable: bool,
    pub ty: TypeName,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Ident,
    pub ty: TypeName,
}

/// `fn name(params) [-> return_type] { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: Ident,
    pub params: Vec<Param>,
    pub return_type: Option<TypeName>,
    pub body: BlockStmt,
}
