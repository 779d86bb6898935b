use tracing::debug;

use crate::{
    ast::{
        ast::{File, Ident, TypeName},
        declarations::{Decl, FuncDecl, VarDecl},
        statements::{BlockStmt, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    info::Info,
    types::{FuncType, Object, Primitive, Type},
};

#[derive(Debug, Default)]
pub struct TypeChecker {
    pub info: Info,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker::default()
    }

    /// Resolves a declared type name against the primitive table.
    pub fn resolve_type(&self, type_name: &TypeName) -> Result<Primitive, Error> {
        Primitive::lookup(&type_name.name).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnknownType {
                    type_: type_name.name.clone(),
                },
                type_name.position,
            )
        })
    }

    fn define(&mut self, ident: &Ident, ty: Type) -> Object {
        let object = Object {
            name: ident.name.clone(),
            ty,
        };
        debug!(id = %ident.id, object = %object, "defined object");
        self.info.define(ident, object.clone());
        object
    }
}

/// Checks every top-level declaration in order and returns the symbol table.
///
/// Stops at the first unresolved type name.
pub fn type_check(file: &File) -> Result<Info, Error> {
    let mut type_checker = TypeChecker::new();

    for decl in file.iter() {
        type_check_decl(&mut type_checker, decl)?;
    }

    Ok(type_checker.info)
}

pub fn type_check_decl(type_checker: &mut TypeChecker, decl: &Decl) -> Result<(), Error> {
    match decl {
        Decl::Var(var) => type_check_var_decl(type_checker, var),
        Decl::Func(func) => type_check_func_decl(type_checker, func),
    }
}

fn type_check_var_decl(type_checker: &mut TypeChecker, decl: &VarDecl) -> Result<(), Error> {
    // Redeclaration goes unchecked: the table has no scopes to compare against
    let primitive = type_checker.resolve_type(&decl.ty)?;
    type_checker.define(&decl.name, Type::Primitive(primitive));
    Ok(())
}

fn type_check_func_decl(type_checker: &mut TypeChecker, decl: &FuncDecl) -> Result<(), Error> {
    let mut params = Vec::with_capacity(decl.params.len());
    for param in decl.params.iter() {
        let primitive = type_checker.resolve_type(&param.ty)?;
        params.push(type_checker.define(&param.name, Type::Primitive(primitive)));
    }

    let ret = match &decl.return_type {
        Some(return_type) => Some(Box::new(Type::Primitive(
            type_checker.resolve_type(return_type)?,
        ))),
        None => None,
    };

    type_checker.define(&decl.name, Type::Func(FuncType { params, ret }));

    type_check_block(type_checker, &decl.body)
}

pub fn type_check_block(type_checker: &mut TypeChecker, block: &BlockStmt) -> Result<(), Error> {
    for stmt in block.iter() {
        type_check_stmt(type_checker, stmt)?;
    }
    Ok(())
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, stmt: &Stmt) -> Result<(), Error> {
    match stmt {
        Stmt::Block(block) => type_check_block(type_checker, block),
        Stmt::Decl(decl) => type_check_decl(type_checker, &decl.decl),
        Stmt::If(if_stmt) => {
            type_check_stmt(type_checker, &if_stmt.then)?;
            match &if_stmt.otherwise {
                Some(otherwise) => type_check_stmt(type_checker, otherwise),
                None => Ok(()),
            }
        }
        Stmt::Loop(loop_stmt) => type_check_block(type_checker, &loop_stmt.body),
        // TODO: check the result against the enclosing function's return type
        // once expressions carry types.
        Stmt::Return(_) => Ok(()),
        Stmt::Expr(_) | Stmt::Break(_) | Stmt::Continue(_) => Ok(()),
    }
}
