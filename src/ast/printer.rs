//! Text rendering of the AST.
//!
//! Expressions render as s-expressions (`(+ 1 (* 2 3))`); declarations and
//! statements render as an indented tree, one construct per line.

use std::fmt::{self, Display, Formatter};

use super::{
    ast::{File, Ident, TypeName},
    declarations::{Decl, FuncDecl, Param, VarDecl},
    expressions::Expr,
    statements::{BlockStmt, Stmt},
};

impl Display for Ident {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Unary(unary) => write!(f, "({} {})", unary.op, unary.operand),
            Expr::Binary(binary) => {
                write!(f, "({} {} {})", binary.op, binary.left, binary.right)
            }
            Expr::Var(var) => write!(f, "{}", var.name),
            Expr::Assign(assign) => write!(f, "(= {} {})", assign.target, assign.value),
            Expr::Call(call) => {
                write!(f, "{}(", call.callee)?;
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expr::BasicLit(lit) => write!(f, "{}", lit.value),
        }
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

impl Display for File {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut writer = TreeWriter::new(f);
        for decl in self.iter() {
            writer.decl(decl)?;
        }
        Ok(())
    }
}

impl Display for Decl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        TreeWriter::new(f).decl(self)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        TreeWriter::new(f).stmt(self)
    }
}

struct TreeWriter<'a, 'b> {
    out: &'a mut Formatter<'b>,
    depth: usize,
}

impl<'a, 'b> TreeWriter<'a, 'b> {
    fn new(out: &'a mut Formatter<'b>) -> Self {
        TreeWriter { out, depth: 0 }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        writeln!(self.out, "{:indent$}{}", "", args, indent = self.depth * 2)
    }

    fn nested<F>(&mut self, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }

    fn decl(&mut self, decl: &Decl) -> fmt::Result {
        match decl {
            Decl::Var(var) => self.var_decl(var),
            Decl::Func(func) => self.func_decl(func),
        }
    }

    fn var_decl(&mut self, decl: &VarDecl) -> fmt::Result {
        let mutable = if decl.mutable { "mut " } else { "" };
        self.line(format_args!(
            "let {}{}: {} = {}",
            mutable, decl.name, decl.ty, decl.value
        ))
    }

    fn func_decl(&mut self, decl: &FuncDecl) -> fmt::Result {
        let params = decl
            .params
            .iter()
            .map(|param| param.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        match &decl.return_type {
            Some(ret) => self.line(format_args!("fn {}({}) -> {}", decl.name, params, ret))?,
            None => self.line(format_args!("fn {}({})", decl.name, params))?,
        }

        self.nested(|w| w.block_body(&decl.body))
    }

    fn block_body(&mut self, block: &BlockStmt) -> fmt::Result {
        for stmt in block.iter() {
            self.stmt(stmt)?;
        }
        Ok(())
    }

    fn stmt(&mut self, stmt: &Stmt) -> fmt::Result {
        match stmt {
            Stmt::Block(block) => {
                self.line(format_args!("block"))?;
                self.nested(|w| w.block_body(block))
            }
            Stmt::Return(ret) => self.line(format_args!("return {}", ret.result)),
            Stmt::Expr(expr) => self.line(format_args!("expr {}", expr.expr)),
            Stmt::Decl(decl) => self.decl(&decl.decl),
            Stmt::If(if_stmt) => {
                self.line(format_args!("if {}", if_stmt.cond))?;
                self.nested(|w| {
                    w.line(format_args!("then"))?;
                    w.nested(|w| w.stmt(&if_stmt.then))?;
                    if let Some(otherwise) = &if_stmt.otherwise {
                        w.line(format_args!("else"))?;
                        w.nested(|w| w.stmt(otherwise))?;
                    }
                    Ok(())
                })
            }
            Stmt::Loop(loop_stmt) => {
                match &loop_stmt.label {
                    Some(label) => self.line(format_args!("loop {} {}", label, loop_stmt.cond))?,
                    None => self.line(format_args!("loop {}", loop_stmt.cond))?,
                }
                self.nested(|w| w.block_body(&loop_stmt.body))
            }
            Stmt::Break(brk) => match &brk.label {
                Some(label) => self.line(format_args!("break {}", label)),
                None => self.line(format_args!("break")),
            },
            Stmt::Continue(cont) => match &cont.label {
                Some(label) => self.line(format_args!("continue {}", label)),
                None => self.line(format_args!("continue")),
            },
        }
    }
}
