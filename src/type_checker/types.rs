//! Resolved types.
//!
//! Primitive types are plain `Copy` values resolved by name through a
//! process-wide table; function types carry their parameters as objects and
//! an optional return type.

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref PRIMITIVE_LOOKUP: HashMap<&'static str, Primitive> = {
        let mut map = HashMap::new();
        for primitive in Primitive::ALL {
            map.insert(primitive.name(), primitive);
        }
        map
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
}

impl Primitive {
    pub const ALL: [Primitive; 9] = [
        Primitive::Bool,
        Primitive::U8,
        Primitive::I8,
        Primitive::U16,
        Primitive::I16,
        Primitive::U32,
        Primitive::I32,
        Primitive::U64,
        Primitive::I64,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::U8 => "u8",
            Primitive::I8 => "i8",
            Primitive::U16 => "u16",
            Primitive::I16 => "i16",
            Primitive::U32 => "u32",
            Primitive::I32 => "i32",
            Primitive::U64 => "u64",
            Primitive::I64 => "i64",
        }
    }

    pub fn lookup(name: &str) -> Option<Primitive> {
        PRIMITIVE_LOOKUP.get(name).copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Primitive(Primitive),
    Func(FuncType),
}

impl Type {
    pub fn as_func(&self) -> Option<&FuncType> {
        match self {
            Type::Func(func) => Some(func),
            Type::Primitive(_) => None,
        }
    }
}

/// Signature of a declared function.
///
/// `ret` is `None` when the declaration has no `->` clause. That is kept
/// apart from any unit-like type.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncType {
    pub params: Vec<Object>,
    pub ret: Option<Box<Type>>,
}

/// The resolved meaning of one declared identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub name: String,
    pub ty: Type,
}

impl Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Primitive(primitive) => write!(f, "{}", primitive),
            Type::Func(func) => write!(f, "{}", func),
        }
    }
}

impl Display for FuncType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "func(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param.ty)?;
        }
        write!(f, ")")?;

        if let Some(ret) = &self.ret {
            write!(f, " -> {}", ret)?;
        }

        Ok(())
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}
