use std::{collections::BTreeMap, fmt::Display};

use crate::ast::ast::{Ident, IdentId};

use super::types::Object;

/// Symbol table produced by the type checker.
///
/// Keyed by identifier identity rather than spelling: two declarations of
/// `a` are two entries. The table is flat; there is no scoping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Info {
    defs: BTreeMap<IdentId, Object>,
}

impl Info {
    /// Records `object` as the meaning of `ident`.
    pub fn define(&mut self, ident: &Ident, object: Object) {
        self.defs.insert(ident.id, object);
    }

    pub fn get(&self, ident: &Ident) -> Option<&Object> {
        self.defs.get(&ident.id)
    }

    pub fn get_by_id(&self, id: IdentId) -> Option<&Object> {
        self.defs.get(&id)
    }

    /// Every object declared under `name`, in declaration order.
    pub fn lookup_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Object> + 'a {
        self.defs.values().filter(move |object| object.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&IdentId, &Object)> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl Display for Info {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (id, object) in self.iter() {
            writeln!(f, "{} {}", id, object)?;
        }
        Ok(())
    }
}
