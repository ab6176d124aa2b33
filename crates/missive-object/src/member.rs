//! Per-type member tables: the capability set consulted by dispatch.

use core::fmt;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::args::Args;
use crate::error::MemberError;
use crate::object::Object;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

pub type Handler = Arc<dyn Fn(&dyn Object, Args) -> Result<Value, MemberError> + Send + Sync>;

/// One named member of a type: visibility plus the body to run.
pub struct Member {
    name: &'static str,
    visibility: Visibility,
    handler: Handler,
}

impl Member {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Runs the member body. Errors return verbatim; dispatch never wraps
    /// them.
    pub fn invoke(&self, receiver: &dyn Object, args: Args) -> Result<Value, MemberError> {
        (self.handler)(receiver, args)
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}

/// The members one runtime type exposes.
///
/// Built once at type-definition time, typically inside a `Lazy` static, and
/// read-only afterwards — lookups need no locking.
pub struct MemberTable {
    type_name: &'static str,
    members: BTreeMap<&'static str, Member>,
}

impl MemberTable {
    pub fn builder(type_name: &'static str) -> MemberTableBuilder {
        MemberTableBuilder {
            type_name,
            members: BTreeMap::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Capability probe. With `include_private` false this is the view an
    /// outside caller gets.
    pub fn responds_to(&self, name: &str, include_private: bool) -> bool {
        match self.members.get(name) {
            Some(member) => include_private || member.is_public(),
            None => false,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.members.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Debug for MemberTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberTable")
            .field("type_name", &self.type_name)
            .field("names", &self.members.keys().collect::<Vec<_>>())
            .finish()
    }
}

pub struct MemberTableBuilder {
    type_name: &'static str,
    members: BTreeMap<&'static str, Member>,
}

impl MemberTableBuilder {
    pub fn public<F>(self, name: &'static str, handler: F) -> Self
    where
        F: Fn(&dyn Object, Args) -> Result<Value, MemberError> + Send + Sync + 'static,
    {
        self.member(name, Visibility::Public, handler)
    }

    pub fn private<F>(self, name: &'static str, handler: F) -> Self
    where
        F: Fn(&dyn Object, Args) -> Result<Value, MemberError> + Send + Sync + 'static,
    {
        self.member(name, Visibility::Private, handler)
    }

    /// A later definition of the same name replaces the earlier one.
    pub fn member<F>(mut self, name: &'static str, visibility: Visibility, handler: F) -> Self
    where
        F: Fn(&dyn Object, Args) -> Result<Value, MemberError> + Send + Sync + 'static,
    {
        self.members.insert(
            name,
            Member {
                name,
                visibility,
                handler: Arc::new(handler),
            },
        );
        self
    }

    pub fn build(self) -> MemberTable {
        MemberTable {
            type_name: self.type_name,
            members: self.members,
        }
    }
}
