//! The [`Object`] trait and ordinary public dispatch.

use std::any::Any;

use crate::args::Args;
use crate::error::MemberError;
use crate::member::MemberTable;
use crate::value::Value;

/// A value participating in dynamic dispatch.
///
/// `members` returns the table of the value's *runtime* type. A caller
/// holding a `&dyn Object` slot whose concrete type changes between calls
/// always observes the current capability set; nothing is cached on the
/// caller's side.
pub trait Object: Any {
    /// The member table declared for this type.
    fn members(&self) -> &'static MemberTable;

    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str {
        self.members().type_name()
    }
}

/// Downcasts the receiver inside a member body.
pub fn receiver<T: Any>(object: &dyn Object) -> Result<&T, MemberError> {
    object
        .as_any()
        .downcast_ref()
        .ok_or_else(|| MemberError::ReceiverMismatch {
            expected: std::any::type_name::<T>(),
            actual: object.type_name(),
        })
}

/// Ordinary public dispatch: exactly what any outside caller gets.
///
/// Unknown names fail with [`MemberError::NoSuchMember`]; private members
/// are rejected with [`MemberError::PrivateMember`] regardless of how the
/// call was reached. Results and errors of the member body return verbatim.
pub fn send(receiver: &dyn Object, name: &str, args: Args) -> Result<Value, MemberError> {
    let table = receiver.members();
    match table.get(name) {
        Some(member) if member.is_public() => member.invoke(receiver, args),
        Some(_) => Err(MemberError::PrivateMember {
            member: name.to_owned(),
            type_name: table.type_name(),
        }),
        None => Err(MemberError::NoSuchMember {
            member: name.to_owned(),
            type_name: table.type_name(),
        }),
    }
}
