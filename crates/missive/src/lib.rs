//! Dynamic member dispatch with missing-member delegation.
//!
//! The entry point of the library: it stitches the pieces together and
//! re-exports them under one roof.
//!
//! - [`object`] — the dynamic object model: type-erased [`Value`]s, per-type
//!   member tables, visibility-aware dispatch.
//! - [`delegate`] — the delegation shim: a host type composes a target,
//!   declares the accessor once, and undefined members forward to the
//!   target's public capability set.
//! - [`registry`] — bootstrap registration of named components, materialized
//!   on first use.
//!
//! The motivating shape is the decorator: a type that redefines a few
//! members of the value it wraps and forwards everything else. With the
//! delegation shim the forwarding, the existence probe, and the "wrapped
//! value is absent" diagnostics come from one accessor declaration instead
//! of hand-written fallback plumbing on every decorator.
//!
//! [`Value`]: object::Value

pub use missive_delegate as delegate;
pub use missive_object as object;
pub use missive_registry as registry;

/// The commonly used surface, importable in one line.
pub mod prelude {
    pub use missive_delegate::{
        AccessorKind, Delegating, DelegationError, TargetAccessor, responds_to, send,
    };
    pub use missive_object::{
        Args, Block, Member, MemberError, MemberTable, MemberTableBuilder, Object, Value,
        Visibility, receiver,
    };
    pub use missive_registry::{Registry, RegistryError};
}
