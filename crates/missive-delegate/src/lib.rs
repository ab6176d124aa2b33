//! Missing-member delegation to a composed target object.
//!
//! # Architecture
//!
//! Delegation is a mechanism, not policy. A host type composes a target,
//! declares once — at type-definition time — how that target is reached, and
//! the shim forwards every call the host does not resolve itself to the
//! target's public members. What the target is and when it is present stays
//! entirely the host's business.
//!
//! A decorator commonly redefines a handful of members and forwards the
//! rest to the value it wraps. Implementing [`Delegating`] condenses that
//! forwarding to one accessor declaration; [`send`] and [`responds_to`] then
//! behave as if the target's public members were the host's own, while
//! keeping the failure modes apart: an absent target raises
//! [`DelegationError`], an unknown name re-raises the ordinary
//! missing-member failure, and errors raised by the target's own members
//! pass through untouched.
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//!
//! use missive_delegate::{send, AccessorKind, Delegating, TargetAccessor};
//! use missive_object::{Args, MemberTable, Object, Value};
//! use once_cell::sync::Lazy;
//!
//! struct Event;
//!
//! static EVENT_MEMBERS: Lazy<MemberTable> = Lazy::new(|| {
//!     MemberTable::builder("Event")
//!         .public("title", |_, _| Ok(Value::new("launch day")))
//!         .build()
//! });
//!
//! impl Object for Event {
//!     fn members(&self) -> &'static MemberTable {
//!         &EVENT_MEMBERS
//!     }
//!
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! struct Partition {
//!     event: Option<Event>,
//! }
//!
//! static PARTITION_MEMBERS: Lazy<MemberTable> =
//!     Lazy::new(|| MemberTable::builder("Partition").build());
//! static PARTITION_ACCESSOR: Lazy<TargetAccessor> =
//!     Lazy::new(|| TargetAccessor::install("event", AccessorKind::Field).unwrap());
//!
//! impl Object for Partition {
//!     fn members(&self) -> &'static MemberTable {
//!         &PARTITION_MEMBERS
//!     }
//!
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! impl Delegating for Partition {
//!     fn accessor(&self) -> &'static TargetAccessor {
//!         &PARTITION_ACCESSOR
//!     }
//!
//!     fn target(&self) -> Option<&dyn Object> {
//!         self.event.as_ref().map(|event| event as &dyn Object)
//!     }
//! }
//!
//! let partition = Partition { event: Some(Event) };
//! let title = send(&partition, "title", Args::new()).unwrap();
//! assert_eq!(title.downcast_ref::<&str>(), Some(&"launch day"));
//! ```

pub use self::accessor::{AccessorKind, InstallError, RESERVED_ACCESSOR_NAMES, TargetAccessor};
pub use self::delegate::{Delegating, responds_to, send};
pub use self::error::{DelegationError, Error, Result};

mod accessor;
mod delegate;
mod error;
