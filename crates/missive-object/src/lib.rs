//! Dynamic object model for member dispatch.
//!
//! # Architecture
//!
//! Every participating type declares a [`MemberTable`] — the set of member
//! names it exposes, each with a [`Visibility`] and a handler. The table is
//! built once, at type-definition time (a `Lazy` static), and is read-only
//! afterwards; the [`Object`] trait hands it out per instance, so a caller
//! holding a `&dyn Object` always observes the capability set of the value's
//! *current* runtime type.
//!
//! [`send`] is ordinary public dispatch: the failure any outside caller gets
//! for an unknown or private name. Fallback behaviors (delegation to a
//! composed target) are layered on top by other crates; this one only
//! resolves and invokes.
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//!
//! use missive_object::{receiver, Args, MemberTable, Object, Value, send};
//! use once_cell::sync::Lazy;
//!
//! struct Counter {
//!     count: u64,
//! }
//!
//! static COUNTER_MEMBERS: Lazy<MemberTable> = Lazy::new(|| {
//!     MemberTable::builder("Counter")
//!         .public("count", |obj, _| {
//!             let counter: &Counter = receiver(obj)?;
//!             Ok(Value::new(counter.count))
//!         })
//!         .build()
//! });
//!
//! impl Object for Counter {
//!     fn members(&self) -> &'static MemberTable {
//!         &COUNTER_MEMBERS
//!     }
//!
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! let counter = Counter { count: 3 };
//! let value = send(&counter, "count", Args::new()).unwrap();
//! assert_eq!(value.downcast::<u64>().unwrap(), 3);
//! ```

pub use self::args::{Args, Block};
pub use self::error::{MemberError, Result};
pub use self::member::{Handler, Member, MemberTable, MemberTableBuilder, Visibility};
pub use self::object::{Object, receiver, send};
pub use self::value::Value;

mod args;
mod error;
mod member;
mod object;
mod value;
