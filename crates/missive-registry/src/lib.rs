//! Lazy registration of named components.
//!
//! # Architecture
//!
//! A [`Registry`] is assembled once, at bootstrap: every entry declares a
//! name and a factory, and nothing is materialized until the first `get`.
//! Later lookups reuse the materialized value. Registration and use are two
//! phases — the builder collects entries, `build` freezes the set — so
//! lookups after the freeze need no locking beyond the per-entry cell.
//!
//! # Example
//!
//! ```
//! use missive_registry::Registry;
//!
//! let mut builder = Registry::builder();
//! builder.register("greeting", || String::from("hello")).unwrap();
//! let registry = builder.build();
//!
//! assert!(!registry.is_loaded("greeting"));
//! assert_eq!(registry.get("greeting").unwrap(), "hello");
//! assert!(registry.is_loaded("greeting"));
//! ```

use core::fmt;
use std::collections::BTreeMap;

use once_cell::sync::OnceCell;

pub use self::error::{RegistryError, Result};

mod error;

struct Entry<T> {
    factory: fn() -> T,
    cell: OnceCell<T>,
}

/// Name-keyed components, materialized on first access.
pub struct Registry<T> {
    entries: BTreeMap<&'static str, Entry<T>>,
}

impl<T> Registry<T> {
    pub fn builder() -> RegistryBuilder<T> {
        RegistryBuilder {
            entries: BTreeMap::new(),
        }
    }

    /// Materializes the component if this is its first use, then returns it.
    pub fn get(&self, name: &str) -> Result<&T> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| RegistryError::Unknown(name.to_owned()))?;
        Ok(entry.cell.get_or_init(entry.factory))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Whether the component has been materialized already.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|entry| entry.cell.get().is_some())
    }

    /// Registered names, in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

pub struct RegistryBuilder<T> {
    entries: BTreeMap<&'static str, Entry<T>>,
}

impl<T> RegistryBuilder<T> {
    /// Declares a component. Duplicate names are rejected.
    pub fn register(&mut self, name: &'static str, factory: fn() -> T) -> Result<()> {
        if self.entries.contains_key(name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.entries.insert(
            name,
            Entry {
                factory,
                cell: OnceCell::new(),
            },
        );
        Ok(())
    }

    pub fn build(self) -> Registry<T> {
        Registry {
            entries: self.entries,
        }
    }
}

impl<T> Default for RegistryBuilder<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}
