//! Type-erased runtime values.

use core::fmt;
use std::any::Any;

/// An owned, type-erased value passed to and returned from members.
///
/// Dispatch never inspects the payload; only member bodies and callers
/// downcast it.
pub struct Value(Box<dyn Any + Send>);

impl Value {
    pub fn new<T: Any + Send>(value: T) -> Self {
        Self(Box::new(value))
    }

    /// The unit value, for members called only for effect.
    pub fn unit() -> Self {
        Self::new(())
    }

    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Recovers the payload, handing the value back on a type mismatch.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        match self.0.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(raw) => Err(Self(raw)),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Value(..)")
    }
}
