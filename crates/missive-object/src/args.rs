//! Call arguments: positional values plus an optional trailing block.

use core::fmt;
use std::any::Any;
use std::sync::Arc;

use crate::error::MemberError;
use crate::value::Value;

/// The trailing block argument of a call.
///
/// Shared and re-invocable; the dispatch layers hand it to the member body
/// untouched and never invoke it themselves.
#[derive(Clone)]
pub struct Block(Arc<dyn Fn(Vec<Value>) -> Result<Value, MemberError> + Send + Sync>);

impl Block {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value, MemberError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, values: Vec<Value>) -> Result<Value, MemberError> {
        (self.0)(values)
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Block(..)")
    }
}

/// Positional arguments plus an optional trailing [`Block`].
#[derive(Debug, Default)]
pub struct Args {
    positional: Vec<Value>,
    block: Option<Block>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn arg<T: Any + Send>(mut self, value: T) -> Self {
        self.positional.push(Value::new(value));
        self
    }

    /// Attaches the trailing block.
    pub fn block(mut self, block: Block) -> Self {
        self.block = Some(block);
        self
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn has_block(&self) -> bool {
        self.block.is_some()
    }

    pub fn take_block(&mut self) -> Option<Block> {
        self.block.take()
    }

    /// Downcasts positional argument `index`, consuming it.
    pub fn expect<T: Any + Send>(&mut self, index: usize) -> Result<T, MemberError> {
        if index >= self.positional.len() {
            return Err(MemberError::MissingArgument { index });
        }
        let value = std::mem::replace(&mut self.positional[index], Value::unit());
        value.downcast().map_err(|_| MemberError::ArgumentMismatch {
            index,
            expected: std::any::type_name::<T>(),
        })
    }

    pub fn into_parts(self) -> (Vec<Value>, Option<Block>) {
        (self.positional, self.block)
    }
}
