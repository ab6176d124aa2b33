//! Error taxonomy for member dispatch.

use std::error::Error as StdError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MemberError>;

#[derive(Debug, Error)]
pub enum MemberError {
    /// The standard failure for a name nothing defines.
    #[error("undefined member '{member}' for {type_name}")]
    NoSuchMember {
        member: String,
        type_name: &'static str,
    },

    /// A private member invoked from outside its defining type.
    #[error("private member '{member}' called for {type_name}")]
    PrivateMember {
        member: String,
        type_name: &'static str,
    },

    /// A member table invoked with a receiver of the wrong concrete type.
    #[error("member table for {expected} invoked with receiver {actual}")]
    ReceiverMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("missing argument {index}")]
    MissingArgument { index: usize },

    #[error("argument {index}: expected {expected}")]
    ArgumentMismatch {
        index: usize,
        expected: &'static str,
    },

    /// An error raised by a member body. Dispatch never wraps or annotates
    /// these; the message is the member's own.
    #[error("{0}")]
    Raised(Box<dyn StdError + Send + Sync>),
}

impl MemberError {
    /// Wraps an error raised inside a member body.
    pub fn raised<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Raised(Box::new(err))
    }

    pub fn is_no_such_member(&self) -> bool {
        matches!(self, Self::NoSuchMember { .. })
    }
}
