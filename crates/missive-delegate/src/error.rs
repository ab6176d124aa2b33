//! Error taxonomy for delegated dispatch.

use missive_object::MemberError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A member lookup failed while the configured delegation target was nil.
///
/// Distinguishes "the delegate itself is absent" from an ordinary
/// missing-member failure. The message carries the attempted member and the
/// accessor expression, so the absence is diagnosable at the call site
/// instead of surfacing as a generic missing-member error deep in unrelated
/// code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{member} delegated to {accessor}, but {accessor} is nil")]
pub struct DelegationError {
    pub member: String,
    pub accessor: String,
}

#[derive(Debug, Error)]
pub enum Error {
    /// Ordinary dispatch failure, or an error raised by a member body —
    /// passed through unmodified.
    #[error(transparent)]
    Member(#[from] MemberError),

    #[error(transparent)]
    Delegation(#[from] DelegationError),
}
