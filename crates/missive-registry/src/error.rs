//! Error types for registry operations.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown component '{0}'")]
    Unknown(String),

    #[error("component '{0}' registered twice")]
    Duplicate(&'static str),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
