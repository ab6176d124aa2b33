//! Accessor installation: how a host reaches its delegation target.

use thiserror::Error;
use tracing::debug;

/// Parameter names the installation machinery reserves for itself.
///
/// An accessor carrying one of these names is redirected to resolve on the
/// type rather than the instance, so the rendered expression cannot be
/// mistaken for an installation parameter.
pub const RESERVED_ACCESSOR_NAMES: &[&str] = &["arg", "args", "block", "target"];

/// What the accessor expression refers to on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    /// An instance field.
    Field,
    /// A zero-argument method.
    Method,
    /// A type-level constant.
    Const,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstallError {
    #[error("empty accessor name")]
    EmptyName,
    #[error("accessor name '{0}' is not a plain identifier")]
    InvalidName(String),
}

/// A validated target accessor.
///
/// Installed once per host type, at type-definition time; hosts keep the
/// result in a `static` for the lifetime of the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetAccessor {
    name: &'static str,
    kind: AccessorKind,
    qualified: bool,
}

impl TargetAccessor {
    pub fn install(name: &'static str, kind: AccessorKind) -> Result<Self, InstallError> {
        if name.is_empty() {
            return Err(InstallError::EmptyName);
        }
        if !is_identifier(name) {
            return Err(InstallError::InvalidName(name.to_owned()));
        }
        let qualified = RESERVED_ACCESSOR_NAMES.contains(&name);
        let accessor = Self {
            name,
            kind,
            qualified,
        };
        debug!(name, ?kind, qualified, "installed delegation accessor");
        Ok(accessor)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> AccessorKind {
        self.kind
    }

    /// Whether resolution happens on the type rather than the instance:
    /// either the accessor names a constant, or its name collides with a
    /// reserved installation parameter.
    pub fn resolves_on_type(&self) -> bool {
        self.qualified || self.kind == AccessorKind::Const
    }

    /// The textual expression carried in diagnostics.
    pub fn expression(&self) -> String {
        if self.resolves_on_type() {
            format!("Self::{}", self.name)
        } else if self.kind == AccessorKind::Method {
            format!("self.{}()", self.name)
        } else {
            format!("self.{}", self.name)
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_expression() {
        let accessor = TargetAccessor::install("event", AccessorKind::Field).unwrap();
        assert_eq!(accessor.expression(), "self.event");
        assert!(!accessor.resolves_on_type());
    }

    #[test]
    fn test_method_expression() {
        let accessor = TargetAccessor::install("event", AccessorKind::Method).unwrap();
        assert_eq!(accessor.expression(), "self.event()");
    }

    #[test]
    fn test_const_expression() {
        let accessor = TargetAccessor::install("EVENT", AccessorKind::Const).unwrap();
        assert_eq!(accessor.expression(), "Self::EVENT");
        assert!(accessor.resolves_on_type());
    }

    #[test]
    fn test_reserved_name_redirects_to_type() {
        let accessor = TargetAccessor::install("target", AccessorKind::Field).unwrap();
        assert!(accessor.resolves_on_type());
        assert_eq!(accessor.expression(), "Self::target");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            TargetAccessor::install("", AccessorKind::Field),
            Err(InstallError::EmptyName)
        );
    }

    #[test]
    fn test_non_identifier_rejected() {
        assert!(matches!(
            TargetAccessor::install("self.event", AccessorKind::Field),
            Err(InstallError::InvalidName(_))
        ));
        assert!(matches!(
            TargetAccessor::install("1event", AccessorKind::Field),
            Err(InstallError::InvalidName(_))
        ));
    }
}
