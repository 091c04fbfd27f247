//! Mapper error types.
//!
//! # Responsibility
//! - Describe the one failure the mapper itself can raise: an attribute
//!   name that resolves to neither a hook nor a raw slot (strict mode only).
//! - Offer a ready-made entity error type for records without custom hooks errors.
//!
//! # Invariants
//! - Hook failures are never wrapped by the mapper; they surface as the
//!   entity's own error type.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Mapper operation that failed to resolve an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Fill,
    Read,
    Write,
    Clear,
    Has,
}

impl Operation {
    /// Stable id used in log events and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Read => "read",
            Self::Write => "write",
            Self::Clear => "clear",
            Self::Has => "has",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised in strict mode when a key matches neither a hook nor a raw slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedAttribute {
    pub operation: Operation,
    pub key: String,
}

impl UnresolvedAttribute {
    pub fn new(operation: Operation, key: impl Into<String>) -> Self {
        Self {
            operation,
            key: key.into(),
        }
    }
}

impl Display for UnresolvedAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "attribute `{}` is unresolved for {}: no hook and no raw slot",
            self.key, self.operation
        )
    }
}

impl Error for UnresolvedAttribute {}

/// General-purpose entity error.
///
/// Entity types may use this as their `Entity::Error` when hooks only need
/// to report a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    Unresolved(UnresolvedAttribute),
    Hook(String),
}

impl AttributeError {
    /// Convenience constructor for hook bodies.
    pub fn hook(message: impl Into<String>) -> Self {
        Self::Hook(message.into())
    }
}

impl Display for AttributeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unresolved(err) => write!(f, "{err}"),
            Self::Hook(message) => write!(f, "attribute hook failed: {message}"),
        }
    }
}

impl Error for AttributeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unresolved(err) => Some(err),
            Self::Hook(_) => None,
        }
    }
}

impl From<UnresolvedAttribute> for AttributeError {
    fn from(value: UnresolvedAttribute) -> Self {
        Self::Unresolved(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{AttributeError, Operation, UnresolvedAttribute};
    use std::error::Error;

    #[test]
    fn unresolved_message_names_key_and_operation() {
        let err = UnresolvedAttribute::new(Operation::Write, "nickname");
        let message = err.to_string();
        assert!(message.contains("`nickname`"));
        assert!(message.contains("write"));
    }

    #[test]
    fn attribute_error_chains_unresolved_source() {
        let err = AttributeError::from(UnresolvedAttribute::new(Operation::Read, "x"));
        assert!(err.source().is_some());
        assert!(AttributeError::hook("boom").source().is_none());
    }

    #[test]
    fn operation_ids_are_stable() {
        let ids: Vec<&str> = [
            Operation::Fill,
            Operation::Read,
            Operation::Write,
            Operation::Clear,
            Operation::Has,
        ]
        .into_iter()
        .map(Operation::as_str)
        .collect();
        assert_eq!(ids, ["fill", "read", "write", "clear", "has"]);
    }
}
