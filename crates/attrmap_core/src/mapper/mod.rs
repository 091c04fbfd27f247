//! Dynamic attribute mapper.
//!
//! # Responsibility
//! - Expose a stable set of named attributes on record types.
//! - Dispatch each access to a registered hook or to a raw slot.
//!
//! # Invariants
//! - Hook and default tables belong to the type, not to instances.
//! - External key notation (`snake_case`, `kebab-case`, `space case`)
//!   never changes which hook an access resolves to.

pub mod attributes;
pub mod entity;
pub mod naming;
pub mod schema;
