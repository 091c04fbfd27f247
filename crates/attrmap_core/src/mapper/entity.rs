//! Entity contract and attribute dispatch.
//!
//! # Responsibility
//! - Route `fill`, `read`, `write`, `clear` and `has` to a hook or a raw slot.
//! - Apply the record's unresolved-name policy (silent or strict).
//!
//! # Invariants
//! - At most one route runs per operation; a hook always wins over a slot.
//! - Hook lookup uses the canonical name; slot fallback needs the exact key.
//! - `clear` only ever touches the raw slot and restores the type's default.
//! - Hook errors are returned unmodified.
//! - `has(key)` is `read(key)` yielding a non-null value, so a hook that
//!   returns none reads the same as an unknown attribute.

use crate::error::{Operation, UnresolvedAttribute};
use crate::mapper::attributes::Attributes;
use crate::mapper::schema::Schema;
use log::{debug, trace, warn};
use serde_json::Value;

/// A record type whose attributes are addressed by name.
///
/// Implementors supply the static schema and access to their raw slots;
/// the mapper operations are provided.
pub trait Entity: Sized + 'static {
    /// Error returned by hooks and by strict-mode resolution failures.
    type Error: From<UnresolvedAttribute>;

    /// The type's schema, built once per process.
    fn schema() -> &'static Schema<Self>;

    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Assigns every `(key, value)` pair in iteration order.
    ///
    /// Keys with neither a setter hook nor an exact raw slot are skipped
    /// (or rejected in strict mode). A failing hook stops the fill; pairs
    /// before it stay applied.
    fn fill<I, K>(&mut self, data: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        for (key, value) in data {
            assign(self, Operation::Fill, key.as_ref(), value)?;
        }
        Ok(())
    }

    /// Reads one attribute through its getter hook or raw slot.
    ///
    /// Returns `Ok(None)` for none values and, outside strict mode, for
    /// unresolved names.
    fn read(&self, key: &str) -> Result<Option<Value>, Self::Error> {
        resolve_read(self, Operation::Read, key)
    }

    /// Writes one attribute through its setter hook or raw slot.
    fn write(&mut self, key: &str, value: Value) -> Result<&mut Self, Self::Error> {
        assign(self, Operation::Write, key, value)?;
        Ok(self)
    }

    /// Resets raw slot `key` to its declared default, or to none.
    fn clear(&mut self, key: &str) -> Result<(), Self::Error> {
        let attributes = self.attributes_mut();
        if !attributes.set_raw(key, Value::Null) {
            return unresolved(attributes, Operation::Clear, key);
        }

        let default = attributes.declared_default(key).cloned();
        let restored = default.is_some();
        if let Some(default) = default {
            attributes.set_raw(key, default);
        }
        trace!(
            "event=attr_clear module=mapper entity={} key={} restored_default={}",
            attributes.entity(),
            key,
            restored
        );
        Ok(())
    }

    /// Whether `read(key)` yields a non-null value.
    fn has(&self, key: &str) -> Result<bool, Self::Error> {
        Ok(resolve_read(self, Operation::Has, key)?.is_some())
    }
}

fn resolve_read<E: Entity>(
    entity: &E,
    operation: Operation,
    key: &str,
) -> Result<Option<Value>, E::Error> {
    let schema = E::schema();
    if let Some(getter) = schema.getter_for_key(key) {
        trace_route(schema.name(), operation, key, "hook");
        return Ok(getter(entity)?.filter(|value| !value.is_null()));
    }

    if let Some(value) = entity.attributes().raw(key) {
        trace_route(schema.name(), operation, key, "slot");
        return Ok(Some(value).filter(|value| !value.is_null()).cloned());
    }

    unresolved(entity.attributes(), operation, key)?;
    Ok(None)
}

fn assign<E: Entity>(
    entity: &mut E,
    operation: Operation,
    key: &str,
    value: Value,
) -> Result<(), E::Error> {
    let schema = E::schema();
    if let Some(setter) = schema.setter_for_key(key) {
        trace_route(schema.name(), operation, key, "hook");
        return setter(entity, value);
    }

    let attributes = entity.attributes_mut();
    if attributes.set_raw(key, value) {
        trace_route(schema.name(), operation, key, "slot");
        return Ok(());
    }

    unresolved(attributes, operation, key)
}

fn unresolved<T>(attributes: &Attributes, operation: Operation, key: &str) -> Result<(), T>
where
    T: From<UnresolvedAttribute>,
{
    if attributes.config().strict {
        warn!(
            "event=attr_unresolved module=mapper status=rejected entity={} op={} key={}",
            attributes.entity(),
            operation,
            key
        );
        return Err(UnresolvedAttribute::new(operation, key).into());
    }

    debug!(
        "event=attr_unresolved module=mapper status=ignored entity={} op={} key={}",
        attributes.entity(),
        operation,
        key
    );
    Ok(())
}

fn trace_route(entity: &str, operation: Operation, key: &str, route: &str) {
    trace!(
        "event=attr_dispatch module=mapper entity={} op={} key={} route={}",
        entity,
        operation,
        key,
        route
    );
}
