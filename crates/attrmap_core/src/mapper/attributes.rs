//! Raw slot storage owned by one record instance.
//!
//! # Responsibility
//! - Hold the current value of every declared raw slot.
//! - Carry the per-record mapper configuration.
//!
//! # Invariants
//! - The set of slots is fixed at construction from the type's schema;
//!   raw writes never create new slots.
//! - `Value::Null` is the unset state of a slot.

use crate::config::MapperConfig;
use crate::mapper::entity::Entity;
use crate::mapper::schema::SlotLayout;
use serde_json::{Map, Value};

/// Raw attribute slots of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    entity: &'static str,
    layout: &'static SlotLayout,
    values: Vec<Value>,
    config: MapperConfig,
}

impl Attributes {
    /// Creates the slots of entity type `E` with declared defaults and the
    /// lenient config.
    pub fn new<E: Entity>() -> Self {
        Self::with_config::<E>(MapperConfig::default())
    }

    /// Creates the slots of entity type `E` with declared defaults and `config`.
    ///
    /// The layout always comes from `E::schema()`, the same schema the
    /// mapper consults for hooks.
    pub fn with_config<E: Entity>(config: MapperConfig) -> Self {
        let schema = E::schema();
        let layout = schema.layout();
        let values = layout
            .slots()
            .iter()
            .map(|slot| slot.default.clone().unwrap_or(Value::Null))
            .collect();
        Self {
            entity: schema.name(),
            layout,
            values,
            config,
        }
    }

    /// Name of the entity type these slots belong to.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn config(&self) -> MapperConfig {
        self.config
    }

    pub fn set_config(&mut self, config: MapperConfig) {
        self.config = config;
    }

    pub fn len(&self) -> usize {
        self.layout.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Whether a slot named exactly `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.layout.position(name).is_some()
    }

    /// Current value of slot `name`; `None` when no such slot exists.
    pub fn raw(&self, name: &str) -> Option<&Value> {
        let position = self.layout.position(name)?;
        self.values.get(position)
    }

    /// Assigns slot `name` directly. Returns `false` when the slot does not exist.
    pub fn set_raw(&mut self, name: &str, value: Value) -> bool {
        let Some(position) = self.layout.position(name) else {
            return false;
        };
        self.values[position] = value;
        true
    }

    /// Declared default of slot `name`, taken from the type definition.
    pub fn declared_default(&self, name: &str) -> Option<&Value> {
        self.layout.default_of(name)
    }

    /// Slots and their current values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.layout
            .slots()
            .iter()
            .map(|slot| slot.name.as_str())
            .zip(self.values.iter())
    }

    /// Snapshot of all raw slots as a JSON object.
    pub fn to_map(&self) -> Map<String, Value> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Attributes;
    use crate::config::MapperConfig;
    use crate::error::AttributeError;
    use crate::mapper::entity::Entity;
    use crate::mapper::schema::Schema;
    use once_cell::sync::Lazy;
    use serde_json::{json, Value};

    struct Counter {
        attributes: Attributes,
    }

    static COUNTER_SCHEMA: Lazy<Schema<Counter>> = Lazy::new(|| {
        Schema::builder("counter")
            .slot_with_default("count", 0)
            .slot("label")
            .build()
    });

    impl Entity for Counter {
        type Error = AttributeError;

        fn schema() -> &'static Schema<Self> {
            &COUNTER_SCHEMA
        }

        fn attributes(&self) -> &Attributes {
            &self.attributes
        }

        fn attributes_mut(&mut self) -> &mut Attributes {
            &mut self.attributes
        }
    }

    fn counter() -> Counter {
        Counter {
            attributes: Attributes::new::<Counter>(),
        }
    }

    #[test]
    fn starts_from_declared_defaults() {
        let counter = counter();
        assert_eq!(counter.attributes().entity(), "counter");
        assert_eq!(counter.attributes().len(), 2);
        assert!(!counter.attributes().is_empty());
        assert_eq!(
            counter.attributes().len(),
            Counter::schema().slot_names().count()
        );
        assert_eq!(counter.attributes().raw("count"), Some(&json!(0)));
        assert_eq!(counter.attributes().raw("label"), Some(&Value::Null));
        assert_eq!(counter.attributes().raw("missing"), None);
    }

    #[test]
    fn layout_comes_from_the_entity_schema() {
        let counter = counter();
        assert!(std::ptr::eq(
            counter.attributes().layout,
            Counter::schema().layout()
        ));
        assert_eq!(counter.attributes().entity(), Counter::schema().name());
    }

    #[test]
    fn set_raw_never_creates_slots() {
        let mut counter = counter();
        assert!(counter.attributes_mut().set_raw("count", json!(3)));
        assert!(!counter.attributes_mut().set_raw("Count", json!(4)));
        assert_eq!(counter.attributes().raw("count"), Some(&json!(3)));
        assert!(!counter.attributes().contains("Count"));
    }

    #[test]
    fn snapshot_keeps_declaration_order() {
        let mut counter = counter();
        counter.attributes_mut().set_raw("label", json!("clicks"));

        let names: Vec<&str> = counter.attributes().iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["count", "label"]);
        assert_eq!(
            Value::Object(counter.attributes().to_map()),
            json!({"count": 0, "label": "clicks"})
        );
    }

    #[test]
    fn config_is_per_instance() {
        let mut strict = counter();
        strict.attributes_mut().set_config(MapperConfig::strict());
        let lenient = counter();
        assert!(strict.attributes().config().strict);
        assert!(!lenient.attributes().config().strict);
    }
}
