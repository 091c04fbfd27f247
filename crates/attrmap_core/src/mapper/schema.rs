//! Per-type attribute schema: raw slot defaults and hook tables.
//!
//! # Responsibility
//! - Capture the declared raw slots of one entity type with their defaults.
//! - Hold the name -> getter/setter hook tables consulted by the mapper.
//!
//! # Invariants
//! - A schema is built once per entity type and never mutated afterwards,
//!   so defaults always come from the type definition, never from an instance.
//! - A declared `null` default is the same as no default.
//! - Hooks are keyed by canonical hook name, compared ASCII-case-insensitively.

use crate::mapper::entity::Entity;
use crate::mapper::naming::{getter_name, hook_lookup_key, setter_name};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// Getter hook: owns the read of one attribute.
pub type Getter<E> = fn(&E) -> Result<Option<Value>, <E as Entity>::Error>;

/// Setter hook: owns the write of one attribute.
pub type Setter<E> = fn(&mut E, Value) -> Result<(), <E as Entity>::Error>;

/// One declared raw slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotDecl {
    pub name: String,
    /// `None` when the type declares no default (or a `null` one).
    pub default: Option<Value>,
}

/// Raw slot declarations of one entity type, indexed by exact name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotLayout {
    slots: Vec<SlotDecl>,
    index: BTreeMap<String, usize>,
}

impl SlotLayout {
    fn new(slots: Vec<SlotDecl>) -> Self {
        let index = slots
            .iter()
            .enumerate()
            .map(|(position, slot)| (slot.name.clone(), position))
            .collect();
        Self { slots, index }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[SlotDecl] {
        &self.slots
    }

    /// Position of the slot named exactly `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn default_of(&self, name: &str) -> Option<&Value> {
        let position = self.position(name)?;
        self.slots[position].default.as_ref()
    }
}

/// Immutable attribute layout of one entity type.
pub struct Schema<E: Entity> {
    name: &'static str,
    layout: SlotLayout,
    getters: BTreeMap<String, (String, Getter<E>)>,
    setters: BTreeMap<String, (String, Setter<E>)>,
}

impl<E: Entity> Schema<E> {
    pub fn builder(name: &'static str) -> SchemaBuilder<E> {
        SchemaBuilder {
            name,
            slots: Vec::new(),
            getters: BTreeMap::new(),
            setters: BTreeMap::new(),
        }
    }

    /// Entity type name used in log events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn layout(&self) -> &SlotLayout {
        &self.layout
    }

    pub fn slot_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.layout.slots().iter().map(|slot| slot.name.as_str())
    }

    /// Whether a raw slot named exactly `name` is declared.
    pub fn has_slot(&self, name: &str) -> bool {
        self.layout.position(name).is_some()
    }

    /// Declared default of raw slot `name`, if any.
    pub fn default_of(&self, name: &str) -> Option<&Value> {
        self.layout.default_of(name)
    }

    /// Looks up a getter by hook name, e.g. `getFullName`.
    pub fn getter(&self, hook_name: &str) -> Option<Getter<E>> {
        self.getters
            .get(&hook_lookup_key(hook_name))
            .map(|(_, hook)| *hook)
    }

    /// Looks up a setter by hook name, e.g. `setFullName`.
    pub fn setter(&self, hook_name: &str) -> Option<Setter<E>> {
        self.setters
            .get(&hook_lookup_key(hook_name))
            .map(|(_, hook)| *hook)
    }

    /// Registered getter hook names, as declared.
    pub fn getter_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.getters.values().map(|(name, _)| name.as_str())
    }

    /// Registered setter hook names, as declared.
    pub fn setter_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.setters.values().map(|(name, _)| name.as_str())
    }

    pub(crate) fn getter_for_key(&self, key: &str) -> Option<Getter<E>> {
        self.getter(&getter_name(key))
    }

    pub(crate) fn setter_for_key(&self, key: &str) -> Option<Setter<E>> {
        self.setter(&setter_name(key))
    }
}

impl<E: Entity> Debug for Schema<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("slots", &self.layout.slots())
            .field("getters", &self.getter_names().collect::<Vec<_>>())
            .field("setters", &self.setter_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for a [`Schema`]; typically run once inside a `Lazy` static.
pub struct SchemaBuilder<E: Entity> {
    name: &'static str,
    slots: Vec<SlotDecl>,
    getters: BTreeMap<String, (String, Getter<E>)>,
    setters: BTreeMap<String, (String, Setter<E>)>,
}

impl<E: Entity> SchemaBuilder<E> {
    /// Declares a raw slot without a default.
    pub fn slot(self, name: impl Into<String>) -> Self {
        self.declare(name.into(), None)
    }

    /// Declares a raw slot with a default restored by `clear`.
    pub fn slot_with_default(self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        let default = match default.into() {
            Value::Null => None,
            value => Some(value),
        };
        self.declare(name.into(), default)
    }

    /// Registers the getter hook for `attribute` under `get<Fragment>`.
    pub fn getter(mut self, attribute: &str, hook: Getter<E>) -> Self {
        let hook_name = getter_name(attribute);
        self.getters
            .insert(hook_lookup_key(&hook_name), (hook_name, hook));
        self
    }

    /// Registers the setter hook for `attribute` under `set<Fragment>`.
    pub fn setter(mut self, attribute: &str, hook: Setter<E>) -> Self {
        let hook_name = setter_name(attribute);
        self.setters
            .insert(hook_lookup_key(&hook_name), (hook_name, hook));
        self
    }

    pub fn build(self) -> Schema<E> {
        Schema {
            name: self.name,
            layout: SlotLayout::new(self.slots),
            getters: self.getters,
            setters: self.setters,
        }
    }

    // Redeclaring a slot replaces its default but keeps its position.
    fn declare(mut self, name: String, default: Option<Value>) -> Self {
        match self.slots.iter_mut().find(|slot| slot.name == name) {
            Some(existing) => existing.default = default,
            None => self.slots.push(SlotDecl { name, default }),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Schema;
    use crate::config::MapperConfig;
    use crate::error::AttributeError;
    use crate::mapper::attributes::Attributes;
    use crate::mapper::entity::Entity;
    use once_cell::sync::Lazy;
    use serde_json::{json, Value};

    struct Page {
        attributes: Attributes,
    }

    fn page_title(_: &Page) -> Result<Option<Value>, AttributeError> {
        Ok(Some(json!("page")))
    }

    fn page_set_title(_: &mut Page, _: Value) -> Result<(), AttributeError> {
        Ok(())
    }

    static PAGE_SCHEMA: Lazy<Schema<Page>> = Lazy::new(|| {
        Schema::builder("page")
            .slot("title")
            .slot_with_default("status", "draft")
            .slot_with_default("note", Value::Null)
            .slot_with_default("title", 7)
            .getter("page_title", page_title)
            .setter("page-title", page_set_title)
            .build()
    });

    impl Entity for Page {
        type Error = AttributeError;

        fn schema() -> &'static Schema<Self> {
            &PAGE_SCHEMA
        }

        fn attributes(&self) -> &Attributes {
            &self.attributes
        }

        fn attributes_mut(&mut self) -> &mut Attributes {
            &mut self.attributes
        }
    }

    #[test]
    fn keeps_declaration_order_and_last_default() {
        let names: Vec<&str> = PAGE_SCHEMA.slot_names().collect();
        assert_eq!(names, ["title", "status", "note"]);
        assert_eq!(PAGE_SCHEMA.default_of("title"), Some(&json!(7)));
        assert_eq!(PAGE_SCHEMA.default_of("status"), Some(&json!("draft")));
    }

    #[test]
    fn null_default_counts_as_no_default() {
        assert!(PAGE_SCHEMA.has_slot("note"));
        assert_eq!(PAGE_SCHEMA.default_of("note"), None);
        assert_eq!(PAGE_SCHEMA.default_of("missing"), None);
    }

    #[test]
    fn hooks_resolve_by_canonical_name_in_any_case() {
        assert!(PAGE_SCHEMA.getter("getPageTitle").is_some());
        assert!(PAGE_SCHEMA.getter("GETPAGETITLE").is_some());
        assert!(PAGE_SCHEMA.setter("setPageTitle").is_some());
        assert!(PAGE_SCHEMA.getter("setPageTitle").is_none());
        assert_eq!(
            PAGE_SCHEMA.getter_names().collect::<Vec<_>>(),
            ["getPageTitle"]
        );
    }

    #[test]
    fn fresh_attributes_hold_declared_defaults() {
        let attributes = Attributes::with_config::<Page>(MapperConfig::default());
        let page = Page { attributes };
        assert_eq!(page.attributes().raw("status"), Some(&json!("draft")));
        assert_eq!(page.attributes().raw("note"), Some(&Value::Null));
    }
}
