//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `attrmap_core` linkage with a tiny demo record.
//! - Fill the record from a JSON object and print what each key resolves to.
//!
//! Usage: `attrmap_cli '{"first_name": "Ada", "last-name": "Lovelace"}'`

use attrmap_core::{AttributeError, Attributes, Entity, Schema};
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::process::ExitCode;

const DEMO_INPUT: &str = r#"{"first_name": "Ada", "last_name": "Lovelace", "role": "analyst"}"#;
const DISPLAY_KEYS: &[&str] = &["first_name", "last_name", "full name", "role", "status"];

struct Contact {
    attributes: Attributes,
}

impl Contact {
    fn full_name(&self) -> Result<Option<Value>, AttributeError> {
        let parts: Vec<&str> = ["first_name", "last_name"]
            .iter()
            .filter_map(|slot| self.attributes.raw(slot).and_then(Value::as_str))
            .collect();
        if parts.is_empty() {
            return Ok(None);
        }
        Ok(Some(Value::String(parts.join(" "))))
    }
}

static CONTACT_SCHEMA: Lazy<Schema<Contact>> = Lazy::new(|| {
    Schema::builder("contact")
        .slot("first_name")
        .slot("last_name")
        .slot_with_default("status", "active")
        .getter("full_name", Contact::full_name)
        .build()
});

impl Entity for Contact {
    type Error = AttributeError;

    fn schema() -> &'static Schema<Self> {
        &CONTACT_SCHEMA
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

fn main() -> ExitCode {
    if let Err(err) = attrmap_core::init_logging(attrmap_core::default_log_level(), None) {
        eprintln!("logging disabled: {err}");
    }

    let input = std::env::args().nth(1).unwrap_or_else(|| DEMO_INPUT.to_string());
    let data: Map<String, Value> = match serde_json::from_str(&input) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("input must be a JSON object: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut contact = Contact {
        attributes: Attributes::new::<Contact>(),
    };
    if let Err(err) = contact.fill(data) {
        eprintln!("fill failed: {err}");
        return ExitCode::FAILURE;
    }

    log::info!(
        "event=cli_run module=cli status=ok keys={}",
        DISPLAY_KEYS.len()
    );
    println!("attrmap_core version={}", attrmap_core::core_version());
    for key in DISPLAY_KEYS {
        match contact.read(key) {
            Ok(Some(value)) => println!("{key}={value}"),
            Ok(None) => println!("{key}=<none>"),
            Err(err) => println!("{key}=<error: {err}>"),
        }
    }
    ExitCode::SUCCESS
}
