//! Named attribute access for record types.
//! Routes bulk fills and single reads/writes to hooks or raw slots.

pub mod config;
pub mod error;
pub mod logging;
pub mod mapper;

pub use config::MapperConfig;
pub use error::{AttributeError, Operation, UnresolvedAttribute};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use mapper::attributes::Attributes;
pub use mapper::entity::Entity;
pub use mapper::naming::{canonical_fragment, getter_name, setter_name};
pub use mapper::schema::{Getter, Schema, SchemaBuilder, Setter, SlotDecl, SlotLayout};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
