//! Nexus Registry
//!
//! Immutable relationship schema, validated once at construction.
//!
//! Responsibilities:
//! - Hold the per-entity relation declarations (target, cardinality, reciprocal)
//! - Reject schemas whose reciprocal declarations are missing or asymmetric
//! - Resolve relation references given either as a key or as a target entity name
//!
//! # Module Structure
//!
//! - `types` - Schema definition types (RelSchema, ModelSchema, Resolution)
//! - `builder` - SchemaBuilder and schema validation
//! - `registry` - The immutable Registry and its lookups

mod builder;
mod registry;
mod types;

pub use builder::{EntityBuilder, SchemaBuilder, SchemaError, SchemaResult};
pub use nexus_core::Cardinality;
pub use registry::Registry;
pub use types::{EntitySchema, ModelSchema, RelSchema, Resolution};
