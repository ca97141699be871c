//! Nexus Core Types
//!
//! This crate provides the foundational types used throughout Nexus:
//! - Identity types (Id, ResourceKey)
//! - Scalar attribute values (the Value enum and the Attributes map)
//! - Relation values (RelationValue, keyed by Cardinality)
//! - The Resource record stored in State

mod id;
mod relation;
mod resource;
mod value;

pub use id::*;
pub use relation::*;
pub use resource::*;
pub use value::*;
