//! Nexus Query
//!
//! Read-side operations over a state snapshot.
//!
//! Responsibilities:
//! - Describe cascades as serializable removal shapes
//! - Walk a shape from a root resource without looping on cycles
//! - Provide plain selectors for ids, resources and attachments
//!
//! # Module Structure
//!
//! - `shape` - The `RemovalShape` arena
//! - `walker` - The `CascadeWalker`
//! - `selectors` - Read accessors

pub mod selectors;
mod shape;
mod walker;

pub use selectors::{
    check_attached, check_resource, get_all_attached_arr, get_attached, get_attached_arr,
    get_ids, get_resource, get_resource_tree, get_resources,
};
pub use shape::{RemovalShape, ShapeNode, ROOT};
pub use walker::CascadeWalker;
