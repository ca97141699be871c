//! Nexus Graph
//!
//! The normalized resource graph and the reducers that fold ops over it.
//!
//! Responsibilities:
//! - Store resources per entity together with the canonical id order
//! - Define the atomic, already-resolved `Op` records
//! - Apply ops to produce the next state, sharing everything untouched
//!
//! # Module Structure
//!
//! - `state` - The immutable `State` value and its lookups
//! - `op` - Op records
//! - `reduce` - Op reducers (ids and resources)

mod op;
mod reduce;
mod state;

pub use op::Op;
pub use reduce::{apply_op, reduce};
pub use state::{Resources, State};
