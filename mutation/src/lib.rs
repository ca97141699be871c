//! Nexus Mutation
//!
//! Translate caller actions (ADD/REMOVE/EDIT/MOVE/ATTACH/DETACH/MOVE_ATTACHED/BATCH)
//! into op logs.
//!
//! Responsibilities:
//! - Resolve relation references against the schema
//! - Guard against unknown entities and nonexistent resources
//! - Keep both sides of every relation in step
//! - Expand removals through their cascade
//!
//! # Module Structure
//!
//! - `executor` - The `Translator` entry point
//! - `ops/` - One module per action kind
//! - `writer` - Working state and op log shared by the ops
//! - `action` - Action records
//! - `hooks` - Invalid-input hooks and `Options`

mod action;
mod executor;
mod hooks;
mod ops;
mod writer;

pub use action::{Action, Attachment};
pub use executor::Translator;
pub use hooks::{Hooks, Options};
