//! Nexus Session
//!
//! Entry points that turn actions into new states.
//!
//! Responsibilities:
//! - Run the translator and the reducers as one pure step (`apply`)
//! - Own a current state for callers that want a store (`Session`)
//! - Keep the op log of every dispatch
//!
//! # Module Structure
//!
//! - `apply` - Pure `apply` / `apply_with_ops`
//! - `session` - The `Session` store and its setters
//! - `result` - Dispatch outcomes
//! - `error` - Error types

mod apply;
mod error;
mod result;
mod session;

pub use apply::{apply, apply_with_ops};
pub use error::{SessionError, SessionResult};
pub use result::Outcome;
pub use session::Session;
