//! Page-scoped state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page wraps one of these plain structs in an `RwSignal`. Transitions
//! are methods on the struct so they can be tested without a reactive runtime.

pub mod gallery;
pub mod item;
pub mod list;
pub mod moderator;
pub mod stats;
