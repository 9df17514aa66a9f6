//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers with no signal or DOM dependencies, so pages and widgets stay
//! thin and the rules they apply are unit-testable.

pub mod format;
pub mod shortcuts;
