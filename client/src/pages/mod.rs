//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns one `RwSignal` of route-scoped state plus the effects that
//! fill it from the API, and delegates rendering details to `components`.

pub mod item;
pub mod list;
pub mod stats;
