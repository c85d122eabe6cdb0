//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (state transitions, spawned
//! requests) and delegates rendering details to `components`.

pub mod chat;
pub mod shell;
