//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`shell`, `analysis`, `chat`, etc.) so
//! components depend on small focused models that are testable natively.

pub mod analysis;
pub mod chat;
pub mod query;
pub mod shell;
pub mod upload;
