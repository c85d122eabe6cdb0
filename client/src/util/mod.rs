//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (clock, downloads) and
//! content transforms (Markdown, notebooks) from page and component logic.

pub mod clock;
pub mod download;
pub mod markdown;
pub mod notebook;
