//! Networking modules for the remote analysis service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the two HTTP calls (`/dashboard_data`, `/analyze`) and
//! `types` defines their wire schema and error type.

pub mod api;
pub mod types;
