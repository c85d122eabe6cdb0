//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the control panel, dashboard, analysis results, and
//! chat surfaces. They receive signals and callbacks from the pages and do
//! not touch shared state directly.

pub mod analysis_panel;
pub mod chart_grid;
pub mod chat_panel;
pub mod control_panel;
pub mod dashboard_panel;
pub mod file_upload;
