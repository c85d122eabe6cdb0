//! View-state machine for the dashboard / analysis shell.
//!
//! DESIGN
//! ======
//! The page owns one `RwSignal<ShellState>` and drives it only through the
//! transition methods below. Requests are issued with a ticket carrying a
//! per-kind sequence number; a completion whose ticket is not the latest
//! issued for its kind is ignored, so a slow response can never overwrite
//! newer state or release the in-flight flag of a newer query.
//!
//! TRANSITIONS
//! ===========
//! - `begin_query`: Idle|InFlight -> InFlight, view -> Analysis, result cleared
//! - `complete_query` (latest ticket): InFlight -> Idle, result set
//! - `refresh`: view -> Dashboard, dashboard load begins
//! - `begin_dashboard_load` / `complete_dashboard_load`: loading -> settled

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::sync::Arc;

use riskmetrics::DashboardMetrics;

use super::analysis::AnalysisResult;
use crate::config::{ApiOrigin, FallbackPolicy};
use crate::net::types::{AnalyzeResponse, ApiError};

pub const EXPORT_NOT_IMPLEMENTED: &str = "报告导出功能开发中 (not yet implemented)";

/// Which half of the display panel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Analysis,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryPhase {
    #[default]
    Idle,
    InFlight { seq: u64 },
}

/// Ticket for one `/analyze` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryTicket(u64);

impl QueryTicket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// Ticket for one `/dashboard_data` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// Shared handle to a dashboard snapshot, compared by identity.
///
/// Two handles are equal only if they point at the same fetched snapshot,
/// so chart sets rebuild whenever a new snapshot is installed even if its
/// contents happen to match the previous one.
#[derive(Clone, Debug)]
pub struct SnapshotRef(Arc<DashboardMetrics>);

impl PartialEq for SnapshotRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for SnapshotRef {
    type Target = DashboardMetrics;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, Debug)]
pub struct ShellState {
    pub view: ActiveView,
    pub snapshot: Option<Arc<DashboardMetrics>>,
    /// True until the first load settles and while any load is outstanding.
    pub dashboard_loading: bool,
    pub result: Option<AnalysisResult>,
    pub query: QueryPhase,
    pub notice: Option<String>,
    last_query_seq: u64,
    last_load_seq: u64,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            view: ActiveView::Dashboard,
            snapshot: None,
            dashboard_loading: true,
            result: None,
            query: QueryPhase::Idle,
            notice: None,
            last_query_seq: 0,
            last_load_seq: 0,
        }
    }
}

impl ShellState {
    pub fn is_query_in_flight(&self) -> bool {
        matches!(self.query, QueryPhase::InFlight { .. })
    }

    pub fn snapshot_ref(&self) -> Option<SnapshotRef> {
        self.snapshot.clone().map(SnapshotRef)
    }

    pub fn begin_dashboard_load(&mut self) -> LoadTicket {
        self.last_load_seq += 1;
        self.dashboard_loading = true;
        LoadTicket(self.last_load_seq)
    }

    /// Settle a dashboard load. Returns `false` if the ticket is stale.
    pub fn complete_dashboard_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<DashboardMetrics, ApiError>,
        policy: FallbackPolicy,
    ) -> bool {
        if ticket.0 != self.last_load_seq {
            return false;
        }
        self.snapshot = match outcome {
            Ok(metrics) => Some(Arc::new(metrics)),
            Err(_) => policy.fallback_snapshot(),
        };
        self.dashboard_loading = false;
        true
    }

    /// Start a query. Whitespace-only input is rejected with no state change.
    ///
    /// Returns the ticket and the trimmed query text to send.
    pub fn begin_query(&mut self, raw: &str) -> Option<(QueryTicket, String)> {
        let query = raw.trim();
        if query.is_empty() {
            return None;
        }
        self.last_query_seq += 1;
        self.result = None;
        self.notice = None;
        self.view = ActiveView::Analysis;
        self.query = QueryPhase::InFlight { seq: self.last_query_seq };
        Some((QueryTicket(self.last_query_seq), query.to_owned()))
    }

    /// Settle a query. Returns `false` if a newer query has since begun.
    pub fn complete_query(
        &mut self,
        ticket: QueryTicket,
        outcome: Result<AnalyzeResponse, ApiError>,
        origin: &ApiOrigin,
    ) -> bool {
        if ticket.0 != self.last_query_seq {
            return false;
        }
        self.result = Some(AnalysisResult::from_outcome(outcome, origin));
        self.query = QueryPhase::Idle;
        true
    }

    /// Return to the dashboard and start a fresh load.
    pub fn refresh(&mut self) -> LoadTicket {
        self.view = ActiveView::Dashboard;
        self.notice = None;
        self.begin_dashboard_load()
    }

    pub fn request_export(&mut self) {
        self.notice = Some(EXPORT_NOT_IMPLEMENTED.to_owned());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
