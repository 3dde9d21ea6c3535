//! Dashboard state managed via Dioxus context.
//!
//! `DashboardState` bundles all reactive signals into a single struct
//! provided by the controller via `use_context_provider`. Chart
//! components receive read-only slices as props and emit intents through
//! `EventHandler` callbacks; only the controller writes these signals.

use dioxus::prelude::*;
use sca_api::date_index::DateRangeIndex;
use sca_api::filters::ActiveFilters;
use sca_api::request_guard::RequestTracker;
use sca_api::snapshot::DashboardSnapshot;

/// What the dashboard body should render for the current fetch cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing requested yet (before the date index resolves).
    #[default]
    Idle,
    /// A snapshot request is in flight; any previous snapshot stays
    /// visible under an advisory overlay.
    Loading,
    /// The most recent request failed.
    Error(String),
    /// The displayed snapshot matches the committed range and filters.
    Ready,
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Shared state for the shorts dashboard.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Distinct sorted dates from the raw feed; immutable once built.
    pub date_index: Signal<DateRangeIndex>,
    /// Committed slider range (indices into the date index). Snapshot
    /// fetches key off this, never off the pending range.
    pub selected_range: Signal<(usize, usize)>,
    /// In-progress drag position, used only for the slider labels;
    /// collapses into `selected_range` on release.
    pub pending_range: Signal<(usize, usize)>,
    /// Active feature filters.
    pub filters: Signal<ActiveFilters>,
    /// Latest applied snapshot, replaced wholesale per fetch.
    pub snapshot: Signal<Option<DashboardSnapshot>>,
    /// Current fetch cycle status.
    pub status: Signal<FetchStatus>,
    /// Stale-response rejection sequence.
    pub requests: Signal<RequestTracker>,
}

impl DashboardState {
    /// Create a new DashboardState with default signal values.
    pub fn new() -> Self {
        Self {
            date_index: Signal::new(DateRangeIndex::default()),
            selected_range: Signal::new((0, 0)),
            pending_range: Signal::new((0, 0)),
            filters: Signal::new(ActiveFilters::default()),
            snapshot: Signal::new(None),
            status: Signal::new(FetchStatus::Idle),
            requests: Signal::new(RequestTracker::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FetchStatus;

    #[test]
    fn test_fetch_status_accessors() {
        assert!(FetchStatus::Loading.is_loading());
        assert!(!FetchStatus::Ready.is_loading());
        assert_eq!(
            FetchStatus::Error("boom".to_string()).error_message(),
            Some("boom")
        );
        assert_eq!(FetchStatus::Ready.error_message(), None);
    }
}
