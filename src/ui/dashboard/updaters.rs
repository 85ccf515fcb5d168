//! Dashboard state update logic
//!
//! Contains the per-frame update and the single fetch transition handler

use super::state::{DashboardState, FetchingState, LoadPhase};
use crate::fetcher::FetchOutcome;
use crate::view_model::DashboardViewModel;

impl DashboardState {
    /// Update the dashboard state with a new tick and drain queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Single transition handler for fetch results.
    ///
    /// Outcomes from superseded generations are discarded, so a slow response
    /// can never overwrite state installed by a newer fetch. A failure leaves
    /// the prior view (empty or stale) untouched; a success replaces it
    /// wholesale, never merging.
    pub fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.generation != self.generation() {
            return;
        }
        self.set_fetching_state(FetchingState::Idle);

        if let Ok(payload) = outcome.result {
            self.view = DashboardViewModel::from_payload(&payload);
            self.phase = LoadPhase::Loaded;
        }
    }
}
