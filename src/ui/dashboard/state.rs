//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::view_model::DashboardViewModel;

use std::collections::VecDeque;
use std::time::Instant;

/// Load phase of the dashboard data regions.
///
/// There is no explicit error state: a failed fetch leaves the prior phase
/// and view untouched, and the failure is only visible in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Initial state, before the first fetch resolves.
    Empty,
    /// At least one fetch has succeeded.
    Loaded,
}

/// State for tracking the in-flight fetch
#[derive(Debug, Clone)]
pub enum FetchingState {
    Idle,
    Active { started_at: Instant },
}

/// Dashboard state: the current view model plus fetch lifecycle bookkeeping.
#[derive(Debug)]
pub struct DashboardState {
    /// Identifier the dashboard payload is fetched for.
    pub user_id: String,
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Defaulted view of the latest successful payload.
    pub view: DashboardViewModel,
    /// Load phase of the data regions.
    pub phase: LoadPhase,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,

    /// Generation of the fetch whose outcome is currently awaited.
    generation: u64,
    /// Current fetching state (active, idle)
    fetching_state: FetchingState,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(user_id: String, environment: Environment, start_time: Instant) -> Self {
        Self {
            user_id,
            environment,
            start_time,
            view: DashboardViewModel::default(),
            phase: LoadPhase::Empty,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            generation: 0,
            fetching_state: FetchingState::Idle,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn fetching_state(&self) -> &FetchingState {
        &self.fetching_state
    }

    pub(super) fn set_fetching_state(&mut self, state: FetchingState) {
        self.fetching_state = state;
    }

    /// Advance to the next fetch generation and mark the fetch in flight.
    ///
    /// Returns the new generation for tagging the request; outcomes carrying
    /// any other generation are discarded by the transition handler.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.fetching_state = FetchingState::Active {
            started_at: Instant::now(),
        };
        self.generation
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
