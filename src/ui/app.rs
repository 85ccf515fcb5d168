//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::fetcher::{DashboardFetcher, FetchOutcome};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the fetched payload.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Identifier the dashboard payload is fetched for.
    user_id: String,

    /// The environment in which the application is running.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Spawns fetch attempts and owns the API handle.
    fetcher: DashboardFetcher,

    /// Receives operator events from the fetch worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Receives fetch outcomes from the fetch worker.
    outcome_receiver: mpsc::Receiver<FetchOutcome>,

    /// Cancelled on quit so an in-flight fetch cannot outlive the UI.
    cancellation: CancellationToken,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        user_id: String,
        environment: Environment,
        fetcher: DashboardFetcher,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        outcome_receiver: mpsc::Receiver<FetchOutcome>,
        cancellation: CancellationToken,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            user_id,
            environment,
            current_screen: Screen::Splash,
            fetcher,
            event_receiver,
            outcome_receiver,
            cancellation,
        }
    }

    /// Mount the dashboard screen and issue the initial fetch.
    fn mount_dashboard(&mut self) {
        let mut state = DashboardState::new(
            self.user_id.clone(),
            self.environment.clone(),
            self.start_time,
        );
        let generation = state.begin_fetch();
        self.fetcher.spawn(generation);
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        // Queue all incoming worker events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        // Apply completed fetch outcomes through the single transition handler
        while let Ok(outcome) = app.outcome_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.apply_fetch_outcome(outcome);
            }
        }

        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }

        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= ui::splash_duration() {
                app.mount_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(ui::poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    app.cancellation.cancel();
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any other key press skips the splash screen
                        app.mount_dashboard();
                    }
                    Screen::Dashboard(state) => {
                        // Re-fetch under a new generation; any outcome still
                        // in flight for the old one is discarded on arrival.
                        if key.code == KeyCode::Char('r') {
                            let generation = state.begin_fetch();
                            app.fetcher.spawn(generation);
                        }
                    }
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
