pub mod cli_consts {
    //! Dashboard Client Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard
    //! client, organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum buffer size for the fetch worker channels.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // IDENTITY CONFIGURATION
    // =============================================================================

    /// Default user identifier used when none is saved or supplied.
    pub const DEFAULT_USER_ID: &str = "user123";

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// UI loop timing configuration
    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen is shown before the dashboard mounts (milliseconds)
        pub const SPLASH_DURATION_MS: u64 = 2_000;

        /// Key event poll interval for the UI loop (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 100;

        /// Helper function to get the splash duration
        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }

        /// Helper function to get the key poll interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }
}
