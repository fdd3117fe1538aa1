pub mod ui_consts {
    //! Shell UI constants.

    use std::time::Duration;

    /// The maximum number of events to keep in the activity trail.
    pub const MAX_ACTIVITY_EVENTS: usize = 100;

    /// How long the splash screen lingers before auto-advancing.
    pub const SPLASH_DURATION_SECS: u64 = 2;

    /// Key-event poll interval for the render loop (milliseconds).
    pub const POLL_INTERVAL_MS: u64 = 100;

    /// Helper function to get the poll interval
    pub const fn poll_interval() -> Duration {
        Duration::from_millis(POLL_INTERVAL_MS)
    }
}
