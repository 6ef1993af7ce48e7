// src/app_state.rs
use crate::config::Settings;
use crate::handoff::{BookingSink, ReportSink};
use crate::seed::SeedData;
use crate::sessions::SessionStore;

/// Everything a request handler can reach. Shared by all server workers.
pub struct AppState {
    pub settings: Settings,
    pub seed: SeedData,
    pub sessions: SessionStore,
    pub reports: Box<dyn ReportSink>,
    pub bookings: Box<dyn BookingSink>,
}

impl AppState {
    pub fn new(
        settings: Settings,
        seed: SeedData,
        reports: Box<dyn ReportSink>,
        bookings: Box<dyn BookingSink>,
    ) -> Self {
        let sessions = SessionStore::new(settings.session_ttl_secs, settings.max_sessions);
        Self {
            settings,
            seed,
            sessions,
            reports,
            bookings,
        }
    }
}
