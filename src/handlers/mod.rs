// src/handlers/mod.rs
//
// Request handlers behind the router. GET handlers render; POST handlers
// run one session reducer and redirect back.

pub mod lawyers;
pub mod pages;
pub mod report;

use crate::app_state::AppState;
use crate::domain::lawyer::BookingRequest;
use crate::domain::wizard::DraftReport;

/// A finished value that leaves the session for one of the sinks.
#[derive(Debug)]
pub enum Handoff {
    Nothing,
    Report(DraftReport),
    Booking(BookingRequest),
}

/// Called after the session lock is released.
pub fn hand_off(state: &AppState, handoff: Handoff) {
    match handoff {
        Handoff::Nothing => {}
        Handoff::Report(report) => state.reports.submit(report),
        Handoff::Booking(booking) => state.bookings.book(booking),
    }
}
