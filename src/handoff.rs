// src/handoff.rs
//
// Where finished reports and consultation bookings go. Nothing downstream
// exists yet, so the shipped sinks just log the payload as JSON.

use crate::domain::lawyer::BookingRequest;
use crate::domain::wizard::DraftReport;

pub trait ReportSink: Send + Sync {
    fn submit(&self, report: DraftReport);
}

/// Fire-and-forget: there is no confirmation contract.
pub trait BookingSink: Send + Sync {
    fn book(&self, booking: BookingRequest);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn submit(&self, report: DraftReport) {
        match serde_json::to_string(&report) {
            Ok(payload) => tracing::info!(
                evidence_files = report.evidence_files.len(),
                anonymous = report.anonymous,
                %payload,
                "report submitted"
            ),
            Err(e) => tracing::error!(error = %e, "report could not be serialized"),
        }
    }
}

impl BookingSink for LogSink {
    fn book(&self, booking: BookingRequest) {
        match serde_json::to_string(&booking) {
            Ok(payload) => tracing::info!(lawyer_id = booking.lawyer_id, %payload, "consultation booked"),
            Err(e) => tracing::error!(error = %e, "booking could not be serialized"),
        }
    }
}
