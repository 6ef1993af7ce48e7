// src/handlers/lawyers.rs
use crate::app_state::AppState;
use crate::domain::lawyer::{
    format_booking_date, format_booking_time, BookingRequest, Lawyer, LawyerSelector,
};
use crate::errors::{ResultResp, ServerError};
use crate::forms::Params;
use crate::handlers::{hand_off, Handoff};
use crate::responses::{html_response, redirect};
use crate::sessions::Session;
use crate::templates::pages::lawyers_page;
use chrono::{NaiveDate, NaiveTime};

pub fn show(state: &AppState, cookie: Option<&str>, now: i64) -> ResultResp {
    let markup = state.sessions.peek_session(cookie, now, |session| match session {
        Some(session) => {
            let message = session.take_notice();
            lawyers_page(&state.seed.lawyers, &session.lawyers, message.as_deref())
        }
        None => lawyers_page(&state.seed.lawyers, &LawyerSelector::default(), None),
    })?;
    html_response(markup, None)
}

pub fn post(state: &AppState, cookie: Option<&str>, now: i64, form: &Params) -> ResultResp {
    let action = form
        .get("action")
        .ok_or_else(|| ServerError::BadRequest("missing action".into()))?;

    let (handle, outcome) = state.sessions.with_session(cookie, now, |session| {
        apply(session, &state.seed.lawyers, action, form)
    })?;
    if let Some(booking) = outcome? {
        hand_off(state, Handoff::Booking(booking));
    }

    redirect("/lawyers", Some(&handle))
}

/// Runs a carousel or booking action against the session. A completed
/// booking is returned and also leaves a confirmation notice behind.
pub fn apply(
    session: &mut Session,
    lawyers: &[Lawyer],
    action: &str,
    form: &Params,
) -> Result<Option<BookingRequest>, ServerError> {
    let selector = &mut session.lawyers;
    match action {
        "lawyer-filter" => selector.set_specialization(form.get_or("specialization", "all")),
        "lawyer-prev" => selector.previous(),
        "lawyer-next" => selector.next(lawyers),
        "lawyer-select" => selector.select(form.require_number("lawyer_id")?, lawyers),
        "book" => {
            selector.choose_date(
                form.get("date")
                    .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok()),
            );
            selector.choose_time(
                form.get("time")
                    .and_then(|t| NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()),
            );

            let Some(booking) = selector.book() else {
                return Ok(None);
            };
            let name = lawyers
                .iter()
                .find(|l| l.id == booking.lawyer_id)
                .map(|l| l.name.as_str())
                .unwrap_or_default();
            session.notice = Some(format!(
                "Your consultation with {name} has been scheduled for {} at {}.",
                format_booking_date(booking.date),
                format_booking_time(booking.time),
            ));
            return Ok(Some(booking));
        }
        other => return Err(ServerError::BadRequest(format!("unknown action {other:?}"))),
    }
    Ok(None)
}
