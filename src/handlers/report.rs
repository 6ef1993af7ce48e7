// src/handlers/report.rs
use crate::app_state::AppState;
use crate::domain::lawyer::{Lawyer, LawyerSelector};
use crate::domain::wizard::{DraftField, EvidenceFile, ReportWizard};
use crate::errors::{ResultResp, ServerError};
use crate::forms::Params;
use crate::handlers::{hand_off, lawyers, Handoff};
use crate::responses::{html_response, redirect};
use crate::sessions::Session;
use crate::templates::pages::{report_page, ReportVm};

pub const REPORT_SUBMITTED: &str =
    "Report submitted successfully. Your report has been submitted and will be reviewed shortly.";

pub fn show(state: &AppState, cookie: Option<&str>, now: i64) -> ResultResp {
    let render = |wizard: &ReportWizard, selector: &LawyerSelector, message: Option<&str>| {
        report_page(&ReportVm {
            wizard,
            lawyers: &state.seed.lawyers,
            selector,
            notice: message,
        })
    };

    // Visitors without a session see a blank wizard; one is only created on post.
    let markup = state.sessions.peek_session(cookie, now, |session| match session {
        Some(session) => {
            let message = session.take_notice();
            render(&session.wizard, &session.lawyers, message.as_deref())
        }
        None => render(&ReportWizard::new(), &LawyerSelector::default(), None),
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
    let handoff = outcome?;
    tracing::debug!(action, sessions = state.sessions.len(), "report action");
    hand_off(state, handoff);

    redirect("/report", Some(&handle))
}

fn apply(
    session: &mut Session,
    roster: &[Lawyer],
    action: &str,
    form: &Params,
) -> Result<Handoff, ServerError> {
    let wizard = &mut session.wizard;
    match action {
        "save" | "next" | "previous" | "submit" => {
            // Step 1 posts its fields along with the navigation button.
            for (key, value) in form.iter() {
                if let Some(field) = DraftField::from_form(key, value) {
                    wizard.update_field(field);
                }
            }
            match action {
                "next" => wizard.next(),
                "previous" => wizard.previous(),
                "submit" => {
                    if let Some(report) = wizard.submit() {
                        session.notice = Some(REPORT_SUBMITTED.to_string());
                        return Ok(Handoff::Report(report));
                    }
                }
                _ => {}
            }
        }
        "attach" => {
            for name in form.get_all("evidence").map(str::trim).filter(|n| !n.is_empty()) {
                wizard.attach_evidence(EvidenceFile::new(name));
            }
        }
        "remove" => {
            wizard.remove_evidence(form.require_number("index")?);
        }
        "toggle-anonymous" => wizard.set_anonymous(form.get("enabled") == Some("true")),
        "toggle-legal" => wizard.set_legal_assistance(form.get("enabled") == Some("true")),
        // Lawyer carousel embedded in the evidence step.
        other => {
            return Ok(lawyers::apply(session, roster, other, form)?
                .map_or(Handoff::Nothing, Handoff::Booking));
        }
    }
    Ok(Handoff::Nothing)
}
