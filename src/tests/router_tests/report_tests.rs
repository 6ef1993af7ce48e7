use crate::config::Settings;
use crate::domain::wizard::{EvidenceFile, IncidentType};
use crate::errors::ServerError;
use crate::handlers::report::REPORT_SUBMITTED;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_state, issued_session, location, post_form};

#[test]
fn page_views_do_not_create_sessions() {
    let (state, _) = init_test_state(Settings::default());

    for _ in 0..200 {
        let resp = handle(get("/report", None), &state).expect("Handler failed");
        assert_eq!(resp.status(), 200);
        assert!(issued_session(&resp).is_none());
        let resp = handle(get("/lawyers", Some("made-up")), &state).expect("Handler failed");
        assert!(issued_session(&resp).is_none());
    }
    assert_eq!(state.sessions.len(), 0);

    let body = body_string(handle(get("/report", None), &state).expect("Handler failed"));
    assert!(body.contains(r#"aria-valuenow="25""#));
    assert!(body.contains("Basic Details"));
}

#[test]
fn first_post_sets_a_session_cookie() {
    let (state, _) = init_test_state(Settings::default());

    let resp = handle(post_form("/report", None, "action=save"), &state).expect("Handler failed");
    let token = issued_session(&resp).expect("no session cookie issued");
    assert_eq!(state.sessions.len(), 1);

    // Coming back with the cookie does not issue a new one.
    let resp = handle(post_form("/report", Some(&token), "action=next"), &state)
        .expect("Handler failed");
    assert!(issued_session(&resp).is_none());
    assert_eq!(state.sessions.len(), 1);
}

#[test]
fn wizard_state_survives_between_requests() {
    let (state, _) = init_test_state(Settings::default());

    let resp = handle(
        post_form("/report", None, "location=Pune&action=next"),
        &state,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/report");
    let token = issued_session(&resp).expect("no session cookie issued");

    let body = body_string(handle(get("/report", Some(&token)), &state).expect("Handler failed"));
    assert!(body.contains(r#"aria-valuenow="50""#));
    assert!(body.contains("Upload Evidence"));

    // A fresh visitor is still on step one.
    let body = body_string(handle(get("/report", None), &state).expect("Handler failed"));
    assert!(body.contains(r#"aria-valuenow="25""#));
}

#[test]
fn happy_path_submits_the_draft() {
    let (state, sink) = init_test_state(Settings::default());

    let resp = handle(
        post_form("/report", None, "incident_type=bribery&action=next"),
        &state,
    )
    .expect("Handler failed");
    let token = issued_session(&resp).expect("no session cookie issued");
    let t = Some(token.as_str());

    for form in ["evidence=fileA.jpg&action=attach", "action=next", "action=next"] {
        let resp = handle(post_form("/report", t, form), &state).expect("Handler failed");
        assert_eq!(resp.status(), 302);
    }

    let body = body_string(handle(get("/report", t), &state).expect("Handler failed"));
    assert!(body.contains(r#"aria-valuenow="100""#));

    handle(post_form("/report", t, "action=submit"), &state).expect("Handler failed");

    let reports = sink.reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].incident_type, Some(IncidentType::Bribery));
    assert_eq!(reports[0].evidence_files, vec![EvidenceFile::new("fileA.jpg")]);
    drop(reports);

    // Notice shows once and the wizard starts over.
    let body = body_string(handle(get("/report", t), &state).expect("Handler failed"));
    assert!(body.contains(REPORT_SUBMITTED));
    assert!(body.contains(r#"aria-valuenow="25""#));

    let body = body_string(handle(get("/report", t), &state).expect("Handler failed"));
    assert!(!body.contains(REPORT_SUBMITTED));
}

#[test]
fn submit_before_the_last_step_is_ignored() {
    let (state, sink) = init_test_state(Settings::default());

    let resp = handle(post_form("/report", None, "action=submit"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert!(sink.reports.lock().unwrap().is_empty());
}

#[test]
fn removing_evidence_keeps_the_rest() {
    let (state, _) = init_test_state(Settings::default());

    let resp = handle(post_form("/report", None, "action=next"), &state).expect("Handler failed");
    let token = issued_session(&resp).expect("no session cookie issued");
    let t = Some(token.as_str());

    for form in [
        "evidence=first.pdf&action=attach",
        "evidence=second.mp4&action=attach",
        "index=0&action=remove",
    ] {
        handle(post_form("/report", t, form), &state).expect("Handler failed");
    }

    let body = body_string(handle(get("/report", t), &state).expect("Handler failed"));
    assert!(body.contains("Uploaded Files (1)"));
    assert!(body.contains("second.mp4"));
    assert!(!body.contains("first.pdf"));
}

#[test]
fn legal_assistance_embeds_the_lawyer_selector() {
    let (state, sink) = init_test_state(Settings::default());

    let resp = handle(post_form("/report", None, "action=next"), &state).expect("Handler failed");
    let token = issued_session(&resp).expect("no session cookie issued");
    let t = Some(token.as_str());

    handle(post_form("/report", t, "enabled=true&action=toggle-legal"), &state)
        .expect("Handler failed");
    let body = body_string(handle(get("/report", t), &state).expect("Handler failed"));
    assert!(body.contains("Connect with a Lawyer"));
    assert!(body.contains("Adv. Priya Sharma"));

    for form in [
        "lawyer_id=1&action=lawyer-select",
        "date=2024-03-06&time=11%3A00&action=book",
    ] {
        let resp = handle(post_form("/report", t, form), &state).expect("Handler failed");
        assert_eq!(location(&resp), "/report");
    }
    assert_eq!(sink.bookings.lock().unwrap().len(), 1);

    let body = body_string(handle(get("/report", t), &state).expect("Handler failed"));
    assert!(body.contains(
        "Your consultation with Adv. Priya Sharma has been scheduled for March 6, 2024 at 11:00 AM."
    ));
    // Booking does not touch the draft.
    assert!(body.contains(r#"aria-valuenow="50""#));
}

#[test]
fn bad_actions_are_rejected() {
    let (state, _) = init_test_state(Settings::default());

    assert!(matches!(
        handle(post_form("/report", None, "action=explode"), &state),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(post_form("/report", None, "location=Delhi"), &state),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(post_form("/report", None, "index=abc&action=remove"), &state),
        Err(ServerError::BadRequest(_))
    ));
}
