use crate::config::Settings;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_state, issued_session, location, post_form};

#[test]
fn lawyers_page_shows_the_first_card() {
    let (state, _) = init_test_state(Settings::default());

    let resp = handle(get("/lawyers", None), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Adv. Priya Sharma"));
    assert!(body.contains("1 of 3"));
    assert!(!body.contains("Adv. Rajesh Kumar"));
}

#[test]
fn carousel_moves_and_filter_rewinds() {
    let (state, _) = init_test_state(Settings::default());

    let resp = handle(post_form("/lawyers", None, "action=lawyer-next"), &state)
        .expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/lawyers");
    let token = issued_session(&resp).expect("no session cookie issued");
    let t = Some(token.as_str());

    let body = body_string(handle(get("/lawyers", t), &state).expect("Handler failed"));
    assert!(body.contains("Adv. Rajesh Kumar"));
    assert!(body.contains("2 of 3"));

    // Past the end stays on the last card.
    for _ in 0..3 {
        handle(post_form("/lawyers", t, "action=lawyer-next"), &state).expect("Handler failed");
    }
    let body = body_string(handle(get("/lawyers", t), &state).expect("Handler failed"));
    assert!(body.contains("Adv. Ananya Patel"));

    handle(
        post_form("/lawyers", t, "specialization=criminal&action=lawyer-filter"),
        &state,
    )
    .expect("Handler failed");
    let body = body_string(handle(get("/lawyers", t), &state).expect("Handler failed"));
    assert!(body.contains("Adv. Rajesh Kumar"));
    assert!(!body.contains("Adv. Ananya Patel"));
}

#[test]
fn booking_needs_date_and_time() {
    let (state, sink) = init_test_state(Settings::default());

    let resp = handle(post_form("/lawyers", None, "lawyer_id=2&action=lawyer-select"), &state)
        .expect("Handler failed");
    let token = issued_session(&resp).expect("no session cookie issued");
    let t = Some(token.as_str());

    handle(post_form("/lawyers", t, "date=2024-03-05&time=&action=book"), &state)
        .expect("Handler failed");
    assert!(sink.bookings.lock().unwrap().is_empty());

    handle(
        post_form("/lawyers", t, "date=2024-03-05&time=14%3A00&action=book"),
        &state,
    )
    .expect("Handler failed");

    let bookings = sink.bookings.lock().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].lawyer_id, 2);
    drop(bookings);

    let body = body_string(handle(get("/lawyers", t), &state).expect("Handler failed"));
    assert!(body.contains(
        "Your consultation with Adv. Rajesh Kumar has been scheduled for March 5, 2024 at 2:00 PM."
    ));
}

#[test]
fn selecting_needs_a_numeric_id() {
    let (state, _) = init_test_state(Settings::default());

    assert!(matches!(
        handle(post_form("/lawyers", None, "lawyer_id=x&action=lawyer-select"), &state),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(post_form("/lawyers", None, "action=next"), &state),
        Err(ServerError::BadRequest(_))
    ));
}
