use crate::config::Settings;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_state, post_form};

#[test]
fn home_page_loads_successfully() {
    let (state, _) = init_test_state(Settings::default());

    let resp = handle(get("/", None), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Raising Voices, Ensuring Justice"));
    assert!(body.contains("1,247"));
    assert!(body.contains("5,280"));
    assert!(body.contains("Real Impact, Real Change"));
}

#[test]
fn about_page_lists_milestones() {
    let (state, _) = init_test_state(Settings::default());

    let body = body_string(handle(get("/about", None), &state).expect("Handler failed"));
    assert!(body.contains("Vivek Ingale"));
    for year in ["2023", "2024", "2025"] {
        assert!(body.contains(year), "missing milestone {year}");
    }
}

#[test]
fn unknown_route_is_not_found() {
    let (state, _) = init_test_state(Settings::default());

    assert!(matches!(handle(get("/nope", None), &state), Err(ServerError::NotFound)));
    assert!(matches!(
        handle(post_form("/", None, "action=next"), &state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn success_stories_filter_by_category_badge() {
    let (state, _) = init_test_state(Settings::default());

    let body = body_string(
        handle(get("/success-stories?category=Education", None), &state).expect("Handler failed"),
    );
    assert!(body.contains("Education Scam Uncovered"));
    assert!(!body.contains("Justice Served in Police Harassment Case"));

    let body = body_string(handle(get("/success-stories", None), &state).expect("Handler failed"));
    assert!(body.contains("Corruption Exposed in Municipal Office"));
    assert!(body.contains("Justice Served in Police Harassment Case"));
    assert!(body.contains("Education Scam Uncovered"));
}

#[test]
fn success_stories_search_and_list_layout() {
    let (state, _) = init_test_state(Settings::default());

    let body = body_string(
        handle(get("/success-stories?q=police&layout=list", None), &state).expect("Handler failed"),
    );
    assert!(body.contains("Justice Served in Police Harassment Case"));
    assert!(!body.contains("Education Scam Uncovered"));
    assert!(body.contains(r#"class="space-y-6""#));
}

#[test]
fn knowledge_base_defaults_to_rights_and_falls_back() {
    let (state, _) = init_test_state(Settings::default());

    let body = body_string(handle(get("/knowledge-base", None), &state).expect("Handler failed"));
    assert!(body.contains("Right to Information (RTI) Guide"));

    let body = body_string(
        handle(get("/knowledge-base?category=unknown", None), &state).expect("Handler failed"),
    );
    assert!(body.contains("Constitutional Rights"));

    let body = body_string(
        handle(get("/knowledge-base?category=legal", None), &state).expect("Handler failed"),
    );
    assert!(body.contains("Anti-Corruption Laws"));
    assert!(!body.contains("Constitutional Rights"));
}

#[test]
fn knowledge_base_search_spans_categories() {
    let (state, _) = init_test_state(Settings::default());

    let body = body_string(
        handle(get("/knowledge-base?q=whistleblower", None), &state).expect("Handler failed"),
    );
    assert!(body.contains("1 results for"));
    assert!(body.contains("Whistleblower Protection"));
}
