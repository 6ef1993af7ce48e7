use crate::config::Settings;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_state};

fn board(uri: &str, settings: Settings) -> String {
    let (state, _) = init_test_state(settings);
    let resp = handle(get(uri, None), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

#[test]
fn board_shows_every_complaint_by_default() {
    let body = board("/public-board", Settings::default());
    assert!(body.contains("Showing 6 of 6 reports"));
    assert!(!body.contains("Load More"));
}

#[test]
fn default_sort_is_most_recent_first() {
    let body = board("/public-board", Settings::default());
    let order = [
        "School Principal Demanding Donation",
        "Police Refusing to File FIR",
        "Government Hospital Doctor",
        "Traffic Police Demanding Bribe",
        "Ration Shop Owner",
        "Municipal Officer Asking for Money",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|t| body.find(t).unwrap_or_else(|| panic!("missing {t}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "order was {positions:?}");
}

#[test]
fn search_narrows_the_list() {
    let body = board("/public-board?q=bribe", Settings::default());
    assert!(body.contains("Showing 1 of 6 reports"));
    assert!(body.contains("Traffic Police Demanding Bribe at Checkpoint"));
    assert!(!body.contains("Municipal Officer Asking for Money"));
}

#[test]
fn resolved_filter_with_popular_sort() {
    let body = board("/public-board?filter=resolved&sort=popular", Settings::default());
    assert!(body.contains("Showing 1 of 6 reports"));
    assert!(body.contains("Municipal Officer Asking for Money"));
    assert!(!body.contains("Traffic Police Demanding Bribe"));
}

#[test]
fn page_size_enables_load_more() {
    let settings = Settings {
        board_page_size: Some(4),
        ..Settings::default()
    };

    let body = board("/public-board", settings.clone());
    assert!(body.contains("Showing 4 of 6 reports"));
    assert!(body.contains("Load More"));
    assert!(body.contains("page=2"));

    let body = board("/public-board?page=2", settings);
    assert!(body.contains("Showing 6 of 6 reports"));
    assert!(!body.contains("Load More"));
}

#[test]
fn map_view_renders_markers_and_legend() {
    let body = board("/public-board?view=map", Settings::default());
    assert!(body.contains("Status Legend"));
    assert_eq!(body.matches(r#"class="marker "#).count(), 6);
}
