use crate::app_state::AppState;
use crate::config::Settings;
use crate::handoff::testing::RecordingSink;
use crate::seed::SeedData;
use crate::sessions::{token_from_cookie_header, SESSION_COOKIE};
use astra::{Body, Request, Response};
use http::Request as HttpRequest;
use http::Method;
use std::io::Read;
use std::sync::Arc;

/// App state over the bundled seed data, with a sink the test can inspect.
pub fn init_test_state(settings: Settings) -> (AppState, Arc<RecordingSink>) {
    let seed = SeedData::load().unwrap_or_else(|e| panic!("seed data failed to load: {e}"));
    let sink = Arc::new(RecordingSink::default());
    let state = AppState::new(settings, seed, Box::new(sink.clone()), Box::new(sink.clone()));
    (state, sink)
}

pub fn get(uri: &str, session: Option<&str>) -> Request {
    let mut builder = HttpRequest::builder().method(Method::GET).uri(uri);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("{SESSION_COOKIE}={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, session: Option<&str>, form: &str) -> Request {
    let mut builder = HttpRequest::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("{SESSION_COOKIE}={token}"));
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Token from a `Set-Cookie` response header, if one was sent.
pub fn issued_session(resp: &Response) -> Option<String> {
    let header = resp.headers().get("Set-Cookie")?.to_str().ok()?;
    token_from_cookie_header(header).map(str::to_owned)
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
