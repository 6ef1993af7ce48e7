use crate::app_state::AppState;
use crate::errors::{ResultResp, ServerError};
use crate::forms::{read_form, Params};
use crate::handlers;
use crate::responses::html_response;
use crate::sessions::token_from_cookie_header;
use crate::templates::pages;
use astra::Request;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let cookie = session_cookie(&req);
    let now = chrono::Utc::now().timestamp();

    let result = match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page(), None),
        ("GET", "/about") => html_response(pages::about_page(), None),
        ("GET", "/public-board") => handlers::pages::public_board(state, &Params::from_query(&req)),
        ("GET", "/success-stories") => {
            handlers::pages::success_stories(state, &Params::from_query(&req))
        }
        ("GET", "/knowledge-base") => {
            handlers::pages::knowledge_base(state, &Params::from_query(&req))
        }

        ("GET", "/report") => handlers::report::show(state, cookie.as_deref(), now),
        ("POST", "/report") => read_form(&mut req)
            .and_then(|form| handlers::report::post(state, cookie.as_deref(), now, &form)),

        ("GET", "/lawyers") => handlers::lawyers::show(state, cookie.as_deref(), now),
        ("POST", "/lawyers") => read_form(&mut req)
            .and_then(|form| handlers::lawyers::post(state, cookie.as_deref(), now, &form)),

        _ => Err(ServerError::NotFound),
    };

    match &result {
        Ok(resp) => tracing::info!(%method, %path, status = resp.status().as_u16(), "request"),
        Err(err) => tracing::info!(%method, %path, status = err.status(), error = %err, "request"),
    }
    result
}

fn session_cookie(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(token_from_cookie_header)
        .map(str::to_owned)
}
