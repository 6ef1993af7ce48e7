use crate::errors::{ResultResp, ServerError};
use crate::sessions::SessionHandle;
use astra::{Body, ResponseBuilder};
use maud::Markup;

/// 200 page. Sets the session cookie when the session was just created.
pub fn html_response(markup: Markup, session: Option<&SessionHandle>) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8");
    if let Some(handle) = session.filter(|h| h.is_new) {
        builder = builder.header("Set-Cookie", handle.set_cookie_header());
    }

    builder
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Post/redirect/get: every form post answers with a 302 back to a page.
pub fn redirect(location: &str, session: Option<&SessionHandle>) -> ResultResp {
    let mut builder = ResponseBuilder::new().status(302).header("Location", location);
    if let Some(handle) = session.filter(|h| h.is_new) {
        builder = builder.header("Set-Cookie", handle.set_cookie_header());
    }

    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
