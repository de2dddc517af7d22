use hyper::{header, Body, Request, Response, StatusCode};

use super::error::Result;

/// Cookie slot for the one-shot success notice a redirect leaves behind.
const COOKIE_NAME: &str = "chirper_flash";

pub fn set_cookie(notice: &str) -> String {
    format!(
        "{}={}; Path=/admin; HttpOnly; SameSite=Lax",
        COOKIE_NAME,
        urlencoding::encode(notice)
    )
}

/// Expires the cookie so a notice renders exactly once.
pub fn clear_cookie() -> String {
    format!("{}=; Path=/admin; HttpOnly; Max-Age=0", COOKIE_NAME)
}

/// Reads the pending notice, if any, from the request cookies.
pub fn take(req: &Request<Body>) -> Option<String> {
    let cookies = req.headers().get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;

        if name != COOKIE_NAME || value.is_empty() {
            return None;
        }

        urlencoding::decode(value).ok().map(|v| v.into_owned())
    })
}

/// Redirects after a successful mutation, carrying the notice for the
/// next render.
pub fn redirect(location: &str, notice: &str) -> Result<Response<Body>> {
    Ok(Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header(header::LOCATION, location)
        .header(header::SET_COOKIE, set_cookie(notice))
        .body(Body::empty())
        .expect("failed to build redirect response"))
}
