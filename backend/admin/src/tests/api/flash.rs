use hyper::{header, Body, Request, StatusCode};

use crate::api::flash;

fn request_with_cookie(cookie: &str) -> Request<Body> {
    Request::builder()
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn test_take_round_trip() {
    let cookie = flash::set_cookie("Chirp deleted successfully.");
    let pair = cookie.split(';').next().unwrap();

    let req = request_with_cookie(pair);

    assert_eq!(
        flash::take(&req).as_deref(),
        Some("Chirp deleted successfully.")
    );
}

#[test]
fn test_take_absent() {
    let req = Request::builder().body(Body::empty()).unwrap();
    assert!(flash::take(&req).is_none());

    let req = request_with_cookie("other=value");
    assert!(flash::take(&req).is_none());

    let req = request_with_cookie("chirper_flash=");
    assert!(flash::take(&req).is_none());
}

#[test]
fn test_take_among_other_cookies() {
    let req = request_with_cookie("a=b; chirper_flash=hello%20there; c=d");

    assert_eq!(flash::take(&req).as_deref(), Some("hello there"));
}

#[test]
fn test_clear_cookie_expires() {
    let cookie = flash::clear_cookie();

    assert!(cookie.starts_with("chirper_flash="));
    assert!(cookie.contains("Max-Age=0"));
}

#[test]
fn test_redirect() {
    let response = flash::redirect("/admin/chirps", "Chirp updated successfully.").unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin/chirps");

    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("chirper_flash="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/admin"));
}
