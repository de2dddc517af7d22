use askama::Template;
use hyper::StatusCode;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    status: u16,
    reason: &'a str,
    message: &'a str,
}

/// Renders the HTML error page, falling back to the bare message if the
/// template engine itself fails.
pub fn render(status: StatusCode, message: &str) -> String {
    ErrorTemplate {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Error"),
        message,
    }
    .render()
    .unwrap_or_else(|_| message.to_string())
}
