use hyper::{header, Body, Method, Request};
use routerify::Middleware;

use crate::api::error::{ResultExt, RouteError};

/// HTML forms can only submit GET and POST, so mutating forms carry
/// their logical verb in a `_method` field. This middleware rewrites the
/// request method before route matching so the routing table registers
/// the real verbs instead of inferring them.
pub fn method_override() -> Middleware<Body, RouteError> {
    Middleware::pre(|mut req: Request<Body>| async move {
        if req.method() != Method::POST || !is_form(&req) {
            return Ok(req);
        }

        let body = hyper::body::to_bytes(req.body_mut())
            .await
            .extend_route("failed to buffer form body")?;

        if let Some(method) = spoofed_method(&body) {
            tracing::debug!(method = %method, path = %req.uri().path(), "form method override");
            *req.method_mut() = method;
        }

        // Hand the buffered bytes back so the handler can parse the form.
        *req.body_mut() = Body::from(body);

        Ok(req)
    })
}

fn is_form(req: &Request<Body>) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

/// Only verbs a form legitimately spoofs are honored; in particular a
/// `_method` can never downgrade a request to a safe verb.
pub(crate) fn spoofed_method(body: &[u8]) -> Option<Method> {
    url::form_urlencoded::parse(body).find_map(|(key, value)| {
        if key != "_method" {
            return None;
        }

        match value.to_ascii_uppercase().as_str() {
            "PUT" => Some(Method::PUT),
            "PATCH" => Some(Method::PATCH),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        }
    })
}
