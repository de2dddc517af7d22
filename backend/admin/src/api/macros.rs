macro_rules! make_response {
    ($status:expr, $body:expr) => {
        hyper::Response::builder()
            .status($status)
            .header(hyper::header::CONTENT_TYPE, "text/html; charset=utf-8")
            .body(hyper::Body::from($body))
            .expect("failed to build response")
    };
}

pub(crate) use make_response;
