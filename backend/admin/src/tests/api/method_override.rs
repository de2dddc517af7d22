use hyper::Method;

use crate::api::middleware::method_override::spoofed_method;

#[test]
fn test_spoofed_method() {
    assert_eq!(
        spoofed_method(b"_method=DELETE&_token=abc"),
        Some(Method::DELETE)
    );
    assert_eq!(spoofed_method(b"_method=put"), Some(Method::PUT));
    assert_eq!(spoofed_method(b"_method=Patch"), Some(Method::PATCH));
    assert_eq!(
        spoofed_method(b"message=hi&_method=DELETE"),
        Some(Method::DELETE)
    );
}

#[test]
fn test_spoofed_method_rejects_unknown() {
    // Overriding to a safe verb must never work.
    assert_eq!(spoofed_method(b"_method=GET"), None);
    assert_eq!(spoofed_method(b"_method=HEAD"), None);

    assert_eq!(spoofed_method(b"_method=TRACE"), None);
    assert_eq!(spoofed_method(b"message=hello"), None);
    assert_eq!(spoofed_method(b""), None);
}
