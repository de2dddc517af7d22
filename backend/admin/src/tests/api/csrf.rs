use chrono::{Duration, Utc};

use crate::api::csrf::CsrfToken;
use crate::config::AppConfig;

#[test]
fn test_round_trip() {
    let config = AppConfig::default();

    let token = CsrfToken::new(&config)
        .serialize(&config)
        .expect("failed to sign token");
    let verified = CsrfToken::verify(&config, &token).expect("token should verify");

    assert!(verified.expiration > Utc::now());
    assert!(verified.issued_at <= Utc::now());
}

#[test]
fn test_rejects_garbage() {
    let config = AppConfig::default();

    assert!(CsrfToken::verify(&config, "").is_none());
    assert!(CsrfToken::verify(&config, "not-a-token").is_none());
    assert!(CsrfToken::verify(&config, "a.b.c").is_none());
}

#[test]
fn test_rejects_wrong_secret() {
    let config = AppConfig::default();
    let other = AppConfig {
        csrf_secret: "different".to_string(),
        ..AppConfig::default()
    };

    let token = CsrfToken::new(&config).serialize(&config).unwrap();

    assert!(CsrfToken::verify(&other, &token).is_none());
}

#[test]
fn test_rejects_wrong_issuer() {
    let config = AppConfig::default();
    let other = AppConfig {
        csrf_issuer: "someone-else".to_string(),
        ..AppConfig::default()
    };

    let token = CsrfToken::new(&config).serialize(&config).unwrap();

    assert!(CsrfToken::verify(&other, &token).is_none());
}

#[test]
fn test_rejects_expired() {
    let config = AppConfig::default();

    let token = CsrfToken {
        issued_at: Utc::now() - Duration::hours(3),
        expiration: Utc::now() - Duration::hours(1),
    }
    .serialize(&config)
    .unwrap();

    assert!(CsrfToken::verify(&config, &token).is_none());
}
