//! Tests for webhook authentication and decoding.

use http::{HeaderMap, HeaderValue};

use super::*;
use crate::signature;
use crate::test_fixtures::SECRET;

const BODY: &[u8] = br#"{"order":{"id":"ORD-1","status":"approved","old_status":"submitted","description":"Reviewed and approved"}}"#;

fn receiver() -> NotificationReceiver {
    NotificationReceiver::new(SECRET).unwrap()
}

fn signed(body: &[u8]) -> String {
    signature::sign(SECRET, body).unwrap()
}

#[test]
fn valid_signature_yields_notification() {
    let notification = receiver().receive(BODY, &signed(BODY)).unwrap();

    let order = notification.order();
    assert_eq!(order.id.as_ref().unwrap(), "ORD-1");
    assert_eq!(order.status.as_deref(), Some("approved"));
    assert_eq!(order.old_status.as_deref(), Some("submitted"));
}

#[test]
fn tampered_signature_is_authentication_error() {
    let mut digest = signed(BODY);
    let last = if digest.ends_with('0') { "1" } else { "0" };
    digest.replace_range(digest.len() - 1.., last);

    let err = receiver().receive(BODY, &digest).unwrap_err();

    assert!(matches!(err, NotificationError::Authentication));
}

#[test]
fn tampered_body_is_authentication_error() {
    let digest = signed(BODY);
    let tampered = String::from_utf8(BODY.to_vec())
        .unwrap()
        .replace("approved", "declined");

    let err = receiver().receive(tampered.as_bytes(), &digest).unwrap_err();

    assert!(matches!(err, NotificationError::Authentication));
}

#[test]
fn authentication_is_checked_before_decoding() {
    let err = receiver().receive(b"not json", "deadbeef").unwrap_err();

    assert!(matches!(err, NotificationError::Authentication));
}

#[test]
fn authentic_garbage_is_decode_error() {
    let body = b"not json";

    let err = receiver().receive(body, &signed(body)).unwrap_err();

    assert!(matches!(err, NotificationError::Decode(_)));
}

#[test]
fn other_secret_is_rejected() {
    let other = NotificationReceiver::new("another-key").unwrap();

    assert!(other.receive(BODY, &signed(BODY)).is_err());
}

#[test]
fn empty_key_is_rejected() {
    assert!(NotificationReceiver::new("").is_err());
}

mod headers {
    use super::*;

    #[test]
    fn reads_dashed_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-riskified-hmac-sha256",
            HeaderValue::from_str(&signed(BODY)).unwrap(),
        );

        assert!(receiver().receive_from_headers(&headers, BODY).is_ok());
    }

    #[test]
    fn reads_underscored_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x_riskified_hmac_sha256",
            HeaderValue::from_str(&signed(BODY)).unwrap(),
        );

        assert!(receiver().receive_from_headers(&headers, BODY).is_ok());
    }

    #[test]
    fn missing_header_is_authentication_error() {
        let err = receiver()
            .receive_from_headers(&HeaderMap::new(), BODY)
            .unwrap_err();

        assert!(matches!(err, NotificationError::Authentication));
    }
}
