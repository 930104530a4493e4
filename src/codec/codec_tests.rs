//! Tests for envelope encoding and response decoding.

use serde_json::json;

use super::*;
use crate::models::{ArrayOrders, CheckoutOrder, Order, OrderId};
use crate::test_fixtures::sample_order;

mod encoding {
    use super::*;

    #[test]
    fn order_envelope_wraps_payload() {
        let order = Order::with_id("1");

        let bytes = encode(&Envelope::new(EnvelopeKey::Order, &order)).unwrap();

        assert_eq!(bytes, br#"{"order":{"id":"1"}}"#);
    }

    #[test]
    fn checkout_envelope_uses_checkout_key() {
        let checkout = CheckoutOrder(Order::with_id("c-1"));

        let bytes = encode(&Envelope::new(EnvelopeKey::Checkout, &checkout)).unwrap();

        assert_eq!(bytes, br#"{"checkout":{"id":"c-1"}}"#);
    }

    #[test]
    fn unset_fields_never_appear_as_null() {
        let bytes = encode(&Envelope::new(EnvelopeKey::Order, &sample_order())).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(!text.contains("null"), "{text}");
        assert!(!text.contains("closed_at"));
    }

    #[test]
    fn encoding_is_stable() {
        let order = sample_order();

        let first = encode(&Envelope::new(EnvelopeKey::Order, &order)).unwrap();
        let second = encode(&Envelope::new(EnvelopeKey::Order, &order.clone())).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn batch_is_posted_bare() {
        let batch = ArrayOrders::new(vec![Order::with_id("1"), Order::with_id("2")]);

        let bytes = encode(&batch).unwrap();

        assert_eq!(bytes, br#"{"orders":[{"id":"1"},{"id":"2"}]}"#);
    }

    #[test]
    fn envelope_exposes_parts() {
        let order = Order::with_id("1");
        let envelope = Envelope::new(EnvelopeKey::Order, &order);

        assert_eq!(envelope.key(), EnvelopeKey::Order);
        assert_eq!(envelope.payload(), &order);
        assert_eq!(EnvelopeKey::Checkout.to_string(), "checkout");
    }
}

mod decoding {
    use super::*;

    #[test]
    fn enveloped_payload_round_trips() {
        let order = sample_order();
        let bytes = encode(&Envelope::new(EnvelopeKey::Order, &order)).unwrap();

        let back: Order = decode_enveloped(&bytes, EnvelopeKey::Order).unwrap();

        assert_eq!(back, order);
    }

    #[test]
    fn wrong_envelope_is_reported() {
        let err = decode_enveloped::<Order>(br#"{"checkout":{"id":"1"}}"#, EnvelopeKey::Order)
            .unwrap_err();

        assert!(matches!(err, DecodeError::MissingEnvelope { key: "order" }));
    }

    #[test]
    fn malformed_json_is_distinguished_from_shape() {
        let malformed = decode::<Order>(b"{not json").unwrap_err();
        let shape = decode::<Order>(br#"{"line_items": "many"}"#).unwrap_err();

        assert!(matches!(malformed, DecodeError::Malformed(_)));
        assert!(matches!(shape, DecodeError::Shape(_)));
    }
}

mod responses {
    use super::*;

    #[test]
    fn order_reply_decodes() {
        let response =
            decode_response(br#"{"order":{"id":1,"status":"approved"}}"#, ResponseShape::Order)
                .unwrap();

        assert_eq!(response.order_id(), Some(&OrderId::from("1")));
        assert_eq!(response.status(), Some("approved"));
    }

    #[test]
    fn checkout_reply_is_aliased_onto_order() {
        let response = decode_response(
            br#"{"checkout":{"id":7,"status":"declined"}}"#,
            ResponseShape::Checkout,
        )
        .unwrap();

        assert_eq!(response.order_id(), Some(&OrderId::from("7")));
        assert_eq!(response.status(), Some("declined"));
    }

    #[test]
    fn checkout_key_is_ignored_for_order_shape() {
        let response =
            decode_response(br#"{"checkout":{"id":7}}"#, ResponseShape::Order).unwrap();

        assert!(response.order.is_none());
    }

    #[test]
    fn error_reply_decodes_message() {
        let body = json!({ "error": { "message": "bad field" } }).to_string();

        let response = decode_response(body.as_bytes(), ResponseShape::Order).unwrap();

        assert_eq!(
            response.error.unwrap().message.as_deref(),
            Some("bad field")
        );
    }

    #[test]
    fn non_object_reply_is_a_shape_error() {
        let err = decode_response(b"[1,2]", ResponseShape::Checkout).unwrap_err();

        assert!(matches!(err, DecodeError::Shape(_)));
    }

    #[test]
    fn empty_reply_is_malformed() {
        let err = decode_response(b"", ResponseShape::Order).unwrap_err();

        assert!(matches!(err, DecodeError::Malformed(_)));
    }
}
