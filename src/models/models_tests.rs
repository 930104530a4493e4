//! Tests for wire types: serialization shape and per-type required fields.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;

use super::*;
use crate::test_fixtures::sample_order;
use crate::validation::{FieldIssue, Validate, ValidationMode};

mod order_id {
    use super::*;

    #[test]
    fn accepts_string_and_number() {
        let from_text: OrderId = serde_json::from_str(r#""ORD-7""#).unwrap();
        let from_number: OrderId = serde_json::from_str("7").unwrap();

        assert_eq!(from_text, "ORD-7");
        assert_eq!(from_number, "7");
    }

    #[test]
    fn serializes_as_string() {
        let id = OrderId::from(42u64);

        assert_eq!(serde_json::to_string(&id).unwrap(), r#""42""#);
    }

    #[test]
    fn rejects_non_scalar() {
        assert!(serde_json::from_str::<OrderId>("[1]").is_err());
    }
}

mod serialization {
    use super::*;

    #[test]
    fn unset_fields_are_omitted() {
        let order = Order {
            email: Some("a@b.co".to_string()),
            ..Order::with_id("1")
        };

        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(value, json!({ "id": "1", "email": "a@b.co" }));
    }

    #[test]
    fn amounts_serialize_as_numbers() {
        let item = LineItem {
            title: Some("Pen".to_string()),
            price: Some(Decimal::new(105, 1)),
            quantity: Some(2),
            ..LineItem::default()
        };

        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value, json!({ "title": "Pen", "price": 10.5, "quantity": 2 }));
    }

    #[test]
    fn timestamps_serialize_as_rfc3339() {
        let cancel = CancelOrder {
            id: Some("9".into()),
            cancel_reason: Some("customer request".to_string()),
            cancelled_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
        };

        let value = serde_json::to_value(&cancel).unwrap();

        assert_eq!(value["cancelled_at"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn chargeback_kind_uses_type_on_the_wire() {
        let details = ChargebackDetails {
            kind: Some("cb".to_string()),
            ..ChargebackDetails::default()
        };

        let value = serde_json::to_value(&details).unwrap();

        assert_eq!(value, json!({ "type": "cb" }));
    }

    #[test]
    fn checkout_is_transparent() {
        let checkout = CheckoutOrder(Order::with_id("c-1"));

        assert_eq!(serde_json::to_value(&checkout).unwrap(), json!({ "id": "c-1" }));
    }

    #[test]
    fn populated_fields_survive_a_round_trip() {
        let order = sample_order();

        let bytes = serde_json::to_vec(&order).unwrap();
        let back: Order = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(back, order);
    }

    #[test]
    fn unknown_fields_are_ignored_on_input() {
        let order: Order = serde_json::from_str(r#"{"id": 5, "risk_score": 0.3}"#).unwrap();

        assert_eq!(order.id.unwrap(), "5");
    }
}

mod round_trips {
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::*;

    fn round_trip<T: Serialize + DeserializeOwned>(value: &T) -> T {
        let bytes = serde_json::to_vec(value).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn at(day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 9, 30, 0).unwrap()
    }

    #[test]
    fn high_precision_amount_is_exact_on_the_wire() {
        let amount = Decimal::from_str_exact("12345678901234567.89").unwrap();
        let order = Order {
            total_price: Some(amount),
            ..Order::with_id("1")
        };

        let text = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&text).unwrap();

        assert_eq!(text, r#"{"id":"1","total_price":12345678901234567.89}"#);
        assert_eq!(back.total_price.unwrap().to_string(), "12345678901234567.89");
        assert_eq!(back, order);
    }

    #[test]
    fn numeric_id_stays_text_with_exact_numbers() {
        let order: Order = serde_json::from_str(r#"{"id": 12345678901234567890}"#).unwrap();

        assert_eq!(order.id.unwrap(), "12345678901234567890");
    }

    #[test]
    fn checkout_denied_order() {
        let denied = CheckoutDeniedOrder {
            id: Some("c-9".into()),
            authorization_error: Some(AuthorizationError {
                created_at: Some(at(1)),
                error_code: Some("card_declined".to_string()),
                message: Some("insufficient funds".to_string()),
            }),
        };

        assert_eq!(round_trip(&denied), denied);
    }

    #[test]
    fn cancel_order() {
        let cancel = CancelOrder {
            id: Some("9".into()),
            cancel_reason: Some("customer request".to_string()),
            cancelled_at: Some(at(2)),
        };

        assert_eq!(round_trip(&cancel), cancel);
    }

    #[test]
    fn refund_order() {
        let refund = RefundOrder {
            id: Some("9".into()),
            refunds: Some(vec![RefundDetails {
                refund_id: Some("r-1".to_string()),
                refunded_at: Some(at(3)),
                amount: Some(Decimal::new(1_999, 2)),
                currency: Some("USD".to_string()),
                reason: Some("damaged".to_string()),
            }]),
        };

        assert_eq!(round_trip(&refund), refund);
    }

    #[test]
    fn fulfillment_order() {
        let fulfill = FulfillmentOrder {
            id: Some("9".into()),
            fulfillments: Some(vec![FulfillmentDetails {
                fulfillment_id: Some("f-1".to_string()),
                created_at: Some(at(4)),
                status: Some("success".to_string()),
                tracking_company: Some("UPS".to_string()),
                tracking_numbers: Some("1Z999".to_string()),
                ..FulfillmentDetails::default()
            }]),
        };

        assert_eq!(round_trip(&fulfill), fulfill);
    }

    #[test]
    fn decision_order() {
        let decision = DecisionOrder {
            id: Some("9".into()),
            decision: Some(DecisionDetails {
                external_status: Some("chargeback_fraud".to_string()),
                decided_at: Some(at(5)),
                amount: Some(Decimal::new(5_000, 2)),
                currency: Some("EUR".to_string()),
                ..DecisionDetails::default()
            }),
        };

        assert_eq!(round_trip(&decision), decision);
    }

    #[test]
    fn chargeback_order_keeps_type_rename() {
        let chargeback = ChargebackOrder {
            id: Some("9".into()),
            chargeback_details: Some(ChargebackDetails {
                chargeback_at: Some(at(6)),
                chargeback_currency: Some("USD".to_string()),
                chargeback_amount: Some(Decimal::new(11_300, 2)),
                reason_code: Some("4837".to_string()),
                kind: Some("cb".to_string()),
                ..ChargebackDetails::default()
            }),
            dispute_details: Some(DisputeDetails {
                case_id: Some("case-1".to_string()),
                disputed_at: Some(at(7)),
                ..DisputeDetails::default()
            }),
            ..ChargebackOrder::default()
        };

        let back = round_trip(&chargeback);

        assert_eq!(back, chargeback);
        assert_eq!(
            back.chargeback_details.unwrap().kind.as_deref(),
            Some("cb")
        );
    }

    #[test]
    fn chargeback_kind_decodes_from_type() {
        let details: ChargebackDetails =
            serde_json::from_value(json!({ "type": "retrieval" })).unwrap();

        assert_eq!(details.kind.as_deref(), Some("retrieval"));
    }

    #[test]
    fn historical_batch() {
        let batch = ArrayOrders::new(vec![sample_order(), Order::with_id("ORD-1002")]);

        assert_eq!(round_trip(&batch), batch);
    }
}

mod order_validation {
    use super::*;

    #[test]
    fn complete_order_passes_all() {
        assert!(sample_order().validate(ValidationMode::All).is_ok());
    }

    #[test]
    fn missing_id_is_named() {
        let order = Order {
            id: None,
            ..sample_order()
        };

        let err = order.validate(ValidationMode::All).unwrap_err();

        assert_eq!(err.issue_for("id"), Some(FieldIssue::Missing));
        assert_eq!(err.errors().len(), 1);
    }

    #[test]
    fn every_mandatory_field_is_required() {
        let err = Order::default().validate(ValidationMode::All).unwrap_err();
        let fields: Vec<&str> = err.fields().collect();

        assert_eq!(
            fields,
            vec!["id", "email", "currency", "total_price", "line_items"]
        );
    }

    #[test]
    fn nested_records_report_qualified_paths() {
        let mut order = sample_order();
        order.billing_address.as_mut().unwrap().country_code = Some("USA".to_string());
        order.line_items.as_mut().unwrap()[0].quantity = Some(0);

        let err = order.validate(ValidationMode::IgnoreMissing).unwrap_err();

        assert_eq!(
            err.issue_for("billing_address.country_code"),
            Some(FieldIssue::InvalidCountryCode)
        );
        assert_eq!(
            err.issue_for("line_items[0].quantity"),
            Some(FieldIssue::InvalidQuantity)
        );
    }

    #[test]
    fn bad_browser_ip_is_rejected() {
        let order = Order {
            browser_ip: Some("localhost".to_string()),
            ..sample_order()
        };

        let err = order.validate(ValidationMode::IgnoreMissing).unwrap_err();

        assert_eq!(err.issue_for("browser_ip"), Some(FieldIssue::InvalidIpAddress));
    }

    #[test]
    fn none_accepts_anything() {
        let order = Order {
            email: Some("???".to_string()),
            currency: Some("dollars".to_string()),
            line_items: Some(vec![]),
            ..Order::default()
        };

        assert!(order.validate(ValidationMode::None).is_ok());
    }
}

mod checkout_validation {
    use super::*;

    #[test]
    fn nothing_is_mandatory_under_all() {
        assert!(
            CheckoutOrder::default()
                .validate(ValidationMode::All)
                .is_ok()
        );
        assert!(
            CheckoutDeniedOrder::default()
                .validate(ValidationMode::All)
                .is_ok()
        );
    }

    #[test]
    fn present_fields_are_still_checked() {
        let checkout = CheckoutOrder(Order {
            currency: Some("EURO".to_string()),
            ..Order::default()
        });

        let err = checkout.validate(ValidationMode::All).unwrap_err();

        assert_eq!(err.issue_for("currency"), Some(FieldIssue::InvalidCurrency));
    }
}

mod lifecycle_validation {
    use super::*;

    #[test]
    fn cancel_requires_reason_and_time() {
        let cancel = CancelOrder {
            id: Some("1".into()),
            ..CancelOrder::default()
        };

        let fields: Vec<String> = cancel
            .validate(ValidationMode::All)
            .unwrap_err()
            .fields()
            .map(str::to_string)
            .collect();

        assert_eq!(fields, vec!["cancel_reason", "cancelled_at"]);
    }

    #[test]
    fn refund_details_are_checked_per_entry() {
        let refund = RefundOrder {
            id: Some("1".into()),
            refunds: Some(vec![RefundDetails {
                refund_id: Some("r-1".to_string()),
                amount: Some(Decimal::new(-500, 2)),
                currency: Some("USD".to_string()),
                ..RefundDetails::default()
            }]),
        };

        let err = refund.validate(ValidationMode::All).unwrap_err();

        assert_eq!(
            err.issue_for("refunds[0].amount"),
            Some(FieldIssue::NegativeAmount)
        );
    }

    #[test]
    fn empty_fulfillments_are_rejected() {
        let fulfill = FulfillmentOrder {
            id: Some("1".into()),
            fulfillments: Some(vec![]),
        };

        let err = fulfill.validate(ValidationMode::All).unwrap_err();

        assert_eq!(err.issue_for("fulfillments"), Some(FieldIssue::Empty));
    }

    #[test]
    fn decision_requires_details() {
        let decision = DecisionOrder {
            id: Some("1".into()),
            decision: None,
        };

        let err = decision.validate(ValidationMode::All).unwrap_err();

        assert_eq!(err.issue_for("decision"), Some(FieldIssue::Missing));
    }

    #[test]
    fn chargeback_details_are_required_and_checked() {
        let chargeback = ChargebackOrder {
            id: Some("1".into()),
            chargeback_details: Some(ChargebackDetails {
                chargeback_at: Some(Utc::now()),
                chargeback_currency: Some("US".to_string()),
                chargeback_amount: Some(Decimal::new(1_000, 2)),
                ..ChargebackDetails::default()
            }),
            ..ChargebackOrder::default()
        };

        let err = chargeback.validate(ValidationMode::All).unwrap_err();

        assert_eq!(
            err.issue_for("chargeback_details.chargeback_currency"),
            Some(FieldIssue::InvalidCurrency)
        );
        assert_eq!(
            err.issue_for("chargeback_details.reason_code"),
            Some(FieldIssue::Missing)
        );
    }

    #[test]
    fn historical_batch_validates_each_order() {
        let batch = ArrayOrders::new(vec![
            sample_order(),
            Order {
                email: None,
                ..sample_order()
            },
        ]);

        let err = batch.validate(ValidationMode::All).unwrap_err();

        assert_eq!(err.issue_for("orders[1].email"), Some(FieldIssue::Missing));
        assert!(err.issue_for("orders[0].email").is_none());
    }

    #[test]
    fn empty_historical_batch_is_rejected() {
        let err = ArrayOrders::default()
            .validate(ValidationMode::All)
            .unwrap_err();

        assert_eq!(err.issue_for("orders"), Some(FieldIssue::Empty));
    }
}

mod inbound {
    use super::*;

    #[test]
    fn response_exposes_order_fields() {
        let response: Response =
            serde_json::from_str(r#"{"order":{"id":1,"status":"approved"}}"#).unwrap();

        assert_eq!(response.order_id().unwrap(), "1");
        assert_eq!(response.status(), Some("approved"));
        assert!(response.error.is_none());
    }

    #[test]
    fn notification_carries_custom_record() {
        let notification: Notification = serde_json::from_value(json!({
            "order": {
                "id": "ORD-1",
                "status": "declined",
                "old_status": "submitted",
                "description": "Reviewed and declined",
                "custom": { "app_dom_id": "dom-9" }
            }
        }))
        .unwrap();

        let order = notification.order();
        assert_eq!(order.id.as_ref().unwrap(), "ORD-1");
        assert_eq!(order.old_status.as_deref(), Some("submitted"));
        assert_eq!(
            order.custom.as_ref().unwrap().app_dom_id.as_deref(),
            Some("dom-9")
        );
    }
}
