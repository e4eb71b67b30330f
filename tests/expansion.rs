//! Decoding behavior for expandable relationships on a subscription payload.
//!
//! Each test starts from the same base payload and mutates one field into a
//! different wire shape, mirroring how the server responds with and without
//! the `expand` request parameter.

use serde_json::{json, Value};

use payrail::{Expandable, Subscription};

fn base_subscription() -> Value {
    json!({
        "id": "sub_1MowQVLkdIwHu7ixeRlqHVzs",
        "object": "subscription",
        "customer": "cus_Na6dX7aXxi11N4",
        "latest_invoice": {
            "id": "in_1MowQWLkdIwHu7ixuzkSPfKd",
            "customer": "cus_Na6dX7aXxi11N4",
            "subscription": "sub_1MowQVLkdIwHu7ixeRlqHVzs",
            "status": "paid",
            "number": "4AE6A753-0001",
            "currency": "usd",
            "amount_due": 1000,
            "amount_paid": 1000,
            "paid": true,
            "created": 1679609768
        },
        "items": {
            "object": "list",
            "data": [
                {
                    "id": "si_Na6dzxczY5fwHx",
                    "subscription": "sub_1MowQVLkdIwHu7ixeRlqHVzs",
                    "quantity": 1,
                    "created": 1679609768,
                    "price": {
                        "id": "price_1MowQULkdIwHu7ixraBm864M",
                        "product": "prod_Na6dGcTsmU0I4R",
                        "currency": "usd",
                        "unit_amount": 1000,
                        "active": true,
                        "recurring": {"interval": "month", "interval_count": 1}
                    }
                }
            ],
            "has_more": false,
            "total_count": 1,
            "url": "/v1/subscription_items?subscription=sub_1MowQVLkdIwHu7ixeRlqHVzs"
        },
        "discounts": [],
        "status": "active",
        "collection_method": "charge_automatically",
        "currency": "usd",
        "cancel_at_period_end": false,
        "created": 1679609767,
        "current_period_start": 1679609767,
        "current_period_end": 1682288167,
        "metadata": {}
    })
}

#[test]
fn latest_invoice_null_decodes_to_none() {
    let mut body = base_subscription();
    body["latest_invoice"] = Value::Null;

    let subscription: Subscription = payrail::from_value(body).unwrap();
    assert!(subscription.latest_invoice.is_none());
    assert!(subscription.latest_invoice.id().is_empty());
    assert!(subscription.latest_invoice.as_object().is_none());
}

#[test]
fn latest_invoice_absent_decodes_to_none() {
    let mut body = base_subscription();
    body.as_object_mut().unwrap().remove("latest_invoice");

    let subscription: Subscription = payrail::from_value(body).unwrap();
    assert!(subscription.latest_invoice.is_none());
}

#[test]
fn latest_invoice_id_string_decodes_to_collapsed() {
    let mut body = base_subscription();
    body["latest_invoice"] = json!("il_xyz");

    let subscription: Subscription = payrail::from_value(body).unwrap();
    assert_eq!(subscription.latest_invoice.id().as_str(), "il_xyz");
    assert!(subscription.latest_invoice.as_object().is_none());
}

#[test]
fn latest_invoice_empty_object_decodes_expanded_with_empty_id() {
    let mut body = base_subscription();
    body["latest_invoice"] = json!({});

    let subscription: Subscription = payrail::from_value(body).unwrap();
    assert!(subscription.latest_invoice.is_expanded());
    assert!(subscription.latest_invoice.id().is_empty());
}

#[test]
fn latest_invoice_wrong_type_fails_with_shape_error() {
    let mut body = base_subscription();
    body["latest_invoice"] = json!(12345);

    let err = payrail::from_value::<Subscription>(body).unwrap_err();
    assert!(err.is_shape());
    assert!(err.to_string().contains("invoice"));
}

#[test]
fn items_appending_null_preserves_length_and_position() {
    let mut body = base_subscription();
    let data = body["items"]["data"].as_array_mut().unwrap();
    data.push(Value::Null);
    let expected_len = data.len();

    let subscription: Subscription = payrail::from_value(body).unwrap();
    assert_eq!(subscription.items.len(), expected_len);
    assert!(subscription.items.data.last().unwrap().is_none());
    // Entries already in the array are untouched.
    assert_eq!(
        subscription.items.data[0].as_ref().unwrap().id.as_str(),
        "si_Na6dzxczY5fwHx"
    );
}

#[test]
fn items_rejects_bare_id_string_element() {
    let mut body = base_subscription();
    body["items"]["data"]
        .as_array_mut()
        .unwrap()
        .push(json!("si_xyz"));

    let err = payrail::from_value::<Subscription>(body).unwrap_err();
    assert!(err.is_shape());
}

#[test]
fn items_appending_empty_object_decodes_with_empty_id() {
    let mut body = base_subscription();
    let data = body["items"]["data"].as_array_mut().unwrap();
    data.push(json!({}));
    let expected_len = data.len();

    let subscription: Subscription = payrail::from_value(body).unwrap();
    assert_eq!(subscription.items.len(), expected_len);
    let last = subscription.items.data.last().unwrap().as_ref().unwrap();
    assert!(last.id.is_empty());
}

#[test]
fn discounts_accept_mixed_collapsed_and_expanded_entries() {
    let mut body = base_subscription();
    body["discounts"] = json!([
        "di_abc",
        null,
        {"id": "di_def", "customer": "cus_Na6dX7aXxi11N4", "start": 1679609767}
    ]);

    let subscription: Subscription = payrail::from_value(body).unwrap();
    assert_eq!(subscription.discounts.len(), 3);
    assert_eq!(subscription.discounts.get(0).unwrap().id().as_str(), "di_abc");
    assert!(subscription.discounts.get(1).unwrap().is_none());
    let expanded = subscription.discounts.get(2).unwrap();
    assert!(expanded.is_expanded());
    assert_eq!(expanded.id().as_str(), "di_def");
}

#[test]
fn discounts_reject_numeric_element() {
    let mut body = base_subscription();
    body["discounts"] = json!(["di_abc", 42]);

    let err = payrail::from_value::<Subscription>(body).unwrap_err();
    assert!(err.is_shape());
}

#[test]
fn discounts_null_field_decodes_to_empty_list() {
    let mut body = base_subscription();
    body["discounts"] = Value::Null;

    let subscription: Subscription = payrail::from_value(body).unwrap();
    assert!(subscription.discounts.is_empty());
}

#[test]
fn expanded_invoice_keeps_its_own_collapsed_relations() {
    let body = base_subscription();

    let subscription: Subscription = payrail::from_value(body).unwrap();
    let invoice = subscription.latest_invoice.as_object().unwrap();
    assert_eq!(invoice.customer.id().as_str(), "cus_Na6dX7aXxi11N4");
    assert!(!invoice.customer.is_expanded());
    match &invoice.subscription {
        Expandable::Id(id) => assert_eq!(id.as_str(), "sub_1MowQVLkdIwHu7ixeRlqHVzs"),
        other => panic!("expected collapsed subscription, got {other:?}"),
    }
}

#[test]
fn decoded_subscription_round_trips() {
    let subscription: Subscription = payrail::from_value(base_subscription()).unwrap();

    let encoded = serde_json::to_value(&subscription).unwrap();
    let decoded: Subscription = payrail::from_value(encoded).unwrap();
    assert_eq!(decoded, subscription);
}

#[test]
fn collapsed_and_none_states_round_trip() {
    let mut body = base_subscription();
    body["latest_invoice"] = json!("in_only_id");
    body["customer"] = Value::Null;

    let subscription: Subscription = payrail::from_value(body).unwrap();
    let encoded = serde_json::to_value(&subscription).unwrap();
    let decoded: Subscription = payrail::from_value(encoded).unwrap();

    assert_eq!(decoded, subscription);
    assert_eq!(decoded.latest_invoice.id().as_str(), "in_only_id");
    assert!(decoded.customer.is_none());
}

#[test]
fn truncated_payload_is_a_syntax_error_not_a_shape_error() {
    let err = payrail::from_json::<Subscription>(b"{\"id\": \"sub_1\", ").unwrap_err();
    assert!(err.is_syntax());
    assert!(!err.is_shape());
}
