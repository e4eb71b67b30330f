//! Discount resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customers::Customer;
use crate::expandable::Expandable;
use crate::identifiers::{DiscountId, SubscriptionId};
use crate::types::ApiObject;

/// A discount applied to a customer or subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discount {
    pub id: DiscountId,
    #[serde(skip_serializing_if = "Expandable::is_none")]
    pub customer: Expandable<Customer>,
    /// Set when the discount applies to a single subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<SubscriptionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_code: Option<String>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end: Option<DateTime<Utc>>,
}

impl ApiObject for Discount {
    type Id = DiscountId;

    const OBJECT: &'static str = "discount";

    fn id(&self) -> &DiscountId {
        &self.id
    }
}
