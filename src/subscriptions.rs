//! Subscription resource and its line items.
//!
//! Subscriptions carry the densest relationship mix in the API: two
//! singular expandable fields (`customer`, `latest_invoice`), a nested
//! object-or-null list (`items`), and an array-valued expandable
//! relationship (`discounts`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customers::Customer;
use crate::discounts::Discount;
use crate::expandable::{Expandable, ExpandableList};
use crate::identifiers::{SubscriptionId, SubscriptionItemId};
use crate::invoices::Invoice;
use crate::list::List;
use crate::prices::Price;
use crate::types::{ApiObject, Currency, Metadata};

/// Lifecycle status of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    PastDue,
    Canceled,
    Trialing,
    Incomplete,
    IncompleteExpired,
    Unpaid,
    Paused,
    /// Unknown status for forward compatibility with new lifecycle states.
    #[serde(other)]
    Unknown,
}

/// How invoices generated by a subscription are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMethod {
    ChargeAutomatically,
    SendInvoice,
    #[serde(other)]
    Unknown,
}

/// One line of a subscription: a price and a quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionItem {
    pub id: SubscriptionItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<SubscriptionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl ApiObject for SubscriptionItem {
    type Id = SubscriptionItemId;

    const OBJECT: &'static str = "subscription_item";

    fn id(&self) -> &SubscriptionItemId {
        &self.id
    }
}

/// A recurring billing agreement between a customer and one or more prices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    pub id: SubscriptionId,
    #[serde(skip_serializing_if = "Expandable::is_none")]
    pub customer: Expandable<Customer>,
    /// The most recent invoice generated for this subscription.
    #[serde(skip_serializing_if = "Expandable::is_none")]
    pub latest_invoice: Expandable<Invoice>,
    /// Line items. Elements are objects or `null`, never bare id strings.
    pub items: List<SubscriptionItem>,
    /// Discounts applied to this subscription, collapsed or expanded.
    #[serde(skip_serializing_if = "ExpandableList::is_empty")]
    pub discounts: ExpandableList<Discount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_method: Option<CollectionMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    pub cancel_at_period_end: bool,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_period_start: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_period_end: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub cancel_at: Option<DateTime<Utc>>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl ApiObject for Subscription {
    type Id = SubscriptionId;

    const OBJECT: &'static str = "subscription";

    fn id(&self) -> &SubscriptionId {
        &self.id
    }
}
