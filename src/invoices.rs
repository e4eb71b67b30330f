//! Invoice resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customers::Customer;
use crate::expandable::Expandable;
use crate::identifiers::InvoiceId;
use crate::subscriptions::Subscription;
use crate::types::{ApiObject, Currency, Metadata};

/// Billing state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Open,
    Paid,
    Uncollectible,
    Void,
    /// Unknown status for forward compatibility with new invoice states.
    #[serde(other)]
    Unknown,
}

/// A statement of amounts owed by a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    pub id: InvoiceId,
    #[serde(skip_serializing_if = "Expandable::is_none")]
    pub customer: Expandable<Customer>,
    /// The subscription this invoice was generated for, if any.
    #[serde(skip_serializing_if = "Expandable::is_none")]
    pub subscription: Expandable<Subscription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    /// Human-readable invoice number, assigned on finalization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    pub amount_due: i64,
    pub amount_paid: i64,
    pub paid: bool,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl ApiObject for Invoice {
    type Id = InvoiceId;

    const OBJECT: &'static str = "invoice";

    fn id(&self) -> &InvoiceId {
        &self.id
    }
}
