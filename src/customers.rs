//! Customer resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identifiers::CustomerId;
use crate::types::{ApiObject, Currency, Metadata};

/// A customer record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Currency the customer is invoiced in, fixed after the first invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delinquent: Option<bool>,
    #[serde(
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl ApiObject for Customer {
    type Id = CustomerId;

    const OBJECT: &'static str = "customer";

    fn id(&self) -> &CustomerId {
        &self.id
    }
}
