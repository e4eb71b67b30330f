//! Minimal Rust SDK types for the Payrail billing API.
//!
//! This crate holds the typed resource model and the JSON decoding layer.
//! It consumes response payloads an HTTP client already fetched; it never
//! performs network I/O itself.
//!
//! The central piece is [`Expandable`], the decoded form of a relationship
//! the server returns either collapsed (a bare id string) or expanded (the
//! full object inlined), depending on the `expand` request parameter:
//!
//! ```
//! use payrail::Subscription;
//!
//! let body = serde_json::json!({
//!     "id": "sub_1MowQVLkdIwHu7ixeRlqHVzs",
//!     "customer": "cus_Na6dX7aXxi11N4",
//!     "latest_invoice": "in_1MowQWLkdIwHu7ixuzkSPfKd"
//! });
//!
//! let subscription: Subscription = payrail::from_value(body)?;
//! assert_eq!(subscription.customer.id().as_str(), "cus_Na6dX7aXxi11N4");
//! assert!(subscription.latest_invoice.as_object().is_none());
//! # Ok::<(), payrail::Error>(())
//! ```
//!
//! Decoding is pure and synchronous; values are immutable once decoded, so
//! independent payloads can be decoded and read concurrently without
//! coordination.

mod customers;
mod decode;
mod discounts;
mod errors;
mod expandable;
mod identifiers;
mod invoices;
mod list;
mod prices;
mod subscriptions;
mod types;

pub use customers::Customer;
pub use decode::{from_json, from_json_str, from_value};
pub use discounts::Discount;
pub use errors::{Error, Result};
pub use expandable::{Expandable, ExpandableList};
pub use identifiers::{
    CustomerId, DiscountId, InvoiceId, PriceId, ProductId, SubscriptionId, SubscriptionItemId,
};
pub use invoices::{Invoice, InvoiceStatus};
pub use list::List;
pub use prices::{Price, PriceInterval, Recurring};
pub use subscriptions::{
    CollectionMethod, Subscription, SubscriptionItem, SubscriptionStatus,
};
pub use types::{ApiObject, Currency, Metadata};
