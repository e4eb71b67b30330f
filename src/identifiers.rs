//! Strongly-typed identifier newtypes for API resources.
//!
//! Every resource id on the wire is a prefixed string (`sub_…`, `in_…`,
//! `cus_…`). Wrapping them keeps a subscription id from being passed where
//! an invoice id is expected, without changing the serialized form.
//!
//! All types implement `From<&str>`, `From<String>`, and `Into<String>` for
//! easy conversion, and serialize/deserialize as plain strings. The default
//! value is the empty id, which stands in for "no identifier was returned".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to generate string wrapper newtypes with consistent implementations.
///
/// Each generated type:
/// - Trims whitespace from input values
/// - Implements `From<&str>`, `From<String>`, `Into<String>`
/// - Implements `Display` for string formatting
/// - Serializes/deserializes as a plain string
macro_rules! resource_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from any string-like value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into().trim().to_string())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            /// Check if the identifier is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

resource_id_type!(CustomerId, "Customer identifier (`cus_…`).");
resource_id_type!(SubscriptionId, "Subscription identifier (`sub_…`).");
resource_id_type!(
    SubscriptionItemId,
    "Subscription line-item identifier (`si_…`)."
);
resource_id_type!(InvoiceId, "Invoice identifier (`in_…`).");
resource_id_type!(DiscountId, "Discount identifier (`di_…`).");
resource_id_type!(PriceId, "Price identifier (`price_…`).");
resource_id_type!(ProductId, "Product identifier (`prod_…`).");
