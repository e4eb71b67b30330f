//! Shared vocabulary used across resource modules.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Implemented by every top-level API resource.
///
/// Ties a resource to its typed identifier and its wire object name. The
/// expandable-field decoder relies on this to read the id off an expanded
/// object and to phrase decode errors in terms of the expected resource.
pub trait ApiObject {
    /// Typed identifier for this resource.
    type Id: Clone + fmt::Debug + fmt::Display + Default + PartialEq + From<String>;

    /// Wire name of the resource, e.g. `"subscription"`.
    const OBJECT: &'static str;

    /// The resource's identifier. Empty when the payload omitted it.
    fn id(&self) -> &Self::Id;
}

/// Free-form key/value annotations attached to a resource.
pub type Metadata = HashMap<String, String>;

/// Three-letter ISO currency code, lowercase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
    Other(String),
}

impl Currency {
    pub fn as_str(&self) -> &str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Gbp => "gbp",
            Currency::Jpy => "jpy",
            Currency::Cad => "cad",
            Currency::Aud => "aud",
            Currency::Other(other) => other.as_str(),
        }
    }
}

impl From<&str> for Currency {
    fn from(value: &str) -> Self {
        Currency::from(value.to_string())
    }
}

impl From<String> for Currency {
    fn from(value: String) -> Self {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "usd" => Currency::Usd,
            "eur" => Currency::Eur,
            "gbp" => Currency::Gbp,
            "jpy" => Currency::Jpy,
            "cad" => Currency::Cad,
            "aud" => Currency::Aud,
            _ => Currency::Other(normalized),
        }
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.as_str().to_string()
    }
}
