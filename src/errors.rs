use serde_json::error::Category;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error produced while decoding an API payload.
///
/// The two variants separate protocol violations from transport garbage:
/// [`Error::Shape`] means the payload was valid JSON but a field carried a
/// JSON type the resource does not admit (for example a number where an
/// expandable relationship requires null, an id string, or an object), while
/// [`Error::Syntax`] means the bytes were not valid JSON in the first place.
#[derive(Debug, Error)]
pub enum Error {
    /// Well-formed JSON with an unexpected shape somewhere in the payload.
    #[error("unexpected shape: {0}")]
    Shape(#[source] serde_json::Error),
    /// The payload was not valid JSON.
    #[error("malformed json: {0}")]
    Syntax(#[source] serde_json::Error),
}

impl Error {
    /// Classify a serde_json error into the crate taxonomy.
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Error::Shape(err),
            Category::Syntax | Category::Eof | Category::Io => Error::Syntax(err),
        }
    }

    /// True when the payload was valid JSON but violated a resource shape.
    pub fn is_shape(&self) -> bool {
        matches!(self, Error::Shape(_))
    }

    /// True when the payload was not valid JSON at all.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }
}
