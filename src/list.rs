//! Paginated resource-list envelope.

use serde::{Deserialize, Serialize};

/// List envelope wrapping nested collections such as a subscription's items.
///
/// Elements are plain nested resources, not expandable references: each
/// `data` entry must be an object or `null`. `null` entries are preserved in
/// place so the decoded length and ordering always match the wire array; a
/// bare id string at an element position is a shape error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct List<T> {
    /// List contents in server order, gaps included.
    pub data: Vec<Option<T>>,
    /// Whether more items exist beyond this page.
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    /// URL that fetches this list from the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl<T> List<T> {
    /// Number of entries, counting `null` gaps.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The non-null entries, in wire order.
    pub fn present(&self) -> impl Iterator<Item = &T> {
        self.data.iter().filter_map(Option::as_ref)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List {
            data: Vec::new(),
            has_more: false,
            total_count: None,
            url: None,
        }
    }
}
