//! Resource type discriminator.
//!
//! The sync service handles a closed set of resource types. Each one maps
//! 1:1 to a MySQL table and a Solr collection, and contributes the prefix
//! used to compose globally unique document IDs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The resource types known to the sync service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Books table / `books` collection.
    Book,
    /// Electronics table / `electronics` collection.
    Electronics,
}

impl ResourceType {
    /// All resource types, in no particular order.
    pub const ALL: [ResourceType; 2] = [ResourceType::Book, ResourceType::Electronics];

    /// The prefix used to compose document IDs (`"{prefix}-{id}"`).
    pub fn prefix(&self) -> &'static str {
        match self {
            ResourceType::Book => "book",
            ResourceType::Electronics => "electronics",
        }
    }

    /// The Solr collection documents of this type are written to.
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceType::Book => "books",
            ResourceType::Electronics => "electronics",
        }
    }

    /// The MySQL table holding the authoritative records.
    pub fn table(&self) -> &'static str {
        // Table names match collection names in the source schema.
        self.collection()
    }

    /// Parse a resource type from its URL path segment (the collection name).
    ///
    /// Returns `None` for unknown segments so the boundary layer can reject
    /// them with a client error.
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        match segment {
            "books" => Some(ResourceType::Book),
            "electronics" => Some(ResourceType::Electronics),
            _ => None,
        }
    }

    /// Human-readable name used in confirmation messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceType::Book => "Book",
            ResourceType::Electronics => "Electronic",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_segment() {
        assert_eq!(
            ResourceType::from_path_segment("books"),
            Some(ResourceType::Book)
        );
        assert_eq!(
            ResourceType::from_path_segment("electronics"),
            Some(ResourceType::Electronics)
        );
        assert_eq!(ResourceType::from_path_segment("gadgets"), None);
        assert_eq!(ResourceType::from_path_segment(""), None);
    }

    #[test]
    fn test_prefix_and_collection() {
        assert_eq!(ResourceType::Book.prefix(), "book");
        assert_eq!(ResourceType::Book.collection(), "books");
        assert_eq!(ResourceType::Electronics.prefix(), "electronics");
        assert_eq!(ResourceType::Electronics.collection(), "electronics");
    }
}
