//! Stored item record
//!
//! A stored item is a plain record of three strings: a unique id, a free-text
//! description, and a free-text location. All three are fixed for the item's
//! lifetime; there is no update operation anywhere in the system.

use std::fmt;

/// A single inventory record
///
/// The id is treated as an opaque, case-sensitive string. Fields are private
/// so the record stays immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredItem {
    id: String,
    description: String,
    location: String,
}

impl StoredItem {
    /// Create a new item from its three fields
    ///
    /// Field validation (non-empty after trimming) is the caller's job; the
    /// record itself accepts whatever it is given.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            location: location.into(),
        }
    }

    /// Unique identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Free-text description (the display sort key)
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Free-text storage location
    pub fn location(&self) -> &str {
        &self.location
    }
}

impl fmt::Display for StoredItem {
    /// Canonical one-line rendering: `{id} - {description} at {location}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} at {}", self.id, self.description, self.location)
    }
}
