//! Controller
//!
//! Implements the presentation contract against the record store: accepts
//! raw text fields, trims them, rejects empty input, and turns every outcome
//! (success or store error) into a user-facing [`Reply`]. The store never
//! sees untrimmed or empty input, and store errors never escape this layer.

use crate::item::StoredItem;
use crate::store::StorageManager;

/// How a reply should be presented
///
/// Mirrors the original form's information vs. warning dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// A user-facing outcome of a submitted action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Presentation hint
    pub severity: Severity,

    /// Message text, ready to display
    pub text: String,
}

impl Reply {
    /// Create an informational reply
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    /// Create a warning reply
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
        }
    }

    /// Whether this reply reports a completed action
    pub fn is_info(&self) -> bool {
        self.severity == Severity::Info
    }
}

/// Presentation-side controller owning the record store
///
/// One instance per session; the store lives and dies with it.
#[derive(Debug, Default)]
pub struct Controller {
    store: StorageManager,
}

impl Controller {
    /// Create a controller with an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the add form
    ///
    /// All three fields are trimmed; if any is empty afterwards the store is
    /// not consulted at all.
    pub fn submit_add(&mut self, id: &str, description: &str, location: &str) -> Reply {
        let id = id.trim();
        let description = description.trim();
        let location = location.trim();

        if id.is_empty() || description.is_empty() || location.is_empty() {
            return Reply::warning("All fields must be filled.");
        }

        match self
            .store
            .add_item(StoredItem::new(id, description, location))
        {
            Ok(()) => {
                tracing::debug!(id, "item added");
                Reply::info(format!("Added {id}."))
            }
            Err(err) => Reply::warning(err.to_string()),
        }
    }

    /// Submit a find-by-id query
    pub fn submit_find(&self, id: &str) -> Reply {
        let id = id.trim();

        if id.is_empty() {
            return Reply::warning("Please enter an ID to find.");
        }

        match self.store.find_by_id(id) {
            Ok(item) => Reply::info(item.to_string()),
            Err(err) => Reply::warning(err.to_string()),
        }
    }

    /// Submit a removal by id
    pub fn submit_remove(&mut self, id: &str) -> Reply {
        let id = id.trim();

        if id.is_empty() {
            return Reply::warning("Please enter an ID to remove.");
        }

        match self.store.remove_item(id) {
            Ok(()) => {
                tracing::debug!(id, "item removed");
                Reply::info(format!("Removed {id}."))
            }
            Err(err) => Reply::warning(err.to_string()),
        }
    }

    /// Render the full inventory as display lines, description order
    pub fn render_list(&self) -> Vec<String> {
        self.store
            .list_items_by_description()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &StorageManager {
        &self.store
    }
}
