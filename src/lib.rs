//! # Stockroom
//!
//! An in-memory inventory record store with:
//! - Unique-by-id item storage (add / find / remove)
//! - A description-ordered view for display
//! - Explicit, recoverable error kinds (duplicate id, missing id)
//! - An interactive console front end
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Console                               │
//! │                (interactive line loop)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Controller                              │
//! │        (input trimming, validation, message mapping)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌────────────────┐
//!               │ StorageManager │
//!               │   (BTreeMap)   │
//!               └────────────────┘
//! ```
//!
//! The store is single-threaded and synchronous: every operation is a direct
//! in-memory computation that completes before returning. Mutations take
//! `&mut self`, so a multi-threaded host must serialize all access itself
//! (one exclusive lock around the whole store).

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod item;
pub mod store;
pub mod ui;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StoreError};
pub use item::StoredItem;
pub use store::StorageManager;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Stockroom
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
