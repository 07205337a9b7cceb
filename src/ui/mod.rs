//! Presentation layer
//!
//! Everything between raw user input and the record store. The store itself
//! knows nothing about text entry or rendering; this layer owns:
//! - Parsing console verbs into commands
//! - Trimming input and rejecting empty fields before they reach the store
//! - Mapping store errors to user-facing messages
//! - The interactive console loop
//!
//! The [`Controller`] is the abstract presentation contract (submit-add,
//! submit-find, submit-remove, render-list); [`Console`] is the concrete
//! terminal binding. A different front end would reuse the controller
//! unchanged.

mod command;
mod console;
mod controller;

pub use command::Command;
pub use console::{Console, ConsoleOptions};
pub use controller::{Controller, Reply, Severity};
