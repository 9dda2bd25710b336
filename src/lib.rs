//! stepform - a three-step registration wizard for the terminal
//!
//! The wizard walks a user through personal information, location and
//! business details. Steps 1 and 2 gate progress on their required fields;
//! the current step index survives restarts through a key-value store.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `wizard`: Step state machine, field records and validation
//! - `storage`: Key-value stores (in-memory and JSON file)
//! - `config`: Path resolution and user settings
//! - `logging`: `tracing` subscriber setup
//! - `tui`: ratatui front end
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use stepform::storage::MemoryStore;
//! use stepform::wizard::{Notifier, PersonalField, Field, Step, Wizard};
//!
//! struct Silent;
//! impl Notifier for Silent {
//!     fn notify_error(&mut self, _message: &str) {}
//! }
//!
//! let mut wizard = Wizard::mount(MemoryStore::new(), Silent);
//! for (field, value) in [
//!     (PersonalField::FirstName, "Ada"),
//!     (PersonalField::LastName, "Lovelace"),
//!     (PersonalField::Email, "ada@example.com"),
//!     (PersonalField::Phone, "555-0100"),
//! ] {
//!     wizard.set_field(Field::Personal(field), value);
//! }
//! wizard.advance();
//! assert_eq!(wizard.current_step(), Step::Location);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
pub mod tui;
pub mod wizard;

pub use error::StepformError;
