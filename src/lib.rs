//! Contact Book - an interactive command-line contact book with birthday
//! reminders.
//!
//! This library implements an assistant-bot REPL over an in-memory address
//! book: contacts are stored under normalized names, phone numbers and
//! birthdays are validated at construction, and simple queries (lookup,
//! list-all, upcoming birthdays) answer on the spot.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **models**: the contact record and query result rows
//! - **book**: the insertion-ordered in-memory store
//! - **commands**: command parsing and handlers
//! - **repl**: the prompt loop wiring input lines to handlers
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//!
//! Birthday support (the `Birthday` value object, the upcoming-birthday
//! query, and the `add-birthday`/`show-birthday`/`birthdays` commands) is
//! behind the default-on `birthdays` feature.

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::AddressBook;
pub use commands::Command;
pub use config::Config;
#[cfg(feature = "birthdays")]
pub use domain::Birthday;
pub use domain::{Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError};
#[cfg(feature = "birthdays")]
pub use models::UpcomingBirthday;
pub use models::Record;
