//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised while parsing or executing a command.
///
/// The `Display` impl doubles as the user-facing message table: the prompt
/// loop prints the message and continues with the next command, so none of
/// these are fatal.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The input line had no tokens
    #[error("Command can not be blank")]
    BlankInput,

    /// Wrong argument count for a known command
    #[error("{0}")]
    Usage(&'static str),

    /// The command name is not in the dispatch table
    #[error("Invalid command.")]
    UnknownCommand,

    /// A contact name failed validation
    #[error("Name can not be blank")]
    EmptyName(#[source] ValidationError),

    /// A phone number failed validation
    #[error("Wrong phone format.")]
    PhoneFormat(#[source] ValidationError),

    /// A birthday string failed validation
    #[cfg(feature = "birthdays")]
    #[error("Invalid date format. Use DD.MM.YYYY")]
    DateFormat(#[source] ValidationError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => Self::EmptyName(err),
            ValidationError::InvalidPhone(_) => Self::PhoneFormat(err),
            #[cfg(feature = "birthdays")]
            ValidationError::InvalidDate => Self::DateFormat(err),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
