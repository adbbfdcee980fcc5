//! Command parsing and dispatch.
//!
//! A user input line is tokenized on whitespace; the first token, lower-cased,
//! names the command and the rest are positional arguments. Parsing enforces
//! each command's arity and reports the command's own usage string on
//! mismatch. Handlers live in [`handlers`].

pub mod handlers;

use crate::error::{CommandError, CommandResult};

pub const USAGE_ADD: &str = "Usage: add NAME PHONE_NUMBER";
pub const USAGE_CHANGE: &str = "Usage: change NAME OLD_NUMBER NEW_NUMBER";
pub const USAGE_PHONE: &str = "Usage: phone NAME";
pub const USAGE_DELETE: &str = "Usage: delete NAME";
#[cfg(feature = "birthdays")]
pub const USAGE_ADD_BIRTHDAY: &str = "Usage: add-birthday NAME DATE(DD.MM.YYYY)";
#[cfg(feature = "birthdays")]
pub const USAGE_SHOW_BIRTHDAY: &str = "Usage: show-birthday NAME";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add NAME PHONE`
    Add { name: String, phone: String },
    /// `change NAME OLD NEW`
    Change {
        name: String,
        old: String,
        new: String,
    },
    /// `phone NAME`
    Phone { name: String },
    /// `all`
    All,
    /// `delete NAME`
    Delete { name: String },
    /// `add-birthday NAME DATE`
    #[cfg(feature = "birthdays")]
    AddBirthday { name: String, date: String },
    /// `show-birthday NAME`
    #[cfg(feature = "birthdays")]
    ShowBirthday { name: String },
    /// `birthdays`
    #[cfg(feature = "birthdays")]
    Birthdays,
    /// `close` or `exit`
    Close,
}

impl Command {
    /// Parse one input line into a command.
    ///
    /// # Errors
    ///
    /// - `CommandError::BlankInput` when the line has no tokens.
    /// - `CommandError::Usage` when a known command gets the wrong number of
    ///   arguments.
    /// - `CommandError::UnknownCommand` for anything else.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let mut tokens = line.split_whitespace();
        let command = tokens
            .next()
            .ok_or(CommandError::BlankInput)?
            .to_lowercase();
        let args: Vec<&str> = tokens.collect();

        match command.as_str() {
            "hello" => Ok(Self::Hello),
            "add" => match args.as_slice() {
                [name, phone] => Ok(Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                }),
                _ => Err(CommandError::Usage(USAGE_ADD)),
            },
            "change" => match args.as_slice() {
                [name, old, new] => Ok(Self::Change {
                    name: name.to_string(),
                    old: old.to_string(),
                    new: new.to_string(),
                }),
                _ => Err(CommandError::Usage(USAGE_CHANGE)),
            },
            "phone" => match args.as_slice() {
                [name] => Ok(Self::Phone {
                    name: name.to_string(),
                }),
                _ => Err(CommandError::Usage(USAGE_PHONE)),
            },
            "all" => Ok(Self::All),
            "delete" => match args.as_slice() {
                [name] => Ok(Self::Delete {
                    name: name.to_string(),
                }),
                _ => Err(CommandError::Usage(USAGE_DELETE)),
            },
            #[cfg(feature = "birthdays")]
            "add-birthday" => match args.as_slice() {
                [name, date] => Ok(Self::AddBirthday {
                    name: name.to_string(),
                    date: date.to_string(),
                }),
                _ => Err(CommandError::Usage(USAGE_ADD_BIRTHDAY)),
            },
            #[cfg(feature = "birthdays")]
            "show-birthday" => match args.as_slice() {
                [name] => Ok(Self::ShowBirthday {
                    name: name.to_string(),
                }),
                _ => Err(CommandError::Usage(USAGE_SHOW_BIRTHDAY)),
            },
            #[cfg(feature = "birthdays")]
            "birthdays" => Ok(Self::Birthdays),
            "close" | "exit" => Ok(Self::Close),
            _ => Err(CommandError::UnknownCommand),
        }
    }
}
