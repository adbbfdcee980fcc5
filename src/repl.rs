//! The interactive prompt loop.
//!
//! Reads command lines, dispatches them against the address book, and prints
//! one reply per line. Generic over its input and output streams so sessions
//! can be scripted in tests. Every error is translated to a message and the
//! loop keeps running; only `close`/`exit` or end of input terminate it.

use crate::book::AddressBook;
use crate::commands::{handlers, Command};
use crate::config::Config;
#[cfg(feature = "birthdays")]
use chrono::Local;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run one interactive session to completion.
///
/// # Errors
///
/// Only I/O failures on the streams are returned; command failures are
/// reported to the user and swallowed.
pub fn run<R, W>(
    book: &mut AddressBook,
    config: &Config,
    mut input: R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the assistant bot!")?;
    let mut line = String::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input closes the session like an explicit exit
            break;
        }

        match Command::parse(&line) {
            Ok(Command::Close) => {
                writeln!(output, "Good bye!")?;
                break;
            }
            Ok(command) => {
                let reply = dispatch(command, book, config);
                writeln!(output, "{}", reply)?;
            }
            Err(err) => {
                debug!(error = %err, "rejected input line");
                writeln!(output, "{}", err)?;
            }
        }
    }
    Ok(())
}

/// Execute one command, converting any command error into its user-facing
/// message.
#[cfg_attr(not(feature = "birthdays"), allow(unused_variables))]
fn dispatch(command: Command, book: &mut AddressBook, config: &Config) -> String {
    let result = match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phone } => handlers::add_contact(book, &name, &phone),
        Command::Change { name, old, new } => handlers::change_contact(book, &name, &old, &new),
        Command::Phone { name } => Ok(handlers::show_phone(book, &name)),
        Command::All => Ok(handlers::show_all(book)),
        Command::Delete { name } => Ok(handlers::delete_contact(book, &name)),
        #[cfg(feature = "birthdays")]
        Command::AddBirthday { name, date } => handlers::add_birthday(book, &name, &date),
        #[cfg(feature = "birthdays")]
        Command::ShowBirthday { name } => Ok(handlers::show_birthday(book, &name)),
        #[cfg(feature = "birthdays")]
        Command::Birthdays => Ok(handlers::upcoming_birthdays(
            book,
            Local::now().date_naive(),
            config.birthday_window_days,
        )),
        Command::Close => Ok("Good bye!".to_string()),
    };
    result.unwrap_or_else(|err| err.to_string())
}
