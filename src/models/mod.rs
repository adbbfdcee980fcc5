//! Data models for the contact book.

pub mod record;
#[cfg(feature = "birthdays")]
pub mod upcoming;

pub use record::Record;
#[cfg(feature = "birthdays")]
pub use upcoming::UpcomingBirthday;
