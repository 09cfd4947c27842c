//! JSON-backed address book
//!
//! Records live in a flat JSON array on disk. The store loads the whole
//! array, optionally appends, and writes it back; queries are linear
//! scans over the in-memory sequence.

mod record;
mod store;
mod table;

use std::io;

use thiserror::Error;

pub use record::Person;
pub use store::{resolve_path, AddressBook};
pub use table::render_table;

/// Errors produced by address-book operations.
#[derive(Error, Debug)]
pub enum PeopleError {
    #[error("cannot read or write data file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed data file: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored birthday does not look like `DD.MM.YYYY`.
    #[error("invalid date format: {0:?} (expected DD.MM.YYYY)")]
    InvalidDateFormat(String),

    #[error("cannot determine the home directory")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, PeopleError>;
