//! Sprig - a minimal tree printer and a JSON-backed address book

pub mod people;
pub mod tree;

pub use people::{render_table, AddressBook, PeopleError, Person};
pub use tree::{TreeWalker, WalkerConfig};
