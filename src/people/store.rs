//! Loading, saving, and querying the address book

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::{PeopleError, Person, Result};

/// An ordered, append-only sequence of person records backed by a JSON
/// array on disk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressBook {
    people: Vec<Person>,
}

impl AddressBook {
    /// Load the book from `path`. A missing file is an empty book, not
    /// an error; a present but malformed file is.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let reader = BufReader::new(File::open(path)?);
        let people = serde_json::from_reader(reader)?;
        Ok(Self { people })
    }

    /// Write the book back to `path` as a JSON array with 4-space
    /// indentation, keeping non-ASCII text literal.
    pub fn save(&self, path: &Path) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.people.serialize(&mut ser)?;
        Ok(())
    }

    /// Append a record. No field is validated or deduplicated.
    pub fn add(&mut self, person: Person) {
        self.people.push(person);
    }

    /// Records whose birthday falls in `month`, in original order.
    pub fn born_in_month(&self, month: u32) -> Result<Vec<&Person>> {
        let mut selected = Vec::new();
        for person in &self.people {
            if person.birth_month()? == month {
                selected.push(person);
            }
        }
        Ok(selected)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// Resolve the data-file name against the home directory when `own` is
/// set, against the current directory otherwise.
pub fn resolve_path(filename: &str, own: bool) -> Result<PathBuf> {
    if own {
        let home = dirs::home_dir().ok_or(PeopleError::NoHomeDir)?;
        Ok(home.join(filename))
    } else {
        Ok(PathBuf::from(filename))
    }
}
