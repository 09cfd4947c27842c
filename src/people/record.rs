//! The person record

use serde::{Deserialize, Serialize};

use super::{PeopleError, Result};

/// One stored contact entry.
///
/// Field order matters: serde serializes in declaration order and the
/// on-disk format keeps these keys stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub surname: String,
    pub telephone: String,
    /// Birthday in `DD.MM.YYYY` form. Not validated on `add`; only the
    /// month component is ever interpreted, and lazily at that.
    pub birthday: String,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        telephone: impl Into<String>,
        birthday: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            telephone: telephone.into(),
            birthday: birthday.into(),
        }
    }

    /// Extract the month component of the birthday.
    ///
    /// The birthday is split on `.` and the second component parsed as an
    /// integer; anything else is an [`PeopleError::InvalidDateFormat`]
    /// rather than a panic.
    pub fn birth_month(&self) -> Result<u32> {
        self.birthday
            .split('.')
            .nth(1)
            .and_then(|m| m.parse().ok())
            .ok_or_else(|| PeopleError::InvalidDateFormat(self.birthday.clone()))
    }
}
