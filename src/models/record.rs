//! Contact record model.

use crate::domain::{Birthday, Name, PhoneNumber};
use crate::error::NotFoundError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One stored person: a name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// The name is fixed at creation (it doubles as the directory key) and the
/// birthday has no edit operation; only the phone list is mutable. Phones
/// keep insertion order and duplicates are allowed. Mutations that reference
/// a phone by value affect the first exact match only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    name: Name,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a new record with no phones.
    pub fn new(name: Name, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday,
        }
    }

    /// The record's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The record's phones, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The record's birthday, if one is on file.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number. Duplicates are permitted.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::Phone` if no stored phone matches; the phone
    /// list is left unchanged in that case.
    pub fn remove_phone(&mut self, phone: &PhoneNumber) -> Result<(), NotFoundError> {
        let index = self.position_of(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::Phone` if no stored phone matches `old`.
    pub fn edit_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> Result<(), NotFoundError> {
        let index = self.position_of(old)?;
        self.phones[index] = new;
        Ok(())
    }

    fn position_of(&self, phone: &PhoneNumber) -> Result<usize, NotFoundError> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| NotFoundError::Phone(phone.as_str().to_string()))
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// Returns `None` when no birthday is on file. The occurrence in
    /// `today`'s year is used unless it has already passed, in which case
    /// next year's occurrence is used instead. The count is 0 when today IS
    /// the occurrence and is never negative.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        use chrono::Datelike;

        let birthday = self.birthday.as_ref()?;
        let mut occurrence = birthday.occurrence_in(today.year());
        if occurrence < today {
            occurrence = birthday.occurrence_in(today.year() + 1);
        }
        Some((occurrence - today).num_days())
    }

    /// Canonical text form: `"<name>: <phone1>, <phone2>"`.
    ///
    /// This is what `Directory::search` matches against, so it covers both
    /// the name and the phone digits.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
