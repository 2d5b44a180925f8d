//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday is not a valid `YYYY-MM-DD` date.
    InvalidBirthday(String),

    /// The provided page size is not a positive integer.
    InvalidPageSize(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidBirthday(raw) => {
                write!(f, "Invalid birthday (expected YYYY-MM-DD): {}", raw)
            }
            Self::InvalidPageSize(size) => write!(f, "Page size must be positive, got {}", size),
        }
    }
}

impl std::error::Error for ValidationError {}
