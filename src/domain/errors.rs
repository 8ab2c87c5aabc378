//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birth date does not parse as `D.M.YYYY`.
    InvalidBirthDate(String),

    /// The provided birth date lies in the future.
    BirthDateInFuture(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidBirthDate(input) => write!(f, "Invalid birth date: {}", input),
            Self::BirthDateInFuture(input) => {
                write!(f, "Birth date lies in the future: {}", input)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
