//! BirthDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input format for birth dates: day.month.year, e.g. "1.1.1901".
const INPUT_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for dates of birth.
///
/// A `BirthDate` can only be constructed from a date that is not in the
/// future relative to the reference date supplied by the caller. The
/// reference date is always an explicit parameter so that long-running
/// processes never compute against a stale startup value.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use insured_registry::domain::BirthDate;
///
/// let today = NaiveDate::from_ymd_opt(2023, 1, 29).unwrap();
/// let birth = BirthDate::parse("7.11.1985", today).unwrap();
/// assert_eq!(birth.age_on(today), 37);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse a birth date from the `D.M.YYYY` user input format.
    ///
    /// Single- and double-digit days and months are both accepted
    /// ("1.1.1901", "07.11.1985").
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthDate` if the input does not
    /// parse, or `ValidationError::BirthDateInFuture` if the date lies
    /// strictly after `today`.
    pub fn parse(input: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(input.trim(), INPUT_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthDate(input.to_string()))?;
        Self::new(date, today)
    }

    /// Wrap an already constructed date, enforcing the not-in-future invariant.
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        if date > today {
            return Err(ValidationError::BirthDateInFuture(date.to_string()));
        }
        Ok(Self(date))
    }

    /// The underlying calendar date.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// Full years elapsed between the birth date and `reference`.
    ///
    /// A birthday falling exactly on the reference date counts as occurred.
    pub fn age_on(&self, reference: NaiveDate) -> i32 {
        let mut age = reference.year() - self.0.year();
        if (reference.month(), reference.day()) < (self.0.month(), self.0.day()) {
            age -= 1;
        }
        age
    }
}

// Serde support - serialize in the D.M.YYYY form
impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from the D.M.YYYY form.
// Only the shape is checked here; the not-in-future invariant belongs to
// the moment of interactive entry.
impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let date = NaiveDate::parse_from_str(&s, INPUT_FORMAT)
            .map_err(|_| serde::de::Error::custom(format!("invalid birth date: {}", s)))?;
        Ok(Self(date))
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0.day(), self.0.month(), self.0.year())
    }
}
