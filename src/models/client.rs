//! Client model representing one insured person.

use crate::domain::{BirthDate, PhoneNumber};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One insured client held by the registry.
///
/// Records are immutable once created; there is no update or delete
/// operation, and no identifier field; duplicate names are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Date of birth, validated not to lie in the future at entry time
    pub birth_date: BirthDate,

    /// Phone number, digits and spaces only
    pub phone: PhoneNumber,
}

/// Projection of a client for display: name, age and phone.
///
/// The age is computed at query time against the reference date the
/// caller supplies, never against a value captured at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientSummary {
    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Full years elapsed since the birth date
    pub age: i32,

    /// Phone number
    pub phone: String,
}

impl Client {
    /// Create a new client from already validated field values.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: BirthDate,
        phone: PhoneNumber,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            phone,
        }
    }

    /// Age in full years on the given reference date.
    pub fn age_on(&self, reference: NaiveDate) -> i32 {
        self.birth_date.age_on(reference)
    }

    /// Exact, case-sensitive match on both name fields simultaneously.
    pub fn matches_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }

    /// Project into the summary shown in tables.
    pub fn summary(&self, reference: NaiveDate) -> ClientSummary {
        ClientSummary {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age_on(reference),
            phone: self.phone.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_client() -> Client {
        Client::new(
            "Vladimír",
            "Nováček",
            BirthDate::new(date(1985, 11, 7), date(2023, 1, 29)).unwrap(),
            PhoneNumber::new("728 563 374").unwrap(),
        )
    }

    #[test]
    fn test_client_summary() {
        let summary = sample_client().summary(date(2023, 1, 29));
        assert_eq!(summary.first_name, "Vladimír");
        assert_eq!(summary.last_name, "Nováček");
        assert_eq!(summary.age, 37);
        assert_eq!(summary.phone, "728 563 374");
    }

    #[test]
    fn test_matches_name_requires_both_fields() {
        let client = sample_client();
        assert!(client.matches_name("Vladimír", "Nováček"));
        assert!(!client.matches_name("Vladimír", "Novák"));
        assert!(!client.matches_name("Jana", "Nováček"));
    }

    #[test]
    fn test_matches_name_is_case_sensitive() {
        let client = sample_client();
        assert!(!client.matches_name("vladimír", "Nováček"));
        assert!(!client.matches_name("Vladimír", "nováček"));
    }

    #[test]
    fn test_client_serialization_round_trip() {
        let client = sample_client();
        let json = serde_json::to_string(&client).unwrap();
        assert!(json.contains("\"birth_date\":\"7.11.1985\""));
        assert!(json.contains("\"phone\":\"728 563 374\""));

        let back: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(back, client);
    }
}
