//! Core data models for roster
//!
//! These structures represent the normalized record format that roster
//! stores, searches, and exports.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{Result, RosterError};

/// A single person record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    /// Family name, also the text before the comma in a raw composite name
    pub surname: String,
    /// Honorific (e.g., "Mr.", "Dr."); may be empty
    pub title: String,
    /// Given name
    pub first_name: String,
    /// Final word of the given names; empty when only one given name exists
    pub last_name: String,
    /// Age in whole years
    pub age: u32,
    /// Sex as recorded
    pub sex: Sex,
}

impl Person {
    pub fn new(
        surname: impl Into<String>,
        title: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        sex: Sex,
    ) -> Self {
        Self {
            surname: surname.into(),
            title: title.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            sex,
        }
    }

    /// Check the field-level constraints required before a record may be
    /// added to a table: surname, first name, and last name must be
    /// non-blank. Title is optional and age carries no upper bound.
    pub fn validate(&self) -> Result<()> {
        if self.surname.trim().is_empty() {
            return Err(RosterError::Validation {
                field: "surname",
                reason: "must not be empty".to_string(),
            });
        }
        if self.first_name.trim().is_empty() {
            return Err(RosterError::Validation {
                field: "first_name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.last_name.trim().is_empty() {
            return Err(RosterError::Validation {
                field: "last_name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Sex as recorded in the sink file
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumString, Display, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Sex {
    Male,
    Female,
    #[default]
    Other,
}

impl Sex {
    /// Parse recorded text, degrading anything unrecognized to `Other`
    /// so a single odd row never poisons a table load.
    pub fn parse_lossy(text: &str) -> Self {
        text.trim().parse().unwrap_or(Sex::Other)
    }
}

/// Column a search result set can be ordered by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortKey {
    Age,
    FirstName,
    Surname,
}

impl SortKey {
    /// Parse user-supplied text into a sort key. Unrecognized text yields
    /// `None`: callers leave the existing order untouched rather than fail.
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse().ok()
    }

    /// Compare two records on this key. Ages compare numerically, names
    /// lexicographically.
    pub fn compare(&self, a: &Person, b: &Person) -> Ordering {
        match self {
            SortKey::Age => a.age.cmp(&b.age),
            SortKey::FirstName => a.first_name.cmp(&b.first_name),
            SortKey::Surname => a.surname.cmp(&b.surname),
        }
    }
}

/// An in-memory table of person records
///
/// Positions are stable between mutations, so an index shown to a user
/// remains valid until the next add, remove, or clear.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Roster {
    records: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from already-materialized records, bypassing the
    /// add-time validation (used when loading a sink or bulk-importing).
    pub fn from_records(records: Vec<Person>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Person] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Person> {
        self.records.get(index)
    }

    /// Validate and append a record. On success the record occupies the
    /// final position in the table.
    pub fn add(&mut self, person: Person) -> Result<()> {
        person.validate()?;
        self.records.push(person);
        Ok(())
    }

    /// Remove the record at `index` (0-based), shifting later records
    /// down by one. Returns the removed record.
    pub fn remove(&mut self, index: usize) -> Result<Person> {
        if index >= self.records.len() {
            return Err(RosterError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Remove every record, leaving an empty table.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Summary statistics over the whole table.
    pub fn stats(&self) -> RosterStats {
        let total = self.records.len();
        let average_age = if total == 0 {
            None
        } else {
            let sum: u64 = self.records.iter().map(|p| u64::from(p.age)).sum();
            // Rounded to one decimal place
            Some((sum as f64 / total as f64 * 10.0).round() / 10.0)
        };
        let oldest = self.records.iter().map(|p| p.age).max();
        let mut by_title: HashMap<String, usize> = HashMap::new();
        for person in &self.records {
            if !person.title.is_empty() {
                *by_title.entry(person.title.clone()).or_insert(0) += 1;
            }
        }
        RosterStats {
            total,
            average_age,
            oldest,
            by_title,
        }
    }
}

/// Summary statistics for a table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterStats {
    /// Total records in the table
    pub total: usize,
    /// Mean age rounded to one decimal place; None for an empty table
    pub average_age: Option<f64>,
    /// Highest age present; None for an empty table
    pub oldest: Option<u32>,
    /// Record count per title, blank titles excluded
    pub by_title: HashMap<String, usize>,
}
