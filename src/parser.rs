//! Composite name parsing
//!
//! Raw names arrive as a single string of the form
//! `"Surname, Title First [Middle ...] Last"`. The comma separates the
//! surname from the rest; within the remainder the first whitespace run
//! separates the title from the given names, and the last whitespace run
//! separates the first (plus middle) names from the last name.

use serde::Serialize;

use crate::error::{Result, RosterError};
use crate::models::{Person, Sex};

/// Structured fields extracted from a raw composite name
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ParsedName {
    pub surname: String,
    pub title: String,
    /// Everything between the title and the final given name, so middle
    /// names stay attached (e.g. "Ashok Kumar")
    pub first_name: String,
    /// Empty when the given names are a single token
    pub last_name: String,
}

impl ParsedName {
    /// Combine with the fields a raw name does not carry to form a full
    /// record.
    pub fn into_person(self, age: u32, sex: Sex) -> Person {
        Person {
            surname: self.surname,
            title: self.title,
            first_name: self.first_name,
            last_name: self.last_name,
            age,
            sex,
        }
    }
}

/// Parse a raw composite name into its structured fields.
///
/// The split rules, in order:
/// 1. Split at the first comma: surname | rest. No comma is an error.
/// 2. Split the trimmed rest at its first whitespace run: title | given
///    names. A rest without whitespace (a title with no given names, or
///    nothing at all) is an error.
/// 3. Split the given names at their *last* whitespace run: first name(s)
///    | last name. No whitespace here is not an error: the whole token
///    becomes the first name and the last name is left empty.
///
/// All returned fields are trimmed. Suffix tokens like "Jr." land in the
/// last name, a known limit of the last-whitespace rule.
pub fn parse_raw_name(raw: &str) -> Result<ParsedName> {
    let Some((surname, rest)) = raw.split_once(',') else {
        return Err(RosterError::MalformedName {
            name: raw.to_string(),
            reason: "missing ',' between surname and given names",
        });
    };

    let surname = surname.trim();
    if surname.is_empty() {
        return Err(RosterError::MalformedName {
            name: raw.to_string(),
            reason: "nothing before the ','",
        });
    }

    let rest = rest.trim();
    let Some((title, given)) = rest.split_once(char::is_whitespace) else {
        return Err(RosterError::MalformedName {
            name: raw.to_string(),
            reason: "expected a title and given names after the ','",
        });
    };
    let given = given.trim_start();

    let (first_name, last_name) = match given.rsplit_once(char::is_whitespace) {
        Some((first, last)) => (first.trim_end(), last),
        None => (given, ""),
    };

    Ok(ParsedName {
        surname: surname.to_string(),
        title: title.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    })
}
