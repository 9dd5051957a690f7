//! Roster: a flat-file people roster with structured name parsing
//!
//! Roster keeps a table of person records (surname, title, first name,
//! last name, age, sex) in a single comma-separated sink file, parses
//! composite "Surname, Title First Last" name strings into structured
//! fields, and answers filter/sort queries over the table.
//!
//! # Architecture
//!
//! - **Parser**: splits a raw composite name into structured fields
//! - **Query**: filters and sorts the in-memory table without mutating it
//! - **Store**: loads and saves the sink file; seeds a default dataset
//!   when none exists
//!
//! # Example Usage
//!
//! ```no_run
//! use roster::query::{self, SearchQuery};
//! use roster::store::Store;
//!
//! let store = Store::new("people_data.csv");
//! let roster = store.load_or_default();
//!
//! let query = SearchQuery {
//!     name: Some("ash".to_string()),
//!     ..Default::default()
//! };
//! let results = query::search(&roster, &query);
//!
//! println!("Found {} records", results.len());
//! ```

pub mod cli;
pub mod error;
pub mod formatter;
pub mod interactive;
pub mod models;
pub mod output;
pub mod parser;
pub mod query;
pub mod store;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use models::{Person, Roster, RosterStats, Sex, SortKey};
pub use parser::{ParsedName, parse_raw_name};
pub use query::{SearchQuery, search, search_indices};
pub use store::Store;
