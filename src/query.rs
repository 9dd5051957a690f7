//! Filtering and sorting over a person table
//!
//! Searches are pure reads: the input table is never mutated, filters are
//! applied as a conjunction, and absent or empty parameters degrade to
//! no-ops instead of erroring.

use crate::models::{Roster, SortKey};

/// Filter and sort options for a single search
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against first name OR surname
    /// (None or empty = no name filtering)
    pub name: Option<String>,
    /// Exact, case-sensitive title match (None or empty = no title filtering)
    pub title: Option<String>,
    /// Sort column (None = leave table order untouched)
    pub sort: Option<SortKey>,
    /// Sort direction when a sort column is set
    pub ascending: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            name: None,
            title: None,
            sort: Some(SortKey::Age),
            ascending: true,
        }
    }
}

/// Execute a query and return the table positions of the matching records.
///
/// Positions refer to the unfiltered table, so callers that show a
/// filtered view can still address the underlying records (e.g. for a
/// positional delete). The sort is stable: records with equal keys keep
/// their table order, in both directions.
pub fn search_indices(roster: &Roster, query: &SearchQuery) -> Vec<usize> {
    log::info!("Executing search: filter={:?}", query);

    let records = roster.records();
    let mut indices: Vec<usize> = (0..records.len()).collect();

    if let Some(name) = query.name.as_deref().filter(|s| !s.is_empty()) {
        let needle = name.to_lowercase();
        indices.retain(|&i| {
            let record = &records[i];
            record.first_name.to_lowercase().contains(&needle)
                || record.surname.to_lowercase().contains(&needle)
        });
    }

    if let Some(title) = query.title.as_deref().filter(|s| !s.is_empty()) {
        indices.retain(|&i| records[i].title == title);
    }

    if let Some(key) = query.sort {
        indices.sort_by(|&a, &b| {
            let ord = key.compare(&records[a], &records[b]);
            if query.ascending { ord } else { ord.reverse() }
        });
    }

    indices
}

/// Execute a query and return a new table holding the matching records,
/// filtered and sorted per the query. The input table is untouched.
pub fn search(roster: &Roster, query: &SearchQuery) -> Roster {
    let records = roster.records();
    Roster::from_records(
        search_indices(roster, query)
            .into_iter()
            .map(|i| records[i].clone())
            .collect(),
    )
}
