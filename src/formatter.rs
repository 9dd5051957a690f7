//! Terminal output formatting for record tables
//!
//! Renders aligned, optionally colored tables of person records and table
//! statistics to stdout. Static output only; the interactive surface has
//! its own rendering.

use crossterm::tty::IsTty;
use owo_colors::OwoColorize;
use std::io;
use unicode_width::UnicodeWidthStr;

use crate::models::{Person, RosterStats};

/// Column headers for the record table, index column included
const COLUMNS: [&str; 7] = ["#", "Surname", "Title", "First_Name", "Last_Name", "Age", "Sex"];

/// Output formatter configuration
pub struct OutputFormatter {
    /// Whether to use colors and formatting
    pub use_colors: bool,
}

impl OutputFormatter {
    /// Create a new formatter with automatic TTY detection
    pub fn new(plain: bool) -> Self {
        let is_tty = io::stdout().is_tty();
        let no_color = std::env::var("NO_COLOR").is_ok();

        Self {
            use_colors: !plain && !no_color && is_tty,
        }
    }

    /// Print records as an aligned table.
    ///
    /// Each row carries the record's position in the underlying table, so
    /// filtered views still show the index a delete would take.
    pub fn print_rows(&self, rows: &[(usize, &Person)]) {
        if rows.is_empty() {
            println!("No matching records.");
            return;
        }

        let widths = column_widths(rows);

        let header = render_header(&widths);
        if self.use_colors {
            println!("{}", header.bold());
        } else {
            println!("{}", header);
        }

        for (index, person) in rows {
            let index_cell = format!("{:>width$}", index, width = widths[0]);
            let fields = format!(
                "{}  {}  {}  {}  {:>age_width$}  {}",
                pad(&person.surname, widths[1]),
                pad(&person.title, widths[2]),
                pad(&person.first_name, widths[3]),
                pad(&person.last_name, widths[4]),
                person.age,
                pad(&person.sex.to_string(), widths[6]),
                age_width = widths[5],
            );
            if self.use_colors {
                println!("{}  {}", index_cell.dimmed(), fields);
            } else {
                println!("{}  {}", index_cell, fields);
            }
        }
    }

    /// Print summary statistics for a table
    pub fn print_stats(&self, stats: &RosterStats) {
        let total_label = "Total records:";
        if self.use_colors {
            println!("{} {}", total_label.bold(), stats.total);
        } else {
            println!("{} {}", total_label, stats.total);
        }

        match stats.average_age {
            Some(avg) => println!("Average age:   {}", avg),
            None => println!("Average age:   n/a"),
        }
        match stats.oldest {
            Some(age) => println!("Oldest age:    {}", age),
            None => println!("Oldest age:    n/a"),
        }

        if !stats.by_title.is_empty() {
            println!("Titles:");
            // Sort by count (descending), then alphabetically for ties
            let mut entries: Vec<_> = stats.by_title.iter().collect();
            entries.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

            let name_width = entries
                .iter()
                .map(|(title, _)| UnicodeWidthStr::width(title.as_str()))
                .max()
                .unwrap_or(0);
            for (title, count) in entries {
                println!("  {}  {}", pad(title, name_width), count);
            }
        }
    }
}

/// Pad to a display width, unicode-aware (format! pads by char count)
pub(crate) fn pad(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(current)))
}

pub(crate) fn render_header(widths: &[usize; 7]) -> String {
    let mut cells = Vec::with_capacity(COLUMNS.len());
    // Index and Age columns are right-aligned like their values
    cells.push(format!("{:>width$}", COLUMNS[0], width = widths[0]));
    for i in 1..5 {
        cells.push(pad(COLUMNS[i], widths[i]));
    }
    cells.push(format!("{:>width$}", COLUMNS[5], width = widths[5]));
    cells.push(pad(COLUMNS[6], widths[6]));
    cells.join("  ")
}

/// Widest cell per column, headers included
pub(crate) fn column_widths(rows: &[(usize, &Person)]) -> [usize; 7] {
    let mut widths = [0usize; 7];
    for (i, column) in COLUMNS.iter().enumerate() {
        widths[i] = UnicodeWidthStr::width(*column);
    }

    for (index, person) in rows {
        widths[0] = widths[0].max(index.to_string().len());
        widths[1] = widths[1].max(UnicodeWidthStr::width(person.surname.as_str()));
        widths[2] = widths[2].max(UnicodeWidthStr::width(person.title.as_str()));
        widths[3] = widths[3].max(UnicodeWidthStr::width(person.first_name.as_str()));
        widths[4] = widths[4].max(UnicodeWidthStr::width(person.last_name.as_str()));
        widths[5] = widths[5].max(person.age.to_string().len());
        widths[6] = widths[6].max(UnicodeWidthStr::width(person.sex.to_string().as_str()));
    }

    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    #[test]
    fn test_formatter_creation() {
        let formatter = OutputFormatter::new(false);
        // In tests, stdout is not a TTY, so colors should be disabled
        assert!(!formatter.use_colors);
    }

    #[test]
    fn test_plain_mode() {
        let formatter = OutputFormatter::new(true);
        assert!(!formatter.use_colors);
    }

    #[test]
    fn test_column_widths_cover_headers_and_values() {
        let person = Person::new("Wooldridge-Smythe", "Mr.", "Jo", "X", 102, Sex::Male);
        let rows = vec![(0usize, &person)];
        let widths = column_widths(&rows);

        // Longest value wins
        assert_eq!(widths[1], "Wooldridge-Smythe".len());
        // Header wins when values are shorter
        assert_eq!(widths[3], "First_Name".len());
        assert_eq!(widths[5], "Age".len());
        // Sex values are at most "female", header "Sex" is shorter
        assert_eq!(widths[6], "male".len());
    }

    #[test]
    fn test_pad_is_unicode_aware() {
        // "é" is one display column even as multiple bytes
        let padded = pad("José", 6);
        assert_eq!(UnicodeWidthStr::width(padded.as_str()), 6);
    }

    #[test]
    fn test_render_header_aligns_all_columns() {
        let widths = [3, 7, 5, 10, 9, 3, 6];
        let header = render_header(&widths);
        assert!(header.contains("Surname"));
        assert!(header.contains("First_Name"));
        assert_eq!(
            UnicodeWidthStr::width(header.as_str()),
            widths.iter().sum::<usize>() + 2 * (widths.len() - 1)
        );
    }
}
