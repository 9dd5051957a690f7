//! Sink file persistence
//!
//! A table lives in a single delimited text file: a fixed header row,
//! then one record per line, comma-separated, fields written raw (the
//! format assumes no embedded commas). Loads read the entire file; saves
//! rewrite the entire file. There is no partial update.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Person, Roster, Sex};

/// Exact column header of the sink format
pub const HEADER: &str = "Surname,Title,First_Name,Last_Name,Age,Sex";

/// Sink file used when the caller does not name one
pub const DEFAULT_FILE: &str = "people_data.csv";

/// Export target used when the caller does not name one
pub const DEFAULT_EXPORT_FILE: &str = "filtered_results.csv";

/// Manages a single sink file
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store for the given sink path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the table from the sink file.
    ///
    /// The header line is skipped (a mismatch is logged, not fatal) and
    /// rows that do not parse are skipped with a warning, so one bad row
    /// never discards the rest of the table.
    pub fn load(&self) -> Result<Roster> {
        log::info!("Loading table from {:?}", self.path);

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');

            if lineno == 0 {
                if line != HEADER {
                    log::warn!(
                        "{:?}: unexpected header {:?}, expected {:?}",
                        self.path,
                        line,
                        HEADER
                    );
                }
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }

            match parse_row(line) {
                Ok(person) => records.push(person),
                Err(reason) => {
                    log::warn!("{:?}: skipping row {}: {}", self.path, lineno + 1, reason);
                }
            }
        }

        log::info!("Loaded {} records", records.len());
        Ok(Roster::from_records(records))
    }

    /// Load the table, falling back to the built-in default dataset when
    /// the sink is missing or unreadable.
    ///
    /// A missing sink is seeded: the default dataset is written to disk so
    /// the next session sees the same table. An unreadable sink is left
    /// alone and the default dataset is served from memory only.
    pub fn load_or_default(&self) -> Roster {
        if !self.exists() {
            log::info!("{:?} not found, seeding default dataset", self.path);
            let roster = default_roster();
            if let Err(e) = self.save(&roster) {
                log::warn!("Could not seed {:?}: {}", self.path, e);
            }
            return roster;
        }
        match self.load() {
            Ok(roster) => roster,
            Err(e) => {
                log::warn!("Could not read {:?}: {}, using default dataset", self.path, e);
                default_roster()
            }
        }
    }

    /// Overwrite the sink file with the full table.
    pub fn save(&self, roster: &Roster) -> Result<()> {
        log::info!("Saving {} records to {:?}", roster.len(), self.path);
        write_records(&self.path, roster.records())
    }
}

/// Write records in the sink format to an arbitrary path (the export
/// operation writes filtered results through this).
pub fn write_records(path: impl AsRef<Path>, records: &[Person]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", HEADER)?;
    for person in records {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            person.surname,
            person.title,
            person.first_name,
            person.last_name,
            person.age,
            person.sex
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse one sink row. Text fields are taken verbatim so a save/load
/// cycle reproduces them exactly; only age is trimmed before parsing.
fn parse_row(line: &str) -> std::result::Result<Person, String> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 6 {
        return Err(format!("expected 6 fields, found {}", parts.len()));
    }
    let age: u32 = parts[4]
        .trim()
        .parse()
        .map_err(|_| format!("age {:?} is not a non-negative integer", parts[4]))?;

    Ok(Person {
        surname: parts[0].to_string(),
        title: parts[1].to_string(),
        first_name: parts[2].to_string(),
        last_name: parts[3].to_string(),
        age,
        sex: Sex::parse_lossy(parts[5]),
    })
}

/// The dataset a fresh session starts from when no sink file exists yet.
pub fn default_roster() -> Roster {
    Roster::from_records(vec![
        Person::new("Kumar", "Mr.", "Rajesh", "Pandey", 42, Sex::Male),
        Person::new("Sharma", "Ms.", "Priya", "Sharma", 35, Sex::Female),
        Person::new("Singh", "Mr.", "Amit", "Singh", 29, Sex::Male),
        Person::new("Patel", "Dr.", "Neha", "Patel", 47, Sex::Female),
        Person::new("Ali", "Mr.", "Imran", "Khan", 51, Sex::Male),
    ])
}

/// A row of the raw-name ingestion format: `Name,Age,Sex`, where the
/// name field still holds the unparsed composite form. Sex is kept as
/// raw text so the import surface picks the fallback for values it does
/// not recognize.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub name: String,
    pub age: u32,
    pub sex: String,
}

/// Read a raw-name file (`Name,Age,Sex` header, one row per person).
///
/// Composite names contain a comma themselves, so rows are split from the
/// right: the last two fields are sex and age, everything before them is
/// the name. Surrounding double quotes on the name are stripped. Rows
/// that do not fit are skipped with a warning.
pub fn read_raw_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    log::info!("Reading raw names from {:?}", path);

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut rows = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        if lineno == 0 || line.trim().is_empty() {
            continue;
        }

        let mut fields = line.rsplitn(3, ',');
        let sex = fields.next().unwrap_or("");
        let age = fields.next().unwrap_or("");
        let name = match fields.next() {
            Some(name) => name.trim().trim_matches('"').trim(),
            None => {
                log::warn!("{:?}: skipping row {}: expected 3 fields", path, lineno + 1);
                continue;
            }
        };
        let age: u32 = match age.trim().parse() {
            Ok(age) => age,
            Err(_) => {
                log::warn!(
                    "{:?}: skipping row {}: age {:?} is not a non-negative integer",
                    path,
                    lineno + 1,
                    age
                );
                continue;
            }
        };

        rows.push(RawRecord {
            name: name.to_string(),
            age,
            sex: sex.trim().to_string(),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_preserves_records_and_order() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("people.csv"));

        let roster = default_roster();
        store.save(&roster).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.records(), roster.records());
    }

    #[test]
    fn test_save_writes_exact_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        let store = Store::new(&path);

        let roster = Roster::from_records(vec![Person::new(
            "Singh",
            "Mr.",
            "Amit",
            "",
            29,
            Sex::Male,
        )]);
        store.save(&roster).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Surname,Title,First_Name,Last_Name,Age,Sex\nSingh,Mr.,Amit,,29,male\n"
        );
    }

    #[test]
    fn test_load_skips_malformed_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        fs::write(
            &path,
            "Surname,Title,First_Name,Last_Name,Age,Sex\n\
             Kumar,Mr.,Rajesh,Pandey,42,male\n\
             this row is junk\n\
             Sharma,Ms.,Priya,Sharma,not-a-number,female\n\
             Patel,Dr.,Neha,Patel,47,female\n",
        )
        .unwrap();

        let roster = Store::new(&path).load().unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(0).unwrap().surname, "Kumar");
        assert_eq!(roster.get(1).unwrap().surname, "Patel");
    }

    #[test]
    fn test_load_degrades_unknown_sex_to_other() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        fs::write(
            &path,
            "Surname,Title,First_Name,Last_Name,Age,Sex\nKumar,Mr.,Rajesh,Pandey,42,m\n",
        )
        .unwrap();

        let roster = Store::new(&path).load().unwrap();
        assert_eq!(roster.get(0).unwrap().sex, Sex::Other);
    }

    #[test]
    fn test_load_or_default_seeds_missing_sink() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        let store = Store::new(&path);

        let roster = store.load_or_default();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster.get(0).unwrap().first_name, "Rajesh");

        // Seeding wrote the sink, so a plain load now succeeds
        assert!(path.exists());
        assert_eq!(store.load().unwrap().records(), roster.records());
    }

    #[test]
    fn test_load_or_default_reads_existing_sink() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        let store = Store::new(&path);

        let mut roster = Roster::new();
        roster
            .add(Person::new("Only", "Mr.", "One", "Row", 50, Sex::Male))
            .unwrap();
        store.save(&roster).unwrap();

        let loaded = store.load_or_default();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(0).unwrap().surname, "Only");
    }

    #[test]
    fn test_header_only_file_is_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("people.csv");
        fs::write(&path, format!("{}\n", HEADER)).unwrap();

        let roster = Store::new(&path).load().unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_write_records_exports_subset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("filtered.csv");

        let records = default_roster().records()[..2].to_vec();
        write_records(&path, &records).unwrap();

        let loaded = Store::new(&path).load().unwrap();
        assert_eq!(loaded.records(), &records[..]);
    }

    #[test]
    fn test_read_raw_records_splits_from_the_right() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raw.csv");
        fs::write(
            &path,
            "Name,Age,Sex\n\
             \"Kumar, Mr. Rajesh Pandey\",42,male\n\
             Singh, Mr. Amit,29,male\n",
        )
        .unwrap();

        let rows = read_raw_records(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Kumar, Mr. Rajesh Pandey");
        assert_eq!(rows[0].age, 42);
        assert_eq!(rows[0].sex, "male");
        assert_eq!(rows[1].name, "Singh, Mr. Amit");
    }

    #[test]
    fn test_read_raw_records_skips_bad_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("raw.csv");
        fs::write(
            &path,
            "Name,Age,Sex\n\
             \"Ali, Mr. Imran Khan\",fifty-one,male\n\
             \"Patel, Dr. Neha Patel\",47,female\n",
        )
        .unwrap();

        let rows = read_raw_records(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].age, 47);
    }
}
