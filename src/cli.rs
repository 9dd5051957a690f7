//! CLI argument parsing and command handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::formatter::OutputFormatter;
use crate::models::{Person, Roster, Sex, SortKey};
use crate::output;
use crate::parser::parse_raw_name;
use crate::query::{self, SearchQuery};
use crate::store::{self, Store};

/// Roster: a flat-file table of people with structured name parsing
#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Search, edit, and export a flat-file table of people",
    long_about = "Roster keeps a table of people (surname, title, first name, last name, \
                  age, sex) in a plain comma-separated file, and parses composite \
                  \"Surname, Title First Last\" name strings into structured fields.\n\n\
                  Run 'roster' with no arguments to launch interactive mode."
)]
pub struct Cli {
    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Sink file holding the table
    #[arg(short, long, value_name = "PATH", default_value = store::DEFAULT_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a composite name string into structured fields
    ///
    /// The format is "Surname, Title First [Middle ...] Last":
    ///   - the first comma separates the surname from the rest
    ///   - the first word after the comma is the title
    ///   - the last word is the last name; anything between the title and
    ///     the last name stays in the first name
    ///
    /// Examples:
    ///   roster parse "Kumar, Mr. Rajesh Pandey"
    ///   roster parse "Ashok, Mr. Ashok Kumar Khoja" --json
    ///   roster parse "Ali, Mr. Imran Khan" --age 51 --sex male
    Parse {
        /// Raw composite name
        name: String,

        /// Attach an age and print the full record instead of just the
        /// name fields
        #[arg(long)]
        age: Option<u32>,

        /// Sex to attach alongside --age (male, female, or other)
        #[arg(long, requires = "age")]
        sex: Option<String>,

        /// Output format as JSON
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output (only with --json)
        #[arg(long)]
        pretty: bool,
    },

    /// List every record in the table
    ///
    /// Examples:
    ///   roster list
    ///   roster list --json --pretty
    List {
        /// Output format as JSON
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output (only with --json)
        #[arg(long)]
        pretty: bool,

        /// Disable colors and formatting
        #[arg(long)]
        plain: bool,
    },

    /// Search the table with optional name and title filters
    ///
    /// The name filter is a case-insensitive substring match against the
    /// first name or surname. The title filter requires an exact,
    /// case-sensitive match. When both are given, both must pass.
    /// An unrecognized --sort-by value leaves the table order unchanged.
    ///
    /// Examples:
    ///   roster search ash
    ///   roster search --title Dr. --sort-by surname --descending
    ///   roster search ash --export results.csv
    ///   roster search --title Mr. --count
    Search {
        /// Case-insensitive substring to match against first name or surname
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Exact title to match (case-sensitive, e.g. "Mr.")
        #[arg(short, long)]
        title: Option<String>,

        /// Column to sort by: age, first_name, or surname
        #[arg(short, long, default_value = "age")]
        sort_by: String,

        /// Sort in descending order
        #[arg(short, long)]
        descending: bool,

        /// Write the results to a sink file instead of stdout
        /// (PATH defaults to filtered_results.csv)
        #[arg(
            long,
            value_name = "PATH",
            num_args = 0..=1,
            default_missing_value = store::DEFAULT_EXPORT_FILE
        )]
        export: Option<PathBuf>,

        /// Print only the number of matching records
        #[arg(long)]
        count: bool,

        /// Output format as JSON
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output (only with --json)
        #[arg(long)]
        pretty: bool,

        /// Disable colors and formatting
        #[arg(long)]
        plain: bool,
    },

    /// Add a person to the table
    ///
    /// The name is given either in composite form (parsed into structured
    /// fields) or as explicit --surname/--title/--first-name/--last-name
    /// fields. The record is validated and appended, and the sink file is
    /// rewritten immediately.
    ///
    /// Examples:
    ///   roster add "Patel, Dr. Neha Patel" --age 47 --sex female
    ///   roster add "Singh, Mr. Amit Singh" -a 29 -s male
    ///   roster add --surname Verma --first-name Arjun --last-name Verma --age 33
    Add {
        /// Raw composite name ("Surname, Title First Last")
        #[arg(
            value_name = "NAME",
            required_unless_present = "surname",
            conflicts_with_all = ["surname", "title", "first_name", "last_name"]
        )]
        name: Option<String>,

        /// Family name (field-by-field alternative to the composite NAME)
        #[arg(long)]
        surname: Option<String>,

        /// Honorific, e.g. "Mr." (only with --surname)
        #[arg(long, requires = "surname")]
        title: Option<String>,

        /// Given name (only with --surname)
        #[arg(long, requires = "surname")]
        first_name: Option<String>,

        /// Final given name (only with --surname)
        #[arg(long, requires = "surname")]
        last_name: Option<String>,

        /// Age in whole years
        #[arg(short, long)]
        age: u32,

        /// Sex (male, female, or other)
        #[arg(short, long, default_value = "other")]
        sex: String,
    },

    /// Delete records from the table
    ///
    /// Examples:
    ///   roster delete 2          # Delete the record at position 2
    ///   roster delete --all      # Delete every record
    Delete {
        /// Zero-based position of the record to delete (as shown by 'list')
        #[arg(value_name = "INDEX", required_unless_present = "all")]
        index: Option<usize>,

        /// Delete every record
        #[arg(long, conflicts_with = "index")]
        all: bool,

        /// Skip the confirmation prompt (only with --all)
        #[arg(short, long)]
        yes: bool,
    },

    /// Replace the table with records parsed from a raw-name file
    ///
    /// The input is a comma-separated file with header "Name,Age,Sex",
    /// where the name field holds the composite "Surname, Title First
    /// Last" form (quoted or not). Rows that fail to parse are skipped
    /// with a warning.
    ///
    /// Examples:
    ///   roster import raw_names.csv
    ///   roster import raw_names.csv --sex-default female
    Import {
        /// File with one "Name,Age,Sex" row per person
        path: PathBuf,

        /// Sex recorded for rows whose Sex field is blank or unrecognized
        #[arg(long, value_name = "SEX", default_value = "other")]
        sex_default: String,
    },

    /// Show summary statistics for the table
    ///
    /// Examples:
    ///   roster stats
    ///   roster stats --json
    Stats {
        /// Output format as JSON
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output (only with --json)
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Setup logging based on verbosity
        let log_level = match self.verbose {
            0 => "warn",   // Default: only warnings and errors
            1 => "info",   // -v: show info messages
            2 => "debug",  // -vv: show debug messages
            _ => "trace",  // -vvv: show trace messages
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();

        let store = Store::new(&self.file);

        // Execute the subcommand, or launch interactive mode if no command provided
        match self.command {
            None => handle_interactive(store),
            Some(Command::Parse {
                name,
                age,
                sex,
                json,
                pretty,
            }) => handle_parse(&name, age, sex.as_deref(), json, pretty),
            Some(Command::List { json, pretty, plain }) => handle_list(&store, json, pretty, plain),
            Some(Command::Search {
                query,
                title,
                sort_by,
                descending,
                export,
                count,
                json,
                pretty,
                plain,
            }) => handle_search(
                &store, query, title, &sort_by, descending, export, count, json, pretty, plain,
            ),
            Some(Command::Add {
                name,
                surname,
                title,
                first_name,
                last_name,
                age,
                sex,
            }) => handle_add(
                &store, name, surname, title, first_name, last_name, age, &sex,
            ),
            Some(Command::Delete { index, all, yes }) => handle_delete(&store, index, all, yes),
            Some(Command::Import { path, sex_default }) => {
                handle_import(&store, &path, &sex_default)
            }
            Some(Command::Stats { json, pretty }) => handle_stats(&store, json, pretty),
        }
    }
}

/// Handle the `parse` subcommand
fn handle_parse(
    name: &str,
    age: Option<u32>,
    sex: Option<&str>,
    as_json: bool,
    pretty_json: bool,
) -> Result<()> {
    log::info!("Parsing raw name {:?}", name);

    let parsed = parse_raw_name(name)?;

    // With an age the result is a complete record, not just the name fields
    if let Some(age) = age {
        let sex = parse_sex_arg(sex.unwrap_or("other"));
        let person = parsed.into_person(age, sex);
        if as_json {
            let json_output = if pretty_json {
                serde_json::to_string_pretty(&person)?
            } else {
                serde_json::to_string(&person)?
            };
            println!("{}", json_output);
        } else {
            println!("Surname:    {}", person.surname);
            println!("Title:      {}", person.title);
            println!("First name: {}", person.first_name);
            println!("Last name:  {}", person.last_name);
            println!("Age:        {}", person.age);
            println!("Sex:        {}", person.sex);
        }
        return Ok(());
    }

    if as_json {
        let json_output = if pretty_json {
            serde_json::to_string_pretty(&parsed)?
        } else {
            serde_json::to_string(&parsed)?
        };
        println!("{}", json_output);
    } else {
        println!("Surname:    {}", parsed.surname);
        println!("Title:      {}", parsed.title);
        println!("First name: {}", parsed.first_name);
        println!("Last name:  {}", parsed.last_name);
    }

    Ok(())
}

/// Handle the `list` subcommand
fn handle_list(store: &Store, as_json: bool, pretty_json: bool, plain: bool) -> Result<()> {
    log::info!("Listing all records");

    let roster = store.load_or_default();

    if as_json {
        let json_output = if pretty_json {
            serde_json::to_string_pretty(roster.records())?
        } else {
            serde_json::to_string(roster.records())?
        };
        println!("{}", json_output);
    } else {
        let rows: Vec<(usize, &Person)> = roster.records().iter().enumerate().collect();
        OutputFormatter::new(plain).print_rows(&rows);
    }

    Ok(())
}

/// Handle the `search` subcommand
#[allow(clippy::too_many_arguments)]
fn handle_search(
    store: &Store,
    name: Option<String>,
    title: Option<String>,
    sort_by: &str,
    descending: bool,
    export: Option<PathBuf>,
    count: bool,
    as_json: bool,
    pretty_json: bool,
    plain: bool,
) -> Result<()> {
    log::info!("Searching records");

    let roster = store.load_or_default();

    let sort = match SortKey::parse(sort_by) {
        Some(key) => Some(key),
        None => {
            output::warn(format!(
                "Unknown sort column {:?} - leaving order unchanged. \
                 Expected one of: age, first_name, surname.",
                sort_by
            ));
            None
        }
    };
    let query = SearchQuery {
        name,
        title,
        sort,
        ascending: !descending,
    };

    let indices = query::search_indices(&roster, &query);

    if let Some(export_path) = export {
        let records: Vec<_> = indices
            .iter()
            .filter_map(|&i| roster.get(i).cloned())
            .collect();
        store::write_records(&export_path, &records)
            .with_context(|| format!("Failed to export to {}", export_path.display()))?;
        println!(
            "Exported {} record{} to {}",
            records.len(),
            if records.len() == 1 { "" } else { "s" },
            export_path.display()
        );
        return Ok(());
    }

    if count {
        println!("{}", indices.len());
        return Ok(());
    }

    if as_json {
        let records: Vec<_> = indices
            .iter()
            .filter_map(|&i| roster.get(i))
            .collect();
        let json_output = if pretty_json {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        };
        println!("{}", json_output);
    } else {
        let rows: Vec<_> = indices
            .iter()
            .filter_map(|&i| roster.get(i).map(|p| (i, p)))
            .collect();
        OutputFormatter::new(plain).print_rows(&rows);
    }

    Ok(())
}

/// Handle the `add` subcommand
#[allow(clippy::too_many_arguments)]
fn handle_add(
    store: &Store,
    name: Option<String>,
    surname: Option<String>,
    title: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    age: u32,
    sex: &str,
) -> Result<()> {
    let sex = parse_sex_arg(sex);

    // Either parse the composite form or take the fields as given; the
    // roster validates both the same way before appending.
    let person = match name {
        Some(raw) => {
            log::info!("Adding record for {:?}", raw);
            parse_raw_name(&raw)?.into_person(age, sex)
        }
        None => Person::new(
            surname.unwrap_or_default(),
            title.unwrap_or_default(),
            first_name.unwrap_or_default(),
            last_name.unwrap_or_default(),
            age,
            sex,
        ),
    };
    let summary = if person.title.is_empty() {
        format!("{} {}", person.first_name, person.surname)
    } else {
        format!("{} {} ({})", person.first_name, person.surname, person.title)
    };

    let mut roster = store.load_or_default();
    roster.add(person)?;
    store
        .save(&roster)
        .with_context(|| format!("Failed to save {}", store.path().display()))?;

    println!("Added record {}: {}", roster.len() - 1, summary);
    Ok(())
}

/// Parse a sex argument, falling back to `other` with a warning when the
/// text is not recognized.
fn parse_sex_arg(text: &str) -> Sex {
    match text.trim().parse::<Sex>() {
        Ok(sex) => sex,
        Err(_) => {
            output::warn(format!(
                "Unknown sex {:?}, recording as 'other'. Expected: male, female, other.",
                text
            ));
            Sex::Other
        }
    }
}

/// Handle the `delete` subcommand
fn handle_delete(store: &Store, index: Option<usize>, all: bool, skip_confirm: bool) -> Result<()> {
    let mut roster = store.load_or_default();

    if all {
        if roster.is_empty() {
            println!("No records to delete.");
            return Ok(());
        }

        if !skip_confirm {
            println!(
                "This will delete all {} records from: {:?}",
                roster.len(),
                store.path()
            );
            print!("Are you sure? [y/N] ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        }

        roster.clear();
        store
            .save(&roster)
            .with_context(|| format!("Failed to save {}", store.path().display()))?;
        println!("All records deleted.");
        return Ok(());
    }

    // clap guarantees an index when --all is absent
    let index = index.context("No index given")?;
    let removed = roster.remove(index)?;
    store
        .save(&roster)
        .with_context(|| format!("Failed to save {}", store.path().display()))?;

    println!(
        "Deleted record {}: {} {}",
        index, removed.first_name, removed.surname
    );
    Ok(())
}

/// Handle the `import` subcommand
fn handle_import(store: &Store, path: &Path, sex_default: &str) -> Result<()> {
    log::info!("Importing raw names from {:?}", path);

    let fallback = parse_sex_arg(sex_default);
    let rows = store::read_raw_records(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for row in rows {
        match parse_raw_name(&row.name) {
            Ok(parsed) => {
                let sex = row.sex.parse::<Sex>().unwrap_or(fallback);
                records.push(parsed.into_person(row.age, sex));
            }
            Err(e) => {
                output::warn(format!("Skipping {:?}: {}", row.name, e));
                skipped += 1;
            }
        }
    }

    if records.is_empty() {
        anyhow::bail!(
            "No usable records in {}.\n\
             \n\
             The import format is a comma-separated file with header 'Name,Age,Sex',\n\
             where Name holds the composite form, e.g.:\n\
             \n\
             Name,Age,Sex\n\
             \"Kumar, Mr. Rajesh Pandey\",42,male",
            path.display()
        );
    }

    let roster = Roster::from_records(records);
    store
        .save(&roster)
        .with_context(|| format!("Failed to save {}", store.path().display()))?;

    if skipped > 0 {
        println!(
            "Imported {} records into {} ({} skipped)",
            roster.len(),
            store.path().display(),
            skipped
        );
    } else {
        println!(
            "Imported {} records into {}",
            roster.len(),
            store.path().display()
        );
    }
    Ok(())
}

/// Handle the `stats` subcommand
fn handle_stats(store: &Store, as_json: bool, pretty_json: bool) -> Result<()> {
    log::info!("Showing table statistics");

    let roster = store.load_or_default();
    let stats = roster.stats();

    if as_json {
        let json_output = if pretty_json {
            serde_json::to_string_pretty(&stats)?
        } else {
            serde_json::to_string(&stats)?
        };
        println!("{}", json_output);
    } else {
        println!("Roster Statistics");
        println!("=================");
        OutputFormatter::new(false).print_stats(&stats);
    }

    Ok(())
}

/// Handle interactive mode (default when no command is given)
fn handle_interactive(store: Store) -> Result<()> {
    log::info!("Launching interactive mode");
    crate::interactive::run_interactive(store)
}
