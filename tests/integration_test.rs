//! Integration tests for Roster

use roster::store::{read_raw_records, write_records};
use roster::{Roster, SearchQuery, Sex, SortKey, Store, parse_raw_name, search, search_indices};
use tempfile::TempDir;

#[test]
fn test_full_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let sink = temp_dir.path().join("people_data.csv");

    // First session: no sink yet, so the default dataset is seeded
    let store = Store::new(&sink);
    let mut roster = store.load_or_default();
    assert_eq!(roster.len(), 5);
    assert!(sink.exists());

    // Add a record the way the add command does: parse, append, save
    let person = parse_raw_name("Khoja, Mr. Ashok Kumar Khoja")
        .unwrap()
        .into_person(40, Sex::Male);
    roster.add(person).unwrap();
    store.save(&roster).unwrap();

    // A later session sees the new record at the final position
    let roster = Store::new(&sink).load().unwrap();
    assert_eq!(roster.len(), 6);
    assert_eq!(roster.get(5).unwrap().first_name, "Ashok Kumar");
    assert_eq!(roster.get(5).unwrap().last_name, "Khoja");

    // Search it back out by name fragment
    let query = SearchQuery {
        name: Some("ash".to_string()),
        ..Default::default()
    };
    let indices = search_indices(&roster, &query);
    assert_eq!(indices, vec![5]);

    // Delete by table position and persist
    let mut roster = roster;
    let removed = roster.remove(indices[0]).unwrap();
    assert_eq!(removed.surname, "Khoja");
    store.save(&roster).unwrap();

    assert_eq!(Store::new(&sink).load().unwrap().len(), 5);
}

#[test]
fn test_filtered_export_is_itself_a_loadable_sink() {
    let temp_dir = TempDir::new().unwrap();
    let sink = temp_dir.path().join("people_data.csv");
    let out = temp_dir.path().join("filtered_results.csv");

    let roster = Store::new(&sink).load_or_default();

    // Filter to the Mr. rows, oldest first, as `search --export` does
    let query = SearchQuery {
        name: None,
        title: Some("Mr.".to_string()),
        sort: Some(SortKey::Age),
        ascending: false,
    };
    let results = search(&roster, &query);
    write_records(&out, results.records()).unwrap();

    // Exports and saves share one format, header included
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("Surname,Title,First_Name,Last_Name,Age,Sex\n"));

    let exported = Store::new(&out).load().unwrap();
    assert_eq!(exported.len(), 3);
    assert_eq!(exported.get(0).unwrap().first_name, "Imran"); // 51
    assert_eq!(exported.get(1).unwrap().first_name, "Rajesh"); // 42
    assert_eq!(exported.get(2).unwrap().first_name, "Amit"); // 29
}

#[test]
fn test_import_replaces_the_table_and_skips_bad_names() {
    let temp_dir = TempDir::new().unwrap();
    let sink = temp_dir.path().join("people_data.csv");
    let raw = temp_dir.path().join("raw_names.csv");

    std::fs::write(
        &raw,
        "Name,Age,Sex\n\
         \"Khoja, Mr. Ashok Kumar Khoja\",40,male\n\
         \"Bond, Dr. James Herbert Bond\",36,male\n\
         no comma in this name,50,other\n",
    )
    .unwrap();

    let store = Store::new(&sink);
    let seeded = store.load_or_default();
    assert_eq!(seeded.len(), 5);

    // Parse each raw row the way the import command does, skipping failures
    let mut records = Vec::new();
    for row in read_raw_records(&raw).unwrap() {
        if let Ok(parsed) = parse_raw_name(&row.name) {
            records.push(parsed.into_person(row.age, Sex::parse_lossy(&row.sex)));
        }
    }
    assert_eq!(records.len(), 2);
    store.save(&Roster::from_records(records)).unwrap();

    // The import replaced the seeded table entirely
    let roster = store.load().unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get(0).unwrap().first_name, "Ashok Kumar");
    assert_eq!(roster.get(1).unwrap().first_name, "James Herbert");
    assert_eq!(roster.get(1).unwrap().last_name, "Bond");
}

#[test]
fn test_emptied_table_stays_empty_across_sessions() {
    let temp_dir = TempDir::new().unwrap();
    let sink = temp_dir.path().join("people_data.csv");

    let store = Store::new(&sink);
    let mut roster = store.load_or_default();
    roster.clear();
    store.save(&roster).unwrap();

    // An empty sink is a valid state, not a trigger for re-seeding
    let reloaded = Store::new(&sink).load_or_default();
    assert!(reloaded.is_empty());
}

#[test]
fn test_stats_over_the_default_dataset() {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::new(temp_dir.path().join("people_data.csv"));

    let stats = store.load_or_default().stats();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.average_age, Some(40.8));
    assert_eq!(stats.oldest, Some(51));
    assert_eq!(stats.by_title.get("Mr."), Some(&3));
    assert_eq!(stats.by_title.get("Ms."), Some(&1));
    assert_eq!(stats.by_title.get("Dr."), Some(&1));
}
