use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::models::{Person, Roster, SortKey};
use crate::query::{self, SearchQuery};
use crate::store::{self, Store};

use super::form::AddForm;
use super::input::{InputField, KeyCommand};
use super::results::ResultList;
use super::theme::ThemeManager;
use super::ui;

/// Main application state for interactive mode
pub struct InteractiveApp {
    /// Name query input field
    name_input: InputField,
    /// Title filter input field
    title_input: InputField,
    /// Rows matching the current query
    results: ResultList,
    /// Dataset sink
    store: Store,
    /// In-memory table, written back after every mutation
    roster: Roster,
    /// Current application mode
    mode: AppMode,
    /// Theme manager
    theme: ThemeManager,
    /// Sort column (None keeps table order)
    sort: Option<SortKey>,
    /// Sort direction
    ascending: bool,
    /// Whether a search is pending (debounce)
    search_pending: bool,
    /// Last input time (for debouncing)
    last_input_time: Option<Instant>,
    /// Debounce duration in milliseconds
    debounce_ms: u64,
    /// Whether to quit
    should_quit: bool,
    /// Current focus state
    focus_state: FocusState,
    /// Error message to display (if any)
    error_message: Option<String>,
    /// Info message to display (if any)
    info_message: Option<String>,
    /// Add form state (present while the add modal is open)
    add_form: Option<AddForm>,
    /// Export file prompt (present while the export modal is open)
    export_input: Option<InputField>,
}

/// Application mode
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    /// Normal browsing mode
    Normal,
    /// Help screen is showing
    Help,
    /// Add form is open
    AddRecord,
    /// Export file prompt is open
    ExportPrompt,
    /// Delete-all confirmation is open
    ConfirmDeleteAll,
}

/// Focus state for Tab navigation
#[derive(Debug, Clone, PartialEq)]
pub enum FocusState {
    NameQuery,
    TitleFilter,
    Results,
}

impl InteractiveApp {
    /// Create a new interactive application over a dataset sink
    pub fn new(store: Store) -> Self {
        let roster = store.load_or_default();
        let theme = ThemeManager::detect();

        Self {
            name_input: InputField::new(),
            title_input: InputField::new(),
            results: ResultList::new(),
            store,
            roster,
            mode: AppMode::Normal,
            theme,
            sort: None,
            ascending: true,
            search_pending: false,
            last_input_time: None,
            debounce_ms: 300,
            should_quit: false,
            focus_state: FocusState::Results, // Start browsing the table
            error_message: None,
            info_message: None,
            add_form: None,
            export_input: None,
        }
    }

    /// Run the interactive event loop
    pub fn run(&mut self) -> Result<()> {
        // Populate the table before the first draw
        self.execute_search();

        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::restore_terminal(terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| ui::render(f, self))?;

            // Short poll timeout so debounced searches fire between keys
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Resize(_, _) => {
                        // Terminal resized, will redraw on next frame
                    }
                    _ => {}
                }
            }

            if self.should_execute_search() {
                self.execute_search();
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Modal modes capture every key
        match self.mode {
            AppMode::AddRecord => {
                self.handle_add_form_key(key);
                return;
            }
            AppMode::ExportPrompt => {
                self.handle_export_key(key);
                return;
            }
            AppMode::ConfirmDeleteAll => {
                self.handle_confirm_key(key);
                return;
            }
            _ => {}
        }

        // Handle Tab/Shift+Tab for focus cycling
        if key.code == KeyCode::Tab {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                self.focus_prev();
            } else {
                self.focus_next();
            }
            return;
        }
        if key.code == KeyCode::BackTab {
            self.focus_prev();
            return;
        }

        // Escape closes the help screen, clears messages, returns to the table
        if key.code == KeyCode::Esc {
            if self.mode == AppMode::Help {
                self.mode = AppMode::Normal;
                return;
            }
            self.error_message = None;
            self.info_message = None;
            self.focus_state = FocusState::Results;
            return;
        }

        // Enter runs the pending search immediately and moves to the table
        if key.code == KeyCode::Enter {
            if self.input_focused() {
                self.execute_search();
                self.focus_state = FocusState::Results;
            }
            return;
        }

        let command = KeyCommand::from_key(key, self.input_focused());

        match command {
            KeyCommand::Quit => self.should_quit = true,

            KeyCommand::ShowHelp => {
                self.mode = if self.mode == AppMode::Help {
                    AppMode::Normal
                } else {
                    AppMode::Help
                };
            }

            KeyCommand::FocusQuery => {
                self.focus_state = FocusState::NameQuery;
            }

            KeyCommand::UnfocusInput => {
                self.focus_state = FocusState::Results;
            }

            KeyCommand::NextRecord => self.results.next(),
            KeyCommand::PrevRecord => self.results.prev(),
            KeyCommand::PageDown => self.results.jump_down(10),
            KeyCommand::PageUp => self.results.jump_up(10),
            KeyCommand::First => self.results.first(),
            KeyCommand::Last => self.results.last(),

            KeyCommand::CycleSort => self.cycle_sort(),
            KeyCommand::ToggleOrder => {
                self.ascending = !self.ascending;
                self.execute_search();
            }

            KeyCommand::AddRecord => self.open_add_form(),
            KeyCommand::DeleteSelected => self.delete_selected(),
            KeyCommand::DeleteAll => self.confirm_delete_all(),
            KeyCommand::Export => self.open_export_prompt(),

            KeyCommand::None => {
                // A focused input consumes the key as text
                let changed = match self.focus_state {
                    FocusState::NameQuery => self.name_input.handle_key(key),
                    FocusState::TitleFilter => self.title_input.handle_key(key),
                    FocusState::Results => false,
                };
                if changed {
                    self.trigger_search();
                }
            }
        }
    }

    fn input_focused(&self) -> bool {
        matches!(
            self.focus_state,
            FocusState::NameQuery | FocusState::TitleFilter
        )
    }

    fn focus_next(&mut self) {
        self.focus_state = match self.focus_state {
            FocusState::NameQuery => FocusState::TitleFilter,
            FocusState::TitleFilter => FocusState::Results,
            FocusState::Results => FocusState::NameQuery,
        };
    }

    fn focus_prev(&mut self) {
        self.focus_state = match self.focus_state {
            FocusState::NameQuery => FocusState::Results,
            FocusState::TitleFilter => FocusState::NameQuery,
            FocusState::Results => FocusState::TitleFilter,
        };
    }

    /// Cycle the sort column: table order, age, first name, surname
    fn cycle_sort(&mut self) {
        self.sort = match self.sort {
            None => Some(SortKey::Age),
            Some(SortKey::Age) => Some(SortKey::FirstName),
            Some(SortKey::FirstName) => Some(SortKey::Surname),
            Some(SortKey::Surname) => None,
        };
        self.execute_search();
    }

    fn trigger_search(&mut self) {
        self.search_pending = true;
        self.last_input_time = Some(Instant::now());
    }

    fn should_execute_search(&self) -> bool {
        if !self.search_pending {
            return false;
        }

        if let Some(last_time) = self.last_input_time {
            last_time.elapsed() >= Duration::from_millis(self.debounce_ms)
        } else {
            false
        }
    }

    /// Re-run the query against the current table.
    ///
    /// An empty query is meaningful here: it shows the whole table, which
    /// is the natural browse view.
    fn execute_search(&mut self) {
        self.search_pending = false;

        let query = self.current_query();
        let positions = query::search_indices(&self.roster, &query);
        let rows: Vec<(usize, Person)> = positions
            .into_iter()
            .map(|position| (position, self.roster.records()[position].clone()))
            .collect();

        self.results.set_rows(rows);
        self.error_message = None;
        self.info_message = None;
    }

    fn current_query(&self) -> SearchQuery {
        let name = Some(self.name_input.value().trim().to_string()).filter(|s| !s.is_empty());
        let title = Some(self.title_input.value().trim().to_string()).filter(|s| !s.is_empty());

        SearchQuery {
            name,
            title,
            sort: self.sort,
            ascending: self.ascending,
        }
    }

    /// Write the table to the sink, surfacing failures in the status bar
    fn persist(&mut self) -> bool {
        match self.store.save(&self.roster) {
            Ok(()) => true,
            Err(e) => {
                self.error_message = Some(format!(
                    "Failed to save {}: {}",
                    self.store.path().display(),
                    e
                ));
                false
            }
        }
    }

    fn delete_selected(&mut self) {
        let Some(&(position, _)) = self.results.selected() else {
            self.info_message = Some("No record selected.".to_string());
            return;
        };

        let selected = self.results.selected_index();
        match self.roster.remove(position) {
            Ok(removed) => {
                self.execute_search();
                // Keep the cursor near the deleted row
                self.results
                    .select(selected.min(self.results.len().saturating_sub(1)));
                if self.persist() {
                    self.info_message = Some(format!(
                        "Deleted {} {}.",
                        removed.first_name, removed.surname
                    ));
                }
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    fn confirm_delete_all(&mut self) {
        if self.roster.is_empty() {
            self.info_message = Some("The table is already empty.".to_string());
            return;
        }
        self.error_message = None;
        self.info_message = None;
        self.mode = AppMode::ConfirmDeleteAll;
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let removed = self.roster.len();
                self.roster.clear();
                self.execute_search();
                if self.persist() {
                    self.info_message = Some(format!("Deleted all {} records.", removed));
                }
                self.mode = AppMode::Normal;
            }
            // Anything else cancels, mirroring the CLI's [y/N] prompt
            _ => self.mode = AppMode::Normal,
        }
    }

    fn open_add_form(&mut self) {
        self.error_message = None;
        self.info_message = None;
        self.add_form = Some(AddForm::new());
        self.mode = AppMode::AddRecord;
    }

    fn handle_add_form_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.add_form = None;
            self.mode = AppMode::Normal;
            return;
        }
        if key.code == KeyCode::Enter {
            self.submit_add_form();
            return;
        }
        if let Some(form) = self.add_form.as_mut() {
            form.handle_key(key);
        }
    }

    fn submit_add_form(&mut self) {
        let Some(form) = self.add_form.as_mut() else {
            self.mode = AppMode::Normal;
            return;
        };

        let person = match form.submit() {
            Ok(person) => person,
            Err(e) => {
                form.set_error(e.to_string());
                return;
            }
        };

        let label = format!("{} {}", person.first_name, person.surname);
        if let Err(e) = self.roster.add(person) {
            if let Some(form) = self.add_form.as_mut() {
                form.set_error(e.to_string());
            }
            return;
        }

        self.execute_search();
        let saved = self.persist();
        self.add_form = None;
        self.mode = AppMode::Normal;
        if saved {
            self.info_message = Some(format!("Added {}.", label));
        }
    }

    fn open_export_prompt(&mut self) {
        if self.results.is_empty() {
            self.info_message = Some("Nothing to export.".to_string());
            return;
        }
        self.error_message = None;
        self.info_message = None;

        let mut input = InputField::new();
        input.set_value(store::DEFAULT_EXPORT_FILE.to_string());
        self.export_input = Some(input);
        self.mode = AppMode::ExportPrompt;
    }

    fn handle_export_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.export_input = None;
                self.mode = AppMode::Normal;
            }
            KeyCode::Enter => self.export_results(),
            _ => {
                self.error_message = None;
                if let Some(input) = self.export_input.as_mut() {
                    input.handle_key(key);
                }
            }
        }
    }

    fn export_results(&mut self) {
        let Some(input) = self.export_input.as_ref() else {
            self.mode = AppMode::Normal;
            return;
        };

        let raw = input.value().trim();
        let path = if raw.is_empty() {
            PathBuf::from(store::DEFAULT_EXPORT_FILE)
        } else {
            PathBuf::from(raw)
        };

        let records: Vec<Person> = self
            .results
            .rows()
            .iter()
            .map(|(_, person)| person.clone())
            .collect();

        match store::write_records(&path, &records) {
            Ok(()) => {
                self.info_message = Some(format!(
                    "Exported {} record(s) to {}",
                    records.len(),
                    path.display()
                ));
                self.export_input = None;
                self.mode = AppMode::Normal;
            }
            Err(e) => self.error_message = Some(format!("Export failed: {}", e)),
        }
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
        crossterm::terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(
            terminal.backend_mut(),
            crossterm::terminal::LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    // Getters for UI rendering
    pub fn name_input(&self) -> &InputField {
        &self.name_input
    }

    pub fn title_input(&self) -> &InputField {
        &self.title_input
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn focus_state(&self) -> &FocusState {
        &self.focus_state
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn info_message(&self) -> Option<&str> {
        self.info_message.as_deref()
    }

    pub fn add_form(&self) -> Option<&AddForm> {
        self.add_form.as_ref()
    }

    pub fn export_input(&self) -> Option<&InputField> {
        self.export_input.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_app() -> (TempDir, InteractiveApp) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("people_data.csv"));
        let mut app = InteractiveApp::new(store);
        app.execute_search();
        (dir, app)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    fn type_text(app: &mut InteractiveApp, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_starts_with_full_table_in_table_order() {
        let (_dir, app) = test_app();
        assert_eq!(app.roster_len(), 5);
        assert_eq!(app.results().len(), 5);
        assert_eq!(app.results().rows()[0].1.first_name, "Rajesh");
        assert!(matches!(app.focus_state(), FocusState::Results));
    }

    #[test]
    fn test_typing_a_query_debounces_then_filters() {
        let (_dir, mut app) = test_app();

        app.handle_key_event(key(KeyCode::Char('/')));
        assert!(matches!(app.focus_state(), FocusState::NameQuery));

        type_text(&mut app, "neh");
        assert_eq!(app.name_input().value(), "neh");
        assert!(app.search_pending);
        // The debounce window has not elapsed yet
        assert!(!app.should_execute_search());

        app.execute_search();
        assert_eq!(app.results().len(), 1);
        assert_eq!(app.results().rows()[0].0, 3);
        assert_eq!(app.results().rows()[0].1.first_name, "Neha");
    }

    #[test]
    fn test_enter_runs_search_and_moves_to_table() {
        let (_dir, mut app) = test_app();
        app.handle_key_event(key(KeyCode::Char('/')));
        type_text(&mut app, "singh");
        app.handle_key_event(key(KeyCode::Enter));

        assert!(matches!(app.focus_state(), FocusState::Results));
        assert!(!app.search_pending);
        assert_eq!(app.results().len(), 1);
        assert_eq!(app.results().rows()[0].1.first_name, "Amit");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let (_dir, mut app) = test_app();
        assert!(matches!(app.focus_state(), FocusState::Results));

        app.handle_key_event(key(KeyCode::Tab));
        assert!(matches!(app.focus_state(), FocusState::NameQuery));

        app.handle_key_event(key(KeyCode::Tab));
        assert!(matches!(app.focus_state(), FocusState::TitleFilter));

        app.handle_key_event(key(KeyCode::Tab));
        assert!(matches!(app.focus_state(), FocusState::Results));

        app.handle_key_event(key(KeyCode::BackTab));
        assert!(matches!(app.focus_state(), FocusState::TitleFilter));
    }

    #[test]
    fn test_cycle_sort_goes_through_every_column() {
        let (_dir, mut app) = test_app();
        assert_eq!(app.sort(), None);

        app.handle_key_event(key(KeyCode::Char('s')));
        assert_eq!(app.sort(), Some(SortKey::Age));
        assert_eq!(app.results().rows()[0].1.first_name, "Amit"); // age 29

        app.handle_key_event(key(KeyCode::Char('s')));
        assert_eq!(app.sort(), Some(SortKey::FirstName));

        app.handle_key_event(key(KeyCode::Char('s')));
        assert_eq!(app.sort(), Some(SortKey::Surname));
        assert_eq!(app.results().rows()[0].1.surname, "Ali");

        app.handle_key_event(key(KeyCode::Char('s')));
        assert_eq!(app.sort(), None);
        assert_eq!(app.results().rows()[0].1.first_name, "Rajesh");
    }

    #[test]
    fn test_toggle_order_reverses_sorted_view() {
        let (_dir, mut app) = test_app();
        app.handle_key_event(key(KeyCode::Char('s'))); // sort by age
        app.handle_key_event(key(KeyCode::Char('o'))); // descending

        assert!(!app.ascending());
        assert_eq!(app.results().rows()[0].1.first_name, "Imran"); // age 51
    }

    #[test]
    fn test_delete_selected_removes_and_saves() {
        let (dir, mut app) = test_app();

        app.handle_key_event(key(KeyCode::Char('j'))); // select second row
        app.handle_key_event(key(KeyCode::Char('d')));

        assert_eq!(app.roster_len(), 4);
        assert!(app.info_message().unwrap().contains("Deleted Priya"));

        let reloaded = Store::new(dir.path().join("people_data.csv"))
            .load()
            .unwrap();
        assert_eq!(reloaded.len(), 4);
        assert!(reloaded.records().iter().all(|p| p.first_name != "Priya"));
    }

    #[test]
    fn test_delete_uses_table_position_not_view_position() {
        let (_dir, mut app) = test_app();

        // Filter down to the one Dr. in the table (position 3)
        app.title_input.set_value("Dr.".to_string());
        app.execute_search();
        assert_eq!(app.results().len(), 1);

        app.handle_key_event(key(KeyCode::Char('d')));
        assert_eq!(app.roster_len(), 4);
        assert!(app.roster.records().iter().all(|p| p.first_name != "Neha"));
    }

    #[test]
    fn test_delete_with_no_rows_is_a_no_op() {
        let (_dir, mut app) = test_app();
        app.name_input.set_value("zzz".to_string());
        app.execute_search();
        assert!(app.results().is_empty());

        app.handle_key_event(key(KeyCode::Char('d')));
        assert_eq!(app.roster_len(), 5);
        assert_eq!(app.info_message(), Some("No record selected."));
    }

    #[test]
    fn test_delete_all_asks_for_confirmation() {
        let (dir, mut app) = test_app();

        app.handle_key_event(shift_key(KeyCode::Char('D')));
        assert_eq!(app.mode, AppMode::ConfirmDeleteAll);

        // Any key other than y cancels
        app.handle_key_event(key(KeyCode::Char('n')));
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.roster_len(), 5);

        app.handle_key_event(shift_key(KeyCode::Char('D')));
        app.handle_key_event(key(KeyCode::Char('y')));
        assert_eq!(app.roster_len(), 0);
        assert!(app.results().is_empty());
        assert!(app.info_message().unwrap().contains("Deleted all 5"));

        let reloaded = Store::new(dir.path().join("people_data.csv"))
            .load()
            .unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_add_form_flow_adds_and_saves() {
        let (dir, mut app) = test_app();

        app.handle_key_event(key(KeyCode::Char('a')));
        assert_eq!(app.mode, AppMode::AddRecord);

        for field in ["Verma", "Mr.", "Arjun", "Verma", "33"] {
            type_text(&mut app, field);
            app.handle_key_event(key(KeyCode::Tab));
        }
        app.handle_key_event(key(KeyCode::Right)); // other -> male
        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.roster_len(), 6);
        assert!(app.info_message().unwrap().contains("Added Arjun"));

        let reloaded = Store::new(dir.path().join("people_data.csv"))
            .load()
            .unwrap();
        assert_eq!(reloaded.len(), 6);
        assert_eq!(reloaded.get(5).unwrap().surname, "Verma");
        assert_eq!(reloaded.get(5).unwrap().age, 33);
    }

    #[test]
    fn test_add_form_stays_open_on_incomplete_record() {
        let (_dir, mut app) = test_app();

        app.handle_key_event(key(KeyCode::Char('a')));
        type_text(&mut app, "Solo");
        for _ in 0..4 {
            app.handle_key_event(key(KeyCode::Tab)); // skip to Age
        }
        type_text(&mut app, "40");
        app.handle_key_event(key(KeyCode::Enter));

        // The record has no first name, so the append is rejected
        assert_eq!(app.mode, AppMode::AddRecord);
        assert_eq!(app.roster_len(), 5);

        app.handle_key_event(key(KeyCode::Esc));
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.roster_len(), 5);
    }

    #[test]
    fn test_export_writes_the_filtered_view() {
        let (dir, mut app) = test_app();
        let out = dir.path().join("out.csv");

        app.title_input.set_value("Mr.".to_string());
        app.execute_search();
        assert_eq!(app.results().len(), 3);

        app.handle_key_event(key(KeyCode::Char('e')));
        assert_eq!(app.mode, AppMode::ExportPrompt);

        // Replace the suggested file name with a path inside the temp dir
        for _ in 0..store::DEFAULT_EXPORT_FILE.len() {
            app.handle_key_event(key(KeyCode::Backspace));
        }
        type_text(&mut app, out.to_str().unwrap());
        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.info_message().unwrap().contains("Exported 3"));

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("Surname,Title,First_Name,Last_Name,Age,Sex"));
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("Kumar,Mr.,Rajesh,Pandey,42,male"));
    }

    #[test]
    fn test_export_with_no_rows_is_refused() {
        let (_dir, mut app) = test_app();
        app.name_input.set_value("zzz".to_string());
        app.execute_search();

        app.handle_key_event(key(KeyCode::Char('e')));
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.info_message(), Some("Nothing to export."));
    }

    #[test]
    fn test_help_toggles() {
        let (_dir, mut app) = test_app();

        app.handle_key_event(key(KeyCode::Char('?')));
        assert_eq!(app.mode, AppMode::Help);

        app.handle_key_event(key(KeyCode::Char('?')));
        assert_eq!(app.mode, AppMode::Normal);

        app.handle_key_event(key(KeyCode::Char('?')));
        app.handle_key_event(key(KeyCode::Esc));
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_quit_keys() {
        let (_dir, mut app) = test_app();
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let (_dir, mut app) = test_app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
