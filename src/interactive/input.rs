use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Single-line text entry
///
/// The cursor indexes characters rather than bytes, so multibyte input
/// moves one position per keypress and edits stay on a boundary.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    value: String,
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position as a column offset into the rendered text
    pub fn visual_cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the text and park the cursor at the end
    pub fn set_value(&mut self, value: String) {
        self.cursor = value.chars().count();
        self.value = value;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Byte offset of the character at the given cursor position
    fn byte_at(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map_or(self.value.len(), |(offset, _)| offset)
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Apply a key to the field, returning whether the text changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                let at = self.byte_at(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_at(self.cursor);
                self.value.remove(at);
                true
            }
            KeyCode::Delete if self.cursor < self.char_len() => {
                let at = self.byte_at(self.cursor);
                self.value.remove(at);
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                false
            }
            _ => false,
        }
    }
}

/// Application-wide key command
#[derive(Debug, Clone, PartialEq)]
pub enum KeyCommand {
    // Navigation
    NextRecord,
    PrevRecord,
    PageDown,
    PageUp,
    First,
    Last,

    // Input focus
    FocusQuery,
    UnfocusInput,

    // Sorting
    CycleSort,
    ToggleOrder,

    // Record actions
    AddRecord,
    DeleteSelected,
    DeleteAll,
    Export,

    // Misc
    ShowHelp,
    Quit,

    // Ignore
    None,
}

impl KeyCommand {
    /// Parse a key event into a command
    pub fn from_key(key: KeyEvent, input_focused: bool) -> Self {
        // Handle Ctrl+C always
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Self::Quit;
        }

        // If input is focused, keys belong to the input field
        if input_focused {
            return match key.code {
                KeyCode::Esc => Self::UnfocusInput,
                _ => Self::None, // Let InputField handle it
            };
        }

        // Global shortcuts when no input is focused
        match (key.code, key.modifiers) {
            // Navigation
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Self::NextRecord,
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Self::PrevRecord,
            (KeyCode::PageDown, _) => Self::PageDown,
            (KeyCode::PageUp, _) => Self::PageUp,
            (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => Self::First,
            (KeyCode::End, _) | (KeyCode::Char('G'), KeyModifiers::SHIFT) => Self::Last,

            // Input focus
            (KeyCode::Char('/'), KeyModifiers::NONE) => Self::FocusQuery,
            (KeyCode::Esc, _) => Self::UnfocusInput,

            // Sorting
            (KeyCode::Char('s'), KeyModifiers::NONE) => Self::CycleSort,
            (KeyCode::Char('o'), KeyModifiers::NONE) => Self::ToggleOrder,

            // Record actions
            (KeyCode::Char('a'), KeyModifiers::NONE) => Self::AddRecord,
            (KeyCode::Char('d'), KeyModifiers::NONE) | (KeyCode::Delete, _) => Self::DeleteSelected,
            (KeyCode::Char('D'), KeyModifiers::SHIFT) => Self::DeleteAll,
            (KeyCode::Char('e'), KeyModifiers::NONE) => Self::Export,

            (KeyCode::Char('?'), KeyModifiers::NONE) => Self::ShowHelp,
            (KeyCode::Char('q'), KeyModifiers::NONE) => Self::Quit,

            _ => Self::None,
        }
    }
}
