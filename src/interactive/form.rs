use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::input::InputField;
use super::theme::ThemeManager;
use crate::error::{Result, RosterError};
use crate::models::{Person, Sex};

/// Field focus within the add form
#[derive(Debug, Clone, Copy, PartialEq)]
enum FormFocus {
    Surname,
    Title,
    FirstName,
    LastName,
    Age,
    Sex,
}

/// Modal form for adding a record
///
/// Each name field is entered on its own line; the field-level checks run
/// when the record is appended, so a rejected field is reported inside the
/// form without losing what was typed.
pub struct AddForm {
    surname: InputField,
    title: InputField,
    first_name: InputField,
    last_name: InputField,
    age: InputField,
    sex: Sex,
    focus: FormFocus,
    error: Option<String>,
}

impl AddForm {
    pub fn new() -> Self {
        Self {
            surname: InputField::new(),
            title: InputField::new(),
            first_name: InputField::new(),
            last_name: InputField::new(),
            age: InputField::new(),
            sex: Sex::Other,
            focus: FormFocus::Surname,
            error: None,
        }
    }

    /// Handle a key event. Tab and the arrow keys move between fields;
    /// everything else edits the focused field.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.error = None;

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            _ => match self.focused_field_mut() {
                Some(field) => {
                    field.handle_key(key);
                }
                None => match key.code {
                    KeyCode::Left => self.cycle_sex_back(),
                    KeyCode::Right | KeyCode::Char(' ') => self.cycle_sex(),
                    _ => {}
                },
            },
        }
    }

    /// Build a record from the current field values. Only the age needs
    /// parsing here; the name fields are checked by the table on append.
    pub fn submit(&self) -> Result<Person> {
        let raw_age = self.age.value().trim();
        let age: u32 = raw_age.parse().map_err(|_| RosterError::Validation {
            field: "age",
            reason: format!("{:?} is not a whole number", raw_age),
        })?;

        Ok(Person::new(
            self.surname.value().trim(),
            self.title.value().trim(),
            self.first_name.value().trim(),
            self.last_name.value().trim(),
            age,
            self.sex,
        ))
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    fn focused_field_mut(&mut self) -> Option<&mut InputField> {
        match self.focus {
            FormFocus::Surname => Some(&mut self.surname),
            FormFocus::Title => Some(&mut self.title),
            FormFocus::FirstName => Some(&mut self.first_name),
            FormFocus::LastName => Some(&mut self.last_name),
            FormFocus::Age => Some(&mut self.age),
            FormFocus::Sex => None,
        }
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormFocus::Surname => FormFocus::Title,
            FormFocus::Title => FormFocus::FirstName,
            FormFocus::FirstName => FormFocus::LastName,
            FormFocus::LastName => FormFocus::Age,
            FormFocus::Age => FormFocus::Sex,
            FormFocus::Sex => FormFocus::Surname,
        };
    }

    fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormFocus::Surname => FormFocus::Sex,
            FormFocus::Title => FormFocus::Surname,
            FormFocus::FirstName => FormFocus::Title,
            FormFocus::LastName => FormFocus::FirstName,
            FormFocus::Age => FormFocus::LastName,
            FormFocus::Sex => FormFocus::Age,
        };
    }

    fn cycle_sex(&mut self) {
        self.sex = match self.sex {
            Sex::Male => Sex::Female,
            Sex::Female => Sex::Other,
            Sex::Other => Sex::Male,
        };
    }

    fn cycle_sex_back(&mut self) {
        self.sex = match self.sex {
            Sex::Male => Sex::Other,
            Sex::Female => Sex::Male,
            Sex::Other => Sex::Female,
        };
    }

    fn label_style(&self, field: FormFocus, theme: &ThemeManager) -> Style {
        if self.focus == field {
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.palette.foreground)
        }
    }

    fn field_line(
        &self,
        label: &str,
        field: FormFocus,
        value: &str,
        theme: &ThemeManager,
    ) -> Line<'static> {
        let marker = if self.focus == field { "▶" } else { " " };
        Line::from(vec![
            Span::styled(
                format!(" {} {:<8}", marker, label),
                self.label_style(field, theme),
            ),
            Span::raw(value.to_string()),
        ])
    }

    /// Render the form as a centered modal
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &ThemeManager) {
        let palette = &theme.palette;

        let modal_width = 56.min(area.width.saturating_sub(4));
        let modal_height = 11.min(area.height.saturating_sub(2));
        let modal_x = (area.width.saturating_sub(modal_width)) / 2;
        let modal_y = (area.height.saturating_sub(modal_height)) / 2;
        let modal_area = Rect::new(area.x + modal_x, area.y + modal_y, modal_width, modal_height);

        // Dim the table behind the modal
        let background = Block::default().style(Style::default().bg(palette.background));
        f.render_widget(background, area);

        let mut lines = vec![
            Line::from(""),
            self.field_line("Surname", FormFocus::Surname, self.surname.value(), theme),
            self.field_line("Title", FormFocus::Title, self.title.value(), theme),
            self.field_line("First", FormFocus::FirstName, self.first_name.value(), theme),
            self.field_line("Last", FormFocus::LastName, self.last_name.value(), theme),
            self.field_line("Age", FormFocus::Age, self.age.value(), theme),
            self.field_line("Sex", FormFocus::Sex, &format!("◀ {} ▶", self.sex), theme),
            Line::from(""),
        ];

        if let Some(ref error) = self.error {
            lines.push(Line::from(Span::styled(
                format!(" {}", error),
                palette.error_style(),
            )));
        }

        let form = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Add Record ")
                .border_style(
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        f.render_widget(form, modal_area);

        // Place the terminal cursor inside the focused text field
        let field_x = modal_area.x + 1 + 11;
        let cursor = match self.focus {
            FormFocus::Surname => Some((&self.surname, 2)),
            FormFocus::Title => Some((&self.title, 3)),
            FormFocus::FirstName => Some((&self.first_name, 4)),
            FormFocus::LastName => Some((&self.last_name, 5)),
            FormFocus::Age => Some((&self.age, 6)),
            FormFocus::Sex => None,
        };
        if let Some((field, row)) = cursor {
            let cursor_x = field_x + field.visual_cursor() as u16;
            f.set_cursor_position((
                cursor_x.min(modal_area.right().saturating_sub(2)),
                modal_area.y + row,
            ));
        }

        // Render footer hint
        let footer_area = Rect::new(
            modal_area.x,
            modal_area.y + modal_area.height,
            modal_area.width,
            1,
        );
        let footer = Paragraph::new(Line::from(vec![
            Span::styled(
                "Tab",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" next field  ", palette.muted_style()),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" save  ", palette.muted_style()),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" cancel", palette.muted_style()),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(footer, footer_area);
    }
}

impl Default for AddForm {
    fn default() -> Self {
        Self::new()
    }
}
