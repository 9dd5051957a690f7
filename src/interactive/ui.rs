use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
    Frame,
};

use crate::formatter::{column_widths, pad, render_header};
use crate::models::Person;

use super::app::{AppMode, FocusState, InteractiveApp};

/// Main render function
pub fn render(f: &mut Frame, app: &InteractiveApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name query input
            Constraint::Length(3), // Title filter and sort controls
            Constraint::Min(1),    // Record table
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    render_query(f, chunks[0], app);
    render_controls(f, chunks[1], app);

    match app.mode() {
        AppMode::Help => render_help_screen(f, chunks[2], app),
        AppMode::AddRecord => {
            render_table(f, chunks[2], app);
            // Render the add form modal on top
            if let Some(form) = app.add_form() {
                form.render(f, chunks[2], app.theme());
            }
        }
        AppMode::ExportPrompt => {
            render_table(f, chunks[2], app);
            render_export_prompt(f, chunks[2], app);
        }
        AppMode::ConfirmDeleteAll => {
            render_table(f, chunks[2], app);
            render_confirm_delete(f, chunks[2], app);
        }
        AppMode::Normal => render_table(f, chunks[2], app),
    }

    render_footer(f, chunks[3], app);
}

fn render_query(f: &mut Frame, area: Rect, app: &InteractiveApp) {
    let palette = &app.theme().palette;
    let query_focused = matches!(app.focus_state(), FocusState::NameQuery);

    // Build title line with the record count on the right
    let title_left = if query_focused {
        " Name search [TYPING - Press Tab/Enter to navigate] "
    } else {
        " Name search [Press Tab to focus, / to type] "
    };
    let record_count = format!("{} records ", app.roster_len());

    // Calculate spacing to push the count to the right
    let available_width = area.width.saturating_sub(2) as usize; // Subtract borders
    let title_len = title_left.chars().count();
    let count_len = record_count.chars().count();
    let spaces_needed = available_width.saturating_sub(title_len + count_len);
    let spacing = " ".repeat(spaces_needed);

    let title_spans = vec![
        Span::raw(title_left),
        Span::raw(spacing),
        Span::styled(record_count, Style::default().fg(palette.muted)),
    ];

    let input_block = Block::default()
        .borders(Borders::ALL)
        .title_top(Line::from(title_spans))
        .border_style(if query_focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        });

    let input_style = if query_focused {
        Style::default()
            .fg(palette.foreground)
            .bg(app.theme().input_highlight())
    } else {
        Style::default().fg(palette.foreground)
    };

    let input_paragraph = Paragraph::new(app.name_input().value())
        .block(input_block)
        .style(input_style);

    f.render_widget(input_paragraph, area);

    // Set cursor position if the query is focused
    if query_focused {
        let cursor_x = area.x + 1 + app.name_input().visual_cursor() as u16;
        let cursor_y = area.y + 1;
        f.set_cursor_position((cursor_x.min(area.right() - 2), cursor_y));
    }
}

fn render_controls(f: &mut Frame, area: Rect, app: &InteractiveApp) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_title_filter(f, chunks[0], app);
    render_sort_badges(f, chunks[1], app);
}

fn render_title_filter(f: &mut Frame, area: Rect, app: &InteractiveApp) {
    let palette = &app.theme().palette;
    let filter_focused = matches!(app.focus_state(), FocusState::TitleFilter);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Title filter [exact match, e.g. Dr.] ")
        .border_style(if filter_focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        });

    let input_style = if filter_focused {
        Style::default()
            .fg(palette.foreground)
            .bg(app.theme().input_highlight())
    } else {
        Style::default().fg(palette.foreground)
    };

    let input_paragraph = Paragraph::new(app.title_input().value())
        .block(block)
        .style(input_style);

    f.render_widget(input_paragraph, area);

    if filter_focused {
        let cursor_x = area.x + 1 + app.title_input().visual_cursor() as u16;
        f.set_cursor_position((cursor_x.min(area.right() - 2), area.y + 1));
    }
}

fn render_sort_badges(f: &mut Frame, area: Rect, app: &InteractiveApp) {
    let palette = &app.theme().palette;

    let inactive_style = Style::default()
        .fg(palette.muted)
        .bg(palette.badge_inactive);

    // Sort column badge
    let sort_text = match app.sort() {
        Some(key) => format!(" [s] Sort: {} ", key),
        None => " [s] Sort: table order ".to_string(),
    };
    let sort_style = if app.sort().is_some() {
        Style::default()
            .fg(Color::Black)
            .bg(palette.badge_active)
            .add_modifier(Modifier::BOLD)
    } else {
        inactive_style
    };

    // Direction badge, only lit while a sort column is active
    let order_text = if app.ascending() {
        " [o] Ascending "
    } else {
        " [o] Descending "
    };
    let order_style = if app.sort().is_some() {
        Style::default()
            .fg(Color::Black)
            .bg(palette.info)
            .add_modifier(Modifier::BOLD)
    } else {
        inactive_style
    };

    let badge_spans = vec![
        Span::styled(sort_text, sort_style),
        Span::raw("  "),
        Span::styled(order_text, order_style),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Sort [s: column, o: order] ")
        .border_style(Style::default().fg(palette.muted));

    let badges = Paragraph::new(Line::from(badge_spans)).block(block);
    f.render_widget(badges, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &InteractiveApp) {
    let palette = &app.theme().palette;
    let results = app.results();

    if app.roster_len() == 0 {
        let empty_text = Paragraph::new(
            "The table is empty.\n\nPress 'a' to add a record\nPress '?' for full help",
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Records ")
                .border_style(Style::default().fg(palette.muted)),
        )
        .style(palette.muted_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

        f.render_widget(empty_text, area);
        return;
    }

    if results.is_empty() {
        let empty_text = Paragraph::new(
            "No records match. Try a different name or title.\n\nTip: Press / to edit your search",
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Records ")
                .border_style(Style::default().fg(palette.muted)),
        )
        .style(palette.muted_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

        f.render_widget(empty_text, area);
        return;
    }

    // Two border lines plus the header row
    let visible_height = area.height.saturating_sub(3) as usize;

    // Update the list's visible height for scroll calculations
    // This uses interior mutability (Cell) to update during rendering
    results.set_visible_height(visible_height);

    // Column widths come from the whole result set so the layout does not
    // shift while scrolling
    let borrowed: Vec<(usize, &Person)> = results.rows().iter().map(|(i, p)| (*i, p)).collect();
    let widths = column_widths(&borrowed);

    let mut items: Vec<ListItem> = Vec::with_capacity(visible_height + 1);
    items.push(
        ListItem::new(format!(" {}", render_header(&widths)))
            .style(Style::default().add_modifier(Modifier::BOLD)),
    );

    for (idx, (position, person)) in results.visible_rows(visible_height).iter().enumerate() {
        let global_idx = idx + results.scroll_offset();
        let text = format!(" {}", render_row(*position, person, &widths));

        if global_idx == results.selected_index() {
            items.push(ListItem::new(text).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(palette.highlight)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            items.push(ListItem::new(text));
        }
    }

    let title = format!(" Records ({} of {}) ", results.len(), app.roster_len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(palette.accent)),
    );

    f.render_widget(list, area);

    // Render scrollbar if there are more rows than visible
    if results.len() > visible_height {
        let mut scrollbar_state =
            ScrollbarState::new(results.len()).position(results.selected_index());

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(palette.accent));

        f.render_stateful_widget(
            scrollbar,
            area.inner(ratatui::layout::Margin {
                horizontal: 0,
                vertical: 1,
            }),
            &mut scrollbar_state,
        );
    }
}

/// Format one table row with the same column math as the CLI table
fn render_row(position: usize, person: &Person, widths: &[usize; 7]) -> String {
    format!(
        "{:>index_width$}  {}  {}  {}  {}  {:>age_width$}  {}",
        position,
        pad(&person.surname, widths[1]),
        pad(&person.title, widths[2]),
        pad(&person.first_name, widths[3]),
        pad(&person.last_name, widths[4]),
        person.age,
        pad(&person.sex.to_string(), widths[6]),
        index_width = widths[0],
        age_width = widths[5],
    )
}

fn render_help_screen(f: &mut Frame, area: Rect, app: &InteractiveApp) {
    let palette = &app.theme().palette;

    let help_text = vec![
        "",
        "  Roster Interactive Mode - Keyboard Shortcuts",
        "  ═══════════════════════════════════════════════",
        "",
        "  Navigation:",
        "    j / ↓         Move to next record",
        "    k / ↑         Move to previous record",
        "    PageDown      Jump 10 records down",
        "    PageUp        Jump 10 records up",
        "    Home / g      Go to first record",
        "    End / G       Go to last record",
        "",
        "  Search:",
        "    /             Focus the name search",
        "    Tab           Cycle name search, title filter, table",
        "    Enter         Run the search now, jump to the table",
        "    Esc           Back to the table / close help",
        "",
        "  Sorting:",
        "    s             Cycle sort column (table order, age, first name, surname)",
        "    o             Flip ascending / descending",
        "",
        "  Records:",
        "    a             Add a record",
        "    d / Delete    Delete the selected record",
        "    D             Delete every record (asks first)",
        "    e             Export the current view to a file",
        "",
        "  Other:",
        "    ?             Toggle this help screen",
        "    q / Ctrl+C    Quit",
        "",
        "  Press '?' to close this help screen",
        "",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(Style::default().fg(palette.foreground))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(help_paragraph, area);
}

fn render_export_prompt(f: &mut Frame, area: Rect, app: &InteractiveApp) {
    let palette = &app.theme().palette;
    let Some(input) = app.export_input() else {
        return;
    };

    let modal_width = 50.min(area.width.saturating_sub(4));
    let modal_height = 3.min(area.height.saturating_sub(2));
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(area.x + modal_x, area.y + modal_y, modal_width, modal_height);

    // Dim the table behind the modal
    let background = Block::default().style(Style::default().bg(palette.background));
    f.render_widget(background, area);

    let title = format!(" Export {} record(s) to ", app.results().len());
    let prompt = Paragraph::new(input.value())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(
                    Style::default()
                        .fg(palette.info)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .style(Style::default().fg(palette.foreground));

    f.render_widget(prompt, modal_area);

    let cursor_x = modal_area.x + 1 + input.visual_cursor() as u16;
    f.set_cursor_position((
        cursor_x.min(modal_area.right().saturating_sub(2)),
        modal_area.y + 1,
    ));

    // Render footer hint
    let footer_area = Rect::new(
        modal_area.x,
        modal_area.y + modal_area.height,
        modal_area.width,
        1,
    );
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" write file  ", palette.muted_style()),
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

fn render_confirm_delete(f: &mut Frame, area: Rect, app: &InteractiveApp) {
    let palette = &app.theme().palette;

    let modal_width = 46.min(area.width.saturating_sub(4));
    let modal_height = 5.min(area.height.saturating_sub(2));
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(area.x + modal_x, area.y + modal_y, modal_width, modal_height);

    let background = Block::default().style(Style::default().bg(palette.background));
    f.render_widget(background, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete all {} records?", app.roster_len()),
            palette.warning_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "This cannot be undone.",
            palette.muted_style(),
        )),
    ];

    let confirm = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Confirm ")
            .border_style(
                Style::default()
                    .fg(palette.warning)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    f.render_widget(confirm, modal_area);

    let footer_area = Rect::new(
        modal_area.x,
        modal_area.y + modal_area.height,
        modal_area.width,
        1,
    );
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" delete everything  ", palette.muted_style()),
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

fn render_footer(f: &mut Frame, area: Rect, app: &InteractiveApp) {
    let palette = &app.theme().palette;

    // Transient statuses take over the whole line until the next search
    if let Some(error) = app.error_message() {
        let text = Paragraph::new(format!(" ✗ {}", error))
            .style(palette.error_style().add_modifier(Modifier::BOLD));
        f.render_widget(text, area);
        return;
    }
    if let Some(info) = app.info_message() {
        let text = Paragraph::new(format!(" ✓ {}", info)).style(palette.success_style());
        f.render_widget(text, area);
        return;
    }

    // Build footer content based on mode
    let footer_spans = match app.mode() {
        AppMode::Help => vec![
            Span::styled("Press ", palette.muted_style()),
            Span::styled(
                "?",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to close help", palette.muted_style()),
        ],
        AppMode::AddRecord => vec![
            Span::styled(
                "[ADD RECORD] ",
                Style::default()
                    .fg(palette.info)
                    .add_modifier(Modifier::BOLD),
            ),
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
        ],
        AppMode::ExportPrompt => vec![
            Span::styled(
                "[EXPORT] ",
                Style::default()
                    .fg(palette.info)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" write file  ", palette.muted_style()),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" cancel", palette.muted_style()),
        ],
        AppMode::ConfirmDeleteAll => vec![
            Span::styled(
                "[DELETE ALL] ",
                palette.warning_style().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "y",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" confirm  ", palette.muted_style()),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" cancel", palette.muted_style()),
        ],
        AppMode::Normal => {
            let mut spans = vec![];

            // Show mode indicator based on focus state
            match app.focus_state() {
                FocusState::NameQuery => {
                    spans.push(Span::styled(
                        "[SEARCH MODE] ",
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                FocusState::TitleFilter => {
                    spans.push(Span::styled(
                        "[FILTER MODE] ",
                        Style::default()
                            .fg(palette.info)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                FocusState::Results => {
                    spans.push(Span::styled(
                        "[BROWSE MODE] ",
                        palette.success_style().add_modifier(Modifier::BOLD),
                    ));
                }
            }

            spans.push(Span::styled(
                "a add  d delete  e export  s sort  / search  ? help",
                palette.muted_style(),
            ));

            spans
        }
    };

    let footer = Paragraph::new(Line::from(footer_spans))
        .style(Style::default().fg(palette.foreground));

    f.render_widget(footer, area);
}
