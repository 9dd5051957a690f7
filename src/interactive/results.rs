use crate::models::Person;
use std::cell::Cell;

/// Matching rows with navigation and display state
///
/// Each row pairs a record with its position in the unfiltered table, so
/// the selection can drive a positional delete no matter how the view is
/// filtered or sorted.
#[derive(Debug)]
pub struct ResultList {
    /// Rows as (table position, record) pairs
    rows: Vec<(usize, Person)>,
    selected_index: usize,
    scroll_offset: usize,
    /// Height of the last rendered window. A Cell so the render pass,
    /// which only has &self, can report the real geometry.
    visible_height: Cell<usize>,
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            // A guess until the first frame reports the real height
            visible_height: Cell::new(20),
        }
    }

    /// Replace the rows, resetting selection and scroll
    pub fn set_rows(&mut self, rows: Vec<(usize, Person)>) {
        self.rows = rows;
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn rows(&self) -> &[(usize, Person)] {
        &self.rows
    }

    /// The selected row, as its (table position, record) pair
    pub fn selected(&self) -> Option<&(usize, Person)> {
        self.rows.get(self.selected_index)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn next(&mut self) {
        self.move_to(self.selected_index + 1);
    }

    pub fn prev(&mut self) {
        self.move_to(self.selected_index.saturating_sub(1));
    }

    pub fn jump_down(&mut self, n: usize) {
        self.move_to(self.selected_index.saturating_add(n));
    }

    pub fn jump_up(&mut self, n: usize) {
        self.move_to(self.selected_index.saturating_sub(n));
    }

    pub fn first(&mut self) {
        self.move_to(0);
    }

    pub fn last(&mut self) {
        self.move_to(self.rows.len().saturating_sub(1));
    }

    /// Select a row by list index, clamped to the available rows
    pub fn select(&mut self, index: usize) {
        self.move_to(index);
    }

    fn move_to(&mut self, index: usize) {
        if self.rows.is_empty() {
            return;
        }
        self.selected_index = index.min(self.rows.len() - 1);
        self.scroll_to_selection();
    }

    /// Shift the window so the selection stays visible
    fn scroll_to_selection(&mut self) {
        let height = self.visible_height.get();
        if height == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + height {
            self.scroll_offset = self.selected_index + 1 - height;
        }
    }

    /// Record the rendered window height (called during rendering)
    pub fn set_visible_height(&self, height: usize) {
        self.visible_height.set(height);
    }

    /// The slice of rows inside the current window
    pub fn visible_rows(&self, height: usize) -> &[(usize, Person)] {
        let start = self.scroll_offset;
        let end = (start + height).min(self.rows.len());
        &self.rows[start..end]
    }
}

impl Default for ResultList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn make_row(position: usize, first_name: &str, age: u32) -> (usize, Person) {
        (
            position,
            Person::new("Kumar", "Mr.", first_name, "Kumar", age, Sex::Male),
        )
    }

    #[test]
    fn test_result_list_creation() {
        let list = ResultList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_set_rows_resets_selection() {
        let mut list = ResultList::new();
        list.set_rows(vec![make_row(0, "A", 20), make_row(1, "B", 30)]);
        list.next();
        assert_eq!(list.selected_index(), 1);

        list.set_rows(vec![make_row(2, "C", 40)]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.selected_index(), 0);
        assert_eq!(list.scroll_offset(), 0);
    }

    #[test]
    fn test_navigation() {
        let mut list = ResultList::new();
        list.set_rows(vec![
            make_row(0, "A", 20),
            make_row(1, "B", 30),
            make_row(2, "C", 40),
        ]);

        assert_eq!(list.selected_index(), 0);

        list.next();
        assert_eq!(list.selected_index(), 1);

        list.next();
        assert_eq!(list.selected_index(), 2);

        // Clamped at the end
        list.next();
        assert_eq!(list.selected_index(), 2);

        list.prev();
        assert_eq!(list.selected_index(), 1);

        list.first();
        assert_eq!(list.selected_index(), 0);

        list.last();
        assert_eq!(list.selected_index(), 2);
    }

    #[test]
    fn test_navigation_on_empty_list_is_inert() {
        let mut list = ResultList::new();
        list.next();
        list.prev();
        list.last();
        list.jump_down(10);
        assert_eq!(list.selected_index(), 0);
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_selected_returns_table_position() {
        let mut list = ResultList::new();
        // A filtered view: table positions need not be contiguous
        list.set_rows(vec![make_row(3, "Neha", 47), make_row(1, "Priya", 35)]);

        list.next();
        let (position, person) = list.selected().unwrap();
        assert_eq!(*position, 1);
        assert_eq!(person.first_name, "Priya");
    }

    #[test]
    fn test_select_clamps_to_bounds() {
        let mut list = ResultList::new();
        list.set_rows(vec![make_row(0, "A", 20), make_row(1, "B", 30)]);

        list.select(5);
        assert_eq!(list.selected_index(), 1);

        list.select(0);
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_jump_clamps_to_bounds() {
        let mut list = ResultList::new();
        list.set_rows((0..5).map(|i| make_row(i, "A", 20 + i as u32)).collect());

        list.jump_down(100);
        assert_eq!(list.selected_index(), 4);

        list.jump_up(100);
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_scrolling_follows_the_selection() {
        let mut list = ResultList::new();
        list.set_rows((0..20).map(|i| make_row(i, "A", 20)).collect());
        list.set_visible_height(10);

        // Selecting below the window scrolls just far enough
        list.select(15);
        assert_eq!(list.scroll_offset(), 6);
        assert_eq!(list.visible_rows(10).len(), 10);

        // And selecting above it scrolls back
        list.first();
        assert_eq!(list.scroll_offset(), 0);
    }
}
