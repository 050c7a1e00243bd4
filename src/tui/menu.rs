//! Context menu model.
//!
//! The menu is a flat list of entries grouped under headers (Draw, Color,
//! Thickness, View, Tools, Help). Headers are rows too, so a click on a
//! rendered row maps back through [`Menu::entry_at_row`]. When the popup is
//! shorter than the row list, [`Menu::scroll_into_view`] keeps the
//! highlighted entry on screen.

use crate::color::Color;
use crate::document::Style;
use crate::render::primitives::PrimitiveKind;
use crate::session::{Command, EditorSession};
use crate::tui::input::Action;

/// One selectable menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    /// Group header this entry belongs to.
    pub group: &'static str,
    /// Display label.
    pub label: String,
    /// What choosing the entry does.
    pub action: Action,
}

impl MenuEntry {
    fn new(group: &'static str, label: impl Into<String>, action: Action) -> Self {
        Self { group, label: label.into(), action }
    }

    /// Whether the entry reflects the session's current state (active tool,
    /// color or thickness, or an enabled view toggle).
    #[must_use]
    pub fn is_active(&self, session: &EditorSession) -> bool {
        let style = session.style();
        let view = session.view();
        match self.action {
            Action::Edit(Command::SelectTool(kind)) => style.kind == kind,
            Action::Edit(Command::SelectColor(color)) => style.color == color,
            Action::Edit(Command::SelectThickness(t)) => style.thickness == t,
            Action::Edit(Command::ToggleGrid) => view.show_grid,
            Action::Edit(Command::ToggleAxes) => view.show_axes,
            Action::Edit(Command::ToggleCoords) => view.show_coords,
            _ => false,
        }
    }
}

/// A rendered menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    /// Group header.
    Header(&'static str),
    /// Entry at this index.
    Entry(usize),
}

/// Context menu state: entries, highlighted entry, scroll and screen anchor.
#[derive(Debug, Clone)]
pub struct Menu {
    entries: Vec<MenuEntry>,
    selected: usize,
    /// First display row shown in the popup.
    scroll: usize,
    anchor: (u16, u16),
}

impl Menu {
    /// Build the menu, anchored at a terminal cell.
    #[must_use]
    pub fn new(anchor: (u16, u16)) -> Self {
        let mut entries = Vec::new();

        for (n, kind) in PrimitiveKind::ALL.into_iter().enumerate() {
            entries.push(MenuEntry::new(
                "Draw",
                format!("{} {}", n + 1, kind.label()),
                Action::Edit(Command::SelectTool(kind)),
            ));
        }
        for (name, color) in Color::PALETTE {
            entries.push(MenuEntry::new("Color", name, Action::Edit(Command::SelectColor(color))));
        }
        for t in Style::THICKNESS_PRESETS {
            entries.push(MenuEntry::new(
                "Thickness",
                format!("{t} px"),
                Action::Edit(Command::SelectThickness(t)),
            ));
        }
        entries.push(MenuEntry::new("View", "Grid", Action::Edit(Command::ToggleGrid)));
        entries.push(MenuEntry::new("View", "Axes", Action::Edit(Command::ToggleAxes)));
        entries.push(MenuEntry::new("View", "Coordinates", Action::Edit(Command::ToggleCoords)));
        entries.push(MenuEntry::new("Tools", "Clear", Action::Edit(Command::Clear)));
        entries.push(MenuEntry::new("Tools", "Undo", Action::Edit(Command::Undo)));
        entries.push(MenuEntry::new("Tools", "Redo", Action::Edit(Command::Redo)));
        entries.push(MenuEntry::new("Tools", "Export", Action::Export));
        entries.push(MenuEntry::new("Help", "Shortcuts", Action::Help));
        entries.push(MenuEntry::new("Help", "About", Action::About));

        Self { entries, selected: 0, scroll: 0, anchor }
    }

    /// All entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Index of the highlighted entry.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Terminal cell the menu was opened at.
    #[must_use]
    pub fn anchor(&self) -> (u16, u16) {
        self.anchor
    }

    /// Move the highlight up, wrapping at the top.
    pub fn up(&mut self) {
        let len = self.entries.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Move the highlight down, wrapping at the bottom.
    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % self.entries.len();
    }

    /// Action of the highlighted entry.
    #[must_use]
    pub fn selected_action(&self) -> Action {
        self.entries.get(self.selected).map_or(Action::None, |e| e.action)
    }

    /// Rows in display order: a header before each group, then its entries.
    #[must_use]
    pub fn rows(&self) -> Vec<MenuRow> {
        let mut rows = Vec::with_capacity(self.entries.len() + 6);
        let mut group = "";
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.group != group {
                group = entry.group;
                rows.push(MenuRow::Header(group));
            }
            rows.push(MenuRow::Entry(i));
        }
        rows
    }

    /// Display row of entry `entry`.
    #[must_use]
    pub fn row_of(&self, entry: usize) -> Option<usize> {
        self.rows().iter().position(|r| *r == MenuRow::Entry(entry))
    }

    /// First display row shown in the popup.
    #[must_use]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Scroll the fewest rows needed so the highlighted entry is among the
    /// `visible` rows. The first entry of a group brings its header along.
    pub fn scroll_into_view(&mut self, visible: usize) {
        let rows = self.rows();
        let visible = visible.max(1);
        let Some(row) = self.row_of(self.selected) else {
            return;
        };

        let after_header = row > 0 && matches!(rows[row - 1], MenuRow::Header(_));
        let top = if after_header && visible > 1 { row - 1 } else { row };
        if top < self.scroll {
            self.scroll = top;
        } else if row >= self.scroll + visible {
            self.scroll = row + 1 - visible;
        }
        self.scroll = self.scroll.min(rows.len().saturating_sub(visible));
    }

    /// Entry shown on display row `row` (0 = first row of the list, before
    /// scrolling).
    #[must_use]
    pub fn entry_at_row(&self, row: usize) -> Option<usize> {
        match self.rows().get(row)? {
            MenuRow::Entry(i) => Some(*i),
            MenuRow::Header(_) => None,
        }
    }

    /// Width of the widest label, used to size the popup.
    #[must_use]
    pub fn label_width(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.label.chars().count())
            .chain(self.rows().iter().filter_map(|r| match r {
                MenuRow::Header(h) => Some(h.len()),
                MenuRow::Entry(_) => None,
            }))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_groups_in_order() {
        let menu = Menu::new((0, 0));
        let headers: Vec<&str> = menu
            .rows()
            .into_iter()
            .filter_map(|r| match r {
                MenuRow::Header(h) => Some(h),
                MenuRow::Entry(_) => None,
            })
            .collect();
        assert_eq!(headers, vec!["Draw", "Color", "Thickness", "View", "Tools", "Help"]);
    }

    #[test]
    fn test_menu_entry_counts() {
        let menu = Menu::new((0, 0));
        let count = |group: &str| menu.entries().iter().filter(|e| e.group == group).count();
        assert_eq!(count("Draw"), 5);
        assert_eq!(count("Color"), 5);
        assert_eq!(count("Thickness"), 4);
        assert_eq!(count("View"), 3);
        assert_eq!(count("Tools"), 4);
        assert_eq!(count("Help"), 2);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut menu = Menu::new((3, 4));
        assert_eq!(menu.anchor(), (3, 4));
        assert_eq!(menu.selected(), 0);

        menu.up();
        assert_eq!(menu.selected(), menu.entries().len() - 1);
        assert_eq!(menu.selected_action(), Action::About);

        menu.down();
        assert_eq!(menu.selected(), 0);
        assert_eq!(
            menu.selected_action(),
            Action::Edit(Command::SelectTool(PrimitiveKind::DirectLine))
        );
    }

    #[test]
    fn test_entry_at_row_skips_headers() {
        let menu = Menu::new((0, 0));
        assert_eq!(menu.entry_at_row(0), None); // "Draw"
        assert_eq!(menu.entry_at_row(1), Some(0));
        assert_eq!(menu.entry_at_row(5), Some(4));
        assert_eq!(menu.entry_at_row(6), None); // "Color"
        assert_eq!(menu.entry_at_row(7), Some(5));
        assert_eq!(menu.entry_at_row(999), None);
    }

    #[test]
    fn test_row_of_counts_headers() {
        let menu = Menu::new((0, 0));
        assert_eq!(menu.row_of(0), Some(1));
        assert_eq!(menu.row_of(5), Some(7));
        let last = menu.entries().len() - 1;
        assert_eq!(menu.row_of(last), Some(menu.rows().len() - 1));
        assert_eq!(menu.row_of(999), None);
    }

    #[test]
    fn test_scroll_follows_selection() {
        let mut menu = Menu::new((0, 0));
        let rows = menu.rows().len();
        let visible = 19;

        for _ in 0..menu.entries().len() {
            menu.scroll_into_view(visible);
            let row = menu.row_of(menu.selected()).unwrap();
            assert!(row >= menu.scroll() && row < menu.scroll() + visible, "row {row}");
            assert!(menu.scroll() + visible <= rows);
            menu.down();
        }

        // Last entry sits on the bottom row.
        menu.up();
        menu.scroll_into_view(visible);
        assert_eq!(menu.selected_action(), Action::About);
        assert_eq!(menu.scroll(), rows - visible);

        // Wrapping to the top shows the "Draw" header again.
        menu.down();
        menu.scroll_into_view(visible);
        assert_eq!(menu.scroll(), 0);
    }

    #[test]
    fn test_scroll_moves_minimally() {
        let mut menu = Menu::new((0, 0));
        for _ in 0..menu.entries().len() - 1 {
            menu.down();
        }
        menu.scroll_into_view(10);
        let bottom = menu.scroll();

        // Moving up within the window keeps it still.
        menu.up();
        menu.scroll_into_view(10);
        assert_eq!(menu.scroll(), bottom);
    }

    #[test]
    fn test_scroll_single_row() {
        let mut menu = Menu::new((0, 0));
        menu.scroll_into_view(1);
        assert_eq!(menu.scroll(), 1);
        assert_eq!(menu.entry_at_row(menu.scroll()), Some(0));
    }

    #[test]
    fn test_active_entries_follow_session() {
        let menu = Menu::new((0, 0));
        let mut session = EditorSession::default();
        session.apply(Command::SelectColor(Color::BLUE));
        session.apply(Command::SelectThickness(3));

        let active: Vec<&str> = menu
            .entries()
            .iter()
            .filter(|e| e.is_active(&session))
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(active, vec!["1 Line (direct)", "Blue", "3 px", "Grid", "Axes"]);
    }

    #[test]
    fn test_label_width() {
        let menu = Menu::new((0, 0));
        assert_eq!(menu.label_width(), "3 Circle (incremental)".len());
    }
}
