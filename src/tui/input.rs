//! Input handling for the terminal editor.
//!
//! Keys and mouse events become [`Action`]s. Mouse positions stay in
//! terminal cells; the app maps them to world coordinates because only it
//! knows where the canvas is laid out.

use crate::render::primitives::PrimitiveKind;
use crate::session::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Input action resulting from user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Cancel the pending figure or close an overlay.
    Cancel,
    /// Toggle help.
    Help,
    /// Show the about box.
    About,
    /// Open the context menu at the centre of the screen.
    Menu,
    /// Navigate up.
    Up,
    /// Navigate down.
    Down,
    /// Select/confirm.
    Select,
    /// Export the current frame.
    Export,
    /// Forward a command to the editing session.
    Edit(Command),
    /// Step the palette color (`true` = forward).
    CycleColor(bool),
    /// Step the thickness presets (`true` = thicker).
    CycleThickness(bool),
    /// Primary click at a terminal cell.
    Click {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// Pointer moved over a terminal cell.
    Hover {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// Secondary click: open the context menu at a cell.
    ContextMenu {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// No action.
    None,
}

/// Input handler for the editor's keyboard shortcuts and mouse.
#[derive(Debug, Clone, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Handles a key event and returns the corresponding action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> Action {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'q') => Action::Quit,
                KeyCode::Char('z') => Action::Edit(Command::Undo),
                KeyCode::Char('y') => Action::Edit(Command::Redo),
                _ => Action::None,
            };
        }

        match event.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Esc => Action::Cancel,
            KeyCode::Char('?') | KeyCode::F(1) => Action::Help,
            KeyCode::Char('m') => Action::Menu,

            // Menu navigation
            KeyCode::Up => Action::Up,
            KeyCode::Down => Action::Down,
            KeyCode::Enter => Action::Select,

            // Tools
            KeyCode::Char(c @ '1'..='5') => c
                .to_digit(10)
                .and_then(PrimitiveKind::from_number)
                .map_or(Action::None, |kind| Action::Edit(Command::SelectTool(kind))),

            // Style
            KeyCode::Char(']') => Action::CycleColor(true),
            KeyCode::Char('[') => Action::CycleColor(false),
            KeyCode::Char('+' | '=') => Action::CycleThickness(true),
            KeyCode::Char('-') => Action::CycleThickness(false),

            // View
            KeyCode::Char('g') => Action::Edit(Command::ToggleGrid),
            KeyCode::Char('e') => Action::Edit(Command::ToggleAxes),
            KeyCode::Char('p') => Action::Edit(Command::ToggleCoords),

            // Document
            KeyCode::Char('c') => Action::Edit(Command::Clear),
            KeyCode::Char('z') => Action::Edit(Command::Undo),
            KeyCode::Char('y') => Action::Edit(Command::Redo),
            KeyCode::Char('s') => Action::Export,

            _ => Action::None,
        }
    }

    /// Handles a mouse event and returns the corresponding action.
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> Action {
        let (column, row) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Action::Click { column, row },
            MouseEventKind::Down(MouseButton::Right) => Action::ContextMenu { column, row },
            MouseEventKind::Moved | MouseEventKind::Drag(_) => Action::Hover { column, row },
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent { kind, column, row, modifiers: KeyModifiers::empty() }
    }

    #[test]
    fn test_quit_actions() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key(key_event(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handler.handle_key(key_event_ctrl(KeyCode::Char('c'))), Action::Quit);
        assert_eq!(handler.handle_key(key_event(KeyCode::Esc)), Action::Cancel);
    }

    #[test]
    fn test_tool_keys() {
        let handler = InputHandler::new();

        for (c, kind) in ['1', '2', '3', '4', '5'].into_iter().zip(PrimitiveKind::ALL) {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                Action::Edit(Command::SelectTool(kind))
            );
        }
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('6'))), Action::None);
    }

    #[test]
    fn test_document_shortcuts() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key(key_event(KeyCode::Char('z'))), Action::Edit(Command::Undo));
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('y'))), Action::Edit(Command::Redo));
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('z'))),
            Action::Edit(Command::Undo)
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('y'))),
            Action::Edit(Command::Redo)
        );
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('c'))), Action::Edit(Command::Clear));
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('s'))), Action::Export);
    }

    #[test]
    fn test_view_shortcuts() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('g'))),
            Action::Edit(Command::ToggleGrid)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('e'))),
            Action::Edit(Command::ToggleAxes)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('p'))),
            Action::Edit(Command::ToggleCoords)
        );
    }

    #[test]
    fn test_style_cycling() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key(key_event(KeyCode::Char(']'))), Action::CycleColor(true));
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('['))), Action::CycleColor(false));
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('+'))), Action::CycleThickness(true));
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('='))), Action::CycleThickness(true));
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('-'))), Action::CycleThickness(false));
    }

    #[test]
    fn test_overlay_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key(key_event(KeyCode::Char('?'))), Action::Help);
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), Action::Help);
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('m'))), Action::Menu);
        assert_eq!(handler.handle_key(key_event(KeyCode::Up)), Action::Up);
        assert_eq!(handler.handle_key(key_event(KeyCode::Down)), Action::Down);
        assert_eq!(handler.handle_key(key_event(KeyCode::Enter)), Action::Select);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('x'))), Action::None);
        assert_eq!(handler.handle_key(key_event_ctrl(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_mouse_buttons() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_mouse(mouse_event(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            Action::Click { column: 4, row: 7 }
        );
        assert_eq!(
            handler.handle_mouse(mouse_event(MouseEventKind::Down(MouseButton::Right), 1, 2)),
            Action::ContextMenu { column: 1, row: 2 }
        );
        assert_eq!(
            handler.handle_mouse(mouse_event(MouseEventKind::Moved, 9, 9)),
            Action::Hover { column: 9, row: 9 }
        );
        assert_eq!(
            handler.handle_mouse(mouse_event(MouseEventKind::Up(MouseButton::Left), 4, 7)),
            Action::None
        );
        assert_eq!(handler.handle_mouse(mouse_event(MouseEventKind::ScrollUp, 0, 0)), Action::None);
    }
}
