//! Editing session state.
//!
//! An [`EditorSession`] is the explicit context an interaction front end
//! drives: the current style (tool, color, thickness), the document, the
//! view toggles and a repaint flag. Mutation and repaint are decoupled: every
//! state change raises the flag, and the front end calls
//! [`EditorSession::take_repaint`] to learn whether it should repaint.

use crate::color::Color;
use crate::document::{Document, Figure, Style};
use crate::geometry::Point;
use crate::render::primitives::PrimitiveKind;

/// Display toggles that affect painting but not the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Show the reference grid.
    pub show_grid: bool,
    /// Show the X/Y axes.
    pub show_axes: bool,
    /// Show the pointer's world coordinates.
    pub show_coords: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self { show_grid: true, show_axes: true, show_coords: false }
    }
}

/// Interaction events the session understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Primary button pressed at a world position.
    PointerDown(Point),
    /// Pointer moved to a world position.
    PointerMove(Point),
    /// Select the primitive for the next figure.
    SelectTool(PrimitiveKind),
    /// Select the stroke color.
    SelectColor(Color),
    /// Select the stroke thickness.
    SelectThickness(u32),
    /// Undo the last commit.
    Undo,
    /// Redo the last undo.
    Redo,
    /// Remove every figure.
    Clear,
    /// Abandon the figure being drawn.
    CancelFigure,
    /// Toggle the reference grid.
    ToggleGrid,
    /// Toggle the axes.
    ToggleAxes,
    /// Toggle the coordinate readout.
    ToggleCoords,
}

/// Per-session editor state.
#[derive(Debug, Clone)]
pub struct EditorSession {
    style: Style,
    document: Document,
    view: ViewOptions,
    cursor: Option<Point>,
    repaint: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(Style::default(), ViewOptions::default())
    }
}

impl EditorSession {
    /// Create a session with an empty document.
    #[must_use]
    pub fn new(style: Style, view: ViewOptions) -> Self {
        Self { style, document: Document::new(), view, cursor: None, repaint: true }
    }

    /// Current tool, color and thickness.
    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    /// The figure document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Current view toggles.
    #[must_use]
    pub fn view(&self) -> ViewOptions {
        self.view
    }

    /// Last known pointer position in world coordinates.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// The figure the next click would commit, if one is pending and the
    /// pointer position is known.
    #[must_use]
    pub fn preview(&self) -> Option<Figure> {
        self.cursor.and_then(|c| self.document.preview(c))
    }

    /// Whether a repaint has been requested since the last call, clearing
    /// the request.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint)
    }

    /// Request a repaint without changing state.
    pub fn request_repaint(&mut self) {
        self.repaint = true;
    }

    /// Apply one interaction event. Returns whether anything changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let changed = match command {
            Command::PointerDown(p) => {
                self.pointer_down(p);
                true
            }
            Command::PointerMove(p) => self.pointer_move(p),
            Command::SelectTool(kind) => self.select_tool(kind),
            Command::SelectColor(color) => self.select_color(color),
            Command::SelectThickness(n) => self.select_thickness(n),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Clear => {
                self.clear();
                true
            }
            Command::CancelFigure => self.document.cancel_pending(),
            Command::ToggleGrid => {
                self.view.show_grid = !self.view.show_grid;
                true
            }
            Command::ToggleAxes => {
                self.view.show_axes = !self.view.show_axes;
                true
            }
            Command::ToggleCoords => {
                self.view.show_coords = !self.view.show_coords;
                true
            }
        };
        self.repaint |= changed;
        changed
    }

    /// Capture an anchor, starting a figure first if none is pending.
    ///
    /// Returns the committed figure when this anchor completed one.
    pub fn pointer_down(&mut self, p: Point) -> Option<Figure> {
        self.repaint = true;
        self.document.begin_figure(self.style);
        self.document.add_anchor(p).copied()
    }

    /// Track the pointer. Only requests a repaint when it matters (preview
    /// or coordinate readout).
    pub fn pointer_move(&mut self, p: Point) -> bool {
        if self.cursor == Some(p) {
            return false;
        }
        self.cursor = Some(p);
        let visible = self.view.show_coords || self.document.pending().is_some();
        self.repaint |= visible;
        visible
    }

    /// Switch tools. Aborts any figure in progress.
    pub fn select_tool(&mut self, kind: PrimitiveKind) -> bool {
        let aborted = self.document.cancel_pending();
        let changed = self.style.kind != kind;
        self.style.kind = kind;
        if changed {
            log::debug!("tool: {kind}");
        }
        self.repaint |= changed || aborted;
        changed || aborted
    }

    /// Change the stroke color for new figures and the pending one.
    pub fn select_color(&mut self, color: Color) -> bool {
        if self.style.color == color {
            return false;
        }
        self.style.color = color;
        self.document.restyle_pending(self.style);
        self.repaint = true;
        true
    }

    /// Change the stroke thickness (raised to at least 1) for new figures
    /// and the pending one.
    pub fn select_thickness(&mut self, thickness: u32) -> bool {
        let thickness = thickness.max(1);
        if self.style.thickness == thickness {
            return false;
        }
        self.style.thickness = thickness;
        self.document.restyle_pending(self.style);
        self.repaint = true;
        true
    }

    /// Undo the last commit. No-op when nothing is committed.
    pub fn undo(&mut self) -> bool {
        let changed = self.document.undo();
        self.repaint |= changed;
        changed
    }

    /// Redo the last undo. No-op when the redo chain is empty.
    pub fn redo(&mut self) -> bool {
        let changed = self.document.redo();
        self.repaint |= changed;
        changed
    }

    /// Remove every figure, the redo chain and the pending figure.
    pub fn clear(&mut self) {
        self.document.clear();
        self.repaint = true;
    }

    /// Cycle the color through the palette (`forward` or backward).
    pub fn cycle_color(&mut self, forward: bool) -> bool {
        let len = Color::PALETTE.len();
        let next = match self.style.color.palette_index() {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.select_color(Color::PALETTE[next].1)
    }

    /// Step the thickness through [`Style::THICKNESS_PRESETS`].
    pub fn cycle_thickness(&mut self, forward: bool) -> bool {
        let presets = Style::THICKNESS_PRESETS;
        let current = self.style.thickness;
        let next = if forward {
            presets.iter().copied().find(|&t| t > current).unwrap_or(presets[presets.len() - 1])
        } else {
            presets.iter().rev().copied().find(|&t| t < current).unwrap_or(presets[0])
        };
        self.select_thickness(next)
    }
}
