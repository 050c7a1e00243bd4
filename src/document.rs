//! Figure document with linear undo/redo.
//!
//! The document holds the committed figures in paint order, the figures
//! removed by undo (most recent last), and at most one pending figure that
//! is still collecting anchors. A figure is owned by exactly one of these
//! places at a time; undo and redo move it between the two stacks.

use crate::color::Color;
use crate::geometry::Point;
use crate::render::primitives::{rasterize, PrimitiveKind};
use serde::{Deserialize, Serialize};

/// Drawing style stamped onto new figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Primitive to draw.
    pub kind: PrimitiveKind,
    /// Stroke color.
    pub color: Color,
    /// Footprint side in pixels (at least 1).
    pub thickness: u32,
}

impl Style {
    /// Thickness presets offered by the editor.
    pub const THICKNESS_PRESETS: [u32; 4] = [1, 2, 3, 5];

    /// Create a style, raising `thickness` to at least 1.
    #[must_use]
    pub fn new(kind: PrimitiveKind, color: Color, thickness: u32) -> Self {
        Self { kind, color, thickness: thickness.max(1) }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(PrimitiveKind::DirectLine, Color::BLACK, 1)
    }
}

/// A committed, immutable figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    kind: PrimitiveKind,
    anchors: [Point; 2],
    color: Color,
    thickness: u32,
}

impl Figure {
    /// Build a figure from a style and its two anchors.
    #[must_use]
    pub fn new(style: Style, first: Point, second: Point) -> Self {
        Self {
            kind: style.kind,
            anchors: [first, second],
            color: style.color,
            thickness: style.thickness.max(1),
        }
    }

    /// Primitive kind.
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// Start/centre anchor followed by the end/radius-defining anchor.
    #[must_use]
    pub fn anchors(&self) -> [Point; 2] {
        self.anchors
    }

    /// Stroke color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Footprint side in pixels.
    #[must_use]
    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    /// Pixel coordinates this figure covers (before footprint scaling).
    #[must_use]
    pub fn pixels(&self) -> Vec<Point> {
        rasterize(self.kind, self.anchors[0], self.anchors[1])
    }
}

/// The figure under construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingFigure {
    style: Style,
    anchor: Option<Point>,
}

impl PendingFigure {
    /// Style the figure will be committed with.
    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    /// The anchor captured so far, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Number of anchors captured so far (0 or 1).
    #[must_use]
    pub fn anchor_count(&self) -> usize {
        usize::from(self.anchor.is_some())
    }
}

/// Committed figures, the redo chain and the pending figure.
#[derive(Debug, Clone, Default)]
pub struct Document {
    committed: Vec<Figure>,
    undone: Vec<Figure>,
    pending: Option<PendingFigure>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed figures in paint order.
    #[must_use]
    pub fn figures(&self) -> &[Figure] {
        &self.committed
    }

    /// Figures removed by undo; the last one is restored first by redo.
    #[must_use]
    pub fn undone(&self) -> &[Figure] {
        &self.undone
    }

    /// The figure under construction, if drawing.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingFigure> {
        self.pending.as_ref()
    }

    /// Whether a figure is being drawn.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether [`undo`](Self::undo) would change anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Whether [`redo`](Self::redo) would change anything.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Start a figure with `style` unless one is already being drawn.
    ///
    /// A new pending figure starts with no anchors.
    pub fn begin_figure(&mut self, style: Style) {
        if self.pending.is_none() {
            self.pending = Some(PendingFigure { style, anchor: None });
        }
    }

    /// Restyle the pending figure (color and thickness changes made while
    /// drawing apply to the figure being drawn).
    pub fn restyle_pending(&mut self, style: Style) {
        if let Some(pending) = self.pending.as_mut() {
            pending.style = style;
        }
    }

    /// Append an anchor to the pending figure.
    ///
    /// The second anchor commits the figure: it is appended to the committed
    /// list, the redo chain is discarded and drawing ends. Returns the newly
    /// committed figure. Without a pending figure this is a no-op.
    pub fn add_anchor(&mut self, point: Point) -> Option<&Figure> {
        let pending = self.pending.as_mut()?;

        let Some(first) = pending.anchor else {
            pending.anchor = Some(point);
            return None;
        };

        let figure = Figure::new(pending.style, first, point);
        self.pending = None;
        self.commit(figure)
    }

    /// Abandon the pending figure, if any. Returns whether one existed.
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// The figure that committing `point` as the next anchor would produce.
    #[must_use]
    pub fn preview(&self, point: Point) -> Option<Figure> {
        let pending = self.pending.as_ref()?;
        pending.anchor.map(|first| Figure::new(pending.style, first, point))
    }

    fn commit(&mut self, figure: Figure) -> Option<&Figure> {
        self.committed.push(figure);
        if !self.undone.is_empty() {
            log::debug!("discarding {} redoable figures", self.undone.len());
            self.undone.clear();
        }
        log::debug!(
            "committed {:?} {} -> {} (figure #{})",
            figure.kind(),
            figure.anchors[0],
            figure.anchors[1],
            self.committed.len()
        );
        self.committed.last()
    }

    /// Move the last committed figure onto the redo chain.
    ///
    /// Returns `false` (and does nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(figure) => {
                self.undone.push(figure);
                log::debug!("undo: {} figures remain", self.committed.len());
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone figure back onto the committed list.
    ///
    /// Returns `false` (and does nothing) when the redo chain is empty.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(figure) => {
                self.committed.push(figure);
                log::debug!("redo: {} figures", self.committed.len());
                true
            }
            None => false,
        }
    }

    /// Remove every committed and undone figure and abort the pending one.
    pub fn clear(&mut self) {
        log::debug!(
            "clear: dropping {} committed, {} undone",
            self.committed.len(),
            self.undone.len()
        );
        self.committed.clear();
        self.undone.clear();
        self.pending = None;
    }
}
