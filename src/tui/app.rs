//! Main application loop for the terminal editor.

use crate::config::Config;
use crate::document::Style;
use crate::error::Result;
use crate::output;
use crate::render::scene::Renderer;
use crate::session::{Command, EditorSession, ViewOptions};
use crate::tui::canvas_view::{CanvasMapping, CanvasView};
use crate::tui::input::{Action, InputHandler};
use crate::tui::menu::{Menu, MenuRow};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style as TermStyle};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::{Frame, Terminal};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

/// The terminal editor application.
pub struct App {
    session: EditorSession,
    renderer: Renderer,
    input: InputHandler,
    export_path: PathBuf,
    menu: Option<Menu>,
    show_help: bool,
    show_about: bool,
    status: String,
    /// Canvas area from the last layout; mouse cells map through it.
    canvas_area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas dimensions are invalid.
    pub fn new(config: &Config) -> Result<Self> {
        let canvas = &config.canvas;
        let renderer = Renderer::new(canvas.width, canvas.height, canvas.background, canvas.grid_size)?;
        let session = EditorSession::new(Style::from(&config.style), ViewOptions::from(&config.view));

        Ok(Self {
            session,
            renderer,
            input: InputHandler::new(),
            export_path: config.export.path.clone(),
            menu: None,
            show_help: false,
            show_about: false,
            status: String::from("Click twice to draw. Right click or 'm' for the menu, '?' for help."),
            canvas_area: Rect::default(),
            should_quit: false,
        })
    }

    /// Runs the application main loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup or rendering fails.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        stdout().execute(EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;

        log::info!(
            "editor started: {}x{} canvas, export to {}",
            self.renderer.framebuffer().width(),
            self.renderer.framebuffer().height(),
            self.export_path.display()
        );
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        stdout().execute(DisableMouseCapture)?;
        disable_raw_mode()?;
        stdout().execute(LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// The main event loop. One event is fully handled before the next is
    /// read.
    fn main_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let poll_timeout = Duration::from_millis(100);

        while !self.should_quit {
            self.repaint_if_needed();
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(poll_timeout)? {
                let action = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.input.handle_key(key),
                    Event::Mouse(mouse) => self.input.handle_mouse(mouse),
                    _ => Action::None,
                };
                self.handle_action(action);
            }
        }

        Ok(())
    }

    fn repaint_if_needed(&mut self) {
        if self.session.take_repaint() {
            self.renderer.paint(&self.session);
        }
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The editing session.
    #[must_use]
    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Current status line message.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles an input action.
    pub fn handle_action(&mut self, action: Action) {
        if self.menu.is_some() && self.handle_menu_action(action) {
            return;
        }
        if (self.show_help || self.show_about) && matches!(action, Action::Cancel) {
            self.show_help = false;
            self.show_about = false;
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Cancel => {
                if self.session.apply(Command::CancelFigure) {
                    self.status = "Figure cancelled".to_string();
                }
            }
            Action::Help => {
                self.show_about = false;
                self.show_help = !self.show_help;
            }
            Action::About => {
                self.show_help = false;
                self.show_about = !self.show_about;
            }
            Action::Menu => {
                let a = self.canvas_area;
                self.menu = Some(Menu::new((a.x + a.width / 2, a.y + a.height / 4)));
            }
            Action::ContextMenu { column, row } => self.menu = Some(Menu::new((column, row))),
            Action::Export => self.export(),
            Action::Edit(command) => self.edit(command),
            Action::CycleColor(forward) => {
                self.session.cycle_color(forward);
            }
            Action::CycleThickness(forward) => {
                self.session.cycle_thickness(forward);
            }
            Action::Click { column, row } => {
                if let Some(p) = self.mapping().cell_to_world(column, row) {
                    if let Some(figure) = self.session.pointer_down(p) {
                        self.status = format!("{} committed", figure.kind());
                    }
                }
            }
            Action::Hover { column, row } => {
                if let Some(p) = self.mapping().cell_to_world(column, row) {
                    self.session.apply(Command::PointerMove(p));
                }
            }
            Action::Up | Action::Down | Action::Select | Action::None => {}
        }
    }

    /// Menu-specific handling. Returns whether the action was consumed.
    fn handle_menu_action(&mut self, action: Action) -> bool {
        let Some(menu) = self.menu.as_mut() else {
            return false;
        };
        match action {
            Action::Up => menu.up(),
            Action::Down => menu.down(),
            Action::Cancel | Action::Menu => self.menu = None,
            Action::Select => {
                let chosen = menu.selected_action();
                self.menu = None;
                self.handle_action(chosen);
            }
            Action::Click { column, row } => {
                let rect = menu_rect(menu, self.canvas_area);
                menu.scroll_into_view(visible_rows(rect));
                let inside = column >= rect.x
                    && column < rect.x + rect.width
                    && row > rect.y
                    && row < rect.y + rect.height.saturating_sub(1);
                let chosen = inside
                    .then(|| menu.entry_at_row(menu.scroll() + usize::from(row - rect.y - 1)))
                    .flatten()
                    .and_then(|i| menu.entries().get(i))
                    .map(|e| e.action);
                self.menu = None;
                if let Some(chosen) = chosen {
                    self.handle_action(chosen);
                }
            }
            _ => return false,
        }
        true
    }

    fn edit(&mut self, command: Command) {
        let changed = self.session.apply(command);
        match command {
            Command::Undo if !changed => self.status = "Nothing to undo".to_string(),
            Command::Redo if !changed => self.status = "Nothing to redo".to_string(),
            Command::Clear => self.status = "Canvas cleared".to_string(),
            Command::SelectTool(kind) => self.status = format!("Tool: {kind}"),
            _ => {}
        }
    }

    /// Export the current frame to the configured path. Failures are
    /// reported and leave the document untouched.
    fn export(&mut self) {
        let fb = self.renderer.paint(&self.session);
        match output::export(fb, &self.export_path) {
            Ok(_) => self.status = format!("Exported to {}", self.export_path.display()),
            Err(e) => {
                log::error!("export to {} failed: {e}", self.export_path.display());
                self.status = format!("Export failed: {e}");
            }
        }
    }

    fn mapping(&self) -> CanvasMapping {
        let fb = self.renderer.framebuffer();
        CanvasMapping::new(self.canvas_area, fb.width(), fb.height())
    }

    /// Renders the application.
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.area());

        let block = Block::default()
            .title(" raster-cad ")
            .borders(Borders::ALL)
            .border_style(TermStyle::default().fg(Color::Cyan));
        self.canvas_area = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);

        let background = self.renderer.background().to_rgba();
        frame.render_widget(
            CanvasView::new(self.renderer.framebuffer(), background),
            self.canvas_area,
        );
        frame.render_widget(Paragraph::new(self.status_line()), chunks[1]);

        if let Some(menu) = self.menu.as_mut() {
            draw_menu(frame, menu, &self.session, self.canvas_area);
        }
        if self.show_help {
            draw_help_overlay(frame, frame.area());
        }
        if self.show_about {
            draw_about_overlay(frame, frame.area());
        }
    }

    fn status_line(&self) -> Line<'static> {
        let style = self.session.style();
        let doc = self.session.document();
        let mut spans = vec![
            Span::styled(
                format!(" {} ", style.kind.label()),
                TermStyle::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(format!(
                " {} | {} px | {} figures ",
                style.color.name(),
                style.thickness,
                doc.figures().len()
            )),
        ];
        if self.session.view().show_coords {
            if let Some(p) = self.session.cursor() {
                spans.push(Span::styled(format!("{p} "), TermStyle::default().fg(Color::Yellow)));
            }
        }
        spans.push(Span::styled(self.status.clone(), TermStyle::default().fg(Color::DarkGray)));
        Line::from(spans)
    }
}

/// Popup rectangle for the menu, kept inside `bounds`.
fn menu_rect(menu: &Menu, bounds: Rect) -> Rect {
    let width = (menu.label_width() as u16 + 6).min(bounds.width);
    let height = (menu.rows().len() as u16 + 2).min(bounds.height);
    let (ax, ay) = menu.anchor();
    let max_x = (bounds.x + bounds.width).saturating_sub(width);
    let max_y = (bounds.y + bounds.height).saturating_sub(height);
    Rect {
        x: ax.clamp(bounds.x, max_x.max(bounds.x)),
        y: ay.clamp(bounds.y, max_y.max(bounds.y)),
        width,
        height,
    }
}

/// List rows that fit inside the popup border.
fn visible_rows(rect: Rect) -> usize {
    usize::from(rect.height.saturating_sub(2))
}

fn draw_menu(f: &mut Frame, menu: &mut Menu, session: &EditorSession, bounds: Rect) {
    let area = menu_rect(menu, bounds);
    let visible = visible_rows(area);
    menu.scroll_into_view(visible);
    f.render_widget(Clear, area);

    let lines: Vec<Line> = menu
        .rows()
        .into_iter()
        .map(|row| match row {
            MenuRow::Header(h) => Line::from(Span::styled(
                h.to_string(),
                TermStyle::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            MenuRow::Entry(i) => {
                let entry = &menu.entries()[i];
                let marker = if entry.is_active(session) { "● " } else { "  " };
                let mut style = TermStyle::default();
                if i == menu.selected() {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::from(Span::styled(format!("{marker}{}", entry.label), style))
            }
        })
        .collect();

    let title = if lines.len() > visible {
        format!(" Menu {}/{} ", menu.selected() + 1, menu.entries().len())
    } else {
        " Menu ".to_string()
    };
    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(TermStyle::default().fg(Color::Yellow)),
        )
        .scroll((menu.scroll() as u16, 0));
    f.render_widget(widget, area);
}

fn popup(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let popup_area = popup(area, 52, 24);
    f.render_widget(Clear, popup_area);

    let bold = TermStyle::default().add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  Drawing:", bold)),
        Line::from("    left click        Place anchor (two per figure)"),
        Line::from("    1..5              Select tool"),
        Line::from("    [ / ]             Previous/next color"),
        Line::from("    - / +             Thinner/thicker"),
        Line::from("    Esc               Cancel figure / close"),
        Line::from(""),
        Line::from(Span::styled("  Document:", bold)),
        Line::from("    z, Ctrl+Z         Undo"),
        Line::from("    y, Ctrl+Y         Redo"),
        Line::from("    c                 Clear canvas"),
        Line::from("    s                 Export image"),
        Line::from(""),
        Line::from(Span::styled("  View:", bold)),
        Line::from("    g                 Toggle grid"),
        Line::from("    e                 Toggle axes"),
        Line::from("    p                 Toggle coordinates"),
        Line::from(""),
        Line::from(Span::styled("  General:", bold)),
        Line::from("    m, right click    Menu"),
        Line::from("    ?, F1             Toggle help"),
        Line::from("    q                 Quit"),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(TermStyle::default().fg(Color::Yellow)),
    );
    f.render_widget(help, popup_area);
}

fn draw_about_overlay(f: &mut Frame, area: Rect) {
    let popup_area = popup(area, 48, 8);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  raster-cad {}", env!("CARGO_PKG_VERSION")),
            TermStyle::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from("  Lines, circles and ellipses drawn with"),
        Line::from("  classic scan-conversion algorithms."),
    ];
    let about = Paragraph::new(text).block(
        Block::default()
            .title(" About ")
            .borders(Borders::ALL)
            .border_style(TermStyle::default().fg(Color::Yellow)),
    );
    f.render_widget(about, popup_area);
}
