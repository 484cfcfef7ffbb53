//! Terminal front end: frame pacing, input handling and overlays.

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect, Size},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
};
use tracing::info;
use whirl_background::BackgroundState;
use whirl_config::Config;
use whirl_core::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Cursor, Dimensions, ShapeKind};

use crate::panel::{self, PanelAction, PanelLayout};

/// Objects added or removed per count key press.
const COUNT_STEP: usize = 10;

/// Pixels added or removed per size key press.
const SIZE_STEP: f64 = 1.0;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The animated field.
    background: BackgroundState,
    /// Is the control panel shown?
    show_menu: bool,
    /// Text drawn in the middle of the safe area.
    headline: String,
    /// Time between frames.
    frame_interval: Duration,
    /// Terminal area at the last draw.
    screen: Rect,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of `size` cells.
    pub fn new(config: &Config, size: Size) -> Self {
        let dimensions = Dimensions::from_cells(size.width, size.height);
        Self {
            running: false,
            background: BackgroundState::new(config.field_settings(), dimensions, config.seed),
            show_menu: config.show_menu,
            headline: config.headline.clone(),
            frame_interval: Duration::from_secs(1) / config.fps.max(1),
            screen: Rect::new(0, 0, size.width, size.height),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.background.start();
        while self.running {
            let next_frame = Instant::now() + self.frame_interval;
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(next_frame)?;
        }
        info!(frames = self.background.frames(), "quit");
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area != self.screen {
            self.on_resize(area.width, area.height);
        }

        self.background.render(frame, area);
        self.render_headline(frame, area);

        let [_, help_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        let help = Line::from(vec![
            "q".bold().fg(Color::White),
            " quit  ".dark_gray(),
            "m".bold().fg(Color::White),
            " menu  ".dark_gray(),
            "1-3".bold().fg(Color::White),
            " shape  ".dark_gray(),
            "-/+".bold().fg(Color::White),
            " count  ".dark_gray(),
            "[/]".bold().fg(Color::White),
            " size".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, help_area);

        if self.show_menu {
            panel::render(frame, &PanelLayout::new(area), &self.background);
        }
    }

    /// Headline centered in the safe area.
    fn render_headline(&self, frame: &mut Frame, area: Rect) {
        if self.headline.is_empty() {
            return;
        }
        let safe_area = self.background.safe_area();
        let cells = Rect::new(
            (safe_area.x / CELL_WIDTH_PX) as u16,
            (safe_area.y / CELL_HEIGHT_PX) as u16,
            (safe_area.width / CELL_WIDTH_PX) as u16,
            (safe_area.height / CELL_HEIGHT_PX) as u16,
        )
        .intersection(area);
        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(cells);
        frame.render_widget(
            Paragraph::new(self.headline.as_str())
                .centered()
                .style(Style::new().fg(Color::White).bold()),
            row,
        );
    }

    /// Reads the crossterm events until the next frame is due.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(width, height) => self.on_resize(width, height),
                Event::FocusLost => self.background.on_pointer_leave(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('m')) => self.toggle_menu(),
            (_, KeyCode::Char('1') | KeyCode::Char('l')) => self.set_shape(ShapeKind::Line),
            (_, KeyCode::Char('2') | KeyCode::Char('t')) => self.set_shape(ShapeKind::Triangle),
            (_, KeyCode::Char('3') | KeyCode::Char('s')) => self.set_shape(ShapeKind::Square),
            (_, KeyCode::Tab) => self.set_shape(self.background.shape().next()),
            (_, KeyCode::Char('+') | KeyCode::Char('=')) => {
                self.background
                    .set_count(self.background.count().saturating_add(COUNT_STEP));
            }
            (_, KeyCode::Char('-')) => {
                self.background
                    .set_count(self.background.count().saturating_sub(COUNT_STEP));
            }
            (_, KeyCode::Char(']')) => self.background.set_size(self.background.size() + SIZE_STEP),
            (_, KeyCode::Char('[')) => self.background.set_size(self.background.size() - SIZE_STEP),
            _ => {}
        }
    }

    /// Handles mouse movement and clicks on the control panel.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let over_panel = self.show_menu && PanelLayout::new(self.screen).contains(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
                if over_panel =>
            {
                self.background.on_pointer_leave();
                if let Some(action) = PanelLayout::new(self.screen).hit(mouse.column, mouse.row) {
                    self.apply(action, mouse.kind);
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if over_panel {
                    self.background.on_pointer_leave();
                } else {
                    let (x, y) = Cursor::cell_center(mouse.column, mouse.row);
                    self.background.on_pointer_move(x, y);
                }
            }
            _ => {}
        }
    }

    /// Apply a panel action. Dragging moves sliders but never presses buttons.
    fn apply(&mut self, action: PanelAction, kind: MouseEventKind) {
        match action {
            PanelAction::SetCount(count) => self.background.set_count(count),
            PanelAction::SetSize(size) => self.background.set_size(size),
            PanelAction::SetShape(shape) if kind == MouseEventKind::Down(MouseButton::Left) => {
                self.set_shape(shape)
            }
            PanelAction::SetShape(_) | PanelAction::Nothing => {}
        }
    }

    fn on_resize(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
        let dimensions = Dimensions::from_cells(width, height);
        if dimensions != self.background.dimensions() {
            self.background.on_resize(dimensions);
        }
    }

    fn set_shape(&mut self, shape: ShapeKind) {
        self.background.set_shape(shape);
    }

    /// Show or hide the control panel.
    fn toggle_menu(&mut self) {
        self.show_menu = !self.show_menu;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
