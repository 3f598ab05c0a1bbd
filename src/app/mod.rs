//! Interactive terminal front end.
//!
//! A header with the demo title and status, the framebuffer canvas, and a
//! footer with key help. Scenes are resized to whatever the canvas area
//! holds, so the terminal size decides the scene size.

mod canvas;
mod input;

pub use canvas::{FramebufferView, Viewport};
pub use input::{Action, InputHandler};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::{Frame, Terminal};
use std::io::{self, stdout};

use crate::config::Config;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::scene::{Demo, Scenes};

/// Framebuffer pixels per half-cell sample.
pub const PIXELS_PER_SAMPLE: u32 = 6;

const GLOBAL_HELP: [(&str, &str); 4] = [
    ("Tab", "next demo"),
    ("1/2/3", "lines / circles / clipping"),
    ("?", "toggle this help"),
    ("q/Esc", "quit"),
];

/// The interactive application.
pub struct App {
    config: Config,
    scenes: Scenes,
    input: InputHandler,
    framebuffer: Option<Framebuffer>,
    viewport: Viewport,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut scenes = Scenes::new(&config.scene_settings(), config.bounds());
        scenes.select(config.global.demo);
        let input = InputHandler::new(config.global.mouse);

        Self {
            config,
            scenes,
            input,
            framebuffer: None,
            viewport: Viewport::new(Rect::default(), PIXELS_PER_SAMPLE),
            show_help: false,
            should_quit: false,
        }
    }

    /// The scenes driven by this app.
    #[must_use]
    pub fn scenes(&self) -> &Scenes {
        &self.scenes
    }

    /// Whether a quit was requested.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs the application main loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup or rendering fails.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        if self.config.global.mouse {
            stdout().execute(EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        tracing::info!(demo = %self.scenes.active(), "terminal ready");

        let result = self.main_loop(&mut terminal);

        if self.config.global.mouse {
            stdout().execute(DisableMouseCapture)?;
        }
        disable_raw_mode()?;
        stdout().execute(LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        if let Err(e) = &result {
            tracing::error!(error = %e, "main loop failed");
        }
        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let poll_timeout = self.config.tick();

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(poll_timeout)? {
                let action = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.input.handle_key(key, self.scenes.active())
                    }
                    Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                        self.input.handle_mouse(mouse, &self.viewport, self.scenes.active())
                    }
                    // The next draw picks up the new size.
                    _ => Action::None,
                };
                self.handle_action(action);
            }

            if self.should_quit {
                break;
            }
        }

        tracing::info!("quit requested");
        Ok(())
    }

    /// Applies an input action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = !self.show_help,
            Action::NextDemo => self.scenes.select(self.scenes.active().next()),
            Action::Select(demo) => self.scenes.select(demo),
            Action::Lines(command) if self.scenes.active() == Demo::Lines => {
                self.scenes.apply_lines(command);
            }
            Action::Circles(command) if self.scenes.active() == Demo::Circles => {
                self.scenes.apply_circles(command);
            }
            Action::Clipping(command) if self.scenes.active() == Demo::Clipping => {
                self.scenes.apply_clipping(command);
            }
            _ => {}
        }
    }

    /// Lays out the canvas inside `area`, resizing scenes and the
    /// framebuffer to match. Returns the canvas rectangle.
    fn fit_canvas(&mut self, area: Rect) -> Rect {
        let chunks = layout(area);
        let canvas = chunks[1];
        let viewport = Viewport::new(canvas, PIXELS_PER_SAMPLE);
        let bounds = viewport.bounds();
        self.viewport = viewport;
        self.scenes.resize(bounds);

        if !matches!(&self.framebuffer, Some(fb) if fb.bounds() == bounds) {
            match Framebuffer::for_bounds(bounds) {
                Ok(fb) => self.framebuffer = Some(fb),
                Err(e) => {
                    tracing::warn!(error = %e, "cannot allocate canvas");
                    self.framebuffer = None;
                }
            }
        }
        canvas
    }

    fn render(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let canvas = self.fit_canvas(area);
        let chunks = layout(area);
        let demo = self.scenes.active();

        let header = Line::from(vec![
            Span::styled(
                format!(" {} ", demo.title()),
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(self.scenes.status(), Style::default().fg(Color::White)),
        ]);
        frame.render_widget(Paragraph::new(header), chunks[0]);

        if let Some(fb) = self.framebuffer.as_mut() {
            self.scenes.render(fb);
            frame.render_widget(FramebufferView::new(fb, demo.background()), canvas);
        }

        let footer = Line::from(vec![
            Span::styled(demo.help(), Style::default().fg(Color::Gray)),
            Span::styled("  | Tab: next demo | ?: help | q: quit", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(footer), chunks[2]);

        if self.show_help {
            render_help(frame, demo, area);
        }
    }
}

fn layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
        .split(area)
}

fn render_help(frame: &mut Frame<'_>, demo: Demo, area: Rect) {
    let mut lines: Vec<Line<'_>> = GLOBAL_HELP
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{key:>8} "), Style::default().fg(Color::Yellow)),
                Span::raw(*what),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    for part in demo.help().split(" | ") {
        lines.push(Line::raw(format!("  {part}")));
    }

    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
    let height = lines.len() as u16 + 2;
    let popup = centered(area, width, height);

    let block = Block::default()
        .title(format!(" {} ", demo.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{CircleCommand, LineCommand};
    use ratatui::backend::TestBackend;

    #[test]
    fn test_actions_route_to_active_demo() {
        let mut app = App::new(Config::default());
        assert_eq!(app.scenes().active(), Demo::Lines);

        app.handle_action(Action::Circles(CircleCommand::MoreRings));
        assert_eq!(app.scenes().circles().count(), 18);

        app.handle_action(Action::NextDemo);
        assert_eq!(app.scenes().active(), Demo::Circles);
        app.handle_action(Action::Circles(CircleCommand::MoreRings));
        assert_eq!(app.scenes().circles().count(), 19);

        app.handle_action(Action::Select(Demo::Lines));
        app.handle_action(Action::Lines(LineCommand::Clear));
        assert!(app.scenes().lines().segment().is_none());

        app.handle_action(Action::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_start_demo_from_config() {
        let mut config = Config::default();
        config.global.demo = Demo::Clipping;
        assert_eq!(App::new(config).scenes().active(), Demo::Clipping);
    }

    #[test]
    fn test_render_fits_scene_to_terminal() {
        let mut app = App::new(Config::default());
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        // Header and footer take one row each.
        let expected = Viewport::new(Rect::new(0, 1, 40, 10), PIXELS_PER_SAMPLE).bounds();
        assert_eq!(app.scenes().bounds(), expected);

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 1)].symbol(), "▀");
    }

    #[test]
    fn test_help_overlay_toggles() {
        let mut app = App::new(Config::default());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        app.handle_action(Action::Help);
        terminal.draw(|frame| app.render(frame)).unwrap();
        let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("toggle this help"));

        app.handle_action(Action::Help);
        terminal.draw(|frame| app.render(frame)).unwrap();
        let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(!text.contains("toggle this help"));
    }

    #[test]
    fn test_centered_popup_fits() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 50, 50), area);
    }
}
