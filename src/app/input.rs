//! Input handling: keys and mouse clicks to actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::canvas::Viewport;
use crate::geometry::Edge;
use crate::scene::{CircleCommand, ClipCommand, Demo, LineCommand};

/// Input action resulting from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Toggle help.
    Help,
    /// Cycle to the next demo.
    NextDemo,
    /// Jump to a demo.
    Select(Demo),
    /// Line demo command.
    Lines(LineCommand),
    /// Circle demo command.
    Circles(CircleCommand),
    /// Clipping demo command.
    Clipping(ClipCommand),
    /// No action.
    None,
}

/// Maps input events to actions for the active demo.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Accept mouse clicks.
    pub mouse: bool,
}

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new(mouse: bool) -> Self {
        Self { mouse }
    }

    /// Handles a key event and returns the corresponding action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent, demo: Demo) -> Action {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            match event.code {
                KeyCode::Char('c' | 'q') => return Action::Quit,
                _ => {}
            }
        }

        match event.code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') | KeyCode::F(1) => Action::Help,
            KeyCode::Tab => Action::NextDemo,
            KeyCode::Char('1') => Action::Select(Demo::Lines),
            KeyCode::Char('2') => Action::Select(Demo::Circles),
            KeyCode::Char('3') => Action::Select(Demo::Clipping),
            code => match demo {
                Demo::Lines => Self::lines_key(code),
                Demo::Circles => Self::circles_key(code),
                Demo::Clipping => Self::clipping_key(code),
            },
        }
    }

    fn lines_key(code: KeyCode) -> Action {
        let command = match code {
            KeyCode::Char('t' | 'T') => LineCommand::ToggleThick,
            KeyCode::Char('+' | '=') => LineCommand::Widen,
            KeyCode::Char('-' | '_') => LineCommand::Narrow,
            KeyCode::Char('c' | 'C') => LineCommand::Clear,
            KeyCode::Char('r' | 'R') => LineCommand::Randomize,
            _ => return Action::None,
        };
        Action::Lines(command)
    }

    fn circles_key(code: KeyCode) -> Action {
        let command = match code {
            KeyCode::Char('+' | '=') => CircleCommand::MoreRings,
            KeyCode::Char('-' | '_') => CircleCommand::FewerRings,
            KeyCode::Char(']') => CircleCommand::ThickerStep,
            KeyCode::Char('[') => CircleCommand::ThinnerStep,
            KeyCode::Char('.') => CircleCommand::WiderStep,
            KeyCode::Char(',') => CircleCommand::NarrowerStep,
            KeyCode::Char('f' | 'F') => CircleCommand::ToggleFill,
            KeyCode::Char('r' | 'R') => CircleCommand::Reset,
            _ => return Action::None,
        };
        Action::Circles(command)
    }

    fn clipping_key(code: KeyCode) -> Action {
        let command = match code {
            KeyCode::Char('w' | 'W') => ClipCommand::Move(0, 1),
            KeyCode::Char('s' | 'S') => ClipCommand::Move(0, -1),
            KeyCode::Char('a' | 'A') => ClipCommand::Move(-1, 0),
            KeyCode::Char('d' | 'D') => ClipCommand::Move(1, 0),
            KeyCode::Left => ClipCommand::Grow(Edge::Left),
            KeyCode::Right => ClipCommand::Grow(Edge::Right),
            KeyCode::Down => ClipCommand::Grow(Edge::Bottom),
            KeyCode::Up => ClipCommand::Grow(Edge::Top),
            KeyCode::Char('r' | 'R') => ClipCommand::Randomize,
            KeyCode::Char('c' | 'C') => ClipCommand::Clear,
            _ => return Action::None,
        };
        Action::Clipping(command)
    }

    /// Handles a mouse event and returns the corresponding action.
    ///
    /// Only button presses inside the canvas count.
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent, viewport: &Viewport, demo: Demo) -> Action {
        if !self.mouse {
            return Action::None;
        }
        let MouseEventKind::Down(button) = event.kind else {
            return Action::None;
        };
        let Some(p) = viewport.to_scene(event.column, event.row) else {
            return Action::None;
        };

        match (demo, button) {
            (Demo::Lines, MouseButton::Left) => Action::Lines(LineCommand::Pick(p)),
            (Demo::Clipping, MouseButton::Left) => Action::Clipping(ClipCommand::PickFirst(p)),
            (Demo::Clipping, MouseButton::Right) => Action::Clipping(ClipCommand::PickSecond(p)),
            _ => Action::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(true)
    }
}
