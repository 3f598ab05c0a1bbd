//! Demo scene state.
//!
//! Each demo owns its state and changes only through `apply(command)`.
//! Rendering is a full redraw into a [`Framebuffer`]; nothing is cached
//! between frames.

mod circles;
mod clipping;
mod lines;

pub use circles::{
    CircleCommand, CircleScene, CircleSettings, BASE_RADIUS_RANGE, BASE_THICKNESS_RANGE,
    COUNT_RANGE, RADIUS_STEP_RANGE, THICKNESS_STEP_RANGE,
};
pub use clipping::{ClipCommand, ClipScene, ClipSettings, MAX_RANDOM_COUNT, STEP_RANGE};
pub use lines::{LineCommand, LineScene, LineSettings, Pick, MAX_WIDTH, MIN_WIDTH};

use std::fmt;
use std::str::FromStr;

use crate::color::Rgba;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::geometry::DisplayBounds;

/// The three demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "tui", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "tui", serde(rename_all = "lowercase"))]
pub enum Demo {
    /// Thick Bresenham lines.
    #[default]
    Lines,
    /// Concentric midpoint rings.
    Circles,
    /// Liang-Barsky clipping.
    Clipping,
}

impl Demo {
    /// All demos in tab order.
    pub const ALL: [Self; 3] = [Self::Lines, Self::Circles, Self::Clipping];

    /// Lowercase name, as accepted by [`Demo::from_str`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Circles => "circles",
            Self::Clipping => "clipping",
        }
    }

    /// Window-style title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Lines => "Bresenham + Thick Lines",
            Self::Circles => "Concentric Midpoint Circles",
            Self::Clipping => "Liang-Barsky Line Clipping",
        }
    }

    /// Key help for this demo.
    #[must_use]
    pub const fn help(self) -> &'static str {
        match self {
            Self::Lines => "Click: set P1,P2 | T: thick on/off | +/-: width | C: clear | R: random",
            Self::Circles => {
                "+/-: rings | ]/[: thickness step | ./,: radius step | F: fill | R: reset"
            }
            Self::Clipping => {
                "Left click: first point | Right click: add segment | W/A/S/D: move | \
                 Arrows: resize | R: random | C: clear"
            }
        }
    }

    /// Clear color of the demo's canvas.
    #[must_use]
    pub const fn background(self) -> Rgba {
        match self {
            Self::Lines => lines::BACKGROUND,
            Self::Circles => circles::BACKGROUND,
            Self::Clipping => clipping::BACKGROUND,
        }
    }

    /// The next demo in tab order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Lines => Self::Circles,
            Self::Circles => Self::Clipping,
            Self::Clipping => Self::Lines,
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lines" | "line" | "1" => Ok(Self::Lines),
            "circles" | "circle" | "2" => Ok(Self::Circles),
            "clipping" | "clip" | "3" => Ok(Self::Clipping),
            _ => Err(Error::UnknownDemo(s.to_string())),
        }
    }
}

/// Settings for all three scenes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "tui", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "tui", serde(default))]
pub struct SceneSettings {
    /// Line demo.
    pub lines: LineSettings,
    /// Circle demo.
    pub circles: CircleSettings,
    /// Clipping demo.
    pub clipping: ClipSettings,
}

/// All three scenes plus the active selection.
#[derive(Debug, Clone)]
pub struct Scenes {
    active: Demo,
    bounds: DisplayBounds,
    lines: LineScene,
    circles: CircleScene,
    clipping: ClipScene,
}

impl Scenes {
    /// Build every scene for the given display.
    #[must_use]
    pub fn new(settings: &SceneSettings, bounds: DisplayBounds) -> Self {
        Self {
            active: Demo::default(),
            bounds,
            lines: LineScene::new(&settings.lines, bounds),
            circles: CircleScene::new(&settings.circles, bounds),
            clipping: ClipScene::new(&settings.clipping, bounds),
        }
    }

    /// The active demo.
    #[must_use]
    pub fn active(&self) -> Demo {
        self.active
    }

    /// Switch to `demo`.
    pub fn select(&mut self, demo: Demo) {
        if demo != self.active {
            tracing::info!(from = %self.active, to = %demo, "switching demo");
            self.active = demo;
        }
    }

    /// Current display bounds.
    #[must_use]
    pub fn bounds(&self) -> DisplayBounds {
        self.bounds
    }

    /// Propagate a display size change to every scene.
    pub fn resize(&mut self, bounds: DisplayBounds) {
        if bounds == self.bounds {
            return;
        }
        tracing::debug!(width = bounds.width(), height = bounds.height(), "display resized");
        self.bounds = bounds;
        self.lines.apply(LineCommand::Resize(bounds));
        self.circles.apply(CircleCommand::Resize(bounds));
        self.clipping.apply(ClipCommand::Resize(bounds));
    }

    /// Line scene.
    #[must_use]
    pub fn lines(&self) -> &LineScene {
        &self.lines
    }

    /// Circle scene.
    #[must_use]
    pub fn circles(&self) -> &CircleScene {
        &self.circles
    }

    /// Clipping scene.
    #[must_use]
    pub fn clipping(&self) -> &ClipScene {
        &self.clipping
    }

    /// Apply a line command.
    pub fn apply_lines(&mut self, command: LineCommand) {
        self.lines.apply(command);
    }

    /// Apply a circle command.
    pub fn apply_circles(&mut self, command: CircleCommand) {
        self.circles.apply(command);
    }

    /// Apply a clipping command.
    pub fn apply_clipping(&mut self, command: ClipCommand) {
        self.clipping.apply(command);
    }

    /// Draw the active demo.
    pub fn render(&self, fb: &mut Framebuffer) {
        match self.active {
            Demo::Lines => self.lines.render(fb),
            Demo::Circles => self.circles.render(fb),
            Demo::Clipping => self.clipping.render(fb),
        }
    }

    /// HUD text for the active demo.
    #[must_use]
    pub fn status(&self) -> String {
        match self.active {
            Demo::Lines => self.lines.status(),
            Demo::Circles => self.circles.status(),
            Demo::Clipping => self.clipping.status(),
        }
    }
}
