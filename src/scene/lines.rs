//! Thick-line demo: pick two endpoints, draw a Bresenham line through a
//! disk brush.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{DisplayBounds, Point, Segment, Span};
use crate::render::{draw_line, Brush, Paint, PixelSink};

/// Smallest brush width.
pub const MIN_WIDTH: i32 = 1;
/// Largest brush width.
pub const MAX_WIDTH: i32 = 99;

pub(super) const BACKGROUND: Rgba = Rgba::rgb(13, 15, 20);
const AXES: Rgba = Rgba::rgb(38, 38, 41);
const LINE: Rgba = Rgba::WHITE;
const ENDPOINT: Rgba = Rgba::rgb(51, 204, 255);

/// Tunables for [`LineScene`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "tui", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "tui", serde(default))]
pub struct LineSettings {
    /// Initial brush width, clamped to `1..=99`.
    pub width: i32,
    /// Start in thick mode.
    pub thick: bool,
    /// RNG seed for `Randomize`.
    pub seed: u64,
}

impl Default for LineSettings {
    fn default() -> Self {
        Self { width: 7, thick: true, seed: 20_251_024 }
    }
}

/// Endpoint picking progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// No endpoint picked, nothing drawn.
    Empty,
    /// First endpoint picked.
    First(Point),
    /// Both endpoints picked, line drawn.
    Complete(Point, Point),
}

/// Inputs accepted by [`LineScene::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCommand {
    /// Click at a scene point: first, then second endpoint, then reset.
    Pick(Point),
    /// Switch between thick and one-pixel drawing.
    ToggleThick,
    /// Brush width +1.
    Widen,
    /// Brush width -1.
    Narrow,
    /// Forget both endpoints.
    Clear,
    /// Random complete segment.
    Randomize,
    /// The display changed size.
    Resize(DisplayBounds),
}

/// State of the thick-line demo.
#[derive(Debug, Clone)]
pub struct LineScene {
    pick: Pick,
    thick: bool,
    width: i32,
    bounds: DisplayBounds,
    rng: StdRng,
}

impl LineScene {
    /// Create the scene with the default segment `(120,120)-(780,460)`.
    #[must_use]
    pub fn new(settings: &LineSettings, bounds: DisplayBounds) -> Self {
        Self {
            pick: Pick::Complete(Point::new(120, 120), Point::new(780, 460)),
            thick: settings.thick,
            width: settings.width.clamp(MIN_WIDTH, MAX_WIDTH),
            bounds,
            rng: StdRng::seed_from_u64(settings.seed),
        }
    }

    /// Apply one input command.
    pub fn apply(&mut self, command: LineCommand) {
        match command {
            LineCommand::Pick(p) => {
                let p = p.clamped_to(self.bounds);
                self.pick = match self.pick {
                    Pick::Empty => Pick::First(p),
                    Pick::First(a) => Pick::Complete(a, p),
                    Pick::Complete(..) => Pick::Empty,
                };
            }
            LineCommand::ToggleThick => self.thick = !self.thick,
            LineCommand::Widen => self.width = (self.width + 1).min(MAX_WIDTH),
            LineCommand::Narrow => self.width = (self.width - 1).max(MIN_WIDTH),
            LineCommand::Clear => self.pick = Pick::Empty,
            LineCommand::Randomize => {
                let a = self.random_point();
                let b = self.random_point();
                self.pick = Pick::Complete(a, b);
            }
            LineCommand::Resize(bounds) => self.bounds = bounds,
        }
        tracing::debug!(?command, pick = ?self.pick, width = self.width, "line scene updated");
    }

    /// Endpoint picking progress.
    #[must_use]
    pub fn pick(&self) -> Pick {
        self.pick
    }

    /// The drawn segment, if both endpoints are set.
    #[must_use]
    pub fn segment(&self) -> Option<Segment> {
        match self.pick {
            Pick::Complete(a, b) => Some(Segment::new(a, b)),
            _ => None,
        }
    }

    /// Whether thick mode is on.
    #[must_use]
    pub fn is_thick(&self) -> bool {
        self.thick
    }

    /// Brush width setting.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Width actually used for drawing: 1 in thin mode.
    #[must_use]
    pub fn effective_width(&self) -> i32 {
        if self.thick {
            self.width
        } else {
            1
        }
    }

    /// Current display bounds.
    #[must_use]
    pub fn bounds(&self) -> DisplayBounds {
        self.bounds
    }

    /// Draw the scene.
    pub fn render(&self, fb: &mut Framebuffer) {
        fb.clear(BACKGROUND);

        let center = self.bounds.center();
        let mut paint = Paint::new(fb, AXES);
        paint.span(Span::new(center.y, 0, self.bounds.max_x()));
        for y in 0..=self.bounds.max_y() {
            paint.plot(Point::new(center.x, y));
        }

        paint.set_color(LINE);
        if let Some(segment) = self.segment() {
            draw_line(&mut paint, segment.a, segment.b, self.effective_width());

            paint.set_color(ENDPOINT);
            Brush::Square(3).stamp(segment.a, &mut paint);
            Brush::Square(3).stamp(segment.b, &mut paint);
        } else if let Pick::First(a) = self.pick {
            paint.set_color(ENDPOINT);
            Brush::Square(3).stamp(a, &mut paint);
        }
    }

    /// One-line HUD text.
    #[must_use]
    pub fn status(&self) -> String {
        let mode = if self.thick { "Thick" } else { "Thin" };
        let pick = match self.pick {
            Pick::Empty => "click to set P1".to_string(),
            Pick::First(a) => format!("P1=({},{}) click to set P2", a.x, a.y),
            Pick::Complete(a, b) => format!("P1=({},{}) P2=({},{})", a.x, a.y, b.x, b.y),
        };
        format!("W={} ({mode}) | {pick}", self.width)
    }

    fn random_point(&mut self) -> Point {
        Point::new(
            self.rng.gen_range(0..=self.bounds.max_x()),
            self.rng.gen_range(0..=self.bounds.max_y()),
        )
    }
}
