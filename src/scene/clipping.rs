//! Line-clipping demo: user and random segments against a movable window.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{ClipRect, DisplayBounds, Edge, Point, Segment};
use crate::render::{clip_all, draw_line, Brush, ClippedSegment, Paint};

pub(super) const BACKGROUND: Rgba = Rgba::rgb(18, 20, 28);
const WINDOW: Rgba = Rgba::rgb(255, 210, 60);
const SEGMENT: Rgba = Rgba::rgb(140, 140, 150);
const VISIBLE: Rgba = Rgba::rgb(90, 240, 255);
const PENDING: Rgba = Rgba::WHITE;

/// Move and grow step range, in pixels.
pub const STEP_RANGE: (i32, i32) = (1, 1000);
/// Most segments `Randomize` may generate.
pub const MAX_RANDOM_COUNT: usize = 10_000;

/// Tunables for [`ClipScene`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "tui", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "tui", serde(default))]
pub struct ClipSettings {
    /// Initial window as `[xmin, ymin, xmax, ymax]`.
    pub rect: [i32; 4],
    /// Pixels per move command.
    pub move_step: i32,
    /// Pixels per grow command.
    pub grow_step: i32,
    /// Segments generated by `Randomize`.
    pub random_count: usize,
    /// RNG seed for `Randomize`.
    pub seed: u64,
}

impl Default for ClipSettings {
    fn default() -> Self {
        Self { rect: [200, 150, 700, 450], move_step: 10, grow_step: 8, random_count: 20, seed: 7 }
    }
}

/// Inputs accepted by [`ClipScene::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipCommand {
    /// Remember the first endpoint of a new segment.
    PickFirst(Point),
    /// Add a segment if a first endpoint is pending.
    PickSecond(Point),
    /// Move the window by `(dx, dy)` move steps.
    Move(i32, i32),
    /// Push one window edge outward by one grow step.
    Grow(Edge),
    /// Replace all segments with random ones.
    Randomize,
    /// Remove all segments.
    Clear,
    /// The display changed size.
    Resize(DisplayBounds),
}

/// State of the clipping demo.
#[derive(Debug, Clone)]
pub struct ClipScene {
    segments: Vec<Segment>,
    rect: ClipRect,
    pending: Option<Point>,
    bounds: DisplayBounds,
    move_step: i32,
    grow_step: i32,
    random_count: usize,
    rng: StdRng,
}

impl ClipScene {
    /// Create the scene with ten example segments. Steps are clamped to
    /// [`STEP_RANGE`] and the random count to [`MAX_RANDOM_COUNT`].
    #[must_use]
    pub fn new(settings: &ClipSettings, bounds: DisplayBounds) -> Self {
        let [xmin, ymin, xmax, ymax] = settings.rect;
        Self {
            segments: example_segments(),
            rect: ClipRect::new(xmin, ymin, xmax, ymax).clamped_to(bounds),
            pending: None,
            bounds,
            move_step: settings.move_step.clamp(STEP_RANGE.0, STEP_RANGE.1),
            grow_step: settings.grow_step.clamp(STEP_RANGE.0, STEP_RANGE.1),
            random_count: settings.random_count.min(MAX_RANDOM_COUNT),
            rng: StdRng::seed_from_u64(settings.seed),
        }
    }

    /// Apply one input command. The window stays normalized and on-screen.
    pub fn apply(&mut self, command: ClipCommand) {
        match command {
            ClipCommand::PickFirst(p) => self.pending = Some(p.clamped_to(self.bounds)),
            ClipCommand::PickSecond(p) => {
                if let Some(a) = self.pending.take() {
                    self.segments.push(Segment::new(a, p.clamped_to(self.bounds)));
                }
            }
            ClipCommand::Move(dx, dy) => {
                let step = self.move_step;
                self.rect = self.rect.translated(dx.saturating_mul(step), dy.saturating_mul(step));
            }
            ClipCommand::Grow(edge) => self.rect = self.rect.grown(edge, self.grow_step),
            ClipCommand::Randomize => {
                let segments = (0..self.random_count).map(|_| self.random_segment()).collect();
                self.segments = segments;
            }
            ClipCommand::Clear => {
                self.segments.clear();
                self.pending = None;
            }
            ClipCommand::Resize(bounds) => self.bounds = bounds,
        }
        self.rect = self.rect.clamped_to(self.bounds);
        tracing::debug!(?command, rect = ?self.rect, segments = self.segments.len(), "clip scene updated");
    }

    /// All segments, in insertion order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The clip window.
    #[must_use]
    pub fn rect(&self) -> ClipRect {
        self.rect
    }

    /// First endpoint awaiting its partner.
    #[must_use]
    pub fn pending(&self) -> Option<Point> {
        self.pending
    }

    /// Current display bounds.
    #[must_use]
    pub fn bounds(&self) -> DisplayBounds {
        self.bounds
    }

    /// Visible parts of every segment.
    #[must_use]
    pub fn visible(&self) -> Vec<ClippedSegment> {
        clip_all(self.rect, &self.segments)
    }

    /// Draw the scene: window, raw segments, then their visible parts.
    pub fn render(&self, fb: &mut Framebuffer) {
        fb.clear(BACKGROUND);
        let mut paint = Paint::new(fb, WINDOW);

        let corners = self.rect.corners();
        for (i, &a) in corners.iter().enumerate() {
            let b = corners[(i + 1) % corners.len()];
            draw_line(&mut paint, a, b, 2);
        }

        paint.set_color(SEGMENT);
        for s in &self.segments {
            draw_line(&mut paint, s.a, s.b, 1);
        }

        paint.set_color(VISIBLE);
        for part in self.visible() {
            let s = part.to_segment();
            draw_line(&mut paint, s.a, s.b, 2);
        }

        if let Some(p) = self.pending {
            paint.set_color(PENDING);
            Brush::Square(2).stamp(p, &mut paint);
        }
    }

    /// One-line HUD text.
    #[must_use]
    pub fn status(&self) -> String {
        let r = self.rect;
        let pending = if self.pending.is_some() { " | right click to finish" } else { "" };
        format!(
            "window=({},{})-({},{}) | segments={} visible={}{pending}",
            r.xmin,
            r.ymin,
            r.xmax,
            r.ymax,
            self.segments.len(),
            self.visible().len()
        )
    }

    fn random_segment(&mut self) -> Segment {
        let (w, h) = (self.bounds.max_x(), self.bounds.max_y());
        Segment::from_coords(
            self.rng.gen_range(0..=w),
            self.rng.gen_range(0..=h),
            self.rng.gen_range(0..=w),
            self.rng.gen_range(0..=h),
        )
    }
}

/// A fan of crossing segments, alternating between low and high starts.
fn example_segments() -> Vec<Segment> {
    (0..10)
        .map(|i| {
            let odd = i % 2 == 1;
            Segment::from_coords(
                30 + i * 80,
                20 + if odd { 480 } else { 80 },
                850 - i * 60,
                550 - if odd { 450 } else { 120 },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> ClipScene {
        ClipScene::new(&ClipSettings::default(), DisplayBounds::default())
    }

    #[test]
    fn test_initial_state() {
        let scene = scene();
        assert_eq!(scene.segments().len(), 10);
        assert_eq!(scene.segments()[0], Segment::from_coords(30, 100, 850, 430));
        assert_eq!(scene.segments()[1], Segment::from_coords(110, 500, 790, 100));
        assert_eq!(scene.rect(), ClipRect::new(200, 150, 700, 450));
        assert!(scene.pending().is_none());
    }

    #[test]
    fn test_add_segment_with_two_picks() {
        let mut scene = scene();
        scene.apply(ClipCommand::Clear);
        scene.apply(ClipCommand::PickSecond(Point::new(5, 5)));
        assert!(scene.segments().is_empty());

        scene.apply(ClipCommand::PickFirst(Point::new(10, 20)));
        scene.apply(ClipCommand::PickSecond(Point::new(30, 40)));
        assert_eq!(scene.segments(), &[Segment::from_coords(10, 20, 30, 40)]);
        assert!(scene.pending().is_none());
    }

    #[test]
    fn test_move_and_grow() {
        let mut scene = scene();
        scene.apply(ClipCommand::Move(1, 0));
        assert_eq!(scene.rect(), ClipRect::new(210, 150, 710, 450));
        scene.apply(ClipCommand::Move(0, -1));
        assert_eq!(scene.rect(), ClipRect::new(210, 140, 710, 440));
        scene.apply(ClipCommand::Grow(Edge::Left));
        assert_eq!(scene.rect().xmin, 202);
        scene.apply(ClipCommand::Grow(Edge::Top));
        assert_eq!(scene.rect().ymax, 448);
    }

    #[test]
    fn test_window_stays_on_screen() {
        let mut scene = scene();
        for _ in 0..100 {
            scene.apply(ClipCommand::Move(1, 1));
        }
        let r = scene.rect();
        assert!(r.xmax <= 899 && r.ymax <= 599);
        assert!(r.xmin <= r.xmax && r.ymin <= r.ymax);

        scene.apply(ClipCommand::Resize(DisplayBounds::new(300, 200)));
        let r = scene.rect();
        assert!(r.xmax <= 299 && r.ymax <= 199);
        assert!(r.xmin <= r.xmax && r.ymin <= r.ymax);
    }

    #[test]
    fn test_oversized_settings_clamped() {
        let settings = ClipSettings {
            move_step: i32::MAX,
            grow_step: i32::MAX,
            random_count: usize::MAX,
            ..ClipSettings::default()
        };
        let mut scene = ClipScene::new(&settings, DisplayBounds::default());
        scene.apply(ClipCommand::Move(i32::MAX, i32::MIN));
        scene.apply(ClipCommand::Grow(Edge::Left));
        scene.apply(ClipCommand::Grow(Edge::Top));
        let r = scene.rect();
        assert!(r.xmin <= r.xmax && r.ymin <= r.ymax);
        assert!(r.xmax <= 899 && r.ymax <= 599 && r.xmin >= 0 && r.ymin >= 0);

        scene.apply(ClipCommand::Randomize);
        assert_eq!(scene.segments().len(), MAX_RANDOM_COUNT);
    }

    #[test]
    fn test_non_positive_steps_raised_to_one() {
        let settings = ClipSettings { move_step: -10, grow_step: 0, ..ClipSettings::default() };
        let mut scene = ClipScene::new(&settings, DisplayBounds::default());
        scene.apply(ClipCommand::Move(1, 0));
        assert_eq!(scene.rect(), ClipRect::new(201, 150, 701, 450));
        scene.apply(ClipCommand::Grow(Edge::Right));
        assert_eq!(scene.rect().xmax, 702);
    }

    #[test]
    fn test_randomize_replaces_segments() {
        let mut scene = scene();
        scene.apply(ClipCommand::Randomize);
        assert_eq!(scene.segments().len(), 20);
        let bounds = scene.bounds();
        assert!(scene.segments().iter().all(|s| bounds.contains(s.a) && bounds.contains(s.b)));
    }

    #[test]
    fn test_visible_parts_inside_window() {
        let scene = scene();
        let r = scene.rect();
        let visible = scene.visible();
        assert!(!visible.is_empty());
        for part in visible {
            let s = part.to_segment();
            for p in [s.a, s.b] {
                assert!(p.x >= r.xmin && p.x <= r.xmax && p.y >= r.ymin && p.y <= r.ymax);
            }
        }
    }

    #[test]
    fn test_render_marks_window_and_clipped_parts() {
        let mut scene = scene();
        scene.apply(ClipCommand::Clear);
        scene.apply(ClipCommand::PickFirst(Point::new(100, 300)));
        scene.apply(ClipCommand::PickSecond(Point::new(800, 300)));

        let mut fb = Framebuffer::for_bounds(scene.bounds()).unwrap();
        scene.render(&mut fb);

        assert_eq!(fb.at(Point::new(150, 300)), Some(SEGMENT));
        assert_eq!(fb.at(Point::new(450, 300)), Some(VISIBLE));
        assert_eq!(fb.at(Point::new(450, 150)), Some(WINDOW));
        assert_eq!(fb.at(Point::new(5, 5)), Some(BACKGROUND));
    }
}
