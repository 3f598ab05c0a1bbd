//! Concentric-ring demo with an HSV hue gradient.

use crate::color::{hue_gradient, Rgba};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Circle, DisplayBounds};
use crate::render::{draw_disk, draw_ring, CircleStyle, Paint};

pub(super) const BACKGROUND: Rgba = Rgba::rgb(15, 18, 26);

/// Ring count range.
pub const COUNT_RANGE: (i32, i32) = (1, 200);
/// Radius step range.
pub const RADIUS_STEP_RANGE: (i32, i32) = (1, 50);
/// Thickness step range.
pub const THICKNESS_STEP_RANGE: (i32, i32) = (0, 10);
/// Innermost ring radius range.
pub const BASE_RADIUS_RANGE: (i32, i32) = (0, 2000);
/// Innermost ring thickness range.
pub const BASE_THICKNESS_RANGE: (i32, i32) = (1, 200);

/// Tunables for [`CircleScene`]. `Reset` returns to these values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "tui", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "tui", serde(default))]
pub struct CircleSettings {
    /// Number of rings.
    pub count: i32,
    /// Radius of the innermost ring.
    pub base_radius: i32,
    /// Radius increment per ring.
    pub radius_step: i32,
    /// Thickness of the innermost ring.
    pub base_thickness: i32,
    /// Thickness increment per ring.
    pub thickness_step: i32,
    /// Hue of the outermost ring, as a fraction of a turn.
    pub max_hue: f32,
    /// Gradient saturation.
    pub saturation: f32,
    /// Gradient value.
    pub value: f32,
    /// Draw solid disks instead of hollow rings.
    pub filled: bool,
}

impl Default for CircleSettings {
    fn default() -> Self {
        Self {
            count: 18,
            base_radius: 18,
            radius_step: 12,
            base_thickness: 2,
            thickness_step: 1,
            max_hue: 0.85,
            saturation: 0.95,
            value: 1.0,
            filled: false,
        }
    }
}

/// Inputs accepted by [`CircleScene::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleCommand {
    /// One more ring.
    MoreRings,
    /// One ring fewer.
    FewerRings,
    /// Thickness step +1.
    ThickerStep,
    /// Thickness step -1.
    ThinnerStep,
    /// Radius step +1.
    WiderStep,
    /// Radius step -1.
    NarrowerStep,
    /// Switch between hollow rings and solid disks.
    ToggleFill,
    /// Restore the configured parameters.
    Reset,
    /// The display changed size; the rings follow the center.
    Resize(DisplayBounds),
}

/// State of the concentric-ring demo.
#[derive(Debug, Clone)]
pub struct CircleScene {
    defaults: CircleSettings,
    count: i32,
    radius_step: i32,
    thickness_step: i32,
    style: CircleStyle,
    bounds: DisplayBounds,
}

impl CircleScene {
    /// Create the scene centered on `bounds`. Base radius and thickness are
    /// clamped to [`BASE_RADIUS_RANGE`] and [`BASE_THICKNESS_RANGE`].
    #[must_use]
    pub fn new(settings: &CircleSettings, bounds: DisplayBounds) -> Self {
        let defaults = CircleSettings {
            base_radius: settings.base_radius.clamp(BASE_RADIUS_RANGE.0, BASE_RADIUS_RANGE.1),
            base_thickness: settings
                .base_thickness
                .clamp(BASE_THICKNESS_RANGE.0, BASE_THICKNESS_RANGE.1),
            ..settings.clone()
        };
        let mut scene = Self {
            defaults,
            count: 0,
            radius_step: 0,
            thickness_step: 0,
            style: CircleStyle::Ring,
            bounds,
        };
        scene.reset();
        scene
    }

    /// Apply one input command.
    pub fn apply(&mut self, command: CircleCommand) {
        match command {
            CircleCommand::MoreRings => self.count = (self.count + 1).min(COUNT_RANGE.1),
            CircleCommand::FewerRings => self.count = (self.count - 1).max(COUNT_RANGE.0),
            CircleCommand::ThickerStep => {
                self.thickness_step = (self.thickness_step + 1).min(THICKNESS_STEP_RANGE.1);
            }
            CircleCommand::ThinnerStep => {
                self.thickness_step = (self.thickness_step - 1).max(THICKNESS_STEP_RANGE.0);
            }
            CircleCommand::WiderStep => {
                self.radius_step = (self.radius_step + 1).min(RADIUS_STEP_RANGE.1);
            }
            CircleCommand::NarrowerStep => {
                self.radius_step = (self.radius_step - 1).max(RADIUS_STEP_RANGE.0);
            }
            CircleCommand::ToggleFill => {
                self.style = match self.style {
                    CircleStyle::Ring => CircleStyle::Disk,
                    CircleStyle::Disk => CircleStyle::Ring,
                };
            }
            CircleCommand::Reset => self.reset(),
            CircleCommand::Resize(bounds) => self.bounds = bounds,
        }
        tracing::debug!(
            ?command,
            count = self.count,
            radius_step = self.radius_step,
            thickness_step = self.thickness_step,
            "circle scene updated"
        );
    }

    fn reset(&mut self) {
        let d = &self.defaults;
        self.count = d.count.clamp(COUNT_RANGE.0, COUNT_RANGE.1);
        self.radius_step = d.radius_step.clamp(RADIUS_STEP_RANGE.0, RADIUS_STEP_RANGE.1);
        self.thickness_step =
            d.thickness_step.clamp(THICKNESS_STEP_RANGE.0, THICKNESS_STEP_RANGE.1);
        self.style = if d.filled { CircleStyle::Disk } else { CircleStyle::Ring };
    }

    /// Number of rings.
    #[must_use]
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Radius increment per ring.
    #[must_use]
    pub fn radius_step(&self) -> i32 {
        self.radius_step
    }

    /// Thickness increment per ring.
    #[must_use]
    pub fn thickness_step(&self) -> i32 {
        self.thickness_step
    }

    /// Ring or disk rendering.
    #[must_use]
    pub fn style(&self) -> CircleStyle {
        self.style
    }

    /// Current display bounds.
    #[must_use]
    pub fn bounds(&self) -> DisplayBounds {
        self.bounds
    }

    /// Ring `i`: radius `base + i * step`, thickness `max(1, base_t + i * t_step)`.
    #[must_use]
    pub fn ring(&self, i: i32) -> Circle {
        let radius = self.defaults.base_radius.saturating_add(i.saturating_mul(self.radius_step));
        let thickness =
            self.defaults.base_thickness.saturating_add(i.saturating_mul(self.thickness_step));
        Circle::new(self.bounds.center(), radius, thickness)
    }

    /// Gradient color of ring `i`.
    #[must_use]
    pub fn ring_color(&self, i: i32) -> Rgba {
        let d = &self.defaults;
        hue_gradient(i as usize, self.count as usize, d.max_hue, d.saturation, d.value)
    }

    /// Every ring with its color, innermost first.
    pub fn rings(&self) -> impl Iterator<Item = (Circle, Rgba)> + '_ {
        (0..self.count).map(|i| (self.ring(i), self.ring_color(i)))
    }

    /// Draw the scene.
    pub fn render(&self, fb: &mut Framebuffer) {
        fb.clear(BACKGROUND);
        let mut paint = Paint::new(fb, BACKGROUND);
        match self.style {
            CircleStyle::Ring => {
                for (circle, color) in self.rings() {
                    paint.set_color(color);
                    draw_ring(&mut paint, circle);
                }
            }
            // Outermost first so every band stays visible.
            CircleStyle::Disk => {
                let rings: Vec<_> = self.rings().collect();
                for (circle, color) in rings.into_iter().rev() {
                    paint.set_color(color);
                    draw_disk(&mut paint, circle.center, circle.radius);
                }
            }
        }
    }

    /// One-line HUD text.
    #[must_use]
    pub fn status(&self) -> String {
        let style = match self.style {
            CircleStyle::Ring => "rings",
            CircleStyle::Disk => "disks",
        };
        format!(
            "n={} | radius step={} | thickness step={} | {style}",
            self.count, self.radius_step, self.thickness_step
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn scene() -> CircleScene {
        CircleScene::new(&CircleSettings::default(), DisplayBounds::new(800, 600))
    }

    #[test]
    fn test_defaults() {
        let scene = scene();
        assert_eq!(scene.count(), 18);
        assert_eq!(scene.radius_step(), 12);
        assert_eq!(scene.thickness_step(), 1);
        assert_eq!(scene.style(), CircleStyle::Ring);
    }

    #[test]
    fn test_ring_geometry() {
        let scene = scene();
        let first = scene.ring(0);
        assert_eq!(first.center, Point::new(400, 300));
        assert_eq!((first.radius, first.thickness), (18, 2));

        let last = scene.ring(17);
        assert_eq!((last.radius, last.thickness), (18 + 17 * 12, 2 + 17));
    }

    #[test]
    fn test_negative_thickness_clamped_to_one() {
        let settings = CircleSettings { base_thickness: -5, thickness_step: 0, ..CircleSettings::default() };
        let scene = CircleScene::new(&settings, DisplayBounds::default());
        assert_eq!(scene.ring(3).thickness, 1);
    }

    #[test]
    fn test_oversized_settings_clamped() {
        let settings = CircleSettings {
            count: i32::MAX,
            base_radius: i32::MAX,
            radius_step: i32::MAX,
            base_thickness: i32::MAX,
            thickness_step: i32::MAX,
            ..CircleSettings::default()
        };
        let scene = CircleScene::new(&settings, DisplayBounds::new(200, 150));
        assert_eq!(scene.count(), COUNT_RANGE.1);
        let last = scene.ring(scene.count() - 1);
        assert_eq!(last.radius, BASE_RADIUS_RANGE.1 + (COUNT_RANGE.1 - 1) * RADIUS_STEP_RANGE.1);
        assert_eq!(
            last.thickness,
            BASE_THICKNESS_RANGE.1 + (COUNT_RANGE.1 - 1) * THICKNESS_STEP_RANGE.1
        );
        assert_eq!(scene.ring(i32::MAX).radius, i32::MAX);

        let negative = CircleSettings { base_radius: -40, ..CircleSettings::default() };
        assert_eq!(CircleScene::new(&negative, DisplayBounds::default()).ring(0).radius, 0);
    }

    #[test]
    fn test_gradient_endpoints() {
        let scene = scene();
        assert_eq!(scene.ring_color(0), hue_gradient(0, 18, 0.85, 0.95, 1.0));
        assert_eq!(scene.ring_color(0).r, 255);
        assert_ne!(scene.ring_color(0), scene.ring_color(17));
    }

    #[test]
    fn test_limits() {
        let mut scene = scene();
        for _ in 0..300 {
            scene.apply(CircleCommand::MoreRings);
            scene.apply(CircleCommand::ThickerStep);
            scene.apply(CircleCommand::WiderStep);
        }
        assert_eq!(scene.count(), 200);
        assert_eq!(scene.thickness_step(), 10);
        assert_eq!(scene.radius_step(), 50);

        for _ in 0..300 {
            scene.apply(CircleCommand::FewerRings);
            scene.apply(CircleCommand::ThinnerStep);
            scene.apply(CircleCommand::NarrowerStep);
        }
        assert_eq!(scene.count(), 1);
        assert_eq!(scene.thickness_step(), 0);
        assert_eq!(scene.radius_step(), 1);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut scene = scene();
        scene.apply(CircleCommand::MoreRings);
        scene.apply(CircleCommand::ToggleFill);
        scene.apply(CircleCommand::NarrowerStep);
        scene.apply(CircleCommand::Reset);
        assert_eq!(scene.count(), 18);
        assert_eq!(scene.radius_step(), 12);
        assert_eq!(scene.style(), CircleStyle::Ring);
    }

    #[test]
    fn test_resize_recenters() {
        let mut scene = scene();
        scene.apply(CircleCommand::Resize(DisplayBounds::new(200, 100)));
        assert_eq!(scene.ring(0).center, Point::new(100, 50));
    }

    #[test]
    fn test_render_rings_hollow_center() {
        let scene = scene();
        let mut fb = Framebuffer::for_bounds(scene.bounds()).unwrap();
        scene.render(&mut fb);

        assert_eq!(fb.at(Point::new(400, 300)), Some(BACKGROUND));
        assert_eq!(fb.at(Point::new(418, 300)), Some(scene.ring_color(0)));
    }

    #[test]
    fn test_render_disks_fill_center() {
        let mut scene = scene();
        scene.apply(CircleCommand::ToggleFill);
        let mut fb = Framebuffer::for_bounds(scene.bounds()).unwrap();
        scene.render(&mut fb);

        assert_eq!(fb.at(Point::new(400, 300)), Some(scene.ring_color(0)));
        assert_eq!(fb.at(Point::new(425, 300)), Some(scene.ring_color(1)));
    }
}
