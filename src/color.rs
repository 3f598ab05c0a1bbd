//! Color types and color space conversions.
//!
//! Provides RGBA and HSVA representations. The concentric-ring demo walks a
//! hue gradient in HSV space and converts each ring color to RGBA.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Create an opaque color from floating-point channels in `[0, 1]`.
    #[must_use]
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// BT.709 relative luminance on the 0-255 scale. Alpha is ignored.
    #[must_use]
    pub fn luma(self) -> f32 {
        0.2126 * f32::from(self.r) + 0.7152 * f32::from(self.g) + 0.0722 * f32::from(self.b)
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            (f32::from(self.r) * inv_t + f32::from(other.r) * t) as u8,
            (f32::from(self.g) * inv_t + f32::from(other.g) * t) as u8,
            (f32::from(self.b) * inv_t + f32::from(other.b) * t) as u8,
            (f32::from(self.a) * inv_t + f32::from(other.a) * t) as u8,
        )
    }
}

/// HSVA color with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsva {
    /// Hue as a fraction of a full turn, wrapped into `[0, 1)`.
    pub h: f32,
    /// Saturation (0.0-1.0).
    pub s: f32,
    /// Value (0.0-1.0).
    pub v: f32,
    /// Alpha (0.0-1.0).
    pub a: f32,
}

impl Hsva {
    /// Create a new HSVA color.
    #[must_use]
    pub const fn new(h: f32, s: f32, v: f32, a: f32) -> Self {
        Self { h, s, v, a }
    }

    /// Create an opaque HSV color (alpha = 1.0).
    #[must_use]
    pub const fn hsv(h: f32, s: f32, v: f32) -> Self {
        Self::new(h, s, v, 1.0)
    }

    /// Convert to RGBA using the six-sector hexcone model.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let alpha = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        let v = self.v;
        if self.s <= 1e-6 {
            return Rgba::from_unit(v, v, v).with_alpha(alpha);
        }

        let h = self.h.rem_euclid(1.0);
        let hf = h * 6.0;
        let sector = hf.floor();
        let f = hf - sector;
        let p = v * (1.0 - self.s);
        let q = v * (1.0 - self.s * f);
        let t = v * (1.0 - self.s * (1.0 - f));

        let (r, g, b) = match (sector as i32).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgba::from_unit(r, g, b).with_alpha(alpha)
    }
}

impl From<Hsva> for Rgba {
    fn from(hsva: Hsva) -> Self {
        hsva.to_rgba()
    }
}

/// Sample a hue gradient: `index` of `count` maps onto `[0, max_hue]`.
///
/// A single-element gradient sits at hue 0.
#[must_use]
pub fn hue_gradient(index: usize, count: usize, max_hue: f32, s: f32, v: f32) -> Rgba {
    let t = if count <= 1 { 0.0 } else { index as f32 / (count - 1) as f32 };
    Hsva::hsv(max_hue * t, s, v).to_rgba()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
    }

    #[test]
    fn test_luma_weights_green_highest() {
        assert!(Rgba::BLACK.luma().abs() < 1e-4);
        assert!((Rgba::WHITE.luma() - 255.0).abs() < 1e-3);
        assert!(Rgba::GREEN.luma() > Rgba::RED.luma());
        assert!(Rgba::RED.luma() > Rgba::BLUE.luma());
    }

    #[test]
    fn test_rgba_lerp() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert_eq!(mid.r, 127);
        assert_eq!(mid.g, 127);
        assert_eq!(mid.b, 127);
    }

    #[test]
    fn test_from_unit_clamps() {
        assert_eq!(Rgba::from_unit(2.0, -1.0, 0.5), Rgba::rgb(255, 0, 128));
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(Hsva::hsv(0.0, 1.0, 1.0).to_rgba(), Rgba::RED);
        assert_eq!(Hsva::hsv(1.0 / 3.0, 1.0, 1.0).to_rgba(), Rgba::GREEN);
        assert_eq!(Hsva::hsv(2.0 / 3.0, 1.0, 1.0).to_rgba(), Rgba::BLUE);
    }

    #[test]
    fn test_hsv_gray_when_unsaturated() {
        let gray = Hsva::hsv(0.4, 0.0, 0.5).to_rgba();
        assert_eq!(gray, Rgba::rgb(128, 128, 128));
    }

    #[test]
    fn test_hsv_hue_wraps() {
        assert_eq!(Hsva::hsv(1.0, 1.0, 1.0).to_rgba(), Hsva::hsv(0.0, 1.0, 1.0).to_rgba());
        assert_eq!(Hsva::hsv(-0.5, 1.0, 1.0).to_rgba(), Hsva::hsv(0.5, 1.0, 1.0).to_rgba());
    }

    #[test]
    fn test_hsv_magenta_sector() {
        let magenta = Hsva::hsv(5.0 / 6.0, 1.0, 1.0).to_rgba();
        assert_eq!(magenta.r, 255);
        assert_eq!(magenta.g, 0);
        assert_eq!(magenta.b, 255);
    }

    #[test]
    fn test_from_hsva_trait() {
        let rgba: Rgba = Hsva::hsv(0.0, 1.0, 1.0).into();
        assert_eq!(rgba, Rgba::RED);
    }

    #[test]
    fn test_hue_gradient_endpoints() {
        assert_eq!(hue_gradient(0, 18, 0.85, 1.0, 1.0), Rgba::RED);
        let last = hue_gradient(17, 18, 0.85, 1.0, 1.0);
        assert_eq!(last, Hsva::hsv(0.85, 1.0, 1.0).to_rgba());
        assert_eq!(hue_gradient(0, 1, 0.85, 1.0, 1.0), Rgba::RED);
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        assert_eq!(Rgba::from_array(color.to_array()), color);
    }
}
