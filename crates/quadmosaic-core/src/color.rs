//! Color channel helpers and the mean color type.
//!
//! # Pixel format
//!
//! Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB). Alpha is
//! always written as 255 and ignored on read.

/// Shift amounts for extracting color channels
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// Maximum value of a single 8-bit channel.
pub const CHANNEL_MAX: f32 = 255.0;

/// Extract red component from a packed pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    ((pixel >> RED_SHIFT) & 0xff) as u8
}

/// Extract green component from a packed pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    ((pixel >> GREEN_SHIFT) & 0xff) as u8
}

/// Extract blue component from a packed pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    ((pixel >> BLUE_SHIFT) & 0xff) as u8
}

/// Compose a packed RGB pixel (alpha = 255).
#[inline]
pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
        | (255 << ALPHA_SHIFT)
}

/// Extract RGB values from a packed pixel.
#[inline]
pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
    (red(pixel), green(pixel), blue(pixel))
}

/// A color with floating-point channels.
///
/// Used for region means, which are kept unquantized so that variation is
/// measured against the exact average. Channel values lie in `0.0..=255.0`
/// whenever the color was produced from 8-bit pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Rgb {
    /// Pure white, the mean reported for regions without valid pixels.
    pub const WHITE: Rgb = Rgb {
        r: CHANNEL_MAX,
        g: CHANNEL_MAX,
        b: CHANNEL_MAX,
    };

    /// Pure black.
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a color from channel values.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32,
            g: g as f32,
            b: b as f32,
        }
    }

    /// Create a color from a packed pixel.
    pub fn from_pixel(pixel: u32) -> Self {
        let (r, g, b) = extract_rgb(pixel);
        Self::from_rgb8(r, g, b)
    }

    /// Euclidean distance to an 8-bit pixel in RGB space.
    #[inline]
    pub fn distance_to_rgb8(&self, r: u8, g: u8, b: u8) -> f32 {
        let dr = r as f32 - self.r;
        let dg = g as f32 - self.g;
        let db = b as f32 - self.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Euclidean distance to another color in RGB space.
    pub fn distance(&self, other: &Rgb) -> f32 {
        let dr = other.r - self.r;
        let dg = other.g - self.g;
        let db = other.b - self.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Quantize to 8-bit channels.
    ///
    /// Channels are clamped to `0..=255` and truncated toward zero, so a
    /// mean of 127.9 renders as 127.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let q = |v: f32| v.clamp(0.0, CHANNEL_MAX) as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    /// Quantize to a packed pixel.
    pub fn to_pixel(&self) -> u32 {
        let (r, g, b) = self.to_rgb8();
        compose_rgb(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb8(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_extract() {
        let pixel = compose_rgb(10, 20, 30);
        assert_eq!(extract_rgb(pixel), (10, 20, 30));
        assert_eq!(pixel & 0xff, 255);
    }

    #[test]
    fn test_white_constant() {
        assert_eq!(Rgb::WHITE.to_rgb8(), (255, 255, 255));
        assert_eq!(Rgb::WHITE.to_pixel(), compose_rgb(255, 255, 255));
    }

    #[test]
    fn test_to_rgb8_truncates_and_clamps() {
        assert_eq!(Rgb::new(127.9, 0.4, 254.99).to_rgb8(), (127, 0, 254));
        assert_eq!(Rgb::new(-3.0, 300.0, 12.0).to_rgb8(), (0, 255, 12));
    }

    #[test]
    fn test_distance() {
        let c = Rgb::new(0.0, 0.0, 0.0);
        assert_eq!(c.distance_to_rgb8(3, 4, 0), 5.0);
        assert_eq!(c.distance(&Rgb::new(0.0, 6.0, 8.0)), 10.0);
        assert_eq!(c.distance_to_rgb8(0, 0, 0), 0.0);
    }

    #[test]
    fn test_from_pixel() {
        let c = Rgb::from_pixel(compose_rgb(1, 2, 3));
        assert_eq!(c, Rgb::new(1.0, 2.0, 3.0));
        assert_eq!(Rgb::from((1, 2, 3)), c);
    }
}
