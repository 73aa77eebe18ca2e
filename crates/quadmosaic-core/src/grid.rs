//! Read-only pixel grid abstraction

/// A read-only 2D grid of RGB pixels.
///
/// Analysis code only reads pixels through this trait, so any buffer the
/// caller already owns can be decomposed without copying. Implementors must
/// be `Sync` so that independent regions can be analyzed in parallel.
pub trait PixelGrid: Sync {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// RGB value of the pixel at column `x`, row `y`.
    ///
    /// Callers guarantee `x < width()` and `y < height()`; implementations
    /// may panic otherwise.
    fn rgb_at(&self, x: u32, y: u32) -> (u8, u8, u8);
}

impl<G: PixelGrid + ?Sized> PixelGrid for &G {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn rgb_at(&self, x: u32, y: u32) -> (u8, u8, u8) {
        (**self).rgb_at(x, y)
    }
}
