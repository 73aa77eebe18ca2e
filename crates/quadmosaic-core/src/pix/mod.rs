//! PIX - The RGB image container
//!
//! The `Pix` structure is the image type analyzed by the quadtree
//! decomposition.
//!
//! # Pixel layout
//!
//! - One packed 32-bit word per pixel, rows stored top to bottom
//! - Color order is RGBA (red in MSB), alpha is always 255
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
pub mod graphics;

use crate::color::compose_rgb;
use crate::error::{Error, Result};
use crate::grid::PixelGrid;
use std::sync::Arc;

/// Internal PIX data
#[derive(Debug)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Text string associated with pix (e.g. the source path)
    text: Option<String>,
    /// The image data, `width * height` packed pixels
    data: Vec<u32>,
}

impl PixData {
    fn filled(width: u32, height: u32, pixel: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            text: None,
            data: vec![pixel; size],
        }
    }
}

/// PIX - RGB image container
///
/// `Pix` uses reference counting via `Arc` for efficient cloning. An image
/// may have zero width or height; such an image simply has no pixels.
///
/// # Examples
///
/// ```
/// use quadmosaic_core::Pix;
///
/// let pix = Pix::new(640, 480).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new black PIX with the specified dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` does not fit
    /// in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0, 0, 0)
    }

    /// Create a new PIX with every pixel set to `(r, g, b)`.
    pub fn new_filled(width: u32, height: u32, r: u8, g: u8, b: u8) -> Result<Self> {
        Self::check_size(width, height)?;
        Ok(Pix {
            inner: Arc::new(PixData::filled(width, height, compose_rgb(r, g, b))),
        })
    }

    /// Create a PIX from interleaved 8-bit RGB samples, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `bytes.len() != width * height * 3`.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let count = Self::check_size(width, height)?;
        let expected = count * 3;
        if bytes.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }

        let data = bytes
            .chunks_exact(3)
            .map(|px| compose_rgb(px[0], px[1], px[2]))
            .collect();

        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                text: None,
                data,
            }),
        })
    }

    fn check_size(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3).map(|_| n))
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Check whether the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Get the associated text.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.inner.text.as_deref()
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this PIX.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Check if two PIX have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Write image metadata to a writer (for debugging).
    pub fn print_info(&self, writer: &mut impl std::io::Write, label: Option<&str>) -> Result<()> {
        if let Some(text) = label {
            writeln!(writer, "  Pix Info for {text}:")?;
        }
        writeln!(
            writer,
            "    width = {}, height = {}",
            self.inner.width, self.inner.height
        )?;
        if let Some(ref text) = self.inner.text {
            writeln!(writer, "    text: {text}")?;
        }
        Ok(())
    }

    /// Create a deep copy of this PIX.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(self.copy_data()),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`PixMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: self.copy_data(),
        }
    }

    fn copy_data(&self) -> PixData {
        PixData {
            width: self.inner.width,
            height: self.inner.height,
            text: self.inner.text.clone(),
            data: self.inner.data.clone(),
        }
    }
}

impl PixelGrid for Pix {
    #[inline]
    fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    fn rgb_at(&self, x: u32, y: u32) -> (u8, u8, u8) {
        crate::color::extract_rgb(self.get_pixel_unchecked(x, y))
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the associated text.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.inner.text.as_deref()
    }

    /// Set the associated text.
    pub fn set_text(&mut self, text: Option<String>) {
        self.inner.text = text;
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Set every pixel to `(r, g, b)`.
    pub fn fill_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.inner.data.fill(compose_rgb(r, g, b));
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let pix = Pix::new(4, 3).unwrap();
        assert_eq!(pix.width(), 4);
        assert_eq!(pix.height(), 3);
        assert_eq!(pix.data().len(), 12);
        assert_eq!(pix.get_rgb(3, 2), Some((0, 0, 0)));
    }

    #[test]
    fn test_zero_size_allowed() {
        let pix = Pix::new(0, 5).unwrap();
        assert!(pix.is_empty());
        assert_eq!(pix.get_rgb(0, 0), None);
    }

    #[test]
    fn test_new_filled() {
        let pix = Pix::new_filled(2, 2, 10, 20, 30).unwrap();
        assert!(pix.data().iter().all(|&p| p == compose_rgb(10, 20, 30)));
    }

    #[test]
    fn test_from_rgb_bytes() {
        let bytes = [1, 2, 3, 4, 5, 6];
        let pix = Pix::from_rgb_bytes(2, 1, &bytes).unwrap();
        assert_eq!(pix.get_rgb(0, 0), Some((1, 2, 3)));
        assert_eq!(pix.get_rgb(1, 0), Some((4, 5, 6)));
    }

    #[test]
    fn test_from_rgb_bytes_length_mismatch() {
        let err = Pix::from_rgb_bytes(2, 2, &[0; 5]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferLength {
                expected: 12,
                actual: 5
            }
        ));
    }

    #[test]
    fn test_clone_shares_data() {
        let pix = Pix::new(2, 2).unwrap();
        let shared = pix.clone();
        assert_eq!(pix.ref_count(), 2);
        assert!(shared.try_into_mut().is_err());
        assert_eq!(pix.ref_count(), 1);
    }

    #[test]
    fn test_mut_roundtrip() {
        let pix = Pix::new(3, 3).unwrap();
        let mut pix_mut = pix.try_into_mut().unwrap();
        pix_mut.fill_rgb(9, 8, 7);
        pix_mut.set_text(Some("filled".to_string()));
        let pix: Pix = pix_mut.into();
        assert_eq!(pix.get_rgb(1, 1), Some((9, 8, 7)));
        assert_eq!(pix.text(), Some("filled"));
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let pix = Pix::new(2, 2).unwrap();
        let copy = pix.deep_clone();
        assert_eq!(pix.ref_count(), 1);
        assert_eq!(copy.data(), pix.data());
    }

    #[test]
    fn test_pixel_grid_impl() {
        let pix = Pix::new_filled(3, 2, 5, 6, 7).unwrap();
        let grid: &dyn PixelGrid = &pix;
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.rgb_at(2, 1), (5, 6, 7));
    }

    #[test]
    fn test_print_info() {
        let pix = Pix::new(7, 5).unwrap();
        let mut out = Vec::new();
        pix.print_info(&mut out, Some("sample")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Pix Info for sample"));
        assert!(text.contains("width = 7, height = 5"));
    }
}
