//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//! Checked variants return `None` / an error out of bounds; unchecked
//! variants panic.

use super::{Pix, PixMut};
use crate::color::{compose_rgb, extract_rgb};
use crate::error::{Error, Result};

#[inline]
fn index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

impl Pix {
    /// Get the packed pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[index(self.width(), x, y)]
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(extract_rgb)
    }
}

impl PixMut {
    /// Get the packed pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a packed pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[index(self.width(), x, y)]
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(extract_rgb)
    }

    /// Set a packed pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a packed pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let i = index(self.width(), x, y);
        self.data_mut()[i] = val;
    }

    /// Set an RGB pixel at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, compose_rgb(r, g, b))
    }
}
