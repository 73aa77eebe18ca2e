//! Color summed-area table
//!
//! A per-channel integral image answers "sum of every channel over this
//! pixel rectangle" in constant time. The subdivider builds one per image
//! and uses it for region means, leaving only the variation pass to scan
//! pixels.

use crate::stats::{PixelSpan, mean_from_sums, pixel_span};
use quadmosaic_core::{PixelGrid, Region, Rgb};

/// Integral image over the red, green and blue channels.
///
/// Entry `(x, y)` holds the channel sums over `[0, x) x [0, y)`, so the
/// table is `(width + 1) x (height + 1)` with a zero first row and column.
#[derive(Debug, Clone)]
pub struct ColorIntegral {
    data: Vec<[u64; 3]>,
    width: u32,
    height: u32,
}

impl ColorIntegral {
    /// Build the table from any pixel grid.
    pub fn from_grid<G: PixelGrid + ?Sized>(grid: &G) -> Self {
        let width = grid.width();
        let height = grid.height();
        let stride = width as usize + 1;
        let mut data = vec![[0u64; 3]; stride * (height as usize + 1)];

        for y in 0..height {
            let mut row_sum = [0u64; 3];
            let above = y as usize * stride;
            let here = above + stride;
            for x in 0..width {
                let (r, g, b) = grid.rgb_at(x, y);
                row_sum[0] += r as u64;
                row_sum[1] += g as u64;
                row_sum[2] += b as u64;
                let xi = x as usize + 1;
                let prev = data[above + xi];
                data[here + xi] = [
                    prev[0] + row_sum[0],
                    prev[1] + row_sum[1],
                    prev[2] + row_sum[2],
                ];
            }
        }

        Self {
            data,
            width,
            height,
        }
    }

    /// Get the width of the source image
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height of the source image
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the channel sums over `[0, x) x [0, y)`.
    ///
    /// Returns `None` if `x > width` or `y > height`.
    pub fn get(&self, x: u32, y: u32) -> Option<[u64; 3]> {
        if x > self.width || y > self.height {
            return None;
        }
        Some(self.at(x, y))
    }

    #[inline]
    fn at(&self, x: u32, y: u32) -> [u64; 3] {
        self.data[y as usize * (self.width as usize + 1) + x as usize]
    }

    /// Channel sums over a pixel span.
    ///
    /// The span must come from [`pixel_span`] for this image size (or
    /// otherwise lie within it); an empty span sums to zero.
    pub fn sum_span(&self, span: &PixelSpan) -> [u64; 3] {
        if span.is_empty() {
            return [0; 3];
        }
        let a = self.at(span.x0, span.y0);
        let b = self.at(span.x1, span.y0);
        let c = self.at(span.x0, span.y1);
        let d = self.at(span.x1, span.y1);
        std::array::from_fn(|i| d[i] + a[i] - b[i] - c[i])
    }

    /// Mean color of the valid pixels of `region`.
    ///
    /// Identical to [`crate::stats::average_color`] on the source image,
    /// including the white fallback for regions without valid pixels.
    pub fn mean_in_region(&self, region: &Region) -> Rgb {
        let span = pixel_span(region, self.width, self.height);
        mean_from_sums(self.sum_span(&span), span.count())
    }
}
