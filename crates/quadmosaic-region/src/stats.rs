//! Region statistics
//!
//! Mean color and color variation over the pixels of a [`Region`].
//!
//! # Valid pixels
//!
//! A region is iterated over integer columns `i` with
//! `trunc(x) <= i < x + w` and rows `j` with `trunc(y) <= j < y + h`.
//! Only coordinates inside `[0, W) x [0, H)` count. Truncation is toward
//! zero, so a region starting at `x = -0.5` starts at column 0, and a
//! region ending at `x + w = 3.25` still includes column 3.
//!
//! A region with no valid pixels is not an error: its mean is white and
//! its variation is zero.

use quadmosaic_core::{PixelGrid, Region, Rgb};

/// Clipped integer pixel rectangle `[x0, x1) x [y0, y1)` of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelSpan {
    /// First column (inclusive)
    pub x0: u32,
    /// First row (inclusive)
    pub y0: u32,
    /// Last column (exclusive)
    pub x1: u32,
    /// Last row (exclusive)
    pub y1: u32,
}

impl PixelSpan {
    /// The empty span.
    pub const EMPTY: PixelSpan = PixelSpan {
        x0: 0,
        y0: 0,
        x1: 0,
        y1: 0,
    };

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Number of valid pixels.
    #[inline]
    pub fn count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check whether the span holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }
}

/// Clip one axis of a region to `[0, limit)`.
fn axis_span(start: f32, len: f32, limit: u32) -> (u32, u32) {
    // `i < start + len` holds for every integer below ceil(start + len)
    let first = start.trunc() as i64;
    let end = (start + len).ceil() as i64;
    let lo = first.clamp(0, limit as i64);
    let hi = end.clamp(lo, limit as i64);
    (lo as u32, hi as u32)
}

/// Compute the valid pixel span of `region` in a `width` x `height` image.
///
/// Regions with a non-positive size or non-finite coordinates have an
/// empty span.
pub fn pixel_span(region: &Region, width: u32, height: u32) -> PixelSpan {
    if !region.is_finite() || !region.has_positive_size() {
        return PixelSpan::EMPTY;
    }
    let (x0, x1) = axis_span(region.x, region.w, width);
    let (y0, y1) = axis_span(region.y, region.h, height);
    if x0 >= x1 || y0 >= y1 {
        return PixelSpan::EMPTY;
    }
    PixelSpan { x0, y0, x1, y1 }
}

/// Turn channel sums over `count` pixels into a mean color.
///
/// Shared by the direct scan and the summed-area table so both paths
/// produce bit-identical means.
pub(crate) fn mean_from_sums(sums: [u64; 3], count: u64) -> Rgb {
    if count == 0 {
        return Rgb::WHITE;
    }
    let n = count as f64;
    Rgb::new(
        (sums[0] as f64 / n) as f32,
        (sums[1] as f64 / n) as f32,
        (sums[2] as f64 / n) as f32,
    )
}

/// Per-channel arithmetic mean color of the valid pixels of `region`.
///
/// Returns [`Rgb::WHITE`] when the region has no valid pixels.
///
/// # Examples
///
/// ```
/// use quadmosaic_core::{Pix, Region, Rgb};
/// use quadmosaic_region::average_color;
///
/// let pix = Pix::new_filled(4, 4, 10, 20, 30).unwrap();
/// let mean = average_color(&pix, &Region::new(0.0, 0.0, 4.0, 4.0));
/// assert_eq!(mean, Rgb::new(10.0, 20.0, 30.0));
///
/// // Entirely outside the image
/// let outside = average_color(&pix, &Region::new(10.0, 10.0, 2.0, 2.0));
/// assert_eq!(outside, Rgb::WHITE);
/// ```
pub fn average_color<G: PixelGrid + ?Sized>(grid: &G, region: &Region) -> Rgb {
    let span = pixel_span(region, grid.width(), grid.height());
    let mut sums = [0u64; 3];
    for y in span.y0..span.y1 {
        for x in span.x0..span.x1 {
            let (r, g, b) = grid.rgb_at(x, y);
            sums[0] += r as u64;
            sums[1] += g as u64;
            sums[2] += b as u64;
        }
    }
    mean_from_sums(sums, span.count())
}

/// Mean Euclidean RGB distance between the valid pixels of `region`
/// and `mean`.
///
/// `mean` is expected to be [`average_color`] of the same region; it is not
/// recomputed. Returns 0 when the region has no valid pixels.
pub fn color_variation<G: PixelGrid + ?Sized>(grid: &G, region: &Region, mean: &Rgb) -> f32 {
    let span = pixel_span(region, grid.width(), grid.height());
    if span.is_empty() {
        return 0.0;
    }
    let mut total = 0.0f64;
    for y in span.y0..span.y1 {
        for x in span.x0..span.x1 {
            let (r, g, b) = grid.rgb_at(x, y);
            total += mean.distance_to_rgb8(r, g, b) as f64;
        }
    }
    (total / span.count() as f64) as f32
}

/// Both statistics of a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStats {
    /// Mean color (white if `count == 0`)
    pub mean: Rgb,
    /// Mean distance from `mean` (0 if `count == 0`)
    pub variation: f32,
    /// Number of valid pixels
    pub count: u64,
}

/// Compute mean color and variation of a region in one call.
pub fn region_stats<G: PixelGrid + ?Sized>(grid: &G, region: &Region) -> RegionStats {
    let mean = average_color(grid, region);
    let variation = color_variation(grid, region, &mean);
    let count = pixel_span(region, grid.width(), grid.height()).count();
    RegionStats {
        mean,
        variation,
        count,
    }
}
