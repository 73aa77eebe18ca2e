//! Adaptive quadtree subdivision
//!
//! Recursively splits a region into four quadrants while its color
//! variation exceeds a threshold, and emits one flat-colored [`Leaf`] per
//! region that is uniform enough or too small to split further.
//!
//! # Algorithm
//!
//! For each visited region:
//! 1. `mean` = average color of the region
//! 2. `variation` = mean distance of its pixels from `mean`
//! 3. If `variation > threshold` and both `w > min_size` and
//!    `h > min_size`, recurse into the quadrants in top-left, top-right,
//!    bottom-left, bottom-right order and concatenate their leaves.
//! 4. Otherwise emit a single leaf colored `mean`.
//!
//! The size floor is a hard stop regardless of variation, so every run
//! terminates after at most [`max_depth`] levels. The leaves of one run
//! tile the input region exactly.

use crate::error::{RegionError, RegionResult};
use crate::integral::ColorIntegral;
use crate::stats::color_variation;
use quadmosaic_core::{PixelGrid, Region, Rgb};
use std::ops::RangeInclusive;
use tracing::{debug, debug_span, trace};

/// Default variation threshold
pub const DEFAULT_THRESHOLD: f32 = 10.0;

/// Default size floor: regions this small or smaller are never split
pub const DEFAULT_MIN_SIZE: f32 = 6.0;

/// Threshold range interactive callers should offer
pub const THRESHOLD_RANGE: RangeInclusive<f32> = 5.0..=50.0;

/// Regions smaller than this (in pixels) are not worth a parallel split
#[cfg(feature = "parallel")]
const PARALLEL_MIN_AREA: f64 = 64.0 * 64.0;

/// A terminal region of a decomposition and its mean color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leaf {
    /// Region covered by the leaf
    pub region: Region,
    /// Mean color of the region's valid pixels (white if it has none)
    pub color: Rgb,
    /// Recursion depth at which the leaf was emitted (0 = input region)
    pub depth: u32,
}

/// Options for quadtree subdivision
#[derive(Debug, Clone, PartialEq)]
pub struct SubdivisionOptions {
    /// Variation above which a region is split
    pub threshold: f32,
    /// Regions with `w <= min_size` or `h <= min_size` are never split
    pub min_size: f32,
    /// Compute sibling quadrants in parallel (needs the `parallel` feature,
    /// ignored otherwise). Output order is unaffected.
    pub parallel: bool,
}

impl Default for SubdivisionOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_size: DEFAULT_MIN_SIZE,
            parallel: false,
        }
    }
}

impl SubdivisionOptions {
    /// Create options with the given threshold and default size floor
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    /// Set the variation threshold
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the size floor
    pub fn with_min_size(mut self, min_size: f32) -> Self {
        self.min_size = min_size;
        self
    }

    /// Enable or disable parallel sibling computation
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the options.
    ///
    /// # Errors
    ///
    /// - [`RegionError::InvalidThreshold`] if the threshold is negative or
    ///   not finite
    /// - [`RegionError::InvalidParameters`] if `min_size` is not finite or
    ///   below one pixel
    pub fn validate(&self) -> RegionResult<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(RegionError::InvalidThreshold(self.threshold));
        }
        if !self.min_size.is_finite() || self.min_size < 1.0 {
            return Err(RegionError::InvalidParameters(format!(
                "min_size must be a finite value >= 1, got {}",
                self.min_size
            )));
        }
        Ok(())
    }
}

fn validate_region(region: &Region) -> RegionResult<()> {
    if !region.is_finite() || !region.has_positive_size() {
        return Err(RegionError::InvalidRegion {
            x: region.x,
            y: region.y,
            w: region.w,
            h: region.h,
        });
    }
    Ok(())
}

/// Quadtree subdivider bound to one image.
///
/// Building a `Subdivider` precomputes a [`ColorIntegral`] of the image,
/// so repeated runs (for example while a user drags a threshold slider)
/// only pay for the variation scans. Every [`Subdivider::run`] starts from
/// an empty leaf list.
pub struct Subdivider<'a, G: PixelGrid + ?Sized> {
    grid: &'a G,
    integral: ColorIntegral,
    options: SubdivisionOptions,
}

impl<'a, G: PixelGrid + ?Sized> Subdivider<'a, G> {
    /// Create a subdivider for `grid`.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` fail [`SubdivisionOptions::validate`].
    pub fn new(grid: &'a G, options: SubdivisionOptions) -> RegionResult<Self> {
        options.validate()?;
        Ok(Self {
            grid,
            integral: ColorIntegral::from_grid(grid),
            options,
        })
    }

    /// Get the current options
    pub fn options(&self) -> &SubdivisionOptions {
        &self.options
    }

    /// Replace the threshold used by subsequent runs.
    pub fn set_threshold(&mut self, threshold: f32) -> RegionResult<()> {
        let options = self.options.clone().with_threshold(threshold);
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Decompose the whole image.
    pub fn run_image(&self) -> RegionResult<Vec<Leaf>> {
        self.run(Region::from_size(self.grid.width(), self.grid.height()))
    }

    /// Decompose `region` into leaves.
    ///
    /// The region may extend past the image; parts without valid pixels
    /// become white leaves.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidRegion`] if the region has a
    /// non-positive size or a non-finite coordinate. Nothing is computed in
    /// that case.
    pub fn run(&self, region: Region) -> RegionResult<Vec<Leaf>> {
        validate_region(&region)?;

        let _span = debug_span!(
            "decompose",
            threshold = self.options.threshold,
            min_size = self.options.min_size,
            w = region.w,
            h = region.h
        )
        .entered();

        let leaves = self.subdivide(region, 0);
        debug!(
            leaves = leaves.len(),
            depth = max_leaf_depth(&leaves),
            "decomposition complete"
        );
        Ok(leaves)
    }

    fn should_split(&self, region: &Region, variation: f32) -> bool {
        variation > self.options.threshold
            && region.w > self.options.min_size
            && region.h > self.options.min_size
    }

    fn subdivide(&self, region: Region, depth: u32) -> Vec<Leaf> {
        let mean = self.integral.mean_in_region(&region);
        let variation = color_variation(self.grid, &region, &mean);

        if !self.should_split(&region, variation) {
            return vec![Leaf {
                region,
                color: mean,
                depth,
            }];
        }

        trace!(x = region.x, y = region.y, w = region.w, h = region.h, variation, "split");
        let quads = region.quadrants();
        let [tl, tr, bl, br] = self.subdivide_quadrants(quads, depth + 1);

        let mut leaves = tl;
        leaves.reserve(tr.len() + bl.len() + br.len());
        leaves.extend(tr);
        leaves.extend(bl);
        leaves.extend(br);
        leaves
    }

    #[cfg(not(feature = "parallel"))]
    fn subdivide_quadrants(&self, quads: [Region; 4], depth: u32) -> [Vec<Leaf>; 4] {
        quads.map(|q| self.subdivide(q, depth))
    }

    #[cfg(feature = "parallel")]
    fn subdivide_quadrants(&self, quads: [Region; 4], depth: u32) -> [Vec<Leaf>; 4] {
        if !self.options.parallel || quads[0].area() * 4.0 < PARALLEL_MIN_AREA {
            return quads.map(|q| self.subdivide(q, depth));
        }
        let ((tl, tr), (bl, br)) = rayon::join(
            || {
                rayon::join(
                    || self.subdivide(quads[0], depth),
                    || self.subdivide(quads[1], depth),
                )
            },
            || {
                rayon::join(
                    || self.subdivide(quads[2], depth),
                    || self.subdivide(quads[3], depth),
                )
            },
        );
        [tl, tr, bl, br]
    }
}

/// Decompose the whole image with the given threshold and default options.
///
/// # Examples
///
/// ```
/// use quadmosaic_core::{Pix, Region, Rgb};
/// use quadmosaic_region::decompose;
///
/// let pix = Pix::new_filled(4, 4, 10, 20, 30).unwrap();
/// let leaves = decompose(&pix, 10.0).unwrap();
/// assert_eq!(leaves.len(), 1);
/// assert_eq!(leaves[0].region, Region::new(0.0, 0.0, 4.0, 4.0));
/// assert_eq!(leaves[0].color, Rgb::new(10.0, 20.0, 30.0));
/// ```
///
/// # Errors
///
/// Returns [`RegionError::InvalidThreshold`] for a negative or non-finite
/// threshold and [`RegionError::InvalidRegion`] for an image with no
/// pixels.
pub fn decompose<G: PixelGrid + ?Sized>(grid: &G, threshold: f32) -> RegionResult<Vec<Leaf>> {
    let region = Region::from_size(grid.width(), grid.height());
    decompose_region(grid, region, &SubdivisionOptions::new(threshold))
}

/// Decompose an arbitrary region with explicit options.
///
/// Arguments are validated before any pixel is read.
pub fn decompose_region<G: PixelGrid + ?Sized>(
    grid: &G,
    region: Region,
    options: &SubdivisionOptions,
) -> RegionResult<Vec<Leaf>> {
    options.validate()?;
    validate_region(&region)?;
    Subdivider::new(grid, options.clone())?.run(region)
}

/// Upper bound on the depth of any leaf for a `width` x `height` region.
///
/// Counts how many times a region of that size can be halved before one
/// side drops to `min_size` or below. Never exceeds
/// `ceil(log2(max(width, height) / min_size)) + 1`.
pub fn max_depth(width: f32, height: f32, min_size: f32) -> u32 {
    if !(min_size >= 1.0) || !width.is_finite() || !height.is_finite() {
        return 0;
    }
    let (mut w, mut h) = (width, height);
    let mut depth = 0;
    while w > min_size && h > min_size {
        w /= 2.0;
        h /= 2.0;
        depth += 1;
    }
    depth
}

/// Total area covered by a set of leaves.
pub fn leaf_area_sum(leaves: &[Leaf]) -> f64 {
    leaves.iter().map(|leaf| leaf.region.area()).sum()
}

/// Deepest leaf depth, 0 for an empty slice.
pub fn max_leaf_depth(leaves: &[Leaf]) -> u32 {
    leaves.iter().map(|leaf| leaf.depth).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadmosaic_core::Pix;

    fn checker(size: u32, cell: u32) -> Pix {
        let mut pix_mut = Pix::new(size, size).unwrap().to_mut();
        for cy in (0..size).step_by(cell as usize) {
            for cx in (0..size).step_by(cell as usize) {
                if ((cx / cell) + (cy / cell)) % 2 == 1 {
                    pix_mut.fill_rect_rgb(
                        cx as i64,
                        cy as i64,
                        (cx + cell) as i64,
                        (cy + cell) as i64,
                        (255, 255, 255),
                    );
                }
            }
        }
        pix_mut.into()
    }

    #[test]
    fn test_single_color_end_to_end() {
        let pix = Pix::new_filled(4, 4, 10, 20, 30).unwrap();
        let leaves = decompose_region(
            &pix,
            Region::new(0.0, 0.0, 4.0, 4.0),
            &SubdivisionOptions::new(10.0),
        )
        .unwrap();
        assert_eq!(
            leaves,
            vec![Leaf {
                region: Region::new(0.0, 0.0, 4.0, 4.0),
                color: Rgb::new(10.0, 20.0, 30.0),
                depth: 0,
            }]
        );
    }

    #[test]
    fn test_size_floor_eight_pixels() {
        // 8x8 with 4x4 cells: each quadrant is uniform
        let pix = checker(8, 4);

        // variation is 127.5 * sqrt(3) ~ 220.8
        let unsplit = decompose(&pix, 250.0).unwrap();
        assert_eq!(unsplit.len(), 1);
        assert_eq!(unsplit[0].color, Rgb::new(127.5, 127.5, 127.5));

        let split = decompose(&pix, 10.0).unwrap();
        assert_eq!(split.len(), 4);
        let expected = [
            (0.0, 0.0, Rgb::BLACK),
            (4.0, 0.0, Rgb::WHITE),
            (0.0, 4.0, Rgb::WHITE),
            (4.0, 4.0, Rgb::BLACK),
        ];
        for (leaf, (x, y, color)) in split.iter().zip(expected) {
            assert_eq!(leaf.region, Region::new(x, y, 4.0, 4.0));
            assert_eq!(leaf.color, color);
            assert_eq!(leaf.depth, 1);
        }
    }

    #[test]
    fn test_six_pixel_region_never_splits() {
        let pix = checker(6, 1);
        let leaves = decompose(&pix, 0.0).unwrap();
        assert_eq!(leaves.len(), 1);
    }

    #[test]
    fn test_threshold_equal_to_variation_does_not_split() {
        let pix = checker(8, 4);
        let region = Region::from_size(8, 8);
        let stats = crate::stats::region_stats(&pix, &region);
        let leaves = decompose(&pix, stats.variation).unwrap();
        assert_eq!(leaves.len(), 1);
    }

    #[test]
    fn test_out_of_bounds_region_is_white_leaf() {
        let pix = checker(8, 4);
        let leaves = decompose_region(
            &pix,
            Region::new(100.0, 100.0, 50.0, 50.0),
            &SubdivisionOptions::new(0.0),
        )
        .unwrap();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].color, Rgb::WHITE);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let pix = checker(8, 4);
        let opts = SubdivisionOptions::default();
        for region in [
            Region::new(0.0, 0.0, 0.0, 8.0),
            Region::new(0.0, 0.0, 8.0, -1.0),
            Region::new(f32::NAN, 0.0, 8.0, 8.0),
            Region::new(0.0, f32::INFINITY, 8.0, 8.0),
        ] {
            assert!(matches!(
                decompose_region(&pix, region, &opts),
                Err(RegionError::InvalidRegion { .. })
            ));
        }
        for threshold in [-1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                decompose(&pix, threshold),
                Err(RegionError::InvalidThreshold(_))
            ));
        }
        let bad_floor = SubdivisionOptions::default().with_min_size(0.5);
        assert!(matches!(
            decompose_region(&pix, Region::from_size(8, 8), &bad_floor),
            Err(RegionError::InvalidParameters(_))
        ));
        let empty = Pix::new(0, 4).unwrap();
        assert!(matches!(
            decompose(&empty, 10.0),
            Err(RegionError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_subdivider_runs_are_independent() {
        let pix = checker(32, 4);
        let mut subdivider = Subdivider::new(&pix, SubdivisionOptions::new(5.0)).unwrap();
        let fine = subdivider.run_image().unwrap();
        let again = subdivider.run_image().unwrap();
        assert_eq!(fine, again);

        subdivider.set_threshold(1000.0).unwrap();
        let coarse = subdivider.run_image().unwrap();
        assert_eq!(coarse.len(), 1);
        assert!(subdivider.set_threshold(-2.0).is_err());
        assert_eq!(subdivider.options().threshold, 1000.0);
    }

    #[test]
    fn test_custom_min_size() {
        let pix = checker(16, 1);
        let floor_six = decompose(&pix, 1.0).unwrap();
        let floor_two = decompose_region(
            &pix,
            Region::from_size(16, 16),
            &SubdivisionOptions::new(1.0).with_min_size(2.0),
        )
        .unwrap();
        // 16 -> 8 -> 4 with the default floor, 16 -> 8 -> 4 -> 2 with floor 2
        assert_eq!(floor_six.len(), 16);
        assert_eq!(floor_two.len(), 64);
    }

    #[test]
    fn test_variation_measured_against_exact_mean() {
        // Every third column is (1, 1, 1): mean 1/3 per channel
        let mut bytes = Vec::new();
        for _y in 0..9 {
            for x in 0..9 {
                let v = u8::from(x % 3 == 2);
                bytes.extend_from_slice(&[v, v, v]);
            }
        }
        let pix = Pix::from_rgb_bytes(9, 9, &bytes).unwrap();
        let region = Region::from_size(9, 9);

        let stats = crate::stats::region_stats(&pix, &region);
        let third = 1.0f32 / 3.0;
        assert!((stats.mean.r - third).abs() < 1e-6);
        // 4/9 * sqrt(3) against the exact mean, 3/9 * sqrt(3) against a
        // mean truncated to 0
        assert!((stats.variation - 4.0 / 9.0 * 3f32.sqrt()).abs() < 1e-5);
        let truncated = color_variation(&pix, &region, &Rgb::BLACK);
        assert!(truncated < 0.7 && stats.variation > 0.7);

        let leaves = decompose(&pix, 0.7).unwrap();
        assert_eq!(leaves.len(), 4);
    }

    #[test]
    fn test_max_depth() {
        assert_eq!(max_depth(4.0, 4.0, 6.0), 0);
        assert_eq!(max_depth(8.0, 8.0, 6.0), 1);
        assert_eq!(max_depth(1000.0, 1000.0, 6.0), 8);
        assert_eq!(max_depth(1000.0, 7.0, 6.0), 1);
        assert_eq!(max_depth(16.0, 16.0, 2.0), 3);
        assert_eq!(max_depth(10.0, 10.0, 0.0), 0);
    }

    #[test]
    fn test_leaf_helpers() {
        assert_eq!(leaf_area_sum(&[]), 0.0);
        assert_eq!(max_leaf_depth(&[]), 0);
        let pix = checker(16, 4);
        let leaves = decompose(&pix, 1.0).unwrap();
        assert_eq!(leaf_area_sum(&leaves), 256.0);
        assert_eq!(max_leaf_depth(&leaves), 2);
    }
}
