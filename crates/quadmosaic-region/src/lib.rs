//! quadmosaic-region - Adaptive quadtree decomposition
//!
//! This crate decomposes an image into flat-colored rectangles:
//!
//! - **Region statistics** - Mean color and color variation of a region
//! - **Summed-area table** - Constant-time region means
//! - **Subdivision** - Recursive quadtree splitting driven by a variation
//!   threshold
//! - **Rendering** - Painting the resulting leaves back into an image
//!
//! # Examples
//!
//! ## Decomposing an image
//!
//! ```
//! use quadmosaic_core::{Pix, Rgb};
//! use quadmosaic_region::{decompose, leaf_area_sum};
//!
//! // Left half black, right half white
//! let mut pix_mut = Pix::new(32, 32).unwrap().to_mut();
//! pix_mut.fill_rect_rgb(16, 0, 32, 32, (255, 255, 255));
//! let pix: Pix = pix_mut.into();
//!
//! let leaves = decompose(&pix, 10.0).unwrap();
//! assert_eq!(leaves.len(), 4);
//! assert_eq!(leaves[0].color, Rgb::BLACK);
//! assert_eq!(leaves[1].color, Rgb::WHITE);
//! assert_eq!(leaf_area_sum(&leaves), 32.0 * 32.0);
//! ```
//!
//! ## Reusing a subdivider across thresholds
//!
//! ```
//! use quadmosaic_core::Pix;
//! use quadmosaic_region::{SubdivisionOptions, Subdivider};
//!
//! let pix = Pix::new_filled(64, 64, 90, 90, 90).unwrap();
//! let mut subdivider = Subdivider::new(&pix, SubdivisionOptions::new(5.0)).unwrap();
//! let fine = subdivider.run_image().unwrap();
//! subdivider.set_threshold(50.0).unwrap();
//! let coarse = subdivider.run_image().unwrap();
//! assert!(coarse.len() <= fine.len());
//! ```

pub mod error;
pub mod integral;
pub mod render;
pub mod stats;
pub mod subdivide;

// Re-export core types
pub use quadmosaic_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export statistics types and functions
pub use stats::{PixelSpan, RegionStats, average_color, color_variation, pixel_span, region_stats};

// Re-export integral image
pub use integral::ColorIntegral;

// Re-export subdivision types and functions
pub use subdivide::{
    DEFAULT_MIN_SIZE, DEFAULT_THRESHOLD, Leaf, SubdivisionOptions, Subdivider, THRESHOLD_RANGE,
    decompose, decompose_region, leaf_area_sum, max_depth, max_leaf_depth,
};

// Re-export rendering functions
pub use render::{render_decomposition, render_leaves};
