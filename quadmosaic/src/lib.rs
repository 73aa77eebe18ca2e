//! quadmosaic - Adaptive quadtree image decomposition
//!
//! Splits an image into axis-aligned rectangles by recursive quadtree
//! subdivision: a region whose pixels vary more than a threshold is cut
//! into four quadrants, otherwise it becomes a single leaf filled with its
//! mean color. Lower thresholds give finer mosaics.
//!
//! # Overview
//!
//! - Image container and geometry ([`Pix`], [`Region`], [`Rgb`])
//! - Region statistics, subdivision and rendering ([`region`])
//! - Reading and writing image files ([`io`])
//!
//! # Example
//!
//! ```
//! use quadmosaic::{Pix, decompose, region::render_leaves};
//!
//! let pix = Pix::new_filled(40, 30, 120, 60, 30).unwrap();
//! let leaves = decompose(&pix, 10.0).unwrap();
//! assert_eq!(leaves.len(), 1);
//!
//! let rendered = render_leaves(pix.width(), pix.height(), &leaves).unwrap();
//! assert_eq!(rendered.get_rgb(5, 5), Some((120, 60, 30)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use quadmosaic_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use quadmosaic_io as io;
pub use quadmosaic_region as region;

// The entry points most callers need
pub use quadmosaic_region::{
    DEFAULT_THRESHOLD, Leaf, SubdivisionOptions, THRESHOLD_RANGE, decompose,
};
