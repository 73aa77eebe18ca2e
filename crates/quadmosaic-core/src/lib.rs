//! quadmosaic core - Basic data structures for quadtree image decomposition
//!
//! This crate provides the fundamental data structures used throughout
//! the quadmosaic workspace:
//!
//! - [`Pix`] / [`PixMut`] - The RGB image container (immutable / mutable)
//! - [`PixelGrid`] - Read-only pixel access shared by every analysis routine
//! - [`Region`] - Floating-point rectangle in image pixel coordinates
//! - [`Rgb`] - Unquantized mean color with channel values in `0.0..=255.0`
//!
//! # Examples
//!
//! ```
//! use quadmosaic_core::{Pix, PixelGrid};
//!
//! let pix = Pix::new_filled(64, 48, 255, 255, 255).unwrap();
//! assert_eq!(pix.width(), 64);
//! assert_eq!(PixelGrid::rgb_at(&pix, 0, 0), (255, 255, 255));
//! ```

pub mod color;
pub mod error;
pub mod grid;
pub mod pix;
pub mod region;

pub use color::Rgb;
pub use error::{Error, Result};
pub use grid::PixelGrid;
pub use pix::{Pix, PixMut};
pub use region::Region;
