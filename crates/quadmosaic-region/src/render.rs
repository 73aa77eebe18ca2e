//! Leaf rendering
//!
//! Paints a decomposition back into an image: a white canvas with every
//! leaf filled with its quantized mean color, in output order.

use crate::error::RegionResult;
use crate::stats::pixel_span;
use crate::subdivide::{Leaf, decompose};
use quadmosaic_core::{Pix, PixelGrid};

/// Render `leaves` onto a new `width` x `height` white canvas.
///
/// Each leaf covers the same pixels the statistics were computed over,
/// so leaves with fractional edges may share a boundary column or row;
/// later leaves overwrite earlier ones there. Parts of leaves outside the
/// canvas are clipped.
pub fn render_leaves(width: u32, height: u32, leaves: &[Leaf]) -> RegionResult<Pix> {
    let mut canvas = Pix::new_filled(width, height, 255, 255, 255)?.to_mut();
    for leaf in leaves {
        let span = pixel_span(&leaf.region, width, height);
        if span.is_empty() {
            continue;
        }
        canvas.fill_rect_rgb(
            span.x0 as i64,
            span.y0 as i64,
            span.x1 as i64,
            span.y1 as i64,
            leaf.color.to_rgb8(),
        );
    }
    Ok(canvas.into())
}

/// Decompose an image with `threshold` and render the result at the same size.
pub fn render_decomposition<G: PixelGrid + ?Sized>(grid: &G, threshold: f32) -> RegionResult<Pix> {
    let leaves = decompose(grid, threshold)?;
    render_leaves(grid.width(), grid.height(), &leaves)
}
