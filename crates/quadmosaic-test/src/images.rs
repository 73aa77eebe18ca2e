//! Synthetic test images
//!
//! Each builder produces a deterministic RGB image with known statistics,
//! which keeps regression expectations computable by hand.

use crate::error::TestResult;
use quadmosaic_core::Pix;

type Rgb8 = (u8, u8, u8);

fn build(width: u32, height: u32, f: impl Fn(u32, u32) -> Rgb8) -> TestResult<Pix> {
    let mut bytes = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = f(x, y);
            bytes.extend_from_slice(&[r, g, b]);
        }
    }
    Ok(Pix::from_rgb_bytes(width, height, &bytes)?)
}

/// Image where every pixel is `color`.
pub fn solid_image(width: u32, height: u32, color: Rgb8) -> TestResult<Pix> {
    Ok(Pix::new_filled(width, height, color.0, color.1, color.2)?)
}

/// Horizontal gradient: red rises left to right, blue falls, green is fixed.
pub fn gradient_image(width: u32, height: u32) -> TestResult<Pix> {
    let span = width.saturating_sub(1).max(1);
    build(width, height, |x, _| {
        let r = (x * 255 / span) as u8;
        (r, 128, 255 - r)
    })
}

/// Checkerboard of `cell` x `cell` squares alternating `a` and `b`,
/// starting with `a` at the origin.
pub fn checkerboard_image(
    width: u32,
    height: u32,
    cell: u32,
    a: Rgb8,
    b: Rgb8,
) -> TestResult<Pix> {
    let cell = cell.max(1);
    build(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b }
    })
}

/// Image split at its center into four flat quadrants, given in
/// top-left, top-right, bottom-left, bottom-right order.
pub fn quadrant_image(width: u32, height: u32, colors: [Rgb8; 4]) -> TestResult<Pix> {
    let (cx, cy) = (width / 2, height / 2);
    build(width, height, |x, y| {
        let idx = usize::from(x >= cx) + 2 * usize::from(y >= cy);
        colors[idx]
    })
}

/// Smoothly varying color pattern with features at several scales.
pub fn pattern_image(width: u32, height: u32) -> TestResult<Pix> {
    let (fw, fh) = (width.max(1) as f32, height.max(1) as f32);
    build(width, height, |x, y| {
        let fx = x as f32 / fw;
        let fy = y as f32 / fh;
        let tau = std::f32::consts::TAU;
        let r = 128.0 + 60.0 * (fx * tau).sin() + 40.0 * (fy * 2.0 * tau).cos();
        let g = 128.0 + 90.0 * ((fx + fy) * 9.42).sin();
        let b = 255.0 * fx * fy;
        (
            r.clamp(0.0, 255.0) as u8,
            g.clamp(0.0, 255.0) as u8,
            b.clamp(0.0, 255.0) as u8,
        )
    })
}
