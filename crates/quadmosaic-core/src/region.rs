//! Region - Floating-point rectangles
//!
//! Regions are described in image pixel coordinates but are not required
//! to be pixel aligned: halving an odd-sized region yields fractional
//! origins and sizes. A region may lie partly or entirely outside the image.

/// An axis-aligned rectangle `(x, y, w, h)`.
///
/// Unlike integer boxes, a `Region` is never validated on construction;
/// entry points that require a proper rectangle check
/// [`Region::is_finite`] and [`Region::has_positive_size`] themselves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    /// Left x coordinate
    pub x: f32,
    /// Top y coordinate
    pub y: f32,
    /// Width
    pub w: f32,
    /// Height
    pub h: f32,
}

impl Region {
    /// Create a new region
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Region covering a `width` x `height` image from the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: width as f32,
            h: height as f32,
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> f64 {
        self.w as f64 * self.h as f64
    }

    /// Check that all four components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }

    /// Check that both width and height are strictly positive.
    #[inline]
    pub fn has_positive_size(&self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }

    /// Check if a point is inside the region
    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this region contains another region
    pub fn contains_region(&self, other: &Region) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Area shared by two regions, zero if they do not overlap.
    pub fn overlap_area(&self, other: &Region) -> f64 {
        let x = self.x.max(other.x) as f64;
        let y = self.y.max(other.y) as f64;
        let right = self.right().min(other.right()) as f64;
        let bottom = self.bottom().min(other.bottom()) as f64;
        if x < right && y < bottom {
            (right - x) * (bottom - y)
        } else {
            0.0
        }
    }

    /// Split into four half-sized quadrants.
    ///
    /// Order is top-left, top-right, bottom-left, bottom-right.
    pub fn quadrants(&self) -> [Region; 4] {
        let half_w = self.w / 2.0;
        let half_h = self.h / 2.0;
        [
            Region::new(self.x, self.y, half_w, half_h),
            Region::new(self.x + half_w, self.y, half_w, half_h),
            Region::new(self.x, self.y + half_h, half_w, half_h),
            Region::new(self.x + half_w, self.y + half_h, half_w, half_h),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_area() {
        let r = Region::new(1.5, 2.0, 3.0, 4.0);
        assert_eq!(r.right(), 4.5);
        assert_eq!(r.bottom(), 6.0);
        assert_eq!(r.area(), 12.0);
    }

    #[test]
    fn test_from_size() {
        assert_eq!(Region::from_size(10, 7), Region::new(0.0, 0.0, 10.0, 7.0));
    }

    #[test]
    fn test_quadrants_order_and_tiling() {
        let r = Region::new(0.0, 0.0, 10.0, 6.0);
        let q = r.quadrants();
        assert_eq!(q[0], Region::new(0.0, 0.0, 5.0, 3.0));
        assert_eq!(q[1], Region::new(5.0, 0.0, 5.0, 3.0));
        assert_eq!(q[2], Region::new(0.0, 3.0, 5.0, 3.0));
        assert_eq!(q[3], Region::new(5.0, 3.0, 5.0, 3.0));

        let total: f64 = q.iter().map(Region::area).sum();
        assert_eq!(total, r.area());
        for (i, a) in q.iter().enumerate() {
            assert!(r.contains_region(a));
            for b in &q[i + 1..] {
                assert_eq!(a.overlap_area(b), 0.0);
            }
        }
    }

    #[test]
    fn test_quadrants_fractional() {
        let q = Region::new(0.0, 0.0, 7.0, 7.0).quadrants();
        assert_eq!(q[3], Region::new(3.5, 3.5, 3.5, 3.5));
    }

    #[test]
    fn test_validity_checks() {
        assert!(Region::new(0.0, 0.0, 1.0, 1.0).has_positive_size());
        assert!(!Region::new(0.0, 0.0, 0.0, 1.0).has_positive_size());
        assert!(!Region::new(0.0, 0.0, 1.0, -1.0).has_positive_size());
        assert!(!Region::new(f32::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(!Region::new(0.0, 0.0, f32::INFINITY, 1.0).is_finite());
    }

    #[test]
    fn test_overlap_area() {
        let a = Region::new(0.0, 0.0, 4.0, 4.0);
        let b = Region::new(2.0, 2.0, 4.0, 4.0);
        assert_eq!(a.overlap_area(&b), 4.0);
        assert_eq!(a.overlap_area(&Region::new(4.0, 0.0, 1.0, 1.0)), 0.0);
        assert!(a.contains_point(0.0, 3.9));
        assert!(!a.contains_point(4.0, 0.0));
    }
}
