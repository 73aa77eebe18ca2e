//! Drawing primitives
//!
//! Filled rectangles clipped to the image, used to paint decomposition
//! leaves back onto a canvas.

use super::PixMut;
use crate::color::compose_rgb;

impl PixMut {
    /// Fill the pixel rectangle `[x0, x1) x [y0, y1)` with `(r, g, b)`.
    ///
    /// The rectangle is clipped to the image; an empty or fully outside
    /// rectangle is a no-op. Returns the number of pixels written.
    pub fn fill_rect_rgb(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, rgb: (u8, u8, u8)) -> u64 {
        let width = self.width() as i64;
        let height = self.height() as i64;
        let xs = x0.max(0);
        let ys = y0.max(0);
        let xe = x1.min(width);
        let ye = y1.min(height);
        if xs >= xe || ys >= ye {
            return 0;
        }

        let pixel = compose_rgb(rgb.0, rgb.1, rgb.2);
        let w = width as usize;
        let data = self.data_mut();
        for y in ys..ye {
            let row = y as usize * w;
            data[row + xs as usize..row + xe as usize].fill(pixel);
        }
        ((xe - xs) * (ye - ys)) as u64
    }
}

#[cfg(test)]
mod tests {
    use crate::Pix;

    #[test]
    fn test_fill_rect_inside() {
        let mut pix_mut = Pix::new(6, 6).unwrap().to_mut();
        let n = pix_mut.fill_rect_rgb(1, 2, 4, 5, (9, 9, 9));
        assert_eq!(n, 9);
        assert_eq!(pix_mut.get_rgb(1, 2), Some((9, 9, 9)));
        assert_eq!(pix_mut.get_rgb(3, 4), Some((9, 9, 9)));
        assert_eq!(pix_mut.get_rgb(4, 4), Some((0, 0, 0)));
        assert_eq!(pix_mut.get_rgb(1, 5), Some((0, 0, 0)));
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut pix_mut = Pix::new(4, 4).unwrap().to_mut();
        let n = pix_mut.fill_rect_rgb(-2, -2, 2, 10, (1, 2, 3));
        assert_eq!(n, 8);
        assert_eq!(pix_mut.get_rgb(0, 0), Some((1, 2, 3)));
        assert_eq!(pix_mut.get_rgb(1, 3), Some((1, 2, 3)));
        assert_eq!(pix_mut.get_rgb(2, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_fill_rect_outside_is_noop() {
        let mut pix_mut = Pix::new(4, 4).unwrap().to_mut();
        assert_eq!(pix_mut.fill_rect_rgb(4, 0, 8, 4, (1, 1, 1)), 0);
        assert_eq!(pix_mut.fill_rect_rgb(2, 2, 2, 4, (1, 1, 1)), 0);
        assert!(pix_mut.data().iter().all(|&p| p == crate::color::compose_rgb(0, 0, 0)));
    }
}
