//! Integer pixel geometry.

/// A pixel position on the canvas, origin top-left, y down.
pub type PixelPoint = glam::IVec2;

/// An axis-aligned pixel box: top-left corner plus size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exact center, which lies between pixels for odd sizes.
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// A box with no area draws nothing.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Square box of side `size` around `point`.
///
/// The offset uses integer division, so odd sizes leave the box one pixel
/// heavier on the bottom-right.
pub fn rect_around(point: PixelPoint, size: i32) -> PixelRect {
    let half = size / 2;
    PixelRect::new(point.x.saturating_sub(half), point.y.saturating_sub(half), size, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_around_even_size() {
        let rect = rect_around(PixelPoint::new(512, 512), 16);
        assert_eq!(rect, PixelRect::new(504, 504, 16, 16));
        assert_eq!(rect.center(), (512.0, 512.0));
    }

    #[test]
    fn test_rect_around_odd_size_is_asymmetric() {
        let rect = rect_around(PixelPoint::new(10, 20), 5);
        assert_eq!(rect, PixelRect::new(8, 18, 5, 5));
        // Two pixels above/left of the point, three including it below/right.
        assert_eq!(rect.x + rect.width - 10, 3);
        assert_eq!(10 - rect.x, 2);
    }

    #[test]
    fn test_zero_size_is_empty() {
        assert!(rect_around(PixelPoint::new(3, 3), 0).is_empty());
        assert!(!rect_around(PixelPoint::new(3, 3), 1).is_empty());
    }
}
