use glam::Vec2;

use super::Viewport;

/// Maps a pixel position to NDC.
///
/// `(0, 0)` is the top-left corner `(-1, 1)`; `(W, H)` is the bottom-right corner `(1, -1)`.
#[inline]
pub fn pixel_to_ndc(viewport: Viewport, pixel: Vec2) -> Vec2 {
    Vec2::new(
        2.0 * pixel.x / viewport.width - 1.0,
        1.0 - 2.0 * pixel.y / viewport.height,
    )
}

/// Maps a pixel-space size to an NDC size. Both components stay positive.
#[inline]
pub fn pixel_extent_to_ndc(viewport: Viewport, extent: Vec2) -> Vec2 {
    Vec2::new(2.0 * extent.x / viewport.width, 2.0 * extent.y / viewport.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn hd() -> Viewport {
        Viewport::new(1280.0, 720.0)
    }

    #[test]
    fn origin_is_top_left() {
        assert_eq!(pixel_to_ndc(hd(), Vec2::ZERO), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn far_corner_is_bottom_right() {
        let p = pixel_to_ndc(hd(), Vec2::new(1280.0, 720.0));
        assert!((p - Vec2::new(1.0, -1.0)).abs().max_element() < EPS);
    }

    #[test]
    fn center_maps_to_zero() {
        let p = pixel_to_ndc(hd(), Vec2::new(640.0, 360.0));
        assert!(p.abs().max_element() < EPS);
    }

    #[test]
    fn y_is_flipped() {
        let upper = pixel_to_ndc(hd(), Vec2::new(0.0, 100.0));
        let lower = pixel_to_ndc(hd(), Vec2::new(0.0, 200.0));
        assert!(lower.y < upper.y);
    }

    #[test]
    fn full_viewport_extent_is_two() {
        let e = pixel_extent_to_ndc(Viewport::new(800.0, 600.0), Vec2::new(800.0, 600.0));
        assert_eq!(e, Vec2::new(2.0, 2.0));
    }
}
