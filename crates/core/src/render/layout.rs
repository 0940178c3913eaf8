//! Generic hex-to-pixel projection for callers that work in cube coordinates.
//! This is **not** how the game board is drawn; see
//! [BoardRenderer](crate::BoardRenderer) for that. The two projections don't
//! line up with each other and shouldn't be mixed.
//!
//! https://www.redblobgames.com/grids/hexagons/implementation.html#layout

use crate::{
    hex::{CubeHex, FractionalHex},
    render::unit::Point,
};
use nalgebra::{Matrix2, Vector2};
use std::f64::consts::PI;

/// How hexes are rotated in pixel space. Holds the matrix that maps `(q, r)`
/// onto pixels, its inverse, and the angle of the first corner (in multiples
/// of 60°).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orientation {
    forward: Matrix2<f64>,
    inverse: Matrix2<f64>,
    start_angle: f64,
}

impl Orientation {
    /// Hexes with a corner pointing straight up
    pub fn pointy() -> Self {
        let sqrt_3 = 3.0_f64.sqrt();
        Self {
            forward: Matrix2::new(sqrt_3, sqrt_3 / 2.0, 0.0, 3.0 / 2.0),
            inverse: Matrix2::new(sqrt_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0),
            start_angle: 0.5,
        }
    }

    /// Hexes with a flat side on top
    pub fn flat() -> Self {
        let sqrt_3 = 3.0_f64.sqrt();
        Self {
            forward: Matrix2::new(3.0 / 2.0, 0.0, sqrt_3 / 2.0, sqrt_3),
            inverse: Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, sqrt_3 / 3.0),
            start_angle: 0.0,
        }
    }

    /// Angle of the first corner, in multiples of 60°
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }
}

/// Everything needed to map hexes onto pixels: orientation, the size of each
/// hex (center to corner, which can differ per axis to squash hexes), and
/// the pixel position of the origin hex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    pub orientation: Orientation,
    pub size: Point,
    pub origin: Point,
}

impl Layout {
    pub fn new(orientation: Orientation, size: Point, origin: Point) -> Self {
        Self {
            orientation,
            size,
            origin,
        }
    }

    /// Get the pixel position of a hex's center
    pub fn hex_to_pixel(&self, hex: CubeHex) -> Point {
        let hex = Vector2::new(f64::from(hex.q()), f64::from(hex.r()));
        let scaled = (self.orientation.forward * hex)
            .component_mul(&Vector2::from(self.size));
        Point::from(scaled) + self.origin
    }

    /// Get the fractional hex under a pixel. Use [FractionalHex::round] (or
    /// [Self::pixel_to_hex_rounded]) to get the containing cell.
    pub fn pixel_to_hex(&self, point: Point) -> FractionalHex {
        let point = Vector2::from(point - self.origin)
            .component_div(&Vector2::from(self.size));
        let hex = self.orientation.inverse * point;
        FractionalHex::new(hex.x, hex.y)
    }

    /// Get the hex that contains a pixel
    pub fn pixel_to_hex_rounded(&self, point: Point) -> CubeHex {
        self.pixel_to_hex(point).round()
    }

    /// Get the offset from a hex's center to one of its corners. Corners are
    /// numbered 0-5, going clockwise in screen space from the start angle.
    pub fn hex_corner_offset(&self, corner: usize) -> Point {
        let angle =
            2.0 * PI * (self.orientation.start_angle + corner as f64) / 6.0;
        Point::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// Get the 6 corners of a hex's outline, in pixel space
    pub fn polygon_corners(&self, hex: CubeHex) -> [Point; 6] {
        let center = self.hex_to_pixel(hex);
        let mut corners = [center; 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner += self.hex_corner_offset(i);
        }
        corners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn pointy_layout() -> Layout {
        Layout::new(
            Orientation::pointy(),
            Point::new(10.0, 10.0),
            Point::new(100.0, 50.0),
        )
    }

    #[test]
    fn test_hex_to_pixel() {
        let layout = pointy_layout();
        assert_eq!(layout.hex_to_pixel(CubeHex::ORIGIN), layout.origin);

        let east = layout.hex_to_pixel(CubeHex::new(1, 0));
        assert_approx_eq!(east.x, 100.0 + 10.0 * 3.0_f64.sqrt());
        assert_approx_eq!(east.y, 50.0);

        let southeast = layout.hex_to_pixel(CubeHex::new(0, 1));
        assert_approx_eq!(southeast.y, 65.0);
    }

    #[test]
    fn test_pixel_round_trip() {
        for layout in &[
            pointy_layout(),
            Layout::new(
                Orientation::flat(),
                Point::new(7.0, 4.0),
                Point::new(-3.0, 12.0),
            ),
        ] {
            for hex in CubeHex::new(2, -1).range(3) {
                let pixel = layout.hex_to_pixel(hex);
                let fractional = layout.pixel_to_hex(pixel);
                assert_approx_eq!(fractional.q(), f64::from(hex.q()));
                assert_approx_eq!(fractional.r(), f64::from(hex.r()));
                assert_eq!(layout.pixel_to_hex_rounded(pixel), hex);
            }
        }
    }

    #[test]
    fn test_pixel_to_hex_near_center() {
        let layout = pointy_layout();
        let center = layout.hex_to_pixel(CubeHex::new(3, -2));
        let nearby = center + Point::new(3.0, -2.0);
        assert_eq!(layout.pixel_to_hex_rounded(nearby), CubeHex::new(3, -2));
    }

    #[test]
    fn test_polygon_corners() {
        let layout = pointy_layout();
        let hex = CubeHex::new(-2, 3);
        let center = layout.hex_to_pixel(hex);
        let corners = layout.polygon_corners(hex);
        for corner in &corners {
            assert_approx_eq!(corner.distance_to(center), 10.0);
        }
        // Pointy hexes start 30° below the horizontal
        assert_approx_eq!(corners[0].x, center.x + 10.0 * 3.0_f64.sqrt() / 2.0);
        assert_approx_eq!(corners[0].y, center.y + 5.0);
    }
}
