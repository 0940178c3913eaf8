use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A 2D point in pixel space. `x` grows to the right and `y` grows downward,
/// matching the background image the board is drawn on.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance between two points
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Point {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Point> for nalgebra::Vector2<f64> {
    fn from(other: Point) -> Self {
        nalgebra::Vector2::new(other.x, other.y)
    }
}

/// Pixel dimensions of the rendered map canvas
#[derive(Copy, Clone, Debug, PartialEq, Display, Serialize, Deserialize)]
#[display(fmt = "{}x{}", "self.width", "self.height")]
pub struct MapSize {
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn test_vector_conversion() {
        let point = Point::new(3.5, -2.0);
        let vector = Vector2::from(point);
        assert_eq!(vector, Vector2::new(3.5, -2.0));
        assert_eq!(Point::from(vector * 2.0), point * 2.0);
    }

    #[test]
    fn test_distance_to() {
        let point = Point::new(1.0, 1.0);
        assert_eq!(point.distance_to(Point::new(4.0, 5.0)), 5.0);
        assert_eq!(point.distance_to(point), 0.0);
    }
}
