use crate::geometry::rectangle::Rectangle;
use crate::result::{GeometryError, GeometryErrorKind, GeometryResult};
use crate::types::Float;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

/// An immutable 2D coordinate.
///
/// The coordinates can only be read after construction, every operation returns a new point.
///
/// ```
/// let point = rectangles::Point::new(3.0, 4.0);
/// assert_eq!((point.x(), point.y()), (3.0, 4.0));
/// ```
///
/// Assigning to a coordinate does not compile:
///
/// ```compile_fail
/// let mut point = rectangles::Point::new(3.0, 4.0);
/// point.x = 0.0;
/// ```
///
/// ```compile_fail
/// let mut point = rectangles::Point::new(3.0, 4.0);
/// point.y = 0.0;
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: Float,
    y: Float,
}

impl Point {
    pub const ZERO: Point = Point::new(0.0, 0.0);

    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Like [`Point::new`], but rejects NaN and infinite coordinates
    pub fn try_new(x: Float, y: Float) -> GeometryResult<Self> {
        check_finite("x", x)?;
        check_finite("y", y)?;
        Ok(Self::new(x, y))
    }

    pub fn x(&self) -> Float {
        self.x
    }

    pub fn y(&self) -> Float {
        self.y
    }

    pub fn plus(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn minus(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Component-wise minimum
    pub fn min(&self, other: &Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    pub fn max(&self, other: &Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn distance(&self, other: &Point) -> Float {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True if both coordinates are strictly greater than the other's
    pub fn greater_than(&self, other: &Point) -> bool {
        self.x > other.x && self.y > other.y
    }

    /// True if both coordinates are strictly less than the other's
    pub fn less_than(&self, other: &Point) -> bool {
        self.x < other.x && self.y < other.y
    }

    pub fn greater_than_or_equal(&self, other: &Point) -> bool {
        self.x >= other.x && self.y >= other.y
    }

    pub fn less_than_or_equal(&self, other: &Point) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// True if this point lies inside the rectangle, edges included.
    /// Rectangles with negative extent are normalized first.
    pub fn is_contained_within(&self, rectangle: &Rectangle) -> bool {
        rectangle.contains_xy(self.x, self.y)
    }
}

pub(crate) fn check_finite(name: &'static str, value: Float) -> GeometryResult<()> {
    if !value.is_finite() {
        return Err(GeometryError::new(
            GeometryErrorKind::NonFiniteCoordinate { name, value },
        ));
    }
    Ok(())
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        self.plus(&rhs)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        self.minus(&rhs)
    }
}

impl Mul<Float> for Point {
    type Output = Point;

    fn mul(self, rhs: Float) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<Float> for Point {
    type Output = Point;

    fn div(self, rhs: Float) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::point::Point;
    use crate::geometry::rectangle::Rectangle;
    use crate::result::GeometryErrorKind;
    use expect_test::expect;

    #[test]
    fn test_new() {
        let p1 = Point::new(3.0, 4.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.x(), p2.x());
        assert_eq!(p1.y(), p2.y());
        assert_eq!(p1, p2);
        expect![[r#"
            Point {
                x: 3.0,
                y: 4.0,
            }
        "#]]
        .assert_debug_eq(&p1);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Point::default(), Point::ZERO);
        assert_eq!(Point::ZERO.x(), 0.0);
        assert_eq!(Point::ZERO.y(), 0.0);
    }

    #[test]
    fn test_operations_leave_receiver_unchanged() {
        let p1 = Point::new(3.0, 4.0);
        let p2 = Point::new(1.0, -1.0);
        let _ = (p1.plus(&p2), p1.minus(&p2), p1.min(&p2), p1.max(&p2), p1 * 2.0);
        assert_eq!(p1, Point::new(3.0, 4.0));
        assert_eq!(p2, Point::new(1.0, -1.0));
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Point::try_new(1.0, 2.0).unwrap(), Point::new(1.0, 2.0));
        let error = Point::try_new(1.0, f64::NAN).expect_err("Should have errored, but was");
        assert!(matches!(
            error.kind(),
            GeometryErrorKind::NonFiniteCoordinate { name: "y", .. }
        ));
        let error = Point::try_new(f64::INFINITY, 1.0).expect_err("Should have errored, but was");
        assert_eq!(
            "Coordinate 'x' must be finite, but was inf",
            error.to_string()
        );
    }

    #[test]
    fn test_plus() {
        let p3 = Point::new(3.0, 4.0).plus(&Point::new(3.0, 4.0));
        assert_eq!(p3, Point::new(6.0, 8.0));
        assert_eq!(Point::new(3.0, 4.0) + Point::new(3.0, 4.0), p3);
    }

    #[test]
    fn test_minus() {
        let p3 = Point::new(3.0, 4.0).minus(&Point::new(3.0, 4.0));
        assert_eq!(p3, Point::ZERO);
        assert_eq!(Point::new(3.0, 4.0) - Point::new(3.0, 4.0), p3);
    }

    #[test]
    fn test_plus_then_minus_is_identity() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(3.0, -4.0),
            Point::new(-17.5, 1e6),
            Point::new(0.25, 0.125),
        ];
        for p in &points {
            for q in &points {
                let back = p.plus(q).minus(q);
                assert!(back.distance(p) < 1e-9, "{p} + {q} - {q} = {back}");
            }
        }
    }

    #[test]
    fn test_min_max() {
        let p1 = Point::new(0.0, 10.0);
        let p2 = Point::new(10.0, 0.0);
        assert_eq!(p1.min(&p2), Point::new(0.0, 0.0));
        assert_eq!(p1.max(&p2), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_scale() {
        assert_eq!(Point::new(3.0, -4.0) * 2.0, Point::new(6.0, -8.0));
        assert_eq!(Point::new(3.0, -4.0) / 2.0, Point::new(1.5, -2.0));
    }

    #[test]
    fn test_distance() {
        let p1 = Point::new(1.0, 5.0);
        let p2 = Point::new(-2.0, 1.0);
        assert_eq!(p1.distance(&p2), 5.0);
        assert_eq!(p2.distance(&p1), 5.0);
        assert_eq!(p1.distance(&p1), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.1, 0.7),
            Point::new(-3.3, 12.0),
            Point::new(1e3, -1e-3),
        ];
        for p in &points {
            for q in &points {
                assert_eq!(p.distance(q), q.distance(p));
            }
        }
    }

    macro_rules! test_predicate {
        ($($name:ident, $predicate:ident, ($x:expr, $y:expr), $expected:expr;)+) => {
            $(#[test]
            fn $name() {
                let origin = Point::new(0.0, 0.0);
                assert_eq!(origin.$predicate(&Point::new($x, $y)), $expected);
            })+
        };
    }

    test_predicate!(
        test_greater_than_self, greater_than, (0.0, 0.0), false;
        test_greater_than_mixed_x, greater_than, (-10.0, 10.0), false;
        test_greater_than_mixed_y, greater_than, (10.0, -10.0), false;
        test_greater_than_both, greater_than, (-10.0, -10.0), true;
        test_greater_than_or_equal_self, greater_than_or_equal, (0.0, 0.0), true;
        test_greater_than_or_equal_y_larger, greater_than_or_equal, (0.0, 10.0), false;
        test_greater_than_or_equal_x_larger, greater_than_or_equal, (10.0, 0.0), false;
        test_greater_than_or_equal_both, greater_than_or_equal, (-10.0, -10.0), true;
        test_less_than_self, less_than, (0.0, 0.0), false;
        test_less_than_mixed_x, less_than, (-10.0, 10.0), false;
        test_less_than_mixed_y, less_than, (10.0, -10.0), false;
        test_less_than_both, less_than, (10.0, 10.0), true;
        test_less_than_or_equal_self, less_than_or_equal, (0.0, 0.0), true;
        test_less_than_or_equal_y_smaller, less_than_or_equal, (0.0, -10.0), false;
        test_less_than_or_equal_x_smaller, less_than_or_equal, (-10.0, 0.0), false;
        test_less_than_or_equal_both, less_than_or_equal, (10.0, 10.0), true;
    );

    #[test]
    fn test_is_contained_within() {
        let p0 = Point::new(1.0, 1.0);
        assert!(p0.is_contained_within(&Rectangle::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!p0.is_contained_within(&Rectangle::new(2.0, 2.0, 10.0, 10.0)));
    }

    #[test]
    fn test_is_contained_within_edges() {
        let rectangle = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(Point::new(0.0, 0.0).is_contained_within(&rectangle));
        assert!(Point::new(10.0, 10.0).is_contained_within(&rectangle));
        assert!(Point::new(10.0, 0.0).is_contained_within(&rectangle));
        assert!(!Point::new(10.5, 5.0).is_contained_within(&rectangle));
    }

    #[test]
    fn test_is_contained_within_inverted_rectangle() {
        let rectangle = Rectangle::new(0.0, 0.0, -10.0, -10.0);
        assert!(Point::new(-5.0, -5.0).is_contained_within(&rectangle));
        assert!(Point::new(-10.0, 0.0).is_contained_within(&rectangle));
        assert!(!Point::new(5.0, 5.0).is_contained_within(&rectangle));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
