use crate::geometry::containable::Containable;
use crate::geometry::lattice::LatticePoints;
use crate::geometry::point::{check_finite, Point};
use crate::result::GeometryResult;
use crate::types::Float;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use tracing::trace;

/// An immutable axis-aligned rectangle.
///
/// Stored as an `origin` and a signed `extent` (width, height). A negative extent
/// describes a rectangle given "backwards" from its origin; containment checks
/// normalize such rectangles, the other operations work on the raw corners.
///
/// ```
/// use rectangles::{Point, Rectangle};
/// let rectangle = Rectangle::new(0.0, 0.0, 3.0, 4.0);
/// assert_eq!(rectangle.origin(), Point::ZERO);
/// assert_eq!(rectangle.extent(), Point::new(3.0, 4.0));
/// ```
///
/// Replacing the origin or extent does not compile:
///
/// ```compile_fail
/// use rectangles::{Point, Rectangle};
/// let mut rectangle = Rectangle::new(0.0, 0.0, 3.0, 4.0);
/// rectangle.origin = Point::new(10.0, 10.0);
/// ```
///
/// ```compile_fail
/// use rectangles::{Point, Rectangle};
/// let mut rectangle = Rectangle::new(0.0, 0.0, 3.0, 4.0);
/// rectangle.extent = Point::new(10.0, 10.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    origin: Point,
    extent: Point,
}

impl Rectangle {
    pub const fn new(x: Float, y: Float, width: Float, height: Float) -> Self {
        Self::from_points(Point::new(x, y), Point::new(width, height))
    }

    pub const fn from_points(origin: Point, extent: Point) -> Self {
        Self { origin, extent }
    }

    /// Like [`Rectangle::new`], but rejects NaN and infinite values
    pub fn try_new(x: Float, y: Float, width: Float, height: Float) -> GeometryResult<Self> {
        check_finite("x", x)?;
        check_finite("y", y)?;
        check_finite("width", width)?;
        check_finite("height", height)?;
        Ok(Self::new(x, y, width, height))
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn extent(&self) -> Point {
        self.extent
    }

    /// The corner opposite the origin
    pub fn corner(&self) -> Point {
        self.origin + self.extent
    }

    pub fn center(&self) -> Point {
        self.origin + self.extent / 2.0
    }

    pub fn top(&self) -> Float {
        self.origin.y()
    }

    pub fn left(&self) -> Float {
        self.origin.x()
    }

    pub fn bottom(&self) -> Float {
        self.top() + self.extent.y()
    }

    pub fn right(&self) -> Float {
        self.left() + self.extent.x()
    }

    pub fn width(&self) -> Float {
        self.extent.x()
    }

    pub fn height(&self) -> Float {
        self.extent.y()
    }

    /// Signed area, negative if exactly one extent is negative
    pub fn area(&self) -> Float {
        self.extent.x() * self.extent.y()
    }

    /// Zero-width rectangle at `x` spanning the same rows
    pub fn flatten_x_at(&self, x: Float) -> Rectangle {
        Rectangle::new(x, self.origin.y(), 0.0, self.extent.y())
    }

    /// Zero-height rectangle at `y` spanning the same columns
    pub fn flatten_y_at(&self, y: Float) -> Rectangle {
        Rectangle::new(self.origin.x(), y, self.extent.x(), 0.0)
    }

    /// Moves every side inwards by `thickness`.
    ///
    /// Insetting by more than half the extent yields an inverted rectangle.
    pub fn inset_by(&self, thickness: Float) -> Rectangle {
        Rectangle::from_points(
            self.origin + Point::new(thickness, thickness),
            self.extent - Point::new(2.0 * thickness, 2.0 * thickness),
        )
    }

    /// The same region, with the origin moved so the extent is non-negative
    pub fn normalized(&self) -> Rectangle {
        let (min, max) = self.bounds();
        Rectangle::from_points(min, max - min)
    }

    /// Minimum and maximum coordinates, with negative extents swapped around
    fn bounds(&self) -> (Point, Point) {
        let corner = self.corner();
        let (min_x, max_x) = if self.extent.x() < 0.0 {
            (corner.x(), self.origin.x())
        } else {
            (self.origin.x(), corner.x())
        };
        let (min_y, max_y) = if self.extent.y() < 0.0 {
            (corner.y(), self.origin.y())
        } else {
            (self.origin.y(), corner.y())
        };
        (Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// True if `(x, y)` lies inside this rectangle, edges included
    pub fn contains_xy(&self, x: Float, y: Float) -> bool {
        let (min, max) = self.bounds();
        x >= min.x() && y >= min.y() && x <= max.x() && y <= max.y()
    }

    /// True if the point or rectangle lies completely inside this rectangle
    pub fn contains<C: Into<Containable>>(&self, containable: C) -> bool {
        containable.into().is_contained_within(self)
    }

    /// True if this rectangle lies completely inside `outer`, edges included
    pub fn is_contained_within(&self, outer: &Rectangle) -> bool {
        let (min, max) = self.bounds();
        let (outer_min, outer_max) = outer.bounds();
        outer_min.less_than_or_equal(&min) && outer_max.greater_than_or_equal(&max)
    }

    /// Smallest rectangle covering both rectangles
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let origin = self.origin.min(&other.origin);
        let corner = self.corner().max(&other.corner());
        Rectangle::from_points(origin, corner - origin)
    }

    /// True if the rectangles overlap with a positive area.
    ///
    /// Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        let corner = self.corner();
        let other_corner = other.corner();
        !(other_corner.x() <= self.origin.x()
            || other_corner.y() <= self.origin.y()
            || other.origin.x() >= corner.x()
            || other.origin.y() >= corner.y())
    }

    /// The overlapping region of both rectangles.
    ///
    /// If the rectangles do not intersect the result has a zero or negative extent.
    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        let corner = self.corner();
        let other_corner = other.corner();
        let left = self.origin.x().max(other.origin.x());
        let top = self.origin.y().max(other.origin.y());
        let right = corner.x().min(other_corner.x());
        let bottom = corner.y().min(other_corner.y());
        Rectangle::new(left, top, right - left, bottom - top)
    }

    /// Like [`Rectangle::intersect`], but calls `if_none(self, other)` when the
    /// rectangles do not intersect and returns its result instead
    pub fn intersect_or_else<F>(&self, other: &Rectangle, if_none: F) -> Rectangle
    where
        F: FnOnce(&Rectangle, &Rectangle) -> Rectangle,
    {
        if !self.intersects(other) {
            trace!("No intersection between {} and {}", self, other);
            return if_none(self, other);
        }
        self.intersect(other)
    }

    /// Unit-spaced points inside the rectangle, see [`LatticePoints`]
    pub fn lattice_points(&self) -> LatticePoints {
        LatticePoints::new(
            self.origin.x(),
            self.origin.y(),
            self.extent.x(),
            self.extent.y(),
        )
    }

    pub fn for_each<F: FnMut(Float, Float)>(&self, mut f: F) {
        for (x, y) in self.lattice_points() {
            f(x, y);
        }
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.left(),
            self.top(),
            self.width(),
            self.height()
        )
    }
}
