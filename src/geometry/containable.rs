use crate::geometry::point::Point;
use crate::geometry::rectangle::Rectangle;

/// Anything a [`Rectangle`] can be asked to contain
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Containable {
    Point(Point),
    Rectangle(Rectangle),
}

impl Containable {
    pub fn is_contained_within(&self, rectangle: &Rectangle) -> bool {
        match self {
            Containable::Point(point) => point.is_contained_within(rectangle),
            Containable::Rectangle(inner) => inner.is_contained_within(rectangle),
        }
    }
}

impl From<Point> for Containable {
    fn from(point: Point) -> Self {
        Containable::Point(point)
    }
}

impl From<&Point> for Containable {
    fn from(point: &Point) -> Self {
        Containable::Point(*point)
    }
}

impl From<Rectangle> for Containable {
    fn from(rectangle: Rectangle) -> Self {
        Containable::Rectangle(rectangle)
    }
}

impl From<&Rectangle> for Containable {
    fn from(rectangle: &Rectangle) -> Self {
        Containable::Rectangle(*rectangle)
    }
}
