use crate::geometry::point::Point;
use crate::geometry::rectangle::Rectangle;

pub struct ScreenSpace;
pub type Float = f64;
pub type ScreenRect = euclid::Rect<Float, ScreenSpace>;
pub type ScreenPoint = euclid::Point2D<Float, ScreenSpace>;
pub type ScreenSize = euclid::Size2D<Float, ScreenSpace>;

impl From<Point> for ScreenPoint {
    fn from(point: Point) -> Self {
        ScreenPoint::new(point.x(), point.y())
    }
}

impl From<ScreenPoint> for Point {
    fn from(point: ScreenPoint) -> Self {
        Point::new(point.x, point.y)
    }
}

// euclid keeps negative sizes as-is, so inverted rectangles survive the trip.
impl From<Rectangle> for ScreenRect {
    fn from(rectangle: Rectangle) -> Self {
        ScreenRect::new(
            rectangle.origin().into(),
            ScreenSize::new(rectangle.width(), rectangle.height()),
        )
    }
}

impl From<ScreenRect> for Rectangle {
    fn from(rect: ScreenRect) -> Self {
        Rectangle::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
    }
}
