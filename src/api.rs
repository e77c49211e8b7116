//! Factory surface for hosts that register the geometry types as a component.
//!
//! Missing or NaN arguments default to `0.0`.

use crate::types::Float;

fn or_zero(value: Option<Float>) -> Float {
    match value {
        Some(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

pub mod point {
    use super::or_zero;
    use crate::geometry::point::Point;
    use crate::types::Float;

    pub fn create(x: Option<Float>, y: Option<Float>) -> Point {
        Point::new(or_zero(x), or_zero(y))
    }
}

pub mod rectangle {
    use super::or_zero;
    use crate::geometry::rectangle::Rectangle;
    use crate::types::Float;

    pub fn create(
        x: Option<Float>,
        y: Option<Float>,
        width: Option<Float>,
        height: Option<Float>,
    ) -> Rectangle {
        Rectangle::new(or_zero(x), or_zero(y), or_zero(width), or_zero(height))
    }

    /// Containment test on raw coordinates, without building a point first
    pub fn contains(rectangle: &Rectangle, x: Float, y: Float) -> bool {
        rectangle.contains_xy(x, y)
    }
}
