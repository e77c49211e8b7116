//! Loading points and rectangles from text.
//!
//! Supports RON and YAML documents (`(x: 1.0, y: 2.0)` / `x: 1`) as well as the
//! compact comma-separated forms `"x,y"` and `"x,y,width,height"`. All parsed
//! values must be finite.

use crate::context;
use crate::geometry::point::Point;
use crate::geometry::rectangle::Rectangle;
use crate::result::{GeometryError, GeometryErrorKind, GeometryResult};
use crate::types::Float;
use log::debug;
use serde::de::DeserializeOwned;
use std::str::FromStr;

trait Validate: Sized {
    fn validated(self) -> GeometryResult<Self>;
}

impl Validate for Point {
    fn validated(self) -> GeometryResult<Self> {
        Point::try_new(self.x(), self.y())
    }
}

impl Validate for Rectangle {
    fn validated(self) -> GeometryResult<Self> {
        Rectangle::try_new(self.left(), self.top(), self.width(), self.height())
    }
}

fn from_ron<T: DeserializeOwned + Validate>(input: &str) -> GeometryResult<T> {
    ron::from_str::<T>(input)
        .map_err(GeometryError::from)
        .and_then(Validate::validated)
}

fn from_yaml<T: DeserializeOwned + Validate>(input: &str) -> GeometryResult<T> {
    serde_yml::from_str::<T>(input)
        .map_err(GeometryError::from)
        .and_then(Validate::validated)
}

pub fn point_from_ron(input: &str) -> GeometryResult<Point> {
    let point = context!("parse point from RON" => { from_ron::<Point>(input) })?;
    debug!("Parsed point {} from RON", point);
    Ok(point)
}

pub fn rectangle_from_ron(input: &str) -> GeometryResult<Rectangle> {
    let rectangle = context!("parse rectangle from RON" => { from_ron::<Rectangle>(input) })?;
    debug!("Parsed rectangle {} from RON", rectangle);
    Ok(rectangle)
}

pub fn point_from_yaml(input: &str) -> GeometryResult<Point> {
    let point = context!("parse point from YAML" => { from_yaml::<Point>(input) })?;
    debug!("Parsed point {} from YAML", point);
    Ok(point)
}

pub fn rectangle_from_yaml(input: &str) -> GeometryResult<Rectangle> {
    let rectangle = context!("parse rectangle from YAML" => { from_yaml::<Rectangle>(input) })?;
    debug!("Parsed rectangle {} from YAML", rectangle);
    Ok(rectangle)
}

fn parse_components<const N: usize>(
    input: &str,
    names: [&'static str; N],
) -> GeometryResult<[Float; N]> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(GeometryError::new(GeometryErrorKind::Parse(format!(
            "Expected {} comma-separated values ({}), found {} in '{}'",
            N,
            names.join(", "),
            parts.len(),
            input
        ))));
    }
    let mut values = [0.0; N];
    for ((value, part), name) in values.iter_mut().zip(parts).zip(names) {
        *value = context!("parse {} from '{}'", name, part => {
            part.parse::<Float>().map_err(GeometryError::from)
        })?;
    }
    Ok(values)
}

impl FromStr for Point {
    type Err = GeometryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_components(input, ["x", "y"])?;
        Point::try_new(x, y)
    }
}

impl FromStr for Rectangle {
    type Err = GeometryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let [x, y, width, height] = parse_components(input, ["x", "y", "width", "height"])?;
        Rectangle::try_new(x, y, width, height)
    }
}
