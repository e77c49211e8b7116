pub mod api;
pub mod geometry;
pub mod logging;
pub mod parse;
pub mod result;
pub mod types;

pub use geometry::{Containable, LatticePoints, Point, Rectangle};
pub use result::{GeometryError, GeometryErrorKind, GeometryResult};
