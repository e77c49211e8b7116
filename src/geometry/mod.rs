pub mod containable;
pub mod lattice;
pub mod point;
pub mod rectangle;

pub use containable::Containable;
pub use lattice::LatticePoints;
pub use point::Point;
pub use rectangle::Rectangle;
