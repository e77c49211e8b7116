use crate::types::Float;

/// Lazy walk over the unit-spaced points covered by a rectangle.
///
/// Starts at the origin and steps by one on each axis while staying below
/// `origin + extent`. `x` is the outer loop and `y` the inner one, so a column
/// is finished before moving to the next `x`. Nothing is yielded when either
/// extent is zero or negative, or when any bound is NaN or infinite. Clone the
/// iterator to restart the walk.
#[derive(Debug, Clone)]
pub struct LatticePoints {
    x_start: Float,
    x_stop: Float,
    y_start: Float,
    y_stop: Float,
    step: Option<(u64, u64)>,
}

impl LatticePoints {
    pub(crate) fn new(x_start: Float, y_start: Float, width: Float, height: Float) -> Self {
        let x_stop = x_start + width;
        let y_stop = y_start + height;
        let bounds_are_finite = [x_start, x_stop, y_start, y_stop]
            .iter()
            .all(|bound| bound.is_finite());
        let walkable = bounds_are_finite && x_start < x_stop && y_start < y_stop;
        Self {
            x_start,
            x_stop,
            y_start,
            y_stop,
            step: walkable.then_some((0, 0)),
        }
    }
}

impl Iterator for LatticePoints {
    type Item = (Float, Float);

    fn next(&mut self) -> Option<Self::Item> {
        let (column, row) = self.step?;
        let x = self.x_start + column as Float;
        if x >= self.x_stop {
            self.step = None;
            return None;
        }
        let y = self.y_start + row as Float;
        if y < self.y_stop {
            self.step = Some((column, row + 1));
            return Some((x, y));
        }
        self.step = Some((column + 1, 0));
        self.next()
    }
}
