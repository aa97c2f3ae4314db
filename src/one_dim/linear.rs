//! Piecewise-linear interpolation between consecutive grid points.

use num_traits::Float;

use super::{check_inside, Grid1D, GridSample, Interp1D};
use crate::error::InterpError;

/// Linear interpolation without extrapolation.
#[derive(Debug, Clone)]
pub struct Linear1D<G> {
    grid: G,
}

impl<G> Linear1D<G> {
    pub fn new(grid: G) -> Self {
        Self { grid }
    }
}

impl<T, G> Interp1D<T> for Linear1D<G>
where
    T: Float,
    G: Grid1D<T>,
{
    #[inline]
    fn eval_one(&self, loc: T) -> Result<T, InterpError> {
        let GridSample {
            x0,
            y0,
            x1,
            y1,
            extrap,
            ..
        } = self.grid.at(loc);
        check_inside(&self.grid, loc, extrap)?;

        let slope = (y1 - y0) / (x1 - x0);
        let dx = loc - x0;
        let v = y0 + slope * dx;

        Ok(v)
    }
}
