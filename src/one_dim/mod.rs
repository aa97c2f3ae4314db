//! One-dimensional interpolants over a rectilinear (unevenly spaced) grid,
//! used to fit each coordinate independently against PK.
//!
//! None of these interpolants extrapolate: evaluating outside the grid
//! returns [`InterpError::Domain`].

pub mod cubic;
pub mod hold;
pub mod linear;

use num_traits::Float;

use crate::error::InterpError;

/// Extrapolation flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// The grid cell containing an observation point
#[derive(Debug, Clone, Copy)]
pub struct GridSample<T> {
    /// Index of the lower corner of the cell
    pub index: usize,
    pub x0: T,
    pub y0: T,
    pub x1: T,
    pub y1: T,
    pub extrap: Extrap,
}

/// A 1D grid with values attached to each grid point
pub trait Grid1D<T: Float> {
    /// Get the cell bracketing an observation point.
    ///
    /// For observation points outside the grid, the returned
    /// locations may not bracket the observation point.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn at(&self, loc: T) -> GridSample<T>;

    /// Lowest and highest grid location.
    fn bounds(&self) -> (T, T);
}

/// A one-dimensional interpolator.
pub trait Interp1D<T: Float> {
    /// Evaluate the interpolant at an observation point.
    ///
    /// # Errors
    /// * [`InterpError::Domain`] if `loc` is outside the grid
    fn eval_one(&self, loc: T) -> Result<T, InterpError>;

    /// Evaluate the interpolant at a set of observation points.
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), InterpError> {
        if locs.len() != out.len() {
            return Err(InterpError::invalid("length mismatch"));
        }

        for i in 0..locs.len() {
            out[i] = self.eval_one(locs[i])?;
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Result<Vec<T>, InterpError> {
        let mut out = vec![T::zero(); locs.len()];
        self.eval(locs, &mut out)?;
        Ok(out)
    }
}

/// A rectilinear grid, which may have uneven spacing.
#[derive(Debug, Clone, Copy)]
pub struct RectilinearGrid1D<'a, T: Float> {
    grid: &'a [T],
    vals: &'a [T],
}

impl<'a, T: Float> RectilinearGrid1D<'a, T> {
    /// Wrap grid locations and the values at them.
    ///
    /// # Errors
    /// * If `grid` and `vals` differ in length
    /// * If there are fewer than two grid points
    /// * If the grid is not strictly increasing
    pub fn new(grid: &'a [T], vals: &'a [T]) -> Result<Self, InterpError> {
        if grid.len() != vals.len() {
            return Err(InterpError::invalid("length mismatch"));
        }
        if grid.len() < 2 {
            return Err(InterpError::invalid("grid must have at least two entries"));
        }
        if !grid.windows(2).all(|w| w[1] > w[0]) {
            return Err(InterpError::invalid(
                "grid must be monotonically increasing",
            ));
        }

        Ok(Self { grid, vals })
    }

    pub fn grid(&self) -> &'a [T] {
        self.grid
    }

    pub fn vals(&self) -> &'a [T] {
        self.vals
    }

    /// Get the index of the lower corner of the containing grid cell
    #[inline]
    pub fn index(&self, loc: T) -> (usize, Extrap) {
        let i = ((self.grid.partition_point(|v| v < &loc) as isize - 1).max(0) as usize)
            .min(self.grid.len() - 2);

        let extrap = match loc {
            x if x < self.grid[0] => Extrap::OutsideLow,
            x if x > self.grid[self.grid.len() - 1] => Extrap::OutsideHigh,
            x if x.is_nan() => Extrap::OutsideHigh,
            _ => Extrap::Inside,
        };

        (i, extrap)
    }
}

impl<'a, T: Float> Grid1D<T> for RectilinearGrid1D<'a, T> {
    #[inline]
    fn at(&self, loc: T) -> GridSample<T> {
        let (i, extrap) = self.index(loc);

        let (x0, x1) = (self.grid[i], self.grid[i + 1]);
        let (y0, y1) = (self.vals[i], self.vals[i + 1]);

        GridSample {
            index: i,
            x0,
            y0,
            x1,
            y1,
            extrap,
        }
    }

    #[inline]
    fn bounds(&self) -> (T, T) {
        (self.grid[0], self.grid[self.grid.len() - 1])
    }
}

/// Reject observation points outside the grid.
#[inline]
pub(crate) fn check_inside<T: Float, G: Grid1D<T>>(
    grid: &G,
    loc: T,
    extrap: Extrap,
) -> Result<(), InterpError> {
    match extrap {
        Extrap::Inside => Ok(()),
        _ => {
            let (min, max) = grid.bounds();
            Err(InterpError::Domain {
                pk: loc.to_f64().unwrap_or(f64::NAN),
                min: min.to_f64().unwrap_or(f64::NAN),
                max: max.to_f64().unwrap_or(f64::NAN),
            })
        }
    }
}
