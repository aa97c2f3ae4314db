//! Interpolation methods and the interpolants they build.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InterpError;
use crate::one_dim::cubic::{Cubic1D, CubicSlopes};
use crate::one_dim::hold::Nearest1D;
use crate::one_dim::linear::Linear1D;
use crate::one_dim::{Interp1D, RectilinearGrid1D};

/// How each coordinate is interpolated against PK.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Piecewise linear between consecutive samples
    #[default]
    Linear,
    /// Cubic spline with not-a-knot end conditions
    Cubic,
    /// Cubic spline with zero curvature at both ends
    Natural,
    /// Local cubic Hermite with finite-difference slopes
    Hermite,
    /// Nearest source sample
    Nearest,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Linear,
        Method::Cubic,
        Method::Natural,
        Method::Hermite,
        Method::Nearest,
    ];

    /// Fewest samples the method can be fit to.
    pub fn min_samples(self) -> usize {
        match self {
            Method::Linear | Method::Nearest => 2,
            Method::Cubic | Method::Natural | Method::Hermite => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::Linear => "linear",
            Method::Cubic => "cubic",
            Method::Natural => "natural",
            Method::Hermite => "hermite",
            Method::Nearest => "nearest",
        }
    }

    /// Fit an interpolant of values `vals` over locations `grid`.
    ///
    /// # Errors
    /// * [`InterpError::InsufficientData`] if there are fewer than
    ///   [`Method::min_samples`] points
    /// * [`InterpError::InvalidInput`] if the grid is not strictly increasing
    ///   or the lengths differ
    pub fn fit<'a>(self, grid: &'a [f64], vals: &'a [f64]) -> Result<Interpolant<'a>, InterpError> {
        if grid.len() < self.min_samples() {
            return Err(InterpError::InsufficientData {
                method: self,
                required: self.min_samples(),
                found: grid.len(),
            });
        }
        let g = RectilinearGrid1D::new(grid, vals)?;

        let interp = match self {
            Method::Linear => Interpolant::Linear(Linear1D::new(g)),
            Method::Nearest => Interpolant::Nearest(Nearest1D::new(g)),
            Method::Cubic => Interpolant::Cubic(Cubic1D::new(g, CubicSlopes::NotAKnot)?),
            Method::Natural => Interpolant::Cubic(Cubic1D::new(g, CubicSlopes::Natural)?),
            Method::Hermite => {
                Interpolant::Cubic(Cubic1D::new(g, CubicSlopes::FiniteDifference)?)
            }
        };

        Ok(interp)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fitted one-dimensional interpolant of any [`Method`].
#[derive(Debug, Clone)]
pub enum Interpolant<'a> {
    Linear(Linear1D<RectilinearGrid1D<'a, f64>>),
    Cubic(Cubic1D<'a, f64>),
    Nearest(Nearest1D<RectilinearGrid1D<'a, f64>>),
}

impl<'a> Interp1D<f64> for Interpolant<'a> {
    #[inline]
    fn eval_one(&self, loc: f64) -> Result<f64, InterpError> {
        match self {
            Interpolant::Linear(i) => i.eval_one(loc),
            Interpolant::Cubic(i) => i.eval_one(loc),
            Interpolant::Nearest(i) => i.eval_one(loc),
        }
    }
}
