//! Piecewise-cubic interpolation.
//!
//! Every variant evaluates the same cubic Hermite polynomial on the grid
//! cell bracketing the observation point; they differ only in how the
//! slope at each grid point is chosen:
//!
//! * [`CubicSlopes::NotAKnot`] solves for the slopes of the C2 cubic
//!   spline whose third derivative is continuous across the second and
//!   the second-to-last grid points. This spline reproduces any cubic
//!   polynomial exactly.
//! * [`CubicSlopes::Natural`] solves for the slopes of the C2 cubic
//!   spline with zero second derivative at both ends.
//! * [`CubicSlopes::FiniteDifference`] takes slopes from centered
//!   differences, one-sided at the ends. The result is only C1, but each
//!   cell depends on just four neighboring grid points and no linear
//!   system has to be solved.
use num_traits::Float;

use super::{check_inside, Grid1D, GridSample, Interp1D, RectilinearGrid1D};
use crate::error::InterpError;

/// How the slopes at the grid points are determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubicSlopes {
    NotAKnot,
    Natural,
    FiniteDifference,
}

/// Cubic Hermite interpolation without extrapolation.
#[derive(Debug, Clone)]
pub struct Cubic1D<'a, T: Float> {
    grid: RectilinearGrid1D<'a, T>,
    slopes: Vec<T>,
}

impl<'a, T: Float> Cubic1D<'a, T> {
    /// Fit the slopes at each grid point, using O(n) calculations and storage.
    ///
    /// # Errors
    /// * If the grid has fewer than four entries
    /// * If the spline system turns out to be singular
    pub fn new(grid: RectilinearGrid1D<'a, T>, kind: CubicSlopes) -> Result<Self, InterpError> {
        let (x, y) = (grid.grid(), grid.vals());
        if x.len() < 4 {
            return Err(InterpError::invalid(
                "cubic interpolation needs at least four grid entries",
            ));
        }

        let slopes = match kind {
            CubicSlopes::NotAKnot => not_a_knot_slopes(x, y)?,
            CubicSlopes::Natural => natural_slopes(x, y)?,
            CubicSlopes::FiniteDifference => finite_difference_slopes(x, y),
        };

        Ok(Self { grid, slopes })
    }

    /// Slope of the interpolant at each grid point
    pub fn slopes(&self) -> &[T] {
        &self.slopes
    }
}

impl<'a, T: Float> Interp1D<T> for Cubic1D<'a, T> {
    #[inline]
    fn eval_one(&self, loc: T) -> Result<T, InterpError> {
        let GridSample {
            index,
            x0,
            y0,
            x1,
            y1,
            extrap,
        } = self.grid.at(loc);
        check_inside(&self.grid, loc, extrap)?;

        let dx = x1 - x0;
        let t = (loc - x0) / dx;
        let (k0, k1) = (self.slopes[index], self.slopes[index + 1]);

        Ok(hermite_spline(t, y0, dx, y1 - y0, k0, k1))
    }
}

/// Evaluate a hermite spline function on an interval from x0 to x1,
/// with imposed slopes k0 and k1 at the endpoints, and normalized
/// coordinate t = (x - x0) / (x1 - x0)
#[inline(always)]
fn hermite_spline<T: Float>(t: T, y0: T, dx: T, dy: T, k0: T, k1: T) -> T {
    // `a` and `b` are difference between this function and a linear one going
    // forward or backward with the imposed slopes.
    let a = k0 * dx - dy;
    let b = -k1 * dx + dy;

    let t2 = t * t;
    let t3 = t * t * t;

    let c1 = dy + a;
    let c2 = b - (a + a);
    let c3 = a - b;

    y0 + (c1 * t) + (c2 * t2) + (c3 * t3)
}

/// Widths and secant slopes of each grid cell
fn secants<T: Float>(x: &[T], y: &[T]) -> (Vec<T>, Vec<T>) {
    let dx: Vec<T> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let m: Vec<T> = (0..dx.len()).map(|i| (y[i + 1] - y[i]) / dx[i]).collect();
    (dx, m)
}

/// Interior rows of the spline slope system, shared by every boundary condition.
/// Row `i` reads `dx[i] s[i-1] + 2 (dx[i-1] + dx[i]) s[i] + dx[i-1] s[i+1] = rhs[i]`.
fn interior_rows<T: Float>(dx: &[T], m: &[T]) -> Tridiagonal<T> {
    let n = dx.len() + 1;
    let two = T::one() + T::one();
    let three = two + T::one();

    let mut sys = Tridiagonal::zeros(n);
    for i in 1..n - 1 {
        sys.lower[i] = dx[i];
        sys.diag[i] = two * (dx[i - 1] + dx[i]);
        sys.upper[i] = dx[i - 1];
        sys.rhs[i] = three * (dx[i] * m[i - 1] + dx[i - 1] * m[i]);
    }
    sys
}

fn not_a_knot_slopes<T: Float>(x: &[T], y: &[T]) -> Result<Vec<T>, InterpError> {
    let n = x.len();
    let two = T::one() + T::one();
    let (dx, m) = secants(x, y);
    let mut sys = interior_rows(&dx, &m);

    // Third derivative continuous across x[1]
    let d = x[2] - x[0];
    sys.diag[0] = dx[1];
    sys.upper[0] = d;
    sys.rhs[0] = ((dx[0] + two * d) * dx[1] * m[0] + dx[0] * dx[0] * m[1]) / d;

    // Third derivative continuous across x[n - 2]
    let d = x[n - 1] - x[n - 3];
    sys.lower[n - 1] = d;
    sys.diag[n - 1] = dx[n - 3];
    sys.rhs[n - 1] =
        (dx[n - 2] * dx[n - 2] * m[n - 3] + (two * d + dx[n - 2]) * dx[n - 3] * m[n - 2]) / d;

    sys.solve()
}

fn natural_slopes<T: Float>(x: &[T], y: &[T]) -> Result<Vec<T>, InterpError> {
    let n = x.len();
    let two = T::one() + T::one();
    let three = two + T::one();
    let (dx, m) = secants(x, y);
    let mut sys = interior_rows(&dx, &m);

    // Zero second derivative at both ends
    sys.diag[0] = two;
    sys.upper[0] = T::one();
    sys.rhs[0] = three * m[0];

    sys.lower[n - 1] = T::one();
    sys.diag[n - 1] = two;
    sys.rhs[n - 1] = three * m[n - 2];

    sys.solve()
}

fn finite_difference_slopes<T: Float>(x: &[T], y: &[T]) -> Vec<T> {
    let n = x.len();
    let (_, m) = secants(x, y);

    let mut k = Vec::with_capacity(n);
    k.push(m[0]);
    for i in 1..n - 1 {
        k.push((y[i + 1] - y[i - 1]) / (x[i + 1] - x[i - 1]));
    }
    k.push(m[n - 2]);
    k
}

/// Tridiagonal linear system. `lower[0]` and `upper[n - 1]` are unused.
struct Tridiagonal<T> {
    lower: Vec<T>,
    diag: Vec<T>,
    upper: Vec<T>,
    rhs: Vec<T>,
}

impl<T: Float> Tridiagonal<T> {
    fn zeros(n: usize) -> Self {
        Self {
            lower: vec![T::zero(); n],
            diag: vec![T::zero(); n],
            upper: vec![T::zero(); n],
            rhs: vec![T::zero(); n],
        }
    }

    /// Thomas algorithm, O(n) without pivoting.
    fn solve(mut self) -> Result<Vec<T>, InterpError> {
        let n = self.diag.len();
        let singular = || InterpError::invalid("singular spline system");

        // Forward sweep, overwriting `upper` and `rhs` with the
        // normalized coefficients
        if self.diag[0] == T::zero() {
            return Err(singular());
        }
        self.upper[0] = self.upper[0] / self.diag[0];
        self.rhs[0] = self.rhs[0] / self.diag[0];
        for i in 1..n {
            let pivot = self.diag[i] - self.lower[i] * self.upper[i - 1];
            if pivot == T::zero() || !pivot.is_finite() {
                return Err(singular());
            }
            self.upper[i] = self.upper[i] / pivot;
            self.rhs[i] = (self.rhs[i] - self.lower[i] * self.rhs[i - 1]) / pivot;
        }

        // Back substitution
        let mut out = self.rhs;
        for i in (0..n - 1).rev() {
            out[i] = out[i] - self.upper[i] * out[i + 1];
        }

        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use crate::one_dim::{Interp1D, RectilinearGrid1D};
    use crate::testing::{randn, rng_fixed_seed};
    use crate::utils::linspace;

    use super::{Cubic1D, CubicSlopes};

    const KINDS: [CubicSlopes; 3] = [
        CubicSlopes::NotAKnot,
        CubicSlopes::Natural,
        CubicSlopes::FiniteDifference,
    ];

    fn uneven_grid() -> Vec<f64> {
        vec![0.0, 0.7, 1.5, 2.2, 3.0, 4.1, 4.6, 6.0]
    }

    #[test]
    fn test_passes_through_grid_points() {
        let rng = &mut rng_fixed_seed();
        let x = uneven_grid();
        let y = randn::<f64>(rng, x.len());

        for kind in KINDS {
            let g = RectilinearGrid1D::new(&x, &y).unwrap();
            let interp = Cubic1D::new(g, kind).unwrap();
            for i in 0..x.len() {
                let v = interp.eval_one(x[i]).unwrap();
                assert!((v - y[i]).abs() < 1e-12, "{kind:?} missed grid point {i}");
            }
        }
    }

    #[test]
    fn test_reproduces_linear_functions() {
        let x = uneven_grid();
        let y: Vec<f64> = x.iter().map(|v| 2.5 * v - 1.0).collect();
        let locs = linspace(0.0, 6.0, 61);

        for kind in KINDS {
            let g = RectilinearGrid1D::new(&x, &y).unwrap();
            let interp = Cubic1D::new(g, kind).unwrap();
            for &loc in &locs {
                let v = interp.eval_one(loc).unwrap();
                assert!((v - (2.5 * loc - 1.0)).abs() < 1e-10, "{kind:?} at {loc}");
            }
        }
    }

    #[test]
    fn test_not_a_knot_reproduces_cubics() {
        let f = |v: f64| v * v * v - 2.0 * v * v + 0.5 * v + 1.0;
        let df = |v: f64| 3.0 * v * v - 4.0 * v + 0.5;

        let x = uneven_grid();
        let y: Vec<f64> = x.iter().map(|&v| f(v)).collect();
        let g = RectilinearGrid1D::new(&x, &y).unwrap();
        let interp = Cubic1D::new(g, CubicSlopes::NotAKnot).unwrap();

        for (i, &k) in interp.slopes().iter().enumerate() {
            assert!((k - df(x[i])).abs() < 1e-9);
        }
        for loc in linspace(0.0, 6.0, 97) {
            assert!((interp.eval_one(loc).unwrap() - f(loc)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_natural_end_conditions() {
        let rng = &mut rng_fixed_seed();
        let x = uneven_grid();
        let y = randn::<f64>(rng, x.len());
        let n = x.len();
        let g = RectilinearGrid1D::new(&x, &y).unwrap();
        let k = Cubic1D::new(g, CubicSlopes::Natural).unwrap().slopes().to_vec();

        // Second derivative of a Hermite cell at each end,
        // scaled by the cell width
        let m0 = (y[1] - y[0]) / (x[1] - x[0]);
        let mn = (y[n - 1] - y[n - 2]) / (x[n - 1] - x[n - 2]);
        assert!((6.0 * m0 - 4.0 * k[0] - 2.0 * k[1]).abs() < 1e-9);
        assert!((-6.0 * mn + 2.0 * k[n - 2] + 4.0 * k[n - 1]).abs() < 1e-9);
    }

    #[test]
    fn test_splines_are_c2() {
        let rng = &mut rng_fixed_seed();
        let x = uneven_grid();
        let y = randn::<f64>(rng, x.len());

        for kind in [CubicSlopes::NotAKnot, CubicSlopes::Natural] {
            let g = RectilinearGrid1D::new(&x, &y).unwrap();
            let k = Cubic1D::new(g, kind).unwrap().slopes().to_vec();

            // Second derivative at the right end of cell i-1 and the left end of cell i
            for i in 1..x.len() - 1 {
                let (hl, hr) = (x[i] - x[i - 1], x[i + 1] - x[i]);
                let (ml, mr) = ((y[i] - y[i - 1]) / hl, (y[i + 1] - y[i]) / hr);
                let left = (-6.0 * ml + 2.0 * k[i - 1] + 4.0 * k[i]) / hl;
                let right = (6.0 * mr - 4.0 * k[i] - 2.0 * k[i + 1]) / hr;
                assert!((left - right).abs() < 1e-8, "{kind:?} kink at {i}");
            }
        }
    }

    #[test]
    fn test_cubic_requires_four_points() {
        let x = [0.0_f64, 1.0, 2.0];
        let y = [0.0_f64, 1.0, 0.0];
        let g = RectilinearGrid1D::new(&x, &y).unwrap();
        assert!(Cubic1D::new(g, CubicSlopes::NotAKnot).is_err());
    }

    #[test]
    fn test_cubic_no_extrapolation() {
        let x = uneven_grid();
        let y = x.clone();
        let g = RectilinearGrid1D::new(&x, &y).unwrap();
        let interp = Cubic1D::new(g, CubicSlopes::NotAKnot).unwrap();
        assert!(interp.eval_one(-0.5).is_err());
        assert!(interp.eval_one(6.5).is_err());
        assert!(interp.eval_one(6.0).is_ok());
    }
}
