//! Piecewise-constant 1D interpolation

use num_traits::Float;

use super::{check_inside, Grid1D, GridSample, Interp1D};
use crate::error::InterpError;

/// Nearest-value piecewise-constant interpolation.
/// In the event of a tie, the left value is taken.
#[derive(Debug, Clone)]
pub struct Nearest1D<G> {
    grid: G,
}

impl<G> Nearest1D<G> {
    pub fn new(grid: G) -> Self {
        Self { grid }
    }
}

impl<T, G> Interp1D<T> for Nearest1D<G>
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

        let dx0 = (loc - x0).abs();
        let dx1 = (loc - x1).abs();

        let v = match dx1 >= dx0 {
            true => y0,
            false => y1,
        };

        Ok(v)
    }
}

#[cfg(test)]
mod test {
    use crate::one_dim::{Interp1D, RectilinearGrid1D};
    use crate::testing::{randn, rng_fixed_seed};
    use crate::utils::linspace;

    use super::Nearest1D;

    #[test]
    fn test_nearest_1d() {
        let rng = &mut rng_fixed_seed();

        let n = 77;

        let vals = &randn::<f64>(rng, n)[..];

        let x = linspace(-3.0, 314.0, n);
        let nearest = Nearest1D::new(RectilinearGrid1D::new(&x, vals).unwrap());

        let mut locs = randn::<f64>(rng, 3 * n);
        locs.iter_mut()
            .for_each(|v| *v = (*v * (x[n - 1] - x[0])) + x[0]);

        let ys = nearest.eval_alloc(&locs).unwrap();

        for i in 0..locs.len() {
            let loc = locs[i];
            let j: usize =
                ((x.partition_point(|v| v < &loc) as isize - 1).max(0) as usize).min(n - 2);

            let (xleft, xright) = (x[j], x[j + 1]);
            let y_nearest = match (loc - xleft) <= (xright - loc) {
                true => vals[j],
                false => vals[j + 1],
            };
            assert_eq!(ys[i], y_nearest);
        }
    }

    #[test]
    fn test_nearest_tie_goes_left() {
        let x = [0.0_f64, 1.0];
        let y = [5.0_f64, 7.0];
        let nearest = Nearest1D::new(RectilinearGrid1D::new(&x, &y).unwrap());

        assert_eq!(nearest.eval_one(0.5).unwrap(), 5.0);
        assert_eq!(nearest.eval_one(0.6).unwrap(), 7.0);
        assert_eq!(nearest.eval_one(1.0).unwrap(), 7.0);
        assert!(nearest.eval_one(1.5).is_err());
    }
}
