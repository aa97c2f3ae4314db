//! PK-indexed coordinate interpolation.
//!
//! Latitude and longitude are fit independently against PK, then evaluated
//! on a uniform PK grid. Both are plain scalar interpolants: the result is
//! only meaningful for short, fairly straight route segments, not as a
//! geodesic.
use crate::error::InterpError;
use crate::method::{Interpolant, Method};
use crate::one_dim::Interp1D;
use crate::sample::{InterpolatedTable, Sample, SampleTable};
use crate::utils::arange;

/// A pair of interpolants `f_lat(pk)` and `f_lon(pk)` fit over one table.
#[derive(Debug, Clone)]
pub struct CoordinateInterpolator<'a> {
    method: Method,
    min_pk: f64,
    max_pk: f64,
    latitude: Interpolant<'a>,
    longitude: Interpolant<'a>,
}

impl<'a> CoordinateInterpolator<'a> {
    /// Fit both coordinates of `samples` using `method`.
    ///
    /// # Errors
    /// * [`InterpError::InsufficientData`] if the table is too short for `method`
    pub fn new(samples: &'a SampleTable, method: Method) -> Result<Self, InterpError> {
        let latitude = method.fit(samples.pk(), samples.latitude())?;
        let longitude = method.fit(samples.pk(), samples.longitude())?;
        let (min_pk, max_pk) = samples
            .pk_range()
            .ok_or_else(|| InterpError::invalid("empty sample table"))?;

        Ok(Self {
            method,
            min_pk,
            max_pk,
            latitude,
            longitude,
        })
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// PK range `(min, max)` the interpolator is defined on.
    pub fn range(&self) -> (f64, f64) {
        (self.min_pk, self.max_pk)
    }

    /// Coordinates at a single PK anywhere in the closed source range.
    ///
    /// # Errors
    /// * [`InterpError::Domain`] if `pk` is outside `[min_pk, max_pk]`
    pub fn locate(&self, pk: f64) -> Result<Sample, InterpError> {
        Ok(Sample::new(
            pk,
            self.latitude.eval_one(pk)?,
            self.longitude.eval_one(pk)?,
        ))
    }

    /// Evaluate both coordinates on the grid `min_pk + i * step`
    /// covering `[min_pk, max_pk)`.
    ///
    /// # Errors
    /// * [`InterpError::InvalidInput`] if `step` is not finite and positive
    /// * [`InterpError::Domain`] if a grid point falls past `max_pk`
    pub fn sample(&self, step: f64) -> Result<InterpolatedTable, InterpError> {
        let grid = pk_grid(self.min_pk, self.max_pk, step)?;
        let lat = self.latitude.eval_alloc(&grid)?;
        let lon = self.longitude.eval_alloc(&grid)?;

        let samples = grid
            .into_iter()
            .zip(lat)
            .zip(lon)
            .map(|((pk, latitude), longitude)| Sample::new(pk, latitude, longitude))
            .collect();

        Ok(InterpolatedTable::from_samples(samples))
    }
}

/// Interpolate `samples` at a fixed PK `step` using `method`.
///
/// The output holds `ceil((max_pk - min_pk) / step)` samples at
/// `min_pk + i * step`; the maximum PK itself is only included if it
/// falls exactly on the grid. The function is pure: the same input always
/// yields bit-identical output.
///
/// # Errors
/// * [`InterpError::InsufficientData`] if the table is too short for `method`
/// * [`InterpError::InvalidInput`] if `step` is not finite and positive
/// * [`InterpError::Domain`] if rounding pushes a grid point past `max_pk`
pub fn interpolate(
    samples: &SampleTable,
    step: f64,
    method: Method,
) -> Result<InterpolatedTable, InterpError> {
    CoordinateInterpolator::new(samples, method)?.sample(step)
}

/// Uniform PK grid over `[min, max)` with points `min + i * step`.
///
/// # Errors
/// * [`InterpError::InvalidInput`] if `step` is not finite and positive
/// * [`InterpError::Domain`] if floating-point rounding places a point
///   beyond `max`
pub fn pk_grid(min: f64, max: f64, step: f64) -> Result<Vec<f64>, InterpError> {
    let grid = arange(min, max, step)?;
    if let Some(&pk) = grid.iter().find(|&&pk| pk < min || pk > max) {
        return Err(InterpError::Domain { pk, min, max });
    }
    Ok(grid)
}

/// Parse a PK search string such as `"12.5"`, `"PK 12.5"` or `"pk12,5"`.
pub fn parse_pk(input: &str) -> Option<f64> {
    let s = input.trim();
    let s = match s.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("pk") => s[2..].trim_start(),
        _ => s,
    };
    let pk: f64 = s.replace(',', ".").parse().ok()?;
    pk.is_finite().then_some(pk)
}
