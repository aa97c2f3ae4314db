//! Kilometric-point (PK) indexed interpolation of geographic coordinates.
//!
//! Given a table of `(pk, latitude, longitude)` samples along a linear route,
//! fit latitude and longitude independently against PK and evaluate both on
//! a uniform PK grid, producing a denser table of samples.
//!
//! Latitude and longitude are treated as plain scalars, so this is only
//! valid locally, for short and fairly straight track segments. It is not a
//! geodesic or great-circle interpolation.
//!
//! # Methods
//!
//! | Method     | Interpolant                                   | Min. samples | Continuity |
//! |------------|-----------------------------------------------|--------------|------------|
//! | `linear`   | piecewise linear                              | 2            | C0         |
//! | `cubic`    | cubic spline, not-a-knot ends                 | 4            | C2         |
//! | `natural`  | cubic spline, zero curvature at the ends      | 4            | C2         |
//! | `hermite`  | cubic Hermite, finite-difference slopes       | 4            | C1         |
//! | `nearest`  | nearest source sample                         | 2            | none       |
//!
//! None of the methods extrapolate. Every grid point is `min_pk + i * step`,
//! computed from its index so that there is no accumulated drift, and the
//! grid covers the half-open range `[min_pk, max_pk)`.
//!
//! # Example
//! ```rust
//! use pkinterp::{interpolate, Method, Sample, SampleTable};
//!
//! let samples = SampleTable::new(vec![
//!     Sample::new(0.0, 0.0, 0.0),
//!     Sample::new(1.0, 1.0, 2.0),
//!     Sample::new(2.0, 2.0, 4.0),
//! ])
//! .unwrap();
//!
//! let out = interpolate(&samples, 0.5, Method::Linear).unwrap();
//! assert_eq!(out.len(), 4);
//! assert_eq!(out.samples()[3], Sample::new(1.5, 1.5, 3.0));
//! ```
//!
//! # Pipeline
//! [`config::run`] loads samples from a file or from inline values, runs
//! the interpolation, writes the result as a JSON array and optionally
//! renders a diagnostic SVG chart (feature `plot`). File output only
//! happens after the interpolation succeeded.
// These "needless" range loops read closer to the math
#![allow(clippy::needless_range_loop)]

pub mod config;
pub mod error;
pub mod interpolate;
pub mod io;
pub mod method;
pub mod one_dim;
pub mod sample;
pub mod utils;

#[cfg(feature = "plot")]
pub mod plot;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{run, Config, Source};
pub use error::{Error, InterpError};
pub use interpolate::{interpolate, parse_pk, pk_grid, CoordinateInterpolator};
pub use method::Method;
pub use one_dim::{
    cubic::Cubic1D, cubic::CubicSlopes, hold::Nearest1D, linear::Linear1D, Interp1D,
    RectilinearGrid1D,
};
pub use sample::{InterpolatedTable, Sample, SampleTable};
