//! Convenience methods for constructing grids in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use crate::error::InterpError;

/// Largest number of grid points `arange` will generate.
pub const MAX_GRID_LEN: usize = u32::MAX as usize;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let dx = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * dx).collect()
        }
    }
}

/// Generates `ceil((stop - start) / step)` values `start + i * step`,
/// which covers the half-open interval `[start, stop)`.
///
/// Each value is computed from its index rather than by repeated addition,
/// so there is no accumulated drift. Because the count is rounded up, the
/// last value can still land at or slightly past `stop` when the range is
/// not an exact multiple of the step in floating point.
///
/// # Errors
/// * If `step` is not a finite positive number
/// * If `start` or `stop` is not finite
/// * If the number of values would exceed [`MAX_GRID_LEN`]
pub fn arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, InterpError> {
    if !(step.is_finite() && step > 0.0) {
        return Err(InterpError::invalid(format!(
            "step must be a finite positive number, got {step}"
        )));
    }
    if !(start.is_finite() && stop.is_finite()) {
        return Err(InterpError::invalid("grid bounds must be finite"));
    }

    let n = ((stop - start) / step).ceil().max(0.0);
    if n > MAX_GRID_LEN as f64 {
        return Err(InterpError::invalid(format!(
            "step {step} produces more than {MAX_GRID_LEN} grid points over [{start}, {stop})"
        )));
    }
    let n = n as usize;

    Ok((0..n).map(|i| start + i as f64 * step).collect())
}
