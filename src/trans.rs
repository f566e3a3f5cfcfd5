//! Provides the forward (WGS-84 to GCJ-02) and backward (GCJ-02 to WGS-84)
//! transformations.
//!
//! The forward transformation is the closed-form empirical offset,
//! the backward one has no closed form and is solved by [`Bisection`].
use std::f64::consts::PI;

use log::trace;

use crate::bisect::{Bisection, Solution, DELTA, MAX_ITERATION, THRESHOLD};
use crate::ellipsoid::KRASOVSKY_1940;
use crate::kernel::{transform_lat, transform_lon, ORIGIN};
use crate::region::out_of_china;
use crate::{Correction, Error, Point, Result};

/// Returns the correction of the forward-transformation at `point` (WGS-84).
///
/// # Errors
///
/// Returns [`Error::OutOfRegion`] when `point` is out of China.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # use gcjtrans::trans::{forward, forward_corr};
/// # fn main() -> Result<()> {
/// let point = Point::new(39.1, 106.1);
/// let corr = forward_corr(&point)?;
///
/// assert!((corr.latitude - 9.128747459894e-4).abs() < 1e-12);
/// assert!((corr.longitude - 4.648529900255e-3).abs() < 1e-12);
///
/// assert_eq!(&point + corr, forward(&point)?);
/// # Ok(())}
/// ```
pub fn forward_corr(point: &Point) -> Result<Correction> {
    if out_of_china(point.latitude, point.longitude) {
        return Err(Error::new_out_of_region(point.latitude, point.longitude));
    }

    let (lat, lon) = (point.latitude - ORIGIN.0, point.longitude - ORIGIN.1);
    let phi = point.latitude / 180.0 * PI;

    let dlat = (transform_lat(lat, lon) * 180.0) / (KRASOVSKY_1940.meridian_radius(phi) * PI);
    let dlon = (transform_lon(lat, lon) * 180.0)
        / (KRASOVSKY_1940.prime_vertical_radius(phi) * phi.cos() * PI);

    Ok(Correction::new(dlat, dlon))
}

/// Returns the forward-transformed position, WGS-84 to GCJ-02.
///
/// # Errors
///
/// Returns [`Error::OutOfRegion`] when `point` is out of China.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # use gcjtrans::trans::forward;
/// # fn main() -> Result<()> {
/// let result = forward(&Point::new(39.1, 106.1))?;
/// assert!((result.latitude() - 39.10091287474599).abs() < 1e-12);
/// assert!((result.longitude() - 106.10464852990026).abs() < 1e-12);
///
/// assert!(forward(&Point::new(0.0, 0.0)).is_err());
/// # Ok(())}
/// ```
#[inline]
pub fn forward(point: &Point) -> Result<Point> {
    forward_corr(point).map(|corr| point + corr)
}

/// Runs the backward search at `point` (GCJ-02).
///
/// The brackets are ±[`DELTA`] around the first-order estimate
/// `point - forward_corr(point)`, the GCJ-02 offset (up to ~7e-3 \[deg\])
/// is much wider than [`DELTA`] but changes slowly,
/// and the estimate is within ~6e-5 \[deg\] of the solution.
///
/// It converges in 16 to 20 iterations for most of the region,
/// but a few positions exhaust [`MAX_ITERATION`] with a residual about 1e-9 to 2e-8 \[deg\]
/// (see [`Bisection`]).
fn solve(point: &Point) -> Result<Solution> {
    if out_of_china(point.latitude, point.longitude) {
        return Err(Error::new_out_of_region(point.latitude, point.longitude));
    }

    let center = point - forward_corr(point)?;
    trace!("backward search of {point:?} centered at {center:?}");

    Bisection::new(&center, DELTA).solve(point, THRESHOLD, MAX_ITERATION, forward)
}

/// Returns the backward-transformed position, GCJ-02 to WGS-84.
///
/// This is best-effort, it returns the last candidate
/// even if the residual is not less than [`THRESHOLD`]
/// within [`MAX_ITERATION`] iterations.
/// Use [`backward_checked`] to detect it.
///
/// # Errors
///
/// Returns [`Error::OutOfRegion`] when `point`, or a candidate on the search, is out of China.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # use gcjtrans::trans::{backward, forward};
/// # fn main() -> Result<()> {
/// let point = Point::new(39.1, 106.1);
/// let result = backward(&point)?;
/// assert!((result.latitude() - 39.09908783707654).abs() < 1e-7);
/// assert!((result.longitude() - 106.09535265189295).abs() < 1e-7);
///
/// // round trip
/// let origin = forward(&result)?;
/// assert!((origin.latitude() - point.latitude()).abs() < 1e-9);
/// assert!((origin.longitude() - point.longitude()).abs() < 1e-9);
/// # Ok(())}
/// ```
pub fn backward(point: &Point) -> Result<Point> {
    solve(point).map(|solution| solution.point)
}

/// Returns the backward-transformed position, GCJ-02 to WGS-84, with checking convergence.
///
/// # Errors
///
/// Returns [`Error::OutOfRegion`] when `point`, or a candidate on the search, is out of China,
/// and [`Error::NotConvergent`] when the residual is not less than [`THRESHOLD`]
/// within [`MAX_ITERATION`] iterations.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # use gcjtrans::trans::{backward, backward_checked};
/// # fn main() -> Result<()> {
/// let point = Point::new(39.1, 106.1);
/// assert_eq!(backward_checked(&point)?, backward(&point)?);
/// # Ok(())}
/// ```
pub fn backward_checked(point: &Point) -> Result<Point> {
    let solution = solve(point)?;

    if solution.converged {
        Ok(solution.point)
    } else {
        Err(Error::new_not_convergent(
            solution.point.latitude,
            solution.point.longitude,
            THRESHOLD,
            solution.iteration,
        ))
    }
}

/// Returns the correction of the backward-transformation at `point` (GCJ-02).
///
/// # Errors
///
/// Same as [`backward`].
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # use gcjtrans::trans::{backward, backward_corr};
/// # fn main() -> Result<()> {
/// let point = Point::new(39.1, 106.1);
/// let corr = backward_corr(&point)?;
/// assert_eq!(&point + corr, backward(&point)?);
/// # Ok(())}
/// ```
pub fn backward_corr(point: &Point) -> Result<Correction> {
    backward(point).map(|result| &result - point)
}

/// Returns the GCJ-02 (`latitude`, `longitude`) of the WGS-84 one.
///
/// # Errors
///
/// Returns [`Error::OutOfRegion`] when it is out of China.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # fn main() -> Result<()> {
/// let (lat, lon) = wgs_to_gcj(39.1, 106.1)?;
/// assert!((lat - 39.10091287474599).abs() < 1e-12);
/// assert!((lon - 106.10464852990026).abs() < 1e-12);
///
/// assert!(matches!(wgs_to_gcj(0.0, 0.0), Err(Error::OutOfRegion { .. })));
/// # Ok(())}
/// ```
pub fn wgs_to_gcj(latitude: f64, longitude: f64) -> Result<(f64, f64)> {
    forward(&Point::new(latitude, longitude)).map(Into::into)
}

/// Returns the WGS-84 (`latitude`, `longitude`) of the GCJ-02 one.
///
/// Best-effort, see [`backward`].
///
/// # Errors
///
/// Returns [`Error::OutOfRegion`] when it is out of China.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # fn main() -> Result<()> {
/// let (lat, lon) = gcj_to_wgs(39.1, 106.1)?;
/// assert_eq!(format!("{lat:.6},{lon:.6}"), "39.099088,106.095353");
///
/// assert!(matches!(gcj_to_wgs(60.0, 100.0), Err(Error::OutOfRegion { .. })));
/// # Ok(())}
/// ```
pub fn gcj_to_wgs(latitude: f64, longitude: f64) -> Result<(f64, f64)> {
    backward(&Point::new(latitude, longitude)).map(Into::into)
}

/// Returns the WGS-84 (`latitude`, `longitude`) of the GCJ-02 one, with checking convergence.
///
/// # Errors
///
/// See [`backward_checked`].
pub fn gcj_to_wgs_checked(latitude: f64, longitude: f64) -> Result<(f64, f64)> {
    backward_checked(&Point::new(latitude, longitude)).map(Into::into)
}
