//! Provides the empirical distortion kernels of GCJ-02.
//!
//! Both take a position shifted by the reference point (35.0, 105.0),
//! that is `(latitude - 35.0, longitude - 105.0)`,
//! and return a raw offset, not yet scaled into \[deg\]
//! (see [`forward_corr`](crate::trans::forward_corr)).
//!
//! The coefficients are an empirical fit, any change of them
//! changes the result measurably.
use std::f64::consts::PI;

/// The reference point (latitude, longitude) \[deg\] of the kernels.
pub const ORIGIN: (f64, f64) = (35.0, 105.0);

/// Returns the raw latitude offset.
///
/// # Example
///
/// ```
/// # use gcjtrans::kernel::transform_lat;
/// assert_eq!(transform_lat(0.0, 0.0), -100.0);
/// ```
pub fn transform_lat(latitude: f64, longitude: f64) -> f64 {
    let mut ret = -100.0
        + 2.0 * longitude
        + 3.0 * latitude
        + 0.2 * latitude * latitude
        + 0.1 * longitude * latitude
        + 0.2 * longitude.abs().sqrt();
    ret += (20.0 * (6.0 * longitude * PI).sin() + 20.0 * (2.0 * longitude * PI).sin()) * 2.0
        / 3.0;
    ret += (20.0 * (latitude * PI).sin() + 40.0 * (latitude / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (latitude / 12.0 * PI).sin() + 320.0 * (latitude * PI / 30.0).sin()) * 2.0
        / 3.0;
    ret
}

/// Returns the raw longitude offset.
///
/// # Example
///
/// ```
/// # use gcjtrans::kernel::transform_lon;
/// assert_eq!(transform_lon(0.0, 0.0), 300.0);
/// ```
pub fn transform_lon(latitude: f64, longitude: f64) -> f64 {
    let mut ret = 300.0
        + longitude
        + 2.0 * latitude
        + 0.1 * longitude * longitude
        + 0.1 * longitude * latitude
        + 0.1 * longitude.abs().sqrt();
    ret += (20.0 * (6.0 * longitude * PI).sin() + 20.0 * (2.0 * longitude * PI).sin()) * 2.0
        / 3.0;
    ret += (20.0 * (longitude * PI).sin() + 40.0 * (longitude / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (longitude / 12.0 * PI).sin() + 300.0 * (longitude / 30.0 * PI).sin()) * 2.0
        / 3.0;
    ret
}
