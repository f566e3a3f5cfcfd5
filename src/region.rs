//! Provides the region where the GCJ-02 offset is defined.
//!
//! The distortion formulas are fitted inside a latitude/longitude box
//! roughly covering mainland China, they are meaningless outside it.
//!
//! ```
//! use gcjtrans::region::{out_of_china, CHINA};
//!
//! assert!(out_of_china(0.0, 0.0));
//! assert!(!out_of_china(39.1, 106.1));
//! assert!(CHINA.contains(39.1, 106.1));
//! ```

/// A closed latitude/longitude box \[deg\].
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Bounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

/// The bounding box of the GCJ-02 region.
pub const CHINA: Bounds = Bounds {
    min_latitude: 0.8293,
    max_latitude: 55.8271,
    min_longitude: 72.004,
    max_longitude: 137.8347,
};

impl Bounds {
    /// Returns `true` if (`latitude`, `longitude`) is inside `self`, bounds inclusive.
    ///
    /// Any NaN is outside.
    #[inline]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude.ge(&self.min_latitude)
            && latitude.le(&self.max_latitude)
            && longitude.ge(&self.min_longitude)
            && longitude.le(&self.max_longitude)
    }
}

/// Returns `true` if (`latitude`, `longitude`) is outside of [`CHINA`].
#[inline]
pub fn out_of_china(latitude: f64, longitude: f64) -> bool {
    !CHINA.contains(latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_china() {
        assert!(out_of_china(0.0, 0.0));
        assert!(out_of_china(60.0, 100.0));
        assert!(out_of_china(39.1, 140.0));
        assert!(!out_of_china(39.1, 106.1));
        assert!(!out_of_china(39.908823, 116.39747));
    }

    #[test]
    fn test_bounds_inclusive() {
        let mid_lat = 30.0;
        let mid_lon = 100.0;

        for lat in [0.8293, 55.8271] {
            assert!(!out_of_china(lat, mid_lon), "{lat}");
        }
        for lon in [72.004, 137.8347] {
            assert!(!out_of_china(mid_lat, lon), "{lon}");
        }

        assert!(out_of_china(0.8293f64.next_down(), mid_lon));
        assert!(out_of_china(55.8271f64.next_up(), mid_lon));
        assert!(out_of_china(mid_lat, 72.004f64.next_down()));
        assert!(out_of_china(mid_lat, 137.8347f64.next_up()));
    }

    #[test]
    fn test_nan() {
        assert!(out_of_china(f64::NAN, 100.0));
        assert!(out_of_china(30.0, f64::NAN));
        assert!(out_of_china(f64::INFINITY, f64::NEG_INFINITY));
    }
}
