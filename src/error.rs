//! Provides [`Error`] and [`Result`].
use std::fmt::{Display, Formatter};

/// Alias for a `Result<T, gcjtrans::error::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur by this crate.
#[derive(Debug, PartialEq, Clone, thiserror::Error)]
pub enum Error {
    /// The position is outside the region where the offset formula is defined.
    #[error("out of China")]
    OutOfRegion {
        /// The latitude \[deg\] rejected
        latitude: f64,
        /// The longitude \[deg\] rejected
        longitude: f64,
    },
    /// Error is still high even iteration exhausted
    #[error("error is still higher than {criteria:?} even exhaust {iteration:?} iterations")]
    NotConvergent {
        /// Resulting latitude
        latitude: f64,
        /// Resulting longitude
        longitude: f64,
        /// Error criteria
        criteria: f64,
        /// Max iteration
        iteration: usize,
    },
    /// The value is NaN or out of the valid range.
    #[error("invalid {axis}, expect range: [{low}, {high}]")]
    OutOfRange {
        /// The axis of the invalid value
        axis: ErrorAxis,
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },
    /// Invalid `lat,lon` text.
    #[error("invalid input: '{s}'")]
    Parse {
        /// Invalid data
        s: String,
    },
}

impl Error {
    #[cold]
    pub(crate) const fn new_out_of_region(latitude: f64, longitude: f64) -> Self {
        Self::OutOfRegion {
            latitude,
            longitude,
        }
    }

    #[cold]
    pub(crate) const fn new_not_convergent(
        latitude: f64,
        longitude: f64,
        criteria: f64,
        iteration: usize,
    ) -> Self {
        Self::NotConvergent {
            latitude,
            longitude,
            criteria,
            iteration,
        }
    }

    #[cold]
    pub(crate) const fn new_out_of_range(axis: ErrorAxis) -> Self {
        let (low, high) = match axis {
            ErrorAxis::Latitude => (-90.0, 90.0),
            ErrorAxis::Longitude => (-180.0, 180.0),
        };
        Self::OutOfRange { axis, low, high }
    }

    #[cold]
    pub(crate) fn new_parse(s: &str) -> Self {
        Self::Parse { s: s.to_string() }
    }
}

/// The axis of a [`Error::OutOfRange`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorAxis {
    Latitude,
    Longitude,
}

impl Display for ErrorAxis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorAxis::Latitude => "lat",
            ErrorAxis::Longitude => "lon",
        };
        f.write_str(s)
    }
}
