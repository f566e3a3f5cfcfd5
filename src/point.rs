//! Provides [`Point`] and [`Correction`].
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ErrorAxis;
use crate::{Error, Result};

/// Represents a position on the Earth, a pair latitude and longitude.
///
/// The datum (WGS-84 or GCJ-02) is not tagged,
/// it is implied by the function which produces or consumes the point.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # fn main() -> Result<()> {
/// // Construct
/// let point = Point::new(39.1, 106.1);
/// assert_eq!(point.latitude(), &39.1);
/// assert_eq!(point.longitude(), &106.1);
///
/// // Add/sub Correction
/// let result = &Point::new(39.5, 106.25) + Correction::new(1.0, 0.5);
/// assert_eq!(result, Point::new(40.5, 106.75));
///
/// // Parse and format
/// let point: Point = "39.1,106.1".parse()?;
/// assert_eq!(format!("{point:.3}"), "39.100,106.100");
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// The latitude \[deg\] of the point
    pub(crate) latitude: f64,
    /// The longitude \[deg\] of the point
    pub(crate) longitude: f64,
}

/// The difference between two [`Point`]s.
///
/// The unit of latitude and longitude is \[deg\].
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let correction = Correction::new(3., 4.);
/// assert_eq!(correction.latitude, 3.);
/// assert_eq!(correction.longitude, 4.);
/// assert_eq!(correction.horizontal(), 5.);
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Correction {
    /// The latitude correction \[deg\].
    pub latitude: f64,
    /// The longitude correction \[deg\].
    pub longitude: f64,
}

impl Correction {
    /// Makes a [`Correction`].
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns √𝑙𝑎𝑡𝑖𝑡𝑢𝑑𝑒² + 𝑙𝑜𝑛𝑔𝑖𝑡𝑢𝑑𝑒².
    #[inline]
    pub fn horizontal(&self) -> f64 {
        f64::hypot(self.latitude, self.longitude)
    }

    /// Returns `true` if both components are less than `criteria` in absolute value.
    #[inline]
    pub fn within(&self, criteria: f64) -> bool {
        self.latitude.abs() < criteria && self.longitude.abs() < criteria
    }
}

impl From<(f64, f64)> for Point {
    /// see [`Point::new()`]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl From<Point> for (f64, f64) {
    fn from(rhs: Point) -> Self {
        (rhs.latitude, rhs.longitude)
    }
}

impl Add<Correction> for Point {
    type Output = Self;

    fn add(self, rhs: Correction) -> Self::Output {
        Self::Output::new(self.latitude + rhs.latitude, self.longitude + rhs.longitude)
    }
}

impl Add<Correction> for &Point {
    type Output = Point;

    fn add(self, rhs: Correction) -> Self::Output {
        Self::Output::new(self.latitude + rhs.latitude, self.longitude + rhs.longitude)
    }
}

impl AddAssign<Correction> for Point {
    fn add_assign(&mut self, rhs: Correction) {
        self.latitude += rhs.latitude;
        self.longitude += rhs.longitude;
    }
}

impl Sub<Correction> for Point {
    type Output = Self;

    fn sub(self, rhs: Correction) -> Self::Output {
        Self::Output::new(self.latitude - rhs.latitude, self.longitude - rhs.longitude)
    }
}

impl Sub<Correction> for &Point {
    type Output = Point;

    fn sub(self, rhs: Correction) -> Self::Output {
        Self::Output::new(self.latitude - rhs.latitude, self.longitude - rhs.longitude)
    }
}

impl SubAssign<Correction> for Point {
    fn sub_assign(&mut self, rhs: Correction) {
        self.latitude -= rhs.latitude;
        self.longitude -= rhs.longitude;
    }
}

impl Sub<&Point> for &Point {
    type Output = Correction;

    /// Returns the correction which moves `rhs` to `self`.
    fn sub(self, rhs: &Point) -> Self::Output {
        Correction::new(self.latitude - rhs.latitude, self.longitude - rhs.longitude)
    }
}

impl FromStr for Point {
    type Err = Error;

    /// Parses `"<lat>,<lon>"`, this does not check the value range.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// # fn main() -> Result<()> {
    /// let point: Point = "39.1, 106.1".parse()?;
    /// assert_eq!(point, Point::new(39.1, 106.1));
    ///
    /// assert!("39.1".parse::<Point>().is_err());
    /// assert!("39.1,abc".parse::<Point>().is_err());
    /// # Ok(())}
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let (latitude, longitude) = s.split_once(',').ok_or_else(|| Error::new_parse(s))?;

        let latitude = latitude
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::new_parse(s))?;
        let longitude = longitude
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::new_parse(s))?;

        Ok(Self::new(latitude, longitude))
    }
}

impl Display for Point {
    /// Formats as `lat,lon`, the precision applies to both.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*},{:.*}", p, self.latitude, p, self.longitude),
            None => write!(f, "{},{}", self.latitude, self.longitude),
        }
    }
}

impl Point {
    /// Makes a [`Point`].
    ///
    /// This does not check the value range.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let point = Point::new(39.1, 106.1);
    /// assert_eq!(point.latitude(), &39.1);
    /// assert_eq!(point.longitude(), &106.1);
    /// ```
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Makes a [`Point`] with checking.
    ///
    /// # Errors
    ///
    /// If `latitude` and/or `longitude` is NaN or out-of-range,
    /// `latitude` must satisfy -90.0 <= and <= 90.0
    /// and `longitude` does -180.0 <= and <= 180.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// # fn main() -> Result<()> {
    /// let point = Point::try_new(39.1, 106.1)?;
    /// assert_eq!(point.latitude(), &39.1);
    ///
    /// // If out-of-range, returns Err
    /// assert!(Point::try_new(91.0, 106.1).is_err());
    /// assert!(Point::try_new(39.1, 181.0).is_err());
    /// assert!(Point::try_new(f64::NAN, 106.1).is_err());
    /// # Ok(())}
    /// ```
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        // NaN fails both comparisons
        if !(latitude.ge(&-90.0) && latitude.le(&90.0)) {
            return Err(Error::new_out_of_range(ErrorAxis::Latitude));
        };
        if !(longitude.ge(&-180.0) && longitude.le(&180.0)) {
            return Err(Error::new_out_of_range(ErrorAxis::Longitude));
        };

        Ok(Self::new(latitude, longitude))
    }

    /// Returns the latitude of `self`.
    #[inline]
    pub const fn latitude(&self) -> &f64 {
        &self.latitude
    }

    /// Returns the longitude of `self`.
    #[inline]
    pub const fn longitude(&self) -> &f64 {
        &self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new() {
        assert_eq!(Point::try_new(90.0, 180.0), Ok(Point::new(90.0, 180.0)));
        assert_eq!(
            Point::try_new(-90.0, -180.0),
            Ok(Point::new(-90.0, -180.0))
        );

        for (lat, lon, axis) in [
            (90.000001, 0.0, ErrorAxis::Latitude),
            (-90.000001, 0.0, ErrorAxis::Latitude),
            (f64::NAN, 0.0, ErrorAxis::Latitude),
            (f64::INFINITY, 0.0, ErrorAxis::Latitude),
            (0.0, 180.000001, ErrorAxis::Longitude),
            (0.0, -180.000001, ErrorAxis::Longitude),
            (0.0, f64::NAN, ErrorAxis::Longitude),
        ] {
            assert_eq!(
                Point::try_new(lat, lon),
                Err(Error::new_out_of_range(axis)),
                "{lat}, {lon}"
            );
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("39.1,106.1".parse::<Point>(), Ok(Point::new(39.1, 106.1)));
        assert_eq!(" -1.5 , 2 ".parse::<Point>(), Ok(Point::new(-1.5, 2.0)));
        assert_eq!("1e1,2".parse::<Point>(), Ok(Point::new(10.0, 2.0)));

        for s in ["", "39.1", "39.1;106.1", "39.1,", ",106.1", "a,b", "1,2,3"] {
            assert_eq!(s.parse::<Point>(), Err(Error::new_parse(s)), "{s:?}");
        }
    }

    #[test]
    fn test_display() {
        let point = Point::new(39.099087837, 106.095352651);
        assert_eq!(format!("{point:.6}"), "39.099088,106.095353");
        assert_eq!(format!("{point:.2}"), "39.10,106.10");
        assert_eq!(Point::new(1.5, 2.0).to_string(), "1.5,2");
    }

    #[test]
    fn test_sub_point() {
        let a = Point::new(2.0, 3.0);
        let b = Point::new(1.0, 1.0);
        assert_eq!(&a - &b, Correction::new(1.0, 2.0));
        assert_eq!(b + (&a - &b), a);
    }

    #[test]
    fn test_within() {
        assert!(Correction::new(0.5e-9, -0.5e-9).within(1e-9));
        assert!(!Correction::new(1e-9, 0.0).within(1e-9));
        assert!(!Correction::new(0.0, f64::NAN).within(1e-9));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Point::new(39.1, 106.1),
            &[
                Token::Struct {
                    name: "Point",
                    len: 2,
                },
                Token::Str("latitude"),
                Token::F64(39.1),
                Token::Str("longitude"),
                Token::F64(106.1),
                Token::StructEnd,
            ],
        );
    }
}
