//! # gcjtrans
//!
//! Coordinate transformer between WGS-84 and GCJ-02.
//!
//! GCJ-02 is the datum of Chinese mapping services,
//! which applies a deliberate, non-linear offset to WGS-84 inside China.
//!
//! ```
//! use std::error::Error;
//!
//! use gcjtrans::{gcj_to_wgs, wgs_to_gcj};
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!     // Forward transformation, WGS-84 to GCJ-02
//!     let (lat, lon) = wgs_to_gcj(39.1, 106.1)?;
//!     // Prints Forward: 39.100913,106.104649
//!     println!("Forward: {lat:.6},{lon:.6}");
//!
//!     // Backward transformation, GCJ-02 to WGS-84
//!     let (lat, lon) = gcj_to_wgs(lat, lon)?;
//!     // Prints Backward: 39.100000,106.100000
//!     println!("Backward: {lat:.6},{lon:.6}");
//!
//!     // Both fail out of China
//!     assert!(wgs_to_gcj(0.0, 0.0).is_err());
//!     assert!(gcj_to_wgs(0.0, 0.0).is_err());
//!
//!     Ok(())
//! }
//! ```
//!
//! Features:
//!
//! - Closed-form forward transformation by the empirical offset formula
//! - Backward transformation by bisection search,
//!   best-effort ([`gcj_to_wgs`]) or with checking convergence ([`gcj_to_wgs_checked`])
//! - Offline, no persistence and no configuration
//!
//! The same transformations on [`Point`] are in [`trans`].
//!
//! # Serialization and Deserialization
//!
//! It supports (de)serialization by [`serde` crate](https://crates.io/crates/serde)
//! for [`Point`] and [`Correction`] only if the feature `serde` is enabled.
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # fn main() -> serde_json::Result<()> {
//! use gcjtrans::Point;
//!
//! let point = Point::new(39.5, 106.25);
//!
//! let json = serde_json::to_string(&point)?;
//! assert_eq!(json, r#"{"latitude":39.5,"longitude":106.25}"#);
//!
//! let result: Point = serde_json::from_str(&json)?;
//! assert_eq!(result, point);
//! # Ok(())}
//! # #[cfg(not(feature = "serde"))]
//! # fn main() {}
//! ```
//!
//! # Logging
//!
//! It logs by [`log` crate](https://crates.io/crates/log),
//! the backward search logs the convergence in `debug`
//! and the exhausted iteration in `warn` level.
//!
//! # Command line
//!
//! The `gcj2wgs` binary (the default `binary` feature) wraps [`gcj_to_wgs`]:
//!
//! ```text
//! $ gcj2wgs 39.1,106.1
//! 39.099088,106.095353
//! ```
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use point::{Correction, Point};
#[doc(inline)]
pub use region::out_of_china;
#[doc(inline)]
pub use kernel::{transform_lat, transform_lon};
#[doc(inline)]
pub use trans::{gcj_to_wgs, gcj_to_wgs_checked, wgs_to_gcj};

pub mod bisect;
pub mod ellipsoid;
pub mod error;
pub mod kernel;
pub mod point;
pub mod region;
pub mod trans;
