//! Piecewise cubic interpolation through control values placed at integer parameters.
//!
//! A [CubicSpline] owns a sequence of control values and one cubic segment per value.
//! The tangent at each control point comes from a [TangentEstimator]; the estimator
//! is what tells the spline variants apart:
//! - [CatmullRom] - central differences,
//! - [Monotone] - never overshoots monotone data,
//! - [Akima] - weighted slopes that stay calm around outliers,
//! - [Pixel] - keeps sharp steps sharp, meant for upscaling pixel rows.
//!
//! Curves are either open, extrapolated linearly past both ends, or closed, wrapping
//! around with period equal to the number of points. [MultiSpline] drives one spline
//! per axis to interpolate vectors.
//!
//! # Example
//! ```
//! use cubic_spline::{AkimaSpline, EndType};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let mut spline = AkimaSpline::new(EndType::Open);
//! spline.set(&[12.0, 15.0, 15.0, 10.0, 10.0, 10.0, 10.5, 15.0]);
//!
//! assert_approx_eq!(spline.value(2.0), 15.0, 1e-12);
//!
//! spline.insert(3, 20.0).unwrap();
//! assert_approx_eq!(spline.value(3.0), 20.0, 1e-12);
//! assert!(spline.value(f64::NAN).is_nan());
//! ```

mod error;
mod multi;
mod segment;
mod spline;
mod tangent;

pub use error::{Result, SplineError};
pub use multi::MultiSpline;
pub use segment::CubicSegment;
pub use spline::{AkimaSpline, CatmullRomSpline, CubicSpline, EndType, MonotoneSpline, PixelSpline};
pub use tangent::{Akima, CatmullRom, Monotone, Pixel, TangentEstimator};
