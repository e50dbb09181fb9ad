use log::debug;
use nalgebra::DVector;

use crate::error::{Result, SplineError};
use crate::spline::{CubicSpline, EndType};
use crate::tangent::TangentEstimator;

/// Vector-valued curve built from one independent [CubicSpline] per axis.
///
/// Every axis holds the same number of control points. Arguments are checked
/// before any axis is touched, so a rejected call leaves all axes as they were.
///
/// # Example
/// ```
/// use cubic_spline::{CatmullRom, EndType, MultiSpline};
/// use nalgebra::dvector;
///
/// let mut path = MultiSpline::<CatmullRom>::new(2, EndType::Open).unwrap();
/// path.set(&[dvector![0.0, 0.0], dvector![1.0, 2.0], dvector![2.0, 4.0]]).unwrap();
///
/// assert_eq!(path.value(1.0), dvector![1.0, 2.0]);
/// ```
#[derive(Debug, Clone)]
pub struct MultiSpline<E: TangentEstimator> {
    axes: Vec<CubicSpline<E>>,
}

impl<E: TangentEstimator + Default> MultiSpline<E> {
    pub fn new(dimension: usize, end_type: EndType) -> Result<Self> {
        Self::with_estimator(dimension, end_type, E::default())
    }
}

impl<E: TangentEstimator> MultiSpline<E> {
    /// Creates `dimension` empty axes that share `estimator` and `end_type`.
    ///
    /// # Errors
    /// [SplineError::InvalidDimension] when `dimension` is 0.
    pub fn with_estimator(dimension: usize, end_type: EndType, estimator: E) -> Result<Self> {
        if dimension == 0 {
            return Err(SplineError::InvalidDimension);
        }

        let axes = (0..dimension)
            .map(|_| CubicSpline::with_estimator(end_type, estimator.clone()))
            .collect();
        Ok(MultiSpline { axes })
    }

    pub fn dimension(&self) -> usize {
        self.axes.len()
    }

    pub fn end_type(&self) -> EndType {
        self.axes[0].end_type()
    }

    /// Number of control points, equal on every axis.
    pub fn len(&self) -> usize {
        self.axes[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes[0].is_empty()
    }

    /// The scalar spline for one axis.
    pub fn axis(&self, axis: usize) -> Option<&CubicSpline<E>> {
        self.axes.get(axis)
    }

    pub fn point(&self, index: usize) -> Result<DVector<f64>> {
        self.check_index(index)?;
        Ok(DVector::from_iterator(
            self.dimension(),
            self.axes.iter().map(|axis| axis.points()[index]),
        ))
    }

    pub fn initialize(&mut self) {
        for axis in self.axes.iter_mut() {
            axis.initialize();
        }
    }

    pub fn set(&mut self, points: &[DVector<f64>]) -> Result<()> {
        self.set_prefix(points, points.len())
    }

    /// Replaces the control points with the first `count` entries of `points`.
    pub fn set_prefix(&mut self, points: &[DVector<f64>], count: usize) -> Result<()> {
        if count > points.len() {
            return Err(SplineError::InsufficientValues {
                requested: count,
                available: points.len(),
            });
        }
        let points = &points[..count];
        for point in points {
            self.check_dimension(point)?;
        }

        debug!(
            "loading {} control points into {} axes",
            points.len(),
            self.dimension()
        );

        let mut column = Vec::with_capacity(points.len());
        for (i, axis) in self.axes.iter_mut().enumerate() {
            column.clear();
            column.extend(points.iter().map(|point| point[i]));
            axis.set(&column);
        }
        Ok(())
    }

    pub fn insert(&mut self, index: usize, point: &DVector<f64>) -> Result<()> {
        if index > self.len() {
            return Err(SplineError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.check_dimension(point)?;

        for (axis, value) in self.axes.iter_mut().zip(point.iter()) {
            fan_out(axis.insert(index, *value));
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<DVector<f64>> {
        self.check_index(index)?;

        let dimension = self.dimension();
        let removed = self.axes.iter_mut().map(|axis| fan_out(axis.remove(index)));
        Ok(DVector::from_iterator(dimension, removed))
    }

    pub fn set_point(&mut self, index: usize, point: &DVector<f64>) -> Result<()> {
        self.check_index(index)?;
        self.check_dimension(point)?;

        for (axis, value) in self.axes.iter_mut().zip(point.iter()) {
            fan_out(axis.set_point(index, *value));
        }
        Ok(())
    }

    pub fn value(&self, t: f64) -> DVector<f64> {
        self.collect(|axis| axis.value(t))
    }

    pub fn diff(&self, t: f64) -> DVector<f64> {
        self.collect(|axis| axis.diff(t))
    }

    pub fn diff_n(&self, t: f64, n: u32) -> DVector<f64> {
        self.collect(|axis| axis.diff_n(t, n))
    }

    fn collect<F: Fn(&CubicSpline<E>) -> f64>(&self, f: F) -> DVector<f64> {
        DVector::from_iterator(self.axes.len(), self.axes.iter().map(f))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(SplineError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    fn check_dimension(&self, point: &DVector<f64>) -> Result<()> {
        if point.len() == self.dimension() {
            Ok(())
        } else {
            Err(SplineError::DimensionMismatch {
                expected: self.dimension(),
                actual: point.len(),
            })
        }
    }
}

// Axes are validated as a group before fan-out, so a per-axis failure means
// they have drifted apart and the curve can no longer be trusted.
fn fan_out<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("axes out of sync after validation: {err}"),
    }
}

impl<E: TangentEstimator> PartialEq for MultiSpline<E> {
    fn eq(&self, other: &Self) -> bool {
        self.axes == other.axes
    }
}
