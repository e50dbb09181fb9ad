use log::{debug, trace};

use crate::error::{Result, SplineError};
use crate::segment::CubicSegment;
use crate::tangent::{Akima, CatmullRom, Monotone, Pixel, TangentEstimator};

/// Whether the curve ends are free or joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndType {
    /// Ends are free; the curve is extrapolated linearly outside `[0, len - 1]`.
    #[default]
    Open,
    /// Point `len - 1` is joined back to point 0 and the parameter wraps modulo `len`.
    Close,
}

pub type CatmullRomSpline = CubicSpline<CatmullRom>;
pub type MonotoneSpline = CubicSpline<Monotone>;
pub type AkimaSpline = CubicSpline<Akima>;
pub type PixelSpline = CubicSpline<Pixel>;

// Widest stencil any estimator may request.
const MAX_STENCIL: usize = 5;

/// Piecewise cubic curve through control values placed at integer parameters.
///
/// The curve keeps exactly one [CubicSegment] per control point. Segment `i`
/// starts at point `i`; on an open curve the last segment is a straight
/// continuation past the final point, on a closed curve it joins the final
/// point back to point 0.
///
/// Edits through [CubicSpline::insert], [CubicSpline::remove] and
/// [CubicSpline::set_point] only rebuild the segments whose tangents can see
/// the edited point, so their cost does not grow with the curve length.
///
/// # Example
/// ```
/// use cubic_spline::{CatmullRomSpline, EndType};
///
/// let mut spline = CatmullRomSpline::new(EndType::Open);
/// spline.set(&[0.0, 2.0, 4.0, 6.0]);
///
/// assert_eq!(spline.value(1.0), 2.0);
/// assert_eq!(spline.value(1.5), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline<E: TangentEstimator> {
    end_type: EndType,
    points: Vec<f64>,
    segments: Vec<CubicSegment>,
    estimator: E,
}

impl<E: TangentEstimator + Default> CubicSpline<E> {
    pub fn new(end_type: EndType) -> Self {
        Self::with_estimator(end_type, E::default())
    }
}

impl<E: TangentEstimator + Default> Default for CubicSpline<E> {
    fn default() -> Self {
        Self::new(EndType::Open)
    }
}

impl<E: TangentEstimator> CubicSpline<E> {
    pub fn with_estimator(end_type: EndType, estimator: E) -> Self {
        debug_assert!((1..=2).contains(&E::REACH), "unsupported estimator reach {}", E::REACH);

        CubicSpline {
            end_type,
            points: Vec::new(),
            segments: Vec::new(),
            estimator,
        }
    }

    pub fn end_type(&self) -> EndType {
        self.end_type
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    pub fn is_in_range(&self, index: usize) -> bool {
        index < self.points.len()
    }

    pub fn point(&self, index: usize) -> Result<f64> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    /// Removes every control point and segment.
    pub fn initialize(&mut self) {
        self.points.clear();
        self.segments.clear();
    }

    /// Replaces the control points with `values` and rebuilds every segment.
    pub fn set(&mut self, values: &[f64]) {
        self.load(values);
    }

    /// Replaces the control points with the first `count` entries of `values`.
    ///
    /// # Errors
    /// [SplineError::InsufficientValues] when `values` is shorter than `count`.
    /// The curve is left untouched in that case.
    pub fn set_prefix(&mut self, values: &[f64], count: usize) -> Result<()> {
        if count > values.len() {
            return Err(SplineError::InsufficientValues {
                requested: count,
                available: values.len(),
            });
        }
        self.load(&values[..count]);
        Ok(())
    }

    /// Inserts a control point before `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: f64) -> Result<()> {
        if index > self.points.len() {
            return Err(SplineError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }

        self.points.insert(index, value);
        self.segments.insert(index, CubicSegment::default());
        self.refresh_window(index, E::REACH, 2 * E::REACH + 2);
        Ok(())
    }

    /// Removes the control point at `index` and returns its value.
    pub fn remove(&mut self, index: usize) -> Result<f64> {
        self.check_index(index)?;

        let removed = self.points.remove(index);
        self.segments.remove(index);
        self.refresh_window(index, E::REACH - 1, 2 * E::REACH + 1);
        Ok(removed)
    }

    pub fn set_point(&mut self, index: usize, value: f64) -> Result<()> {
        self.check_index(index)?;

        self.points[index] = value;
        self.refresh_window(index, E::REACH, 2 * E::REACH + 2);
        Ok(())
    }

    pub fn value(&self, t: f64) -> f64 {
        if self.is_empty() || !t.is_finite() {
            return f64::NAN;
        }
        if self.end_type == EndType::Open && t < 0.0 {
            let first = &self.segments[0];
            return first.a + t * first.b;
        }

        let (segment, h) = self.locate(t);
        segment.value(h)
    }

    pub fn diff(&self, t: f64) -> f64 {
        if self.is_empty() || !t.is_finite() {
            return f64::NAN;
        }
        if self.end_type == EndType::Open && t < 0.0 {
            return self.segments[0].b;
        }

        let (segment, h) = self.locate(t);
        segment.diff(h)
    }

    /// `n`-th derivative of the curve at `t`.
    pub fn diff_n(&self, t: f64, n: u32) -> f64 {
        if self.is_empty() || !t.is_finite() {
            return f64::NAN;
        }
        match n {
            0 => return self.value(t),
            1 => return self.diff(t),
            n if n > 3 => return 0.0,
            _ => {}
        }
        // the extrapolation before the first point is a straight line
        if self.end_type == EndType::Open && t < 0.0 {
            return 0.0;
        }

        let (segment, h) = self.locate(t);
        segment.diff_n(h, n)
    }

    pub fn batch_value(&self, t_vector: &[f64]) -> Vec<f64> {
        t_vector.iter().map(|t| self.value(*t)).collect()
    }

    pub fn batch_diff(&self, t_vector: &[f64]) -> Vec<f64> {
        t_vector.iter().map(|t| self.diff(*t)).collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if self.is_in_range(index) {
            Ok(())
        } else {
            Err(SplineError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }

    fn load(&mut self, values: &[f64]) {
        debug!(
            "loading {} control points into {:?} curve",
            values.len(),
            self.end_type
        );

        self.initialize();
        self.points.extend_from_slice(values);
        self.segments.resize(values.len(), CubicSegment::default());
        self.refresh_all();
    }

    // Segment holding parameter `t` and the local parameter inside it.
    // Callers handle the empty curve and the open curve's negative side.
    fn locate(&self, t: f64) -> (&CubicSegment, f64) {
        let len = self.points.len();

        match self.end_type {
            EndType::Open => {
                let last = len - 1;
                let index = if t < last as f64 { t as usize } else { last };
                (&self.segments[index], t - index as f64)
            }
            EndType::Close => {
                let floor = t.floor();
                let index = (floor as i64).rem_euclid(len as i64) as usize;
                (&self.segments[index], t - floor)
            }
        }
    }

    // Rebuilds the segments from `index - REACH - 1` through `index + after`, or
    // the whole curve while it is too short for the boundary formulas to stay put.
    fn refresh_window(&mut self, index: usize, after: usize, min_windowed: usize) {
        let len = self.points.len();

        if len > min_windowed {
            let center = index as isize;
            let first = center - (E::REACH as isize + 1);
            let last = center + after as isize;
            for i in first..=last {
                self.refresh_segment(i);
            }
        } else {
            trace!("{} control points, rebuilding all segments", len);
            self.refresh_all();
        }
    }

    fn refresh_all(&mut self) {
        for i in 0..self.points.len() {
            self.refresh_segment(i as isize);
        }
    }

    fn refresh_segment(&mut self, index: isize) {
        let len = self.points.len();
        let v = &self.points;

        if len == 0 {
            return;
        }
        if len == 1 {
            self.segments[0] = CubicSegment::constant(v[0]);
            return;
        }

        let index = match self.end_type {
            EndType::Open => index,
            EndType::Close => index.rem_euclid(len as isize),
        };
        if index < 0 || index >= len as isize {
            return;
        }
        let index = index as usize;

        match self.end_type {
            EndType::Open => {
                if index == 0 {
                    self.segments[0] = CubicSegment::left_end(v[0], v[1], self.grad(1));
                } else if index >= len - 2 {
                    let tail = CubicSegment::right_end(v[len - 2], v[len - 1], self.grad(len - 2));
                    // keep going with the slope the curve has on leaving the last point
                    let g = tail.b + 2.0 * tail.c;
                    self.segments[len - 2] = tail;
                    self.segments[len - 1] = CubicSegment::linear(v[len - 1], v[len - 1] + g);
                } else {
                    self.segments[index] = CubicSegment::interval(
                        v[index],
                        v[index + 1],
                        self.grad(index),
                        self.grad(index + 1),
                    );
                }
            }
            EndType::Close => {
                let next = (index + 1) % len;
                self.segments[index] = CubicSegment::interval(
                    v[index],
                    v[next],
                    self.grad(index),
                    self.grad(next),
                );
            }
        }
    }

    fn grad(&self, index: usize) -> f64 {
        let v = &self.points;

        match (v.len(), self.end_type) {
            (0 | 1, _) => 0.0,
            (2, EndType::Open) => v[1] - v[0],
            (2, EndType::Close) => 0.0,
            _ => {
                let width = 2 * E::REACH + 1;
                let mut stencil = [0.0; MAX_STENCIL];
                for (j, slot) in stencil.iter_mut().take(width).enumerate() {
                    *slot = self.neighbor(index, j as isize - E::REACH as isize);
                }
                self.estimator.estimate(&stencil[..width])
            }
        }
    }

    // Control value `offset` steps away from `index`. Requires at least two points.
    fn neighbor(&self, index: usize, offset: isize) -> f64 {
        let v = &self.points;
        let len = v.len() as isize;
        let k = index as isize + offset;

        match self.end_type {
            EndType::Close => v[k.rem_euclid(len) as usize],
            EndType::Open if k < 0 => extrapolate(v[0], v[1], -k),
            EndType::Open if k >= len => {
                let last = v.len() - 1;
                extrapolate(v[last], v[last - 1], k - len + 1)
            }
            EndType::Open => v[k as usize],
        }
    }
}

// Value `distance` steps beyond `edge`, continuing the line from `inner` through `edge`.
fn extrapolate(edge: f64, inner: f64, distance: isize) -> f64 {
    let d = distance as f64;
    (d + 1.0) * edge - d * inner
}

impl<E: TangentEstimator> PartialEq for CubicSpline<E> {
    fn eq(&self, other: &Self) -> bool {
        self.end_type == other.end_type
            && self.points == other.points
            && self.segments == other.segments
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    const VALUES: [f64; 11] = [12.0, 15.0, 15.0, 10.0, 10.0, 10.0, 10.5, 15.0, 50.0, 60.0, 85.0];

    macro_rules! for_every_variant {
        ($check:ident) => {
            for end_type in [EndType::Open, EndType::Close] {
                $check::<CatmullRom>(end_type);
                $check::<Monotone>(end_type);
                $check::<Akima>(end_type);
                $check::<Pixel>(end_type);
            }
        };
    }

    fn from_values<E: TangentEstimator + Default>(end_type: EndType, values: &[f64]) -> CubicSpline<E> {
        let mut spline = CubicSpline::new(end_type);
        spline.set(values);
        spline
    }

    fn insert_at_back<E: TangentEstimator + Default>(end_type: EndType) {
        let mut inserted = CubicSpline::<E>::new(end_type);

        for i in 0..VALUES.len() {
            let mut loaded = CubicSpline::<E>::new(end_type);
            loaded.set_prefix(&VALUES, i + 1).unwrap();
            inserted.insert(i, VALUES[i]).unwrap();

            assert_eq!(loaded, inserted, "{:?} {:?} after {} inserts", E::default(), end_type, i + 1);
        }

        assert_eq!(inserted, from_values::<E>(end_type, &VALUES));
    }

    fn insert_at_front<E: TangentEstimator + Default>(end_type: EndType) {
        let mut inserted = CubicSpline::<E>::new(end_type);

        for i in 0..VALUES.len() {
            let start = VALUES.len() - i - 1;
            inserted.insert(0, VALUES[start]).unwrap();

            assert_eq!(from_values::<E>(end_type, &VALUES[start..]), inserted);
        }

        assert_eq!(inserted, from_values::<E>(end_type, &VALUES));
    }

    fn insert_at_random<E: TangentEstimator + Default>(end_type: EndType) {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut values = Vec::new();
            let mut inserted = CubicSpline::<E>::new(end_type);

            for i in 0..60 {
                let index = rng.gen_range(0..=i);
                let value: f64 = rng.gen();

                values.insert(index, value);
                inserted.insert(index, value).unwrap();

                assert_eq!(from_values::<E>(end_type, &values), inserted);
            }
        }
    }

    fn remove_from_front<E: TangentEstimator + Default>(end_type: EndType) {
        let mut values = VALUES.to_vec();
        let mut removed = from_values::<E>(end_type, &values);

        while !values.is_empty() {
            let expected = values.remove(0);

            assert_eq!(removed.remove(0).unwrap(), expected);
            assert_eq!(from_values::<E>(end_type, &values), removed);
        }
    }

    fn remove_from_back<E: TangentEstimator + Default>(end_type: EndType) {
        let mut values = VALUES.to_vec();
        let mut removed = from_values::<E>(end_type, &values);

        while !values.is_empty() {
            values.pop();

            removed.remove(removed.len() - 1).unwrap();
            assert_eq!(from_values::<E>(end_type, &values), removed);
        }
    }

    fn remove_at_random<E: TangentEstimator + Default>(end_type: EndType) {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut values: Vec<f64> = (0..60).map(|_| rng.gen()).collect();
            let mut removed = from_values::<E>(end_type, &values);

            while !values.is_empty() {
                let index = rng.gen_range(0..values.len());
                values.remove(index);

                removed.remove(index).unwrap();
                assert_eq!(from_values::<E>(end_type, &values), removed);
            }
        }
    }

    fn set_point_everywhere<E: TangentEstimator + Default>(end_type: EndType) {
        for len in 1..=VALUES.len() {
            for index in 0..len {
                let mut values = VALUES[..len].to_vec();
                let mut edited = from_values::<E>(end_type, &values);

                values[index] = -3.25;
                edited.set_point(index, -3.25).unwrap();

                assert_eq!(from_values::<E>(end_type, &values), edited);
            }
        }
    }

    fn interpolates_control_points<E: TangentEstimator + Default>(end_type: EndType) {
        let eps = 1e-9;

        for len in 1..=VALUES.len() {
            let spline = from_values::<E>(end_type, &VALUES[..len]);

            for (i, v) in VALUES[..len].iter().enumerate() {
                assert_approx_eq!(spline.value(i as f64), *v, eps);
            }
            if end_type == EndType::Close {
                assert_approx_eq!(spline.value(len as f64), VALUES[0], eps);
                assert_approx_eq!(spline.value(-1.0), VALUES[len - 1], eps);
            }
        }
    }

    fn continuous_at_joins<E: TangentEstimator + Default>(end_type: EndType) {
        let eps = 1e-9;
        let spline = from_values::<E>(end_type, &VALUES);
        let segments = spline.segments();

        let joins = match end_type {
            EndType::Open => VALUES.len() - 1,
            EndType::Close => VALUES.len(),
        };
        for k in 1..=joins {
            let before = &segments[k - 1];
            let after = &segments[k % segments.len()];

            assert_approx_eq!(before.value(1.0), after.value(0.0), eps);
            assert_approx_eq!(before.diff(1.0), after.diff(0.0), eps);
        }

        if end_type == EndType::Open {
            assert_approx_eq!(spline.value(-1e-12), spline.value(0.0), eps);
            assert_approx_eq!(spline.diff(-1e-12), spline.diff(1e-12), 1e-6);
        }
    }

    fn linear_data_stays_linear<E: TangentEstimator + Default>(end_type: EndType) {
        if end_type == EndType::Close {
            return;
        }
        let eps = 1e-9;
        let spline = from_values::<E>(end_type, &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);

        let mut t = -3.0;
        while t < 9.0 {
            assert_approx_eq!(spline.value(t), 2.0 * t, eps);
            assert_approx_eq!(spline.diff(t), 2.0, eps);
            assert_approx_eq!(spline.diff_n(t, 2), 0.0, eps);
            t += 0.125;
        }
    }

    #[test]
    fn insert_matches_set() {
        for_every_variant!(insert_at_back);
        for_every_variant!(insert_at_front);
    }

    #[test]
    fn random_insert_matches_set() {
        for_every_variant!(insert_at_random);
    }

    #[test]
    fn remove_matches_set() {
        for_every_variant!(remove_from_front);
        for_every_variant!(remove_from_back);
    }

    #[test]
    fn random_remove_matches_set() {
        for_every_variant!(remove_at_random);
    }

    #[test]
    fn set_point_matches_set() {
        for_every_variant!(set_point_everywhere);
    }

    #[test]
    fn passes_through_control_points() {
        for_every_variant!(interpolates_control_points);
    }

    #[test]
    fn first_derivative_continuous() {
        for_every_variant!(continuous_at_joins);
    }

    #[test]
    fn reproduces_straight_line() {
        for_every_variant!(linear_data_stays_linear);
    }

    #[test]
    fn segment_count_follows_points() {
        let mut spline = AkimaSpline::new(EndType::Close);
        assert!(spline.segments().is_empty());

        spline.set(&VALUES);
        assert_eq!(spline.segments().len(), VALUES.len());

        spline.insert(4, 1.0).unwrap();
        spline.remove(0).unwrap();
        spline.remove(0).unwrap();
        assert_eq!(spline.len(), VALUES.len() - 1);
        assert_eq!(spline.segments().len(), spline.len());
    }

    #[test]
    fn initialize() {
        let mut empty = CatmullRomSpline::new(EndType::Close);
        empty.initialize();
        assert_eq!(empty, CatmullRomSpline::new(EndType::Close));

        let mut spline = CatmullRomSpline::new(EndType::Close);
        spline.set(&VALUES);
        let before = spline.clone();

        spline.initialize();
        assert_eq!(empty, spline);
        assert!(spline.is_empty());

        spline.set(&VALUES);
        assert_eq!(before, spline);
    }

    #[test]
    fn equality() {
        let base = [12.0, 15.0, 15.0, 10.0, 10.0, 10.0, 10.5, 15.0, 50.0, 60.0, 85.0];
        let sp1 = from_values::<Akima>(EndType::Open, &base);
        let sp2 = from_values::<Akima>(EndType::Close, &base);
        let sp3 = from_values::<Akima>(EndType::Open, &[12.0, 15.0, 15.0, 10.0, 10.0, 10.0, 10.5, 15.0, 50.0, 60.0, 86.0]);
        let sp4 = from_values::<Akima>(EndType::Open, &base[..10]);
        let sp5 = from_values::<Akima>(EndType::Open, &[12.0, 15.0, 15.0, 10.0, 10.0, 10.0, 10.5, 15.0, 50.0, 60.0, 85.0, 90.0]);
        let sp6 = from_values::<Akima>(EndType::Open, &base);

        assert!(sp1 != sp2);
        assert!(sp1 != sp3);
        assert!(sp1 != sp4);
        assert!(sp1 != sp5);
        assert!(sp1 == sp6);
    }

    #[test]
    fn empty_curve_is_nan() {
        let spline = MonotoneSpline::new(EndType::Open);

        for t in [-1.0, 0.0, 0.5, 3.0] {
            assert!(spline.value(t).is_nan());
            assert!(spline.diff(t).is_nan());
            assert!(spline.diff_n(t, 2).is_nan());
            assert!(spline.diff_n(t, 7).is_nan());
        }
    }

    #[test]
    fn non_finite_parameter_is_nan() {
        let spline = from_values::<CatmullRom>(EndType::Close, &VALUES);

        for t in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(spline.value(t).is_nan());
            assert!(spline.diff(t).is_nan());
            assert!(spline.diff_n(t, 3).is_nan());
        }
    }

    #[test]
    fn single_point_is_constant() {
        for end_type in [EndType::Open, EndType::Close] {
            let spline = from_values::<Pixel>(end_type, &[4.5]);

            for t in [-10.0, -0.5, 0.0, 0.3, 1.0, 42.0] {
                assert_eq!(spline.value(t), 4.5);
                assert_eq!(spline.diff(t), 0.0);
                assert_eq!(spline.diff_n(t, 2), 0.0);
            }
        }
    }

    #[test]
    fn two_points_are_linear() {
        let eps = 1e-12;
        let catmull_rom = from_values::<CatmullRom>(EndType::Open, &[1.0, 3.0]);
        let monotone = from_values::<Monotone>(EndType::Open, &[1.0, 3.0]);

        for spline in [catmull_rom.segments(), monotone.segments()] {
            assert_eq!(spline[0], CubicSegment::linear(1.0, 3.0));
        }
        for t in [-1.0, 0.0, 0.25, 0.5, 1.0, 2.5] {
            assert_approx_eq!(catmull_rom.value(t), 1.0 + 2.0 * t, eps);
            assert_approx_eq!(monotone.value(t), 1.0 + 2.0 * t, eps);
        }
    }

    #[test]
    fn open_curve_extrapolates_linearly() {
        let eps = 1e-9;
        let spline = from_values::<CatmullRom>(EndType::Open, &VALUES);
        let last = (VALUES.len() - 1) as f64;

        let slope = spline.diff(last);
        assert_approx_eq!(spline.diff(last + 3.5), slope, eps);
        assert_approx_eq!(spline.value(last + 2.0), VALUES[VALUES.len() - 1] + 2.0 * slope, eps);
        assert_eq!(spline.diff_n(last + 1.0, 2), 0.0);

        let first = spline.segments()[0];
        let [a, b, _, _] = first.coefficients();
        assert_eq!(spline.value(-2.0), a - 2.0 * b);
        assert_eq!(spline.diff(-2.0), b);
        assert_eq!(spline.diff_n(-2.0, 0), spline.value(-2.0));
        assert_eq!(spline.diff_n(-2.0, 2), 0.0);
        assert_eq!(spline.diff_n(-2.0, 3), 0.0);
    }

    #[test]
    fn closed_curve_is_periodic() {
        let eps = 1e-9;
        let spline = from_values::<Akima>(EndType::Close, &VALUES);
        let period = VALUES.len() as f64;

        for t in [0.1, 2.75, 7.5, 10.9] {
            assert_approx_eq!(spline.value(t), spline.value(t + period), eps);
            assert_approx_eq!(spline.value(t), spline.value(t - 3.0 * period), eps);
            assert_approx_eq!(spline.diff(t), spline.diff(t - period), eps);
            assert_approx_eq!(spline.diff_n(t, 2), spline.diff_n(t + period, 2), eps);
        }
    }

    #[test]
    fn monotone_preserves_monotonicity() {
        let values = [0.0, 1.0, 1.0, 2.0, 5.0, 5.0, 5.5, 10.0, 30.0, 31.0];
        let spline = from_values::<Monotone>(EndType::Open, &values);

        let mut t = -2.0;
        let mut previous = spline.value(t);
        while t < values.len() as f64 + 1.0 {
            t += 0.01;
            let current = spline.value(t);
            assert!(current >= previous - 1e-12, "decreasing at t = {}", t);
            previous = current;
        }
    }

    #[test]
    fn higher_derivatives() {
        let spline = from_values::<CatmullRom>(EndType::Open, &VALUES);

        for t in [0.5, 3.25, 8.0] {
            let (segment, h) = spline.locate(t);
            assert_eq!(spline.diff_n(t, 2), segment.diff_n(h, 2));
            assert_eq!(spline.diff_n(t, 3), segment.diff_n(h, 3));
            assert_eq!(spline.diff_n(t, 4), 0.0);
        }
    }

    #[test]
    fn batch_evaluation() {
        let spline = from_values::<Pixel>(EndType::Open, &VALUES);
        let t_vector = vec![-1.0, 0.0, 0.5, 4.2, 12.0];

        let values = spline.batch_value(&t_vector);
        let diffs = spline.batch_diff(&t_vector);

        assert_eq!(values.len(), t_vector.len());
        for (i, t) in t_vector.iter().enumerate() {
            assert_eq!(values[i], spline.value(*t));
            assert_eq!(diffs[i], spline.diff(*t));
        }
    }

    #[test]
    fn out_of_range_edits_are_rejected() {
        let mut spline = from_values::<Monotone>(EndType::Open, &VALUES[..4]);
        let before = spline.clone();

        assert_eq!(
            spline.insert(5, 1.0),
            Err(SplineError::IndexOutOfRange { index: 5, len: 4 })
        );
        assert!(spline.remove(4).is_err());
        assert!(spline.set_point(4, 0.0).is_err());
        assert!(spline.point(4).is_err());
        assert_eq!(before, spline);

        let mut empty = MonotoneSpline::default();
        assert!(empty.remove(0).is_err());
        assert!(empty.insert(0, 1.0).is_ok());
    }

    #[test]
    fn set_prefix() {
        let mut spline = AkimaSpline::new(EndType::Open);
        spline.set(&VALUES);
        let before = spline.clone();

        assert_eq!(
            spline.set_prefix(&VALUES[..3], 4),
            Err(SplineError::InsufficientValues { requested: 4, available: 3 })
        );
        assert_eq!(before, spline);

        spline.set_prefix(&VALUES, 5).unwrap();
        assert_eq!(spline.points(), &VALUES[..5]);

        spline.set_prefix(&[], 0).unwrap();
        assert!(spline.is_empty());
        assert!(spline.segments().is_empty());
    }

    #[test]
    fn point_access() {
        let spline = from_values::<CatmullRom>(EndType::Open, &VALUES);

        assert_eq!(spline.point(6).unwrap(), 10.5);
        assert!(spline.is_in_range(10));
        assert!(!spline.is_in_range(11));
    }
}
