/// Cubic polynomial `a + b*t + c*t^2 + d*t^3` covering one unit parameter interval.
///
/// Segments are only built through the factory functions, which derive the
/// coefficients from endpoint values and tangents.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicSegment {
    pub(crate) a: f64,
    pub(crate) b: f64,
    pub(crate) c: f64,
    pub(crate) d: f64,
}

impl CubicSegment {
    /// First segment of an open curve, where only the tangent at `v1` is known.
    pub fn left_end(v0: f64, v1: f64, g1: f64) -> Self {
        CubicSegment {
            a: v0,
            b: -2.0 * (v0 - v1) - g1,
            c: v0 - v1 + g1,
            d: 0.0,
        }
    }

    /// Last interpolating segment of an open curve, where only the tangent at `v0` is known.
    pub fn right_end(v0: f64, v1: f64, g0: f64) -> Self {
        CubicSegment {
            a: v0,
            b: g0,
            c: -v0 + v1 - g0,
            d: 0.0,
        }
    }

    /// Hermite cubic from `v0` to `v1` with tangents `g0` and `g1`.
    pub fn interval(v0: f64, v1: f64, g0: f64, g1: f64) -> Self {
        CubicSegment {
            a: v0,
            b: g0,
            c: -3.0 * (v0 - v1) - 2.0 * g0 - g1,
            d: 2.0 * (v0 - v1) + g0 + g1,
        }
    }

    pub fn linear(v0: f64, v1: f64) -> Self {
        CubicSegment { a: v0, b: v1 - v0, c: 0.0, d: 0.0 }
    }

    pub fn constant(v: f64) -> Self {
        CubicSegment { a: v, b: 0.0, c: 0.0, d: 0.0 }
    }

    /// Coefficients in ascending power order `[a, b, c, d]`.
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn value(&self, t: f64) -> f64 {
        self.a + t * (self.b + t * (self.c + t * self.d))
    }

    pub fn diff(&self, t: f64) -> f64 {
        self.b + t * (2.0 * self.c + t * 3.0 * self.d)
    }

    /// `n`-th derivative at `t`. Orders above 3 are identically zero.
    pub fn diff_n(&self, t: f64, n: u32) -> f64 {
        match n {
            0 => self.value(t),
            1 => self.diff(t),
            2 => 2.0 * self.c + t * 6.0 * self.d,
            3 => 6.0 * self.d,
            _ => 0.0,
        }
    }
}
