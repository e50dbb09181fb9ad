use std::fmt::Debug;

/// Estimates the tangent at a control point from the values around it.
///
/// `stencil` always holds `2 * REACH + 1` values with the control point in the
/// middle. Values missing at the ends of an open curve are extrapolated by the
/// spline before the estimator sees them; closed curves pass wrapped neighbours.
pub trait TangentEstimator: Clone + Debug {
    /// Number of neighbours on each side of the control point (1 or 2).
    const REACH: usize;

    fn estimate(&self, stencil: &[f64]) -> f64;
}

/// Central difference of the two direct neighbours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatmullRom;

impl TangentEstimator for CatmullRom {
    const REACH: usize = 1;

    fn estimate(&self, stencil: &[f64]) -> f64 {
        (stencil[2] - stencil[0]) / 2.0
    }
}

/// Harmonic-mean slope; flat at local extrema so monotone data stays monotone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Monotone;

impl TangentEstimator for Monotone {
    const REACH: usize = 1;

    fn estimate(&self, stencil: &[f64]) -> f64 {
        monotone_grad(stencil[0], stencil[1], stencil[2])
    }
}

/// Akima slope weighting, with the equal-slope cases short-circuited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Akima;

impl TangentEstimator for Akima {
    const REACH: usize = 2;

    fn estimate(&self, stencil: &[f64]) -> f64 {
        let [mm2, mm1, mp1, mp2] = slopes(stencil);

        if mm1 == mp1 {
            return mm1;
        }
        if mm2 == mm1 && mp1 == mp2 {
            return 0.5 * (mm1 + mp1);
        }
        if mm1 == mm2 {
            return mm1;
        }
        if mp1 == mp2 {
            return mp1;
        }

        let mm = (mm2 - mm1).abs();
        let mp = (mp1 - mp2).abs();

        (mp1 * mm + mm1 * mp) / (mm + mp)
    }
}

/// Edge-preserving variant of [`Monotone`] for upscaling pixel data.
///
/// When exactly one side of the point looks like a sharp step, the tangent is
/// chosen so the neighbouring segment bends at a point derived from the step
/// ratio instead of being smoothed out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pixel;

impl TangentEstimator for Pixel {
    const REACH: usize = 2;

    fn estimate(&self, stencil: &[f64]) -> f64 {
        let (vm1, v0, vp1) = (stencil[1], stencil[2], stencil[3]);
        let [mm2, mm1, mp1, mp2] = slopes(stencil);

        let rising_edge = mm1 * mp2 < 0.0;
        let falling_edge = mp1 * mm2 < 0.0;

        if rising_edge != falling_edge {
            if rising_edge {
                let t = blend(mm1 / (mm1 - mp2));
                return step_grad(t, vp1, v0);
            }
            let t = blend(mp1 / (mp1 - mm2));
            return -step_grad(t, vm1, v0);
        }

        monotone_grad(vm1, v0, vp1)
    }
}

fn monotone_grad(vm1: f64, v0: f64, vp1: f64) -> f64 {
    let vv = (vm1 - v0) * (v0 - vp1);

    if vv > 0.0 {
        2.0 * vv / (vp1 - vm1)
    } else {
        0.0
    }
}

// Differences between consecutive stencil values, outermost first.
fn slopes(stencil: &[f64]) -> [f64; 4] {
    [
        stencil[1] - stencil[0],
        stencil[2] - stencil[1],
        stencil[3] - stencil[2],
        stencil[4] - stencil[3],
    ]
}

fn blend(ratio: f64) -> f64 {
    0.5 - (ratio.abs() - 0.5) * 0.7
}

fn step_grad(t: f64, far: f64, center: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;

    ((t3 - 3.0 * t + 2.0) * far - t3 * center) / (t3 - 2.0 * t2 + t)
}
