//! Per-shape response formulas.
//!
//! Each formula maps an input `x` to a raw, unclamped value. Clamping and the
//! Y mirror are applied by [`CurveModel::evaluate`](super::CurveModel::evaluate).
//!
//! Quadratic, Logistic, Logit and NormalDistribution take the absolute value of
//! their power base so a fractional exponent never sees a negative base. Sine
//! does not: `(x + xi)^k` with a negative base and fractional `k` yields NaN,
//! which [`clamp01`] then folds to `0.0`. Parabolic and Bounce square their
//! base and need no guard; Bounce takes the absolute value of its result.

use std::f64::consts::PI;

use super::shape::CurveShape;

/// Shape-specific scalars, in the order the text encoding lists them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub x_intercept: f64,
    pub y_intercept: f64,
    pub slope: f64,
    pub exponent: f64,
}

/// Compute the raw value of `shape` at `x`.
pub fn apply_shape(shape: CurveShape, x: f64, p: Params) -> f64 {
    let Params {
        x_intercept: xi,
        y_intercept: yi,
        slope: s,
        exponent: k,
    } = p;

    match shape {
        CurveShape::Constant => yi,
        CurveShape::Linear => s * (x - xi) + yi,
        CurveShape::Quadratic => s * x * (x + xi).abs().powf(k) + yi,
        CurveShape::Logistic => k * (1.0 / (1.0 + (1000.0 * s).abs().powf(-x + xi + 0.5))) + yi,
        CurveShape::Logit => -(1.0 / (x - xi).abs().powf(k) - 1.0).ln() * 0.05 * s + 0.5 + yi,
        CurveShape::Threshold => {
            if x > xi {
                1.0 - yi
            } else {
                -(1.0 - s)
            }
        }
        // No absolute-value guard on the base.
        CurveShape::Sine => (s * (x + xi).powf(k)).sin() * 0.5 + 0.5 + yi,
        CurveShape::Parabolic => (s * (x + xi)).powi(2) + k * (x + xi) + yi,
        CurveShape::NormalDistribution => {
            let peak = k / (2.0 * PI).sqrt();
            let spread = 1.0 / (s.abs() * 0.01);
            peak * 2f64.powf(-spread * (x - (xi + 0.5)).powi(2)) + yi
        }
        CurveShape::Bounce => {
            ((6.28 * k * (x + xi + 1.0).powi(2)).sin() * (1.0 - x) * s).abs() + yi
        }
    }
}

/// Clamp `v` into `[0.0, 1.0]`.
///
/// NaN maps to `0.0`; infinities clamp to the nearest bound.
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    const DEFAULTS: Params = Params {
        x_intercept: 0.0,
        y_intercept: 0.0,
        slope: 1.0,
        exponent: 1.0,
    };

    fn at(shape: CurveShape, x: f64) -> f64 {
        apply_shape(shape, x, DEFAULTS)
    }

    #[test]
    fn constant_ignores_input() {
        let p = Params {
            y_intercept: 0.3,
            ..DEFAULTS
        };
        for x in [-5.0, 0.0, 0.5, 1.0, 7.0] {
            assert!((apply_shape(CurveShape::Constant, x, p) - 0.3).abs() < EPSILON);
        }
    }

    #[test]
    fn linear_is_identity_with_defaults() {
        for x in [0.0, 0.25, 0.5, 1.0] {
            assert!((at(CurveShape::Linear, x) - x).abs() < EPSILON);
        }
    }

    #[test]
    fn quadratic_squares_with_defaults() {
        assert!((at(CurveShape::Quadratic, 0.5) - 0.25).abs() < EPSILON);
        assert!((at(CurveShape::Quadratic, 1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn logistic_midpoint() {
        // |1000|^0 = 1, so 1 / (1 + 1) at x = 0.5.
        assert!((at(CurveShape::Logistic, 0.5) - 0.5).abs() < EPSILON);
        assert!(at(CurveShape::Logistic, 0.9) > 0.9);
        assert!(at(CurveShape::Logistic, 0.1) < 0.1);
    }

    #[test]
    fn logit_midpoint() {
        // 1/0.5 - 1 = 1, ln(1) = 0.
        assert!((at(CurveShape::Logit, 0.5) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn logit_at_intercept_diverges() {
        assert_eq!(at(CurveShape::Logit, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn threshold_steps_at_intercept() {
        let p = Params {
            x_intercept: 0.5,
            y_intercept: 0.2,
            slope: 0.4,
            exponent: 1.0,
        };
        assert!((apply_shape(CurveShape::Threshold, 0.6, p) - 0.8).abs() < EPSILON);
        // At the intercept the comparison is strict.
        assert!((apply_shape(CurveShape::Threshold, 0.5, p) + 0.6).abs() < EPSILON);
    }

    #[test]
    fn sine_with_defaults() {
        let expected = 0.5f64.sin() * 0.5 + 0.5;
        assert!((at(CurveShape::Sine, 0.5) - expected).abs() < EPSILON);
    }

    #[test]
    fn sine_negative_base_is_nan() {
        let p = Params {
            x_intercept: -0.5,
            exponent: 0.5,
            ..DEFAULTS
        };
        assert!(apply_shape(CurveShape::Sine, 0.0, p).is_nan());
        // Quadratic guards the same base and stays finite.
        assert!(apply_shape(CurveShape::Quadratic, 0.0, p).is_finite());
    }

    #[test]
    fn parabolic_with_defaults() {
        // 0.5^2 + 0.5
        assert!((at(CurveShape::Parabolic, 0.5) - 0.75).abs() < EPSILON);
    }

    #[test]
    fn normal_distribution_peaks_at_center() {
        let peak = at(CurveShape::NormalDistribution, 0.5);
        assert!((peak - 1.0 / (2.0 * PI).sqrt()).abs() < EPSILON);
        assert!(at(CurveShape::NormalDistribution, 0.2) < peak);
        assert!(at(CurveShape::NormalDistribution, 0.8) < peak);
    }

    #[test]
    fn bounce_settles_at_one() {
        assert!(at(CurveShape::Bounce, 1.0).abs() < EPSILON);
        assert!(at(CurveShape::Bounce, 0.3) >= 0.0);
    }

    #[test]
    fn clamp01_bounds() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(f64::INFINITY), 1.0);
        assert_eq!(clamp01(f64::NEG_INFINITY), 0.0);
        assert_eq!(clamp01(f64::NAN), 0.0);
    }

    fn params(xi: f64, yi: f64, s: f64, k: f64) -> Params {
        Params {
            x_intercept: xi,
            y_intercept: yi,
            slope: s,
            exponent: k,
        }
    }

    #[test]
    fn linear_tuned() {
        // 2 * (0.4 - 0.1) + 0.2
        let v = apply_shape(CurveShape::Linear, 0.4, params(0.1, 0.2, 2.0, 1.0));
        assert!((v - 0.8).abs() < EPSILON, "{v}");
    }

    #[test]
    fn quadratic_tuned() {
        // 2 * 0.3 * |0.3 + 0.1|^2 + 0.05 = 0.6 * 0.16 + 0.05
        let v = apply_shape(CurveShape::Quadratic, 0.3, params(0.1, 0.05, 2.0, 2.0));
        assert!((v - 0.146).abs() < EPSILON, "{v}");
    }

    #[test]
    fn logistic_tuned() {
        // 0.8 / (1 + |1000 * 0.01|^(-0.4 + 0.2 + 0.5)) + 0.1 = 0.8 / (1 + 10^0.3) + 0.1
        let v = apply_shape(CurveShape::Logistic, 0.4, params(0.2, 0.1, 0.01, 0.8));
        let expected = 0.8 / (1.0 + 10f64.powf(0.3)) + 0.1;
        assert!((v - expected).abs() < EPSILON, "{v}");
        assert!((v - 0.367_088_460_333_502).abs() < 1e-9, "{v}");
    }

    #[test]
    fn logit_tuned() {
        // |0.6 - 0.1|^2 = 0.25, 1/0.25 - 1 = 3, -ln(3) * 0.05 * 2 + 0.5 + 0.1
        let v = apply_shape(CurveShape::Logit, 0.6, params(0.1, 0.1, 2.0, 2.0));
        let expected = -(3f64.ln()) * 0.1 + 0.6;
        assert!((v - expected).abs() < EPSILON, "{v}");
        assert!((v - 0.490_138_771_133_189).abs() < 1e-9, "{v}");
    }

    #[test]
    fn sine_tuned() {
        // sin(2 * (0.5 + 0.1)^2) * 0.5 + 0.5 - 0.1 = sin(0.72) * 0.5 + 0.4
        let v = apply_shape(CurveShape::Sine, 0.5, params(0.1, -0.1, 2.0, 2.0));
        assert!((v - (0.72f64.sin() * 0.5 + 0.4)).abs() < EPSILON, "{v}");
        assert!((v - 0.729_692_335_985_737).abs() < 1e-9, "{v}");
    }

    #[test]
    fn parabolic_tuned() {
        // (2 * (0.2 + 0.1))^2 + 3 * (0.2 + 0.1) = 0.36 + 0.9
        let v = apply_shape(CurveShape::Parabolic, 0.2, params(0.1, 0.0, 2.0, 3.0));
        assert!((v - 1.26).abs() < EPSILON, "{v}");
        let shifted = apply_shape(CurveShape::Parabolic, 0.2, params(0.1, -0.5, 2.0, 3.0));
        assert!((shifted - 0.76).abs() < EPSILON, "{shifted}");
    }

    #[test]
    fn normal_distribution_tuned() {
        // (2 / sqrt(2pi)) * 2^(-(1 / (4 * 0.01)) * (0.5 - 0.6)^2) + 0.05
        //   = (2 / sqrt(2pi)) * 2^(-0.25) + 0.05
        let v = apply_shape(
            CurveShape::NormalDistribution,
            0.5,
            params(0.1, 0.05, 4.0, 2.0),
        );
        let expected = 2.0 / (2.0 * PI).sqrt() * 2f64.powf(-0.25) + 0.05;
        assert!((v - expected).abs() < EPSILON, "{v}");
        assert!((v - 0.720_938_266_965_414).abs() < 1e-9, "{v}");
        // Slope enters only through its magnitude.
        let negative = apply_shape(
            CurveShape::NormalDistribution,
            0.5,
            params(0.1, 0.05, -4.0, 2.0),
        );
        assert!((negative - v).abs() < EPSILON);
    }

    #[test]
    fn bounce_tuned() {
        // |sin(6.28 * 0.5 * (0.4 + 0.1 + 1)^2) * (1 - 0.4) * 2| + 0.05
        //   = |sin(7.065) * 1.2| + 0.05
        let v = apply_shape(CurveShape::Bounce, 0.4, params(0.1, 0.05, 2.0, 0.5));
        assert!((v - ((7.065f64).sin() * 1.2).abs() - 0.05).abs() < EPSILON, "{v}");
        assert!((v - 0.895_482_020_237_325).abs() < 1e-9, "{v}");
    }
}
