//! # Logistic Functions
//!
//! The logistic (sigmoid) curve and the pieces built on it.
//!
//! ## Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | `logistic` | 1 / (1 + e^(-x)), stable for any magnitude |
//! | `logistic_derivative` | s(x) * s(-x) |
//! | `logit` | Inverse of `logistic` on [0, 1] |
//! | `logistic_in_place` | `logistic` over a slice |
//! | `LogisticCurve` | L / (1 + e^(-k (x - x0))) |
//!
//! ## Implementation Notes
//!
//! `logistic` branches on the sign of the input so `exp` is only ever
//! evaluated on a non-positive argument and cannot overflow.

use num_traits::Float;

use crate::error::{FerruleError, FerruleResult};

/// Logistic sigmoid: 1 / (1 + e^(-x))
///
/// Result lies in (0, 1) for finite input, 0.5 at zero. `±inf` maps to
/// `1`/`0`; NaN propagates.
///
/// ```
/// use ferrule_core::logistic::logistic;
///
/// assert_eq!(logistic(0.0_f64), 0.5);
/// assert!((logistic(700.0_f64) - 1.0).abs() < f64::EPSILON);
/// assert!(logistic(-700.0_f64) < f64::EPSILON);
/// ```
#[inline]
pub fn logistic<F: Float>(x: F) -> F {
    if x >= F::zero() {
        F::one() / (F::one() + (-x).exp())
    } else {
        let e = x.exp();
        e / (F::one() + e)
    }
}

/// Derivative of the logistic: s(x) * (1 - s(x)), evaluated as s(x) * s(-x)
///
/// `1 - s(x)` cancels to zero once `s(x)` rounds to one; `s(-x)` keeps the
/// tail exact and the result symmetric around zero.
#[inline]
pub fn logistic_derivative<F: Float>(x: F) -> F {
    logistic(x) * logistic(-x)
}

/// Log-odds, the inverse of [`logistic`].
///
/// `0` maps to `-inf`, `1` to `+inf`; anything outside `[0, 1]` is NaN.
#[inline]
pub fn logit<F: Float>(p: F) -> F {
    p.ln() - (-p).ln_1p()
}

/// Applies [`logistic`] to every element.
pub fn logistic_in_place<F: Float>(values: &mut [F]) {
    for v in values.iter_mut() {
        *v = logistic(*v);
    }
}

/// Generalised logistic curve: L / (1 + e^(-k (x - x0)))
///
/// - `supremum` (L): upper asymptote, finite and > 0
/// - `steepness` (k): finite, non-zero; negative flips the curve
/// - `midpoint` (x0): finite; the curve equals L/2 there
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticCurve<F> {
    supremum: F,
    steepness: F,
    midpoint: F,
}

impl<F: Float> LogisticCurve<F> {
    /// Builds a curve, validating each parameter.
    pub fn new(supremum: F, steepness: F, midpoint: F) -> FerruleResult<Self> {
        if !supremum.is_finite() || supremum <= F::zero() {
            return Err(invalid("supremum", supremum));
        }
        if !steepness.is_finite() || steepness == F::zero() {
            return Err(invalid("steepness", steepness));
        }
        if !midpoint.is_finite() {
            return Err(invalid("midpoint", midpoint));
        }
        Ok(Self {
            supremum,
            steepness,
            midpoint,
        })
    }

    /// The standard curve (L = 1, k = 1, x0 = 0).
    pub fn standard() -> Self {
        Self {
            supremum: F::one(),
            steepness: F::one(),
            midpoint: F::zero(),
        }
    }

    pub fn supremum(&self) -> F {
        self.supremum
    }

    pub fn steepness(&self) -> F {
        self.steepness
    }

    pub fn midpoint(&self) -> F {
        self.midpoint
    }

    /// Evaluates the curve at `x`.
    #[inline]
    pub fn evaluate(&self, x: F) -> F {
        self.supremum * logistic(self.steepness * (x - self.midpoint))
    }

    /// Slope of the curve at `x`.
    #[inline]
    pub fn slope(&self, x: F) -> F {
        self.supremum * self.steepness * logistic_derivative(self.steepness * (x - self.midpoint))
    }

    /// Solves `evaluate(x) == y` for `x`.
    ///
    /// `y` outside `[0, L]` yields NaN; the endpoints yield infinities.
    pub fn inverse(&self, y: F) -> F {
        self.midpoint + logit(y / self.supremum) / self.steepness
    }

    /// Evaluates `steps` points evenly spaced over `[from, to]`.
    ///
    /// `steps` below 2 yields just `from` (or nothing for 0).
    pub fn sample(&self, from: F, to: F, steps: usize) -> Vec<(F, F)> {
        match steps {
            0 => Vec::new(),
            1 => vec![(from, self.evaluate(from))],
            _ => {
                let last = F::from(steps - 1).unwrap_or_else(F::one);
                (0..steps)
                    .map(|i| {
                        let t = F::from(i).unwrap_or_else(F::zero) / last;
                        let x = from + (to - from) * t;
                        (x, self.evaluate(x))
                    })
                    .collect()
            }
        }
    }
}

impl<F: Float> Default for LogisticCurve<F> {
    fn default() -> Self {
        Self::standard()
    }
}

fn invalid<F: Float>(name: &'static str, value: F) -> FerruleError {
    FerruleError::InvalidParameter {
        name,
        value: value.to_f64().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_logistic_zero() {
        assert_eq!(logistic(0.0_f64), 0.5);
        assert_eq!(logistic(0.0_f32), 0.5);
        assert_eq!(logistic(-0.0_f64), 0.5);
    }

    #[test]
    fn test_logistic_extremes_no_overflow() {
        let hi = logistic(700.0_f64);
        let lo = logistic(-700.0_f64);
        assert!(hi.is_finite() && lo.is_finite());
        assert!((hi - 1.0).abs() < f64::EPSILON);
        assert!(lo.abs() < f64::EPSILON);
        assert!(lo > 0.0);

        assert_eq!(logistic(f64::INFINITY), 1.0);
        assert_eq!(logistic(f64::NEG_INFINITY), 0.0);
        assert!(logistic(-1.0e6_f64) >= 0.0);
        assert!(logistic(f64::NAN).is_nan());
    }

    #[test]
    fn test_logistic_f32_extremes() {
        assert!((logistic(100.0_f32) - 1.0).abs() < f32::EPSILON);
        assert!(logistic(-100.0_f32).abs() < f32::EPSILON);
    }

    #[test]
    fn test_logistic_strictly_increasing() {
        let mut prev = logistic(-30.0_f64);
        for i in -59..=60 {
            let x = i as f64 * 0.5;
            let y = logistic(x);
            assert!(y > prev, "not increasing at x = {x}");
            prev = y;
        }
    }

    #[test]
    fn test_logistic_symmetry() {
        for &x in &[0.1, 1.0, 2.5, 10.0, 35.0] {
            let sum = logistic(x) + logistic(-x);
            assert!((sum - 1.0_f64).abs() < EPS, "x = {x}");
        }
    }

    #[test]
    fn test_logistic_known_values() {
        assert!((logistic(1.0_f64) - 0.731_058_578_630_004_9).abs() < EPS);
        assert!((logistic(-2.0_f64) - 0.119_202_922_022_117_57).abs() < EPS);
    }

    #[test]
    fn test_logistic_derivative() {
        assert_eq!(logistic_derivative(0.0_f64), 0.25);
        let h = 1e-6;
        for &x in &[-3.0_f64, -0.5, 0.7, 4.0] {
            let numeric = (logistic(x + h) - logistic(x - h)) / (2.0 * h);
            assert!((numeric - logistic_derivative(x)).abs() < 1e-8);
        }
        assert!(logistic_derivative(-700.0_f64) >= 0.0);
    }

    #[test]
    fn test_logistic_derivative_symmetric_tails() {
        for &x in &[5.0_f64, 37.0, 40.0, 300.0] {
            let d = logistic_derivative(x);
            assert!(d > 0.0, "derivative vanished at x = {x}");
            assert_eq!(d, logistic_derivative(-x));
        }
        let expected = (-40.0_f64).exp();
        assert!((logistic_derivative(40.0_f64) - expected).abs() < expected * 1e-12);
    }

    #[test]
    fn test_curve_slope_tail() {
        let curve = LogisticCurve::<f64>::standard();
        assert!(curve.slope(40.0) > 0.0);
        assert_eq!(curve.slope(40.0), curve.slope(-40.0));
    }

    #[test]
    fn test_logit_inverse() {
        for &x in &[-8.0_f64, -1.0, 0.0, 0.3, 5.0] {
            assert!((logit(logistic(x)) - x).abs() < 1e-9, "x = {x}");
        }
        assert_eq!(logit(0.0_f64), f64::NEG_INFINITY);
        assert_eq!(logit(1.0_f64), f64::INFINITY);
        assert!(logit(-0.1_f64).is_nan());
        assert!(logit(1.1_f64).is_nan());
    }

    #[test]
    fn test_logistic_in_place() {
        let mut values = [0.0_f64, 700.0, -700.0];
        logistic_in_place(&mut values);
        assert_eq!(values[0], 0.5);
        assert!((values[1] - 1.0).abs() < f64::EPSILON);
        assert!(values[2] < f64::EPSILON);
    }

    #[test]
    fn test_curve_standard_matches_logistic() {
        let curve = LogisticCurve::<f64>::default();
        for &x in &[-3.0, 0.0, 2.0] {
            assert_eq!(curve.evaluate(x), logistic(x));
        }
    }

    #[test]
    fn test_curve_parameters() {
        let curve = LogisticCurve::new(10.0_f64, 2.0, 3.0).unwrap();
        assert!((curve.evaluate(3.0) - 5.0).abs() < EPS);
        assert!(curve.evaluate(100.0) <= 10.0);
        assert!((curve.slope(3.0) - 5.0).abs() < EPS);
        assert!((curve.inverse(curve.evaluate(4.2)) - 4.2).abs() < 1e-9);
    }

    #[test]
    fn test_curve_negative_steepness_decreases() {
        let curve = LogisticCurve::new(1.0_f64, -1.0, 0.0).unwrap();
        assert!(curve.evaluate(-1.0) > curve.evaluate(1.0));
    }

    #[test]
    fn test_curve_validation() {
        assert!(matches!(
            LogisticCurve::new(0.0_f64, 1.0, 0.0),
            Err(FerruleError::InvalidParameter { name: "supremum", .. })
        ));
        assert!(matches!(
            LogisticCurve::new(1.0_f64, 0.0, 0.0),
            Err(FerruleError::InvalidParameter { name: "steepness", .. })
        ));
        assert!(matches!(
            LogisticCurve::new(1.0_f64, 1.0, f64::NAN),
            Err(FerruleError::InvalidParameter { name: "midpoint", .. })
        ));
        assert!(LogisticCurve::new(1.0_f64, f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_curve_sample() {
        let curve = LogisticCurve::<f64>::standard();
        let points = curve.sample(-1.0, 1.0, 5);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].0, -1.0);
        assert_eq!(points[2], (0.0, 0.5));
        assert_eq!(points[4].0, 1.0);

        assert!(curve.sample(0.0, 1.0, 0).is_empty());
        assert_eq!(curve.sample(2.0, 9.0, 1).len(), 1);
    }
}
