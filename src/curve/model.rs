//! The curve configuration value and its evaluation.

use super::formula::{apply_shape, clamp01, Params};
use super::shape::CurveShape;

/// A response curve: one shape, four scalars and two mirror flags.
///
/// `CurveModel` is a plain `Copy` value. Fields are public and are re-read on
/// every [`evaluate`](Self::evaluate) call. Share it read-only through `&` and
/// mutate it through `&mut`; it holds no interior mutability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveModel {
    pub shape: CurveShape,
    pub x_intercept: f64,
    pub y_intercept: f64,
    pub slope: f64,
    pub exponent: f64,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::new(CurveShape::default())
    }
}

impl CurveModel {
    /// A model of the given shape with default parameters.
    pub fn new(shape: CurveShape) -> Self {
        Self {
            shape,
            x_intercept: 0.0,
            y_intercept: 0.0,
            slope: 1.0,
            exponent: 1.0,
            flip_x: false,
            flip_y: false,
        }
    }

    pub fn with_x_intercept(mut self, value: f64) -> Self {
        self.x_intercept = value;
        self
    }

    pub fn with_y_intercept(mut self, value: f64) -> Self {
        self.y_intercept = value;
        self
    }

    pub fn with_slope(mut self, value: f64) -> Self {
        self.slope = value;
        self
    }

    pub fn with_exponent(mut self, value: f64) -> Self {
        self.exponent = value;
        self
    }

    pub fn with_flip_x(mut self, flip: bool) -> Self {
        self.flip_x = flip;
        self
    }

    pub fn with_flip_y(mut self, flip: bool) -> Self {
        self.flip_y = flip;
        self
    }

    fn params(&self) -> Params {
        Params {
            x_intercept: self.x_intercept,
            y_intercept: self.y_intercept,
            slope: self.slope,
            exponent: self.exponent,
        }
    }

    /// The shape formula's value at `x`, after the X mirror and before the Y
    /// mirror and clamping. May be NaN or infinite.
    pub fn raw_value(&self, x: f64) -> f64 {
        let x = if self.flip_x { 1.0 - x } else { x };
        apply_shape(self.shape, x, self.params())
    }

    /// Evaluate the curve at `x`.
    ///
    /// Accepts any `x`; the result is always within `[0.0, 1.0]`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let value = self.raw_value(x);
        let value = if self.flip_y { 1.0 - value } else { value };
        clamp01(value)
    }

    /// Evaluate at `steps + 1` evenly spaced inputs covering `[0.0, 1.0]`.
    ///
    /// Yields `(x, y)` pairs lazily. `steps == 0` yields only the pair at `x = 0`.
    pub fn sample(&self, steps: usize) -> impl DoubleEndedIterator<Item = (f64, f64)> {
        let model = *self;
        (0..=steps).map(move |i| {
            let x = if steps == 0 {
                0.0
            } else {
                i as f64 / steps as f64
            };
            (x, model.evaluate(x))
        })
    }
}
