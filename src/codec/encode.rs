//! Encoder from a [`CurveModel`] to its text form.
//!
//! Shape names keep their case, floats use the shortest round-trip
//! representation, and flags are written in lowercase only when set. Finite
//! and infinite fields parse back exactly. A NaN field parses back as NaN, so
//! such a model is not `==` to its re-parse.

use std::fmt;

use crate::curve::CurveModel;

/// Render a curve as one line of text.
pub fn encode(model: &CurveModel) -> String {
    model.to_string()
}

impl fmt::Display for CurveModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.shape, self.x_intercept, self.y_intercept, self.slope, self.exponent
        )?;
        if self.flip_x {
            f.write_str(" flipx")?;
        }
        if self.flip_y {
            f.write_str(" flipy")?;
        }
        Ok(())
    }
}
